//! Popup panel content for a marker.

use serde::Serialize;

use crate::classify::{SiteKind, Style};
use crate::record::{RecordType, SiteRecord};

/// Placeholder for absent code, city and status values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Attribute carried by the action button so the map bridge can find it.
pub const ACTION_ATTRIBUTE: &str = "data-marker-id";

/// Everything a marker popup shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Popup {
    pub title: String,
    pub badge: &'static str,
    pub badge_color: &'static str,
    /// Only for canopies and digital screens that have one
    pub shop_name: Option<String>,
    pub code: String,
    pub city: String,
    /// `"{sub_county}, {county}"`
    pub location: String,
    /// Only for canopies
    pub status: Option<String>,
    pub action_label: &'static str,
}

impl Popup {
    pub fn build(record_type: &RecordType, record: &SiteRecord, style: &Style) -> Self {
        let shows_shop = matches!(style.kind, SiteKind::Canopy | SiteKind::DigitalScreen);
        let status = (style.kind == SiteKind::Canopy).then(|| {
            record
                .status
                .as_deref()
                .map(status_label)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string())
        });

        Self {
            title: record.display_name().to_string(),
            badge: style.label,
            badge_color: style.color,
            shop_name: record.shop_name.clone().filter(|_| shows_shop),
            code: record
                .code
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            city: record
                .city
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            location: format!(
                "{}, {}",
                record.sub_county.as_deref().unwrap_or(""),
                record.county.as_deref().unwrap_or("")
            ),
            status,
            action_label: action_label(record_type),
        }
    }

    /// Render the popup as HTML for the map library. All record text is
    /// escaped; the action button is tagged with `marker_id`.
    pub fn to_html(&self, marker_id: u64) -> String {
        let mut html = String::with_capacity(512);
        html.push_str("<div class=\"site-popup\">");
        html.push_str(&format!("<strong>{}</strong><br/>", escape_html(&self.title)));
        html.push_str(&format!(
            "<span class=\"badge\" style=\"background-color: {}; color: #fff;\">{}</span><br/>",
            self.badge_color,
            escape_html(self.badge)
        ));
        if let Some(shop) = &self.shop_name {
            html.push_str(&format!("Shop: {}<br/>", escape_html(shop)));
        }
        html.push_str(&format!("Code: {}<br/>", escape_html(&self.code)));
        html.push_str(&format!("City: {}<br/>", escape_html(&self.city)));
        html.push_str(&format!("Location: {}<br/>", escape_html(&self.location)));
        if let Some(status) = &self.status {
            html.push_str(&format!("Status: {}<br/>", escape_html(status)));
        }
        html.push_str(&format!(
            "<button type=\"button\" class=\"btn btn-primary btn-sm mt-1\" {}=\"{}\">{}</button>",
            ACTION_ATTRIBUTE,
            marker_id,
            escape_html(self.action_label)
        ));
        html.push_str("</div>");
        html
    }
}

fn action_label(record_type: &RecordType) -> &'static str {
    match record_type {
        RecordType::Site => "Open Site",
        RecordType::DigitalScreen => "Open Screen",
        RecordType::Other(_) => "Open Record",
    }
}

/// Display label of a canopy status selection value.
fn status_label(status: &str) -> String {
    match status {
        "active" => "Active".to_string(),
        "inactive" => "Inactive".to_string(),
        "damaged" => "Damaged".to_string(),
        "withdrawn" => "Withdrawn".to_string(),
        other => other.to_string(),
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
