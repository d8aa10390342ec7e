//! Visual classification of records: icon glyph, color and badge label.

use serde::Serialize;

use crate::record::{RecordType, SiteRecord};

/// Value of `site_category` marking a canopy.
pub const CANOPY_CATEGORY: &str = "canopy";

/// The display family of a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteKind {
    Billboard,
    Canopy,
    DigitalScreen,
}

/// How a marker is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Style {
    pub kind: SiteKind,
    /// Font Awesome glyph class
    pub glyph: &'static str,
    /// CSS hex color
    pub color: &'static str,
    /// Badge text
    pub label: &'static str,
}

pub const BILLBOARD_STYLE: Style = Style {
    kind: SiteKind::Billboard,
    glyph: "fa-map-signs",
    color: "#1565C0",
    label: "BILLBOARD",
};

pub const CANOPY_STYLE: Style = Style {
    kind: SiteKind::Canopy,
    glyph: "fa-umbrella",
    color: "#2E7D32",
    label: "CANOPY",
};

pub const DIGITAL_SCREEN_STYLE: Style = Style {
    kind: SiteKind::DigitalScreen,
    glyph: "fa-television",
    color: "#6A1B9A",
    label: "DIGITAL SCREEN",
};

impl SiteKind {
    pub fn style(self) -> Style {
        match self {
            Self::Billboard => BILLBOARD_STYLE,
            Self::Canopy => CANOPY_STYLE,
            Self::DigitalScreen => DIGITAL_SCREEN_STYLE,
        }
    }
}

/// Pick the style for a `(record type, category, status)` combination.
///
/// Canopy styling needs a model with a category field set to `canopy`;
/// digital screens are recognized by model alone. Everything else is a
/// billboard. The status never changes the style.
pub fn classify(record_type: &RecordType, category: Option<&str>, _status: Option<&str>) -> Style {
    match record_type {
        RecordType::DigitalScreen => DIGITAL_SCREEN_STYLE,
        t if t.supports_category() && category == Some(CANOPY_CATEGORY) => CANOPY_STYLE,
        _ => BILLBOARD_STYLE,
    }
}

/// Classify a fetched record.
pub fn classify_record(record_type: &RecordType, record: &SiteRecord) -> Style {
    classify(
        record_type,
        record.site_category.as_deref(),
        record.status.as_deref(),
    )
}
