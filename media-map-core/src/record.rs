//! Record types and the site record read from the record store.
//!
//! Records arrive in Odoo's `search_read` shape: unset scalars come back as
//! `false` and many2one relations as `[id, "display name"]`. The helpers in
//! this module fold both conventions into plain `Option`s.

use std::fmt;

use serde::{Deserialize, Deserializer};

use crate::config::LatLng;

pub const SITE_MODEL: &str = "media.site";
pub const DIGITAL_SCREEN_MODEL: &str = "media.digital.screen";

/// Fields every record type is read with.
const BASE_FIELDS: &[&str] = &[
    "id",
    "name",
    "code",
    "latitude",
    "longitude",
    "city",
    "sub_county_id",
    "county_id",
];

/// Fields only models with a canopy/billboard category carry.
const CATEGORY_FIELDS: &[&str] = &["site_category", "shop_name", "canopy_status"];

/// Digital screens delegate to a site record and share its shop name.
const SCREEN_FIELDS: &[&str] = &["shop_name"];

/// The backend model whose records are shown on the map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum RecordType {
    /// `media.site`: billboards and canopies
    #[default]
    Site,
    /// `media.digital.screen`
    DigitalScreen,
    /// Any other geolocated model
    Other(String),
}

impl RecordType {
    /// Map a model name to a record type. Blank names fall back to `Site`.
    pub fn from_model(model: &str) -> Self {
        match model.trim() {
            "" | SITE_MODEL => Self::Site,
            DIGITAL_SCREEN_MODEL => Self::DigitalScreen,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn model(&self) -> &str {
        match self {
            Self::Site => SITE_MODEL,
            Self::DigitalScreen => DIGITAL_SCREEN_MODEL,
            Self::Other(name) => name,
        }
    }

    /// Whether the model has a `site_category` field (billboard vs canopy).
    pub fn supports_category(&self) -> bool {
        matches!(self, Self::Site)
    }

    /// Minimal field list to read for this type.
    ///
    /// Category fields are only requested from models that define them;
    /// asking a model for a field it lacks fails the whole read.
    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields = BASE_FIELDS.to_vec();
        match self {
            Self::Site => fields.extend_from_slice(CATEGORY_FIELDS),
            Self::DigitalScreen => fields.extend_from_slice(SCREEN_FIELDS),
            Self::Other(_) => {}
        }
        fields
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.model())
    }
}

/// One record as returned by `search_read`. Only held for a single
/// synchronization pass.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SiteRecord {
    pub id: i64,
    #[serde(default, deserialize_with = "odoo_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "odoo_text")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "odoo_optional")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "odoo_optional")]
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "odoo_text")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "odoo_text")]
    pub site_category: Option<String>,
    #[serde(default, deserialize_with = "odoo_text")]
    pub shop_name: Option<String>,
    #[serde(default, rename = "sub_county_id", deserialize_with = "odoo_many2one")]
    pub sub_county: Option<String>,
    #[serde(default, rename = "county_id", deserialize_with = "odoo_many2one")]
    pub county: Option<String>,
    #[serde(default, rename = "canopy_status", deserialize_with = "odoo_text")]
    pub status: Option<String>,
}

impl SiteRecord {
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    /// Coordinates of the record, if it has any.
    ///
    /// Zero on either axis means "never geolocated" and yields `None`, as do
    /// missing and non-finite values.
    pub fn position(&self) -> Option<LatLng> {
        let lat = self.latitude.filter(|v| v.is_finite() && *v != 0.0)?;
        let lng = self.longitude.filter(|v| v.is_finite() && *v != 0.0)?;
        Some(LatLng::new(lat, lng))
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// A JSON value that Odoo may replace with `false` when unset.
#[derive(Deserialize)]
#[serde(untagged)]
enum OdooValue<T> {
    Value(T),
    Unset(bool),
}

fn odoo_optional<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Option::<OdooValue<T>>::deserialize(deserializer)? {
        Some(OdooValue::Value(value)) => Some(value),
        Some(OdooValue::Unset(_)) | None => None,
    })
}

/// Text field; `false`, `null` and `""` are all unset.
fn odoo_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(odoo_optional::<D, String>(deserializer)?.filter(|s| !s.is_empty()))
}

/// Many2one field; keeps the display name of `[id, "name"]`.
fn odoo_many2one<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(odoo_optional::<D, (i64, String)>(deserializer)?
        .map(|(_, name)| name)
        .filter(|s| !s.is_empty()))
}
