//! Host inputs and the filter watcher.
//!
//! A host hands the view a filter and a record type either directly or
//! nested in the `params` of a client action. [`ViewInputs::resolve`] turns
//! whichever form was given into the effective `(record type, filter)` pair;
//! [`FilterWatcher`] decides whether that pair differs from the last one.

use serde::Deserialize;

use crate::error::Result;
use crate::filter::Filter;
use crate::record::RecordType;

/// `params` object of a client action.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ActionParams {
    #[serde(default)]
    pub domain: Option<Filter>,
    #[serde(default, alias = "model")]
    pub res_model: Option<String>,
}

/// Client action configuration as passed by the host.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ActionConfig {
    #[serde(default)]
    pub params: ActionParams,
}

impl ActionConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Everything the host may pass to the view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewInputs {
    pub filter: Option<Filter>,
    pub record_type: Option<String>,
    pub action: Option<ActionConfig>,
}

impl ViewInputs {
    /// Explicit inputs win over action params; missing values default to the
    /// empty filter and the site model.
    pub fn resolve(&self) -> (RecordType, Filter) {
        let params = self.action.as_ref().map(|a| &a.params);

        let filter = self
            .filter
            .clone()
            .or_else(|| params.and_then(|p| p.domain.clone()))
            .unwrap_or_default();

        let model = self
            .record_type
            .as_deref()
            .or_else(|| params.and_then(|p| p.res_model.as_deref()))
            .unwrap_or_default();

        (RecordType::from_model(model), filter)
    }
}

/// Remembers the last applied `(record type, filter)` and reports changes.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterWatcher {
    record_type: RecordType,
    canonical: String,
}

impl Default for FilterWatcher {
    fn default() -> Self {
        Self {
            record_type: RecordType::default(),
            canonical: Filter::empty().canonical(),
        }
    }
}

impl FilterWatcher {
    /// Returns `true` when the pair differs from the stored one, storing the
    /// new pair right away so a quick repeat of the same update is a no-op.
    pub fn observe(&mut self, record_type: &RecordType, filter: &Filter) -> bool {
        let canonical = filter.canonical();
        if *record_type == self.record_type && canonical == self.canonical {
            return false;
        }
        self.record_type = record_type.clone();
        self.canonical = canonical;
        true
    }

    /// Store a pair unconditionally.
    pub fn record(&mut self, record_type: &RecordType, filter: &Filter) {
        self.record_type = record_type.clone();
        self.canonical = filter.canonical();
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }
}
