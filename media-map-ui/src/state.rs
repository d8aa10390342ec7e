//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals of the map page into a single
//! struct provided via `use_context_provider`. Child components retrieve it
//! with `use_context::<AppState>()`.

use dioxus::prelude::*;
use media_map_core::{Filter, RecordType, ViewInputs};

/// Category narrowing chosen in the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Billboards,
    Canopies,
}

impl CategoryFilter {
    pub const ALL: [CategoryFilter; 3] = [Self::All, Self::Billboards, Self::Canopies];

    /// `<option>` value.
    pub fn value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Billboards => "billboard",
            Self::Canopies => "canopy",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All categories",
            Self::Billboards => "Billboards",
            Self::Canopies => "Canopies",
        }
    }

    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.value() == value)
            .unwrap_or_default()
    }

    fn filter(self) -> Option<Filter> {
        match self {
            Self::All => None,
            other => Some(Filter::condition("site_category", "=", other.value())),
        }
    }
}

/// Shared state of the map page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether a synchronization is in flight
    pub loading: Signal<bool>,
    /// Error message of the last failed synchronization
    pub error_msg: Signal<Option<String>>,
    /// Markers on the map after the last pass
    pub marker_count: Signal<usize>,
    /// Records skipped for lack of coordinates in the last pass
    pub skipped_count: Signal<usize>,
    /// Model currently shown
    pub record_type: Signal<String>,
    /// Category narrowing (sites only)
    pub category: Signal<CategoryFilter>,
}

impl AppState {
    /// Create a new AppState showing `record_type`.
    pub fn new(record_type: &RecordType) -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            marker_count: Signal::new(0),
            skipped_count: Signal::new(0),
            record_type: Signal::new(record_type.model().to_string()),
            category: Signal::new(CategoryFilter::All),
        }
    }
}

/// Combine the host's inputs with the selectors.
///
/// The selected model replaces the host's; the category narrowing is only
/// added for models that have a category.
pub fn effective_inputs(host: &ViewInputs, model: &str, category: CategoryFilter) -> ViewInputs {
    let (_, host_filter) = host.resolve();
    let record_type = RecordType::from_model(model);
    let filter = match category.filter() {
        Some(narrowing) if record_type.supports_category() => host_filter.and(&narrowing),
        _ => host_filter,
    };
    ViewInputs {
        filter: Some(filter),
        record_type: Some(record_type.model().to_string()),
        action: None,
    }
}
