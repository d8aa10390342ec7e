//! Reusable Dioxus RSX components for the media site map.

mod category_selector;
mod error_display;
mod map_container;
mod map_legend;
mod record_type_selector;
mod site_map_view;

pub use category_selector::CategorySelector;
pub use error_display::ErrorDisplay;
pub use map_container::MapContainer;
pub use map_legend::MapLegend;
pub use record_type_selector::RecordTypeSelector;
pub use site_map_view::SiteMapView;
