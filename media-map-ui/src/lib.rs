//! Dioxus site map component and Leaflet bridge for the media inventory.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Leaflet helpers via `js_sys::eval()`
//! - `backend`: `LeafletBackend`, the map rendering capability
//! - `navigation`: `BrowserNavigator`, the navigation capability
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: `SiteMapView` and the selectors around it

pub mod backend;
pub mod components;
pub mod js_bridge;
pub mod navigation;
pub mod state;
