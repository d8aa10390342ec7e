//! Map container component with a refresh overlay.

use dioxus::prelude::*;

/// Props for MapContainer
#[derive(Props, Clone, PartialEq)]
pub struct MapContainerProps {
    /// The DOM id Leaflet renders into
    pub id: String,
    /// Whether markers are being refreshed
    #[props(default = false)]
    pub loading: bool,
    /// Height of the map in pixels
    #[props(default = 520)]
    pub height: u32,
}

/// A fixed-height div for the Leaflet map.
///
/// The overlay sits beside the map element rather than inside it, so Leaflet
/// owns its container's children exclusively.
#[component]
pub fn MapContainer(props: MapContainerProps) -> Element {
    let style = format!("height: {}px; width: 100%;", props.height);

    rsx! {
        div {
            style: "position: relative; width: 100%;",
            div {
                id: "{props.id}",
                style: "{style}",
            }
            if props.loading {
                div {
                    style: "position: absolute; top: 8px; right: 8px; z-index: 1000; padding: 4px 8px; background: rgba(255,255,255,0.9); border-radius: 4px; font-size: 12px; color: #666;",
                    "Loading sites..."
                }
            }
        }
    }
}
