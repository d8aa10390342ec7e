//! Leaflet implementation of the map rendering capability.

use std::sync::atomic::{AtomicU64, Ordering};

use media_map_core::{LatLng, MapBackend, MarkerAction, MarkerSpec, Result, SiteMapError};
use wasm_bindgen::closure::Closure;

use crate::js_bridge::{self, MarkerArgs};

/// Marker ids are unique per page so several maps can share the action
/// registry.
static NEXT_MARKER_ID: AtomicU64 = AtomicU64::new(1);

/// A placed Leaflet marker. Owns the JS closure behind its popup button;
/// dropping the handle frees it.
pub struct LeafletMarker {
    id: u64,
    _action: Closure<dyn Fn()>,
}

impl LeafletMarker {
    pub fn id(&self) -> u64 {
        self.id
    }
}

/// Drives one Leaflet map rendered into the element with `container_id`.
pub struct LeafletBackend {
    container_id: String,
}

impl LeafletBackend {
    pub fn new(container_id: &str) -> Self {
        Self {
            container_id: container_id.to_string(),
        }
    }

    /// Arguments for `mediaMap.addMarker`.
    pub fn marker_args<'a>(&'a self, id: u64, marker: &'a MarkerSpec) -> MarkerArgs<'a> {
        MarkerArgs {
            container: &self.container_id,
            id,
            lat: marker.position.lat,
            lng: marker.position.lng,
            glyph: marker.style.glyph,
            color: marker.style.color,
            title: &marker.popup.title,
            popup: marker.popup.to_html(id),
        }
    }
}

impl MapBackend for LeafletBackend {
    type Handle = LeafletMarker;

    fn create_surface(&mut self, center: LatLng, zoom: u8) -> Result<()> {
        js_bridge::init_map_scripts();
        js_bridge::create_map(&self.container_id, center.lat, center.lng, zoom)
            .map_err(SiteMapError::Backend)
    }

    fn add_tile_layer(&mut self, url_template: &str, attribution: &str) -> Result<()> {
        js_bridge::add_tile_layer(&self.container_id, url_template, attribution)
            .map_err(SiteMapError::Backend)
    }

    fn add_marker(&mut self, marker: &MarkerSpec, action: MarkerAction) -> Result<LeafletMarker> {
        let id = NEXT_MARKER_ID.fetch_add(1, Ordering::Relaxed);
        let closure = Closure::<dyn Fn()>::new(move || action.trigger());
        js_bridge::register_action(id, &closure).map_err(SiteMapError::Backend)?;
        if let Err(e) = js_bridge::add_marker(&self.marker_args(id, marker)) {
            js_bridge::remove_marker(id);
            return Err(SiteMapError::Backend(e));
        }
        Ok(LeafletMarker {
            id,
            _action: closure,
        })
    }

    fn remove_marker(&mut self, handle: LeafletMarker) {
        js_bridge::remove_marker(handle.id);
    }

    fn remove_surface(&mut self) {
        js_bridge::remove_map(&self.container_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use media_map_core::classify::CANOPY_STYLE;
    use media_map_core::{Popup, RecordType, SiteRecord};

    #[test]
    fn marker_args_carry_style_and_tagged_popup() {
        let record = SiteRecord {
            shop_name: Some("Shop A".into()),
            ..SiteRecord::new(5, "Nyali \"Canopy\"")
        };
        let spec = MarkerSpec {
            record_id: 5,
            record_type: RecordType::Site,
            position: LatLng::new(-4.05, 39.66),
            style: CANOPY_STYLE,
            popup: Popup::build(&RecordType::Site, &record, &CANOPY_STYLE),
        };
        let backend = LeafletBackend::new("site-map");
        let args = serde_json::to_value(backend.marker_args(11, &spec)).unwrap();

        assert_eq!(args["container"], "site-map");
        assert_eq!(args["id"], 11);
        assert_eq!(args["glyph"], "fa-umbrella");
        assert_eq!(args["color"], "#2E7D32");
        assert_eq!(args["title"], "Nyali \"Canopy\"");
        let popup = args["popup"].as_str().unwrap();
        assert!(popup.contains("data-marker-id=\"11\""));
        assert!(popup.contains("Nyali &quot;Canopy&quot;"));
    }
}
