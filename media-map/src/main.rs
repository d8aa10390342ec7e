//! Media inventory site map
//!
//! Shows billboards, canopies and digital screens from an Odoo server as
//! Leaflet markers.
//!
//! Data flow:
//! 1. On launch: read the host inputs (model, domain, client action, map
//!    config) from the page URL query.
//! 2. The selectors narrow the inputs; every change re-renders `App` with new
//!    effective inputs.
//! 3. `SiteMapView` refreshes its markers only when the effective
//!    `(model, domain)` actually changed.
//!
//! Leaflet 1.9 and Font Awesome must be loaded by the host page.

use dioxus::prelude::*;
use media_map_core::{ActionConfig, Filter, MapConfig, ViewInputs};
use media_map_ui::components::{CategorySelector, MapLegend, RecordTypeSelector, SiteMapView};
use media_map_ui::state::{effective_inputs, AppState};
use url::Url;

/// DOM id of the Leaflet map element.
const MAP_CONTAINER_ID: &str = "media-map";

/// Everything the page URL tells the app.
#[derive(Debug, Clone, Default, PartialEq)]
struct HostPage {
    inputs: ViewInputs,
    config: MapConfig,
    origin: String,
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("media-map-root"))
        .launch(App);
}

/// Read `?model=..&domain=..&action=..&config=..` from the page URL.
///
/// Keys and values are form-decoded; unparseable JSON values are logged and
/// ignored.
fn parse_host_query(url: &Url) -> (ViewInputs, MapConfig) {
    let mut inputs = ViewInputs::default();
    let mut config = MapConfig::default();

    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "model" if !value.is_empty() => inputs.record_type = Some(value.into_owned()),
            "domain" => match Filter::from_json(&value) {
                Ok(filter) => inputs.filter = Some(filter),
                Err(e) => log::warn!("[MediaMap] host: ignoring domain {:?}: {}", value, e),
            },
            "action" => match ActionConfig::from_json(&value) {
                Ok(action) => inputs.action = Some(action),
                Err(e) => log::warn!("[MediaMap] host: ignoring action: {}", e),
            },
            "config" => match MapConfig::from_json(&value) {
                Ok(parsed) => config = parsed,
                Err(e) => log::warn!("[MediaMap] host: ignoring config: {}", e),
            },
            _ => {}
        }
    }

    (inputs, config)
}

fn read_host_page() -> HostPage {
    let Some(href) = web_sys::window().and_then(|w| w.location().href().ok()) else {
        return HostPage::default();
    };
    let url = match Url::parse(&href) {
        Ok(url) => url,
        Err(e) => {
            log::warn!("[MediaMap] host: unreadable page URL {:?}: {}", href, e);
            return HostPage::default();
        }
    };

    let (inputs, config) = parse_host_query(&url);
    let origin = url.origin().ascii_serialization();
    log::info!(
        "[MediaMap] host: origin {} model {:?}",
        origin,
        inputs.resolve().0.model()
    );

    HostPage {
        inputs,
        config,
        origin,
    }
}

#[component]
fn App() -> Element {
    let host = use_hook(read_host_page);
    let initial_type = host.inputs.resolve().0;
    let state = use_context_provider(|| AppState::new(&initial_type));

    let inputs = effective_inputs(&host.inputs, &(state.record_type)(), (state.category)());

    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "Site Map"
            }

            div {
                style: "display: flex; gap: 16px; flex-wrap: wrap;",
                RecordTypeSelector {}
                CategorySelector {}
            }

            MapLegend {}

            SiteMapView {
                container_id: MAP_CONTAINER_ID.to_string(),
                inputs: inputs,
                rpc_base: host.origin.clone(),
                config: host.config.clone(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use media_map_core::RecordType;

    fn parse(href: &str) -> (ViewInputs, MapConfig) {
        parse_host_query(&Url::parse(href).unwrap())
    }

    #[test]
    fn empty_query_means_all_sites() {
        let (inputs, config) = parse("https://erp.example.com/media_map");
        assert_eq!(inputs, ViewInputs::default());
        assert_eq!(config, MapConfig::default());
    }

    #[test]
    fn reads_model_domain_and_config() {
        let (inputs, config) = parse(
            r#"https://erp.example.com/map?model=media.digital.screen&domain=[["city","=","Nairobi"]]&config={"zoom":7}"#,
        );
        let (record_type, filter) = inputs.resolve();
        assert_eq!(record_type, RecordType::DigitalScreen);
        assert_eq!(filter, Filter::condition("city", "=", "Nairobi"));
        assert_eq!(config.zoom, 7);
    }

    #[test]
    fn decodes_percent_encoded_keys_and_plus_signs() {
        let (inputs, _) = parse(
            "https://erp.example.com/map?mod%65l=media.digital.screen\
             &domain=%5B%5B%22city%22%2C%22%3D%22%2C%22Dar+es+Salaam%22%5D%5D",
        );
        let (record_type, filter) = inputs.resolve();
        assert_eq!(record_type, RecordType::DigitalScreen);
        assert_eq!(filter, Filter::condition("city", "=", "Dar es Salaam"));
    }

    #[test]
    fn reads_client_action() {
        let (inputs, _) = parse(
            r#"https://erp.example.com/map?action={"params":{"res_model":"media.site","domain":[["site_category","=","canopy"]]}}"#,
        );
        let (record_type, filter) = inputs.resolve();
        assert_eq!(record_type, RecordType::Site);
        assert_eq!(filter, Filter::condition("site_category", "=", "canopy"));
    }

    #[test]
    fn bad_values_are_ignored() {
        let (inputs, config) =
            parse("https://erp.example.com/map?domain=[oops&config=nope&model=&stray");
        assert_eq!(inputs.filter, None);
        assert_eq!(inputs.record_type, None);
        assert_eq!(config, MapConfig::default());
    }
}
