//! Typed wrappers around Leaflet via `js_sys::eval()`.
//!
//! The Leaflet helpers live in `assets/js/site-map.js` and are evaluated as a
//! global (`window.mediaMap`). Leaflet itself must already be loaded by the
//! host page. Arguments are passed as JSON literals, so record text never
//! needs hand escaping.

use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

static SITE_MAP_JS: &str = include_str!("../assets/js/site-map.js");

/// Name of the window property holding per-marker click actions.
const ACTION_REGISTRY: &str = "__mediaMapActions";

/// Arguments of `mediaMap.addMarker`.
#[derive(Debug, Serialize)]
pub struct MarkerArgs<'a> {
    pub container: &'a str,
    pub id: u64,
    pub lat: f64,
    pub lng: f64,
    pub glyph: &'a str,
    pub color: &'a str,
    pub title: &'a str,
    pub popup: String,
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Media map JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Execute JS and report a thrown exception as an error string.
fn try_js(code: &str) -> Result<(), String> {
    js_sys::eval(code)
        .map(|_| ())
        .map_err(|e| e.as_string().unwrap_or_else(|| format!("{e:?}")))
}

fn json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

/// Evaluate the Leaflet helpers. Safe to call repeatedly.
pub fn init_map_scripts() {
    let _ = js_sys::eval(SITE_MAP_JS);
}

pub fn create_map(container_id: &str, lat: f64, lng: f64, zoom: u8) -> Result<(), String> {
    try_js(&format!(
        "window.mediaMap.create({}, {}, {}, {});",
        json(container_id),
        lat,
        lng,
        zoom
    ))
}

pub fn add_tile_layer(
    container_id: &str,
    url_template: &str,
    attribution: &str,
) -> Result<(), String> {
    try_js(&format!(
        "window.mediaMap.addTileLayer({}, {}, {});",
        json(container_id),
        json(url_template),
        json(attribution)
    ))
}

pub fn add_marker(args: &MarkerArgs<'_>) -> Result<(), String> {
    try_js(&format!("window.mediaMap.addMarker({});", json(args)))
}

/// Remove a marker and its registered action.
pub fn remove_marker(marker_id: u64) {
    call_js(&format!("window.mediaMap.removeMarker({});", marker_id));
}

/// Remove a map and every marker still attached to it.
pub fn remove_map(container_id: &str) {
    call_js(&format!("window.mediaMap.remove({});", json(container_id)));
}

/// Whether `window.<name>` is a function.
pub fn has_function(name: &str) -> bool {
    js_sys::eval(&format!("typeof window[{}] === 'function'", json(name)))
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

/// Call `window.<name>(<json>)` with a JSON argument.
pub fn call_hook(name: &str, json_arg: &str) -> Result<(), String> {
    try_js(&format!("window[{}]({});", json(name), json_arg))
}

/// Register the click action of one marker under its id.
pub fn register_action(marker_id: u64, action: &Closure<dyn Fn()>) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let key = JsValue::from_str(ACTION_REGISTRY);
    let mut registry = js_sys::Reflect::get(&window, &key).map_err(|e| format!("{e:?}"))?;
    if registry.is_undefined() {
        registry = js_sys::Object::new().into();
        js_sys::Reflect::set(&window, &key, &registry).map_err(|e| format!("{e:?}"))?;
    }
    js_sys::Reflect::set(
        &registry,
        &JsValue::from_f64(marker_id as f64),
        action.as_ref(),
    )
    .map(|_| ())
    .map_err(|e| format!("{e:?}"))
}
