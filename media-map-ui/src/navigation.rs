//! Navigation capability for the browser.
//!
//! Inside the Odoo web client the host installs `window.mediaMapDoAction`,
//! which forwards a window action to the action service. Standalone, the
//! record is opened through the client's hash URL in the same tab.

use media_map_core::{DetailRequest, Navigator, Result, SiteMapError};

use crate::js_bridge;

/// Host hook receiving an `ir.actions.act_window` object.
const DO_ACTION_HOOK: &str = "mediaMapDoAction";

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

/// Hash fragment of the form view of a record.
pub fn form_hash(request: &DetailRequest) -> String {
    format!(
        "id={}&model={}&view_type=form",
        request.id,
        request.model()
    )
}

impl Navigator for BrowserNavigator {
    fn open_detail(&self, request: &DetailRequest) -> Result<()> {
        let window = web_sys::window().ok_or_else(|| SiteMapError::Navigation("no window".into()))?;

        if js_bridge::has_function(DO_ACTION_HOOK) {
            let action = serde_json::to_string(&request.window_action())?;
            log::info!("[MediaMap] nav: doAction {}", action);
            return js_bridge::call_hook(DO_ACTION_HOOK, &action).map_err(SiteMapError::Navigation);
        }

        log::info!("[MediaMap] nav: opening {} #{}", request.model(), request.id);
        window
            .location()
            .set_hash(&form_hash(request))
            .map_err(|e| SiteMapError::Navigation(format!("{e:?}")))
    }
}
