//! The site map component: owns one `SiteMap` for its whole lifetime.

use std::future::Future;
use std::rc::Rc;

use dioxus::prelude::*;
use media_map_core::rpc::OdooRpcStore;
use media_map_core::{MapConfig, SiteMap, SurfaceState, SyncReport, ViewInputs};

use crate::backend::LeafletBackend;
use crate::components::{ErrorDisplay, MapContainer};
use crate::navigation::BrowserNavigator;
use crate::state::AppState;

type BrowserSiteMap = SiteMap<LeafletBackend, OdooRpcStore, BrowserNavigator>;

#[derive(Props, Clone, PartialEq)]
pub struct SiteMapViewProps {
    /// DOM id of the map element
    pub container_id: String,
    /// Effective filter and record type; a change triggers a refresh
    pub inputs: ViewInputs,
    /// Origin of the Odoo server
    pub rpc_base: String,
    #[props(default)]
    pub config: MapConfig,
    #[props(default = 520)]
    pub height: u32,
}

/// Map of sites with markers kept in sync with `inputs`.
///
/// The surface is created after the first render (the container must be in
/// the DOM) and released when the component is dropped.
#[component]
pub fn SiteMapView(props: SiteMapViewProps) -> Element {
    let state = use_context::<AppState>();
    let view: BrowserSiteMap = use_hook(|| {
        SiteMap::new(
            LeafletBackend::new(&props.container_id),
            Rc::new(OdooRpcStore::new(&props.rpc_base)),
            Rc::new(BrowserNavigator),
            props.config.clone(),
        )
    });

    // ─── Effect 1: create the surface once and load markers ───
    let mount_view = view.clone();
    let initial_inputs = props.inputs.clone();
    use_effect(move || {
        let mut state = state;
        if let Err(e) = mount_view.mount() {
            log::error!("[MediaMap] view: mount failed: {}", e);
            state.error_msg.set(Some(e.to_string()));
            state.loading.set(false);
            return;
        }
        run_sync(state, mount_view.load(&initial_inputs));
    });

    // ─── Effect 2: refresh when the inputs change ───
    let watch_view = view.clone();
    use_effect(use_reactive((&props.inputs,), move |(inputs,)| {
        if watch_view.surface_state() != SurfaceState::Mounted {
            return;
        }
        if let Some(refresh) = watch_view.apply_inputs(&inputs) {
            run_sync(state, refresh);
        }
    }));

    let drop_view = view.clone();
    use_drop(move || drop_view.unmount());

    let retry_view = view.clone();
    let retry_inputs = props.inputs.clone();
    let on_retry = move |_: ()| {
        if retry_view.surface_state() == SurfaceState::Mounted {
            run_sync(state, retry_view.load(&retry_inputs));
        }
    };

    rsx! {
        if let Some(err) = state.error_msg.read().as_ref() {
            ErrorDisplay { message: err.clone(), on_retry: on_retry }
        }
        MapContainer {
            id: props.container_id.clone(),
            loading: *state.loading.read(),
            height: props.height,
        }
    }
}

/// Run a synchronization on the component's task queue and mirror its
/// outcome into `AppState`.
fn run_sync<F>(mut state: AppState, refresh: F)
where
    F: Future<Output = media_map_core::Result<SyncReport>> + 'static,
{
    state.loading.set(true);
    spawn(async move {
        match refresh.await {
            Ok(SyncReport::Rendered { markers, skipped }) => {
                state.marker_count.set(markers);
                state.skipped_count.set(skipped);
                state.error_msg.set(None);
                state.loading.set(false);
            }
            // A newer pass owns the loading flag, or the view is gone.
            Ok(SyncReport::Superseded) | Ok(SyncReport::Released) => {}
            Err(e) => {
                state.marker_count.set(0);
                state.skipped_count.set(0);
                state.error_msg.set(Some(e.to_string()));
                state.loading.set(false);
            }
        }
    });
}
