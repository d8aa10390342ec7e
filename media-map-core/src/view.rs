//! The site map view: surface lifecycle, filter watching and marker
//! synchronization.
//!
//! `SiteMap` is cheaply cloneable (via `Rc`) so event handlers and spawned
//! futures can each hold one. All mutable state lives behind a single
//! `RefCell` that is never borrowed across an `.await`.
//!
//! # Synchronization
//!
//! [`SiteMap::synchronize`] clears the current markers *when called*, then
//! returns a future that reads the records and places the new markers.
//! Each call takes a generation number; a read that resolves after a newer
//! call (or after unmount) is dropped instead of rendered.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use crate::capability::{MapBackend, Navigator, RecordStore};
use crate::classify::classify_record;
use crate::config::MapConfig;
use crate::error::{Result, SiteMapError};
use crate::filter::Filter;
use crate::inputs::{FilterWatcher, ViewInputs};
use crate::marker::{DetailRequest, MarkerAction, MarkerDescriptor, MarkerSpec};
use crate::popup::Popup;
use crate::record::{RecordType, SiteRecord};

/// Lifecycle of the map surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceState {
    Unmounted,
    Mounted,
    Released,
}

/// Outcome of one synchronization pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncReport {
    /// Markers were placed; `skipped` records had no usable coordinates.
    Rendered { markers: usize, skipped: usize },
    /// A newer pass started while this one was reading.
    Superseded,
    /// The view was unmounted before the read resolved.
    Released,
}

struct ViewState<B: MapBackend> {
    backend: B,
    surface: SurfaceState,
    markers: Vec<MarkerDescriptor<B::Handle>>,
    generation: u64,
    watcher: FilterWatcher,
}

impl<B: MapBackend> ViewState<B> {
    fn clear_markers(&mut self) {
        for descriptor in self.markers.drain(..) {
            self.backend.remove_marker(descriptor.handle);
        }
    }

    fn place<N: Navigator + 'static>(
        &mut self,
        record_type: &RecordType,
        records: Vec<SiteRecord>,
        navigator: &Rc<N>,
    ) -> Result<SyncReport> {
        let mut skipped = 0;
        for record in records {
            let Some(position) = record.position() else {
                skipped += 1;
                continue;
            };
            let style = classify_record(record_type, &record);
            let spec = MarkerSpec {
                record_id: record.id,
                record_type: record_type.clone(),
                position,
                style,
                popup: Popup::build(record_type, &record, &style),
            };
            let action = MarkerAction::bind(
                Rc::clone(navigator),
                DetailRequest::new(record_type.clone(), record.id),
            );
            let handle = self.backend.add_marker(&spec, action.clone())?;
            self.markers.push(MarkerDescriptor {
                spec,
                handle,
                action,
            });
        }
        Ok(SyncReport::Rendered {
            markers: self.markers.len(),
            skipped,
        })
    }
}

/// A map view over one record store.
pub struct SiteMap<B: MapBackend, S, N> {
    state: Rc<RefCell<ViewState<B>>>,
    store: Rc<S>,
    navigator: Rc<N>,
    config: Rc<MapConfig>,
}

impl<B: MapBackend, S, N> Clone for SiteMap<B, S, N> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
            store: Rc::clone(&self.store),
            navigator: Rc::clone(&self.navigator),
            config: Rc::clone(&self.config),
        }
    }
}

impl<B, S, N> SiteMap<B, S, N>
where
    B: MapBackend + 'static,
    S: RecordStore + 'static,
    N: Navigator + 'static,
{
    pub fn new(backend: B, store: Rc<S>, navigator: Rc<N>, config: MapConfig) -> Self {
        Self {
            state: Rc::new(RefCell::new(ViewState {
                backend,
                surface: SurfaceState::Unmounted,
                markers: Vec::new(),
                generation: 0,
                watcher: FilterWatcher::default(),
            })),
            store,
            navigator,
            config: Rc::new(config),
        }
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn surface_state(&self) -> SurfaceState {
        self.state.borrow().surface
    }

    pub fn marker_count(&self) -> usize {
        self.state.borrow().markers.len()
    }

    /// Specs of the markers currently placed, in placement order.
    pub fn markers(&self) -> Vec<MarkerSpec> {
        self.state
            .borrow()
            .markers
            .iter()
            .map(|d| d.spec.clone())
            .collect()
    }

    /// Click actions of the markers currently placed.
    pub fn marker_actions(&self) -> Vec<MarkerAction> {
        self.state
            .borrow()
            .markers
            .iter()
            .map(|d| d.action.clone())
            .collect()
    }

    /// Create the surface at the configured viewport and attach the base
    /// tile layer. Only valid once per view.
    pub fn mount(&self) -> Result<()> {
        let mut state = self.state.borrow_mut();
        match state.surface {
            SurfaceState::Mounted => return Err(SiteMapError::AlreadyMounted),
            SurfaceState::Released => return Err(SiteMapError::SurfaceReleased),
            SurfaceState::Unmounted => {}
        }
        state
            .backend
            .create_surface(self.config.center, self.config.zoom)?;
        state.surface = SurfaceState::Mounted;
        state
            .backend
            .add_tile_layer(&self.config.tile_url, &self.config.attribution)?;
        log::info!(
            "[MediaMap] view: surface created at ({}, {}) zoom {}",
            self.config.center.lat,
            self.config.center.lng,
            self.config.zoom
        );
        Ok(())
    }

    /// Remove every marker and the surface. Safe to call at any time, any
    /// number of times; reads still in flight resolve as `Released`.
    pub fn unmount(&self) {
        let mut state = self.state.borrow_mut();
        if state.surface == SurfaceState::Mounted {
            state.clear_markers();
            state.backend.remove_surface();
            log::info!("[MediaMap] view: surface released");
        }
        state.markers.clear();
        state.surface = SurfaceState::Released;
        state.generation += 1;
    }

    /// Initial load: synchronize with the resolved inputs regardless of the
    /// watcher, and make them the watcher's reference.
    pub fn load(&self, inputs: &ViewInputs) -> impl Future<Output = Result<SyncReport>> + 'static {
        let (record_type, filter) = inputs.resolve();
        self.state
            .borrow_mut()
            .watcher
            .record(&record_type, &filter);
        self.synchronize(record_type, filter)
    }

    /// Input update: returns a synchronization only when the resolved
    /// `(record type, filter)` differs from the last applied one.
    pub fn apply_inputs(
        &self,
        inputs: &ViewInputs,
    ) -> Option<impl Future<Output = Result<SyncReport>> + 'static> {
        let (record_type, filter) = inputs.resolve();
        let changed = self
            .state
            .borrow_mut()
            .watcher
            .observe(&record_type, &filter);
        if !changed {
            log::debug!("[MediaMap] watcher: inputs unchanged, skipping refresh");
            return None;
        }
        log::info!(
            "[MediaMap] watcher: refreshing {} with {}",
            record_type,
            filter.canonical()
        );
        Some(self.synchronize(record_type, filter))
    }

    /// Replace the marker set with the records of `record_type` matching
    /// `filter`.
    ///
    /// The current markers are removed before this returns. The returned
    /// future performs the read and the placement; a read error of the
    /// latest pass is returned as-is and leaves the map empty.
    pub fn synchronize(
        &self,
        record_type: RecordType,
        filter: Filter,
    ) -> impl Future<Output = Result<SyncReport>> + 'static {
        let ticket = self.begin_pass();
        let state = Rc::clone(&self.state);
        let store = Rc::clone(&self.store);
        let navigator = Rc::clone(&self.navigator);
        let prefilter = self.config.prefilter_geolocated;

        async move {
            let generation = match ticket {
                Ok(Some(generation)) => generation,
                Ok(None) => return Ok(SyncReport::Released),
                Err(e) => return Err(e),
            };

            let domain = if prefilter {
                Filter::geolocated().and(&filter)
            } else {
                filter
            };
            let fields = record_type.fields();
            let records = match store
                .search_read(record_type.model(), &domain, &fields)
                .await
            {
                Ok(records) => records,
                Err(e) => {
                    let current = state.borrow();
                    if current.surface == SurfaceState::Released {
                        return Ok(SyncReport::Released);
                    }
                    if current.generation != generation {
                        log::debug!(
                            "[MediaMap] sync: superseded pass {} failed: {}",
                            generation,
                            e
                        );
                        return Ok(SyncReport::Superseded);
                    }
                    log::error!("[MediaMap] sync: read of {} failed: {}", record_type, e);
                    return Err(e);
                }
            };

            let mut state = state.borrow_mut();
            if state.surface == SurfaceState::Released {
                log::debug!("[MediaMap] sync: view released, dropping {} records", records.len());
                return Ok(SyncReport::Released);
            }
            if state.generation != generation {
                log::debug!("[MediaMap] sync: pass {} superseded", generation);
                return Ok(SyncReport::Superseded);
            }

            let fetched = records.len();
            match state.place(&record_type, records, &navigator) {
                Ok(report) => {
                    log::info!(
                        "[MediaMap] sync: {} returned {} records, {:?}",
                        record_type,
                        fetched,
                        report
                    );
                    Ok(report)
                }
                Err(e) => {
                    state.clear_markers();
                    Err(e)
                }
            }
        }
    }

    /// Clear the markers and take a generation number for a new pass.
    ///
    /// `Ok(None)` means the view is released and nothing should be read.
    fn begin_pass(&self) -> Result<Option<u64>> {
        let mut state = self.state.borrow_mut();
        match state.surface {
            SurfaceState::Unmounted => Err(SiteMapError::NotMounted),
            SurfaceState::Released => Ok(None),
            SurfaceState::Mounted => {
                state.clear_markers();
                state.generation += 1;
                Ok(Some(state.generation))
            }
        }
    }
}
