//! Seams to the outside world: record store, map renderer and navigation.
//!
//! Everything runs on a single-threaded event loop, so none of these traits
//! require `Send` and store futures may hold `Rc`s.

use std::future::Future;

use crate::config::LatLng;
use crate::error::Result;
use crate::filter::Filter;
use crate::marker::{DetailRequest, MarkerAction, MarkerSpec};
use crate::record::SiteRecord;

/// Read access to the remote record store.
pub trait RecordStore {
    /// Read the records of `model` matching `domain`, returning only
    /// `fields`. An empty domain matches every record.
    fn search_read(
        &self,
        model: &str,
        domain: &Filter,
        fields: &[&str],
    ) -> impl Future<Output = Result<Vec<SiteRecord>>>;
}

/// The map rendering library.
pub trait MapBackend {
    /// Backend reference to one placed marker.
    type Handle;

    fn create_surface(&mut self, center: LatLng, zoom: u8) -> Result<()>;

    fn add_tile_layer(&mut self, url_template: &str, attribution: &str) -> Result<()>;

    /// Place a marker and wire its popup action to `action`.
    fn add_marker(&mut self, marker: &MarkerSpec, action: MarkerAction) -> Result<Self::Handle>;

    fn remove_marker(&mut self, handle: Self::Handle);

    /// Tear the surface down, including any markers still attached.
    fn remove_surface(&mut self);
}

/// The host's navigation/action service.
pub trait Navigator {
    fn open_detail(&self, request: &DetailRequest) -> Result<()>;
}
