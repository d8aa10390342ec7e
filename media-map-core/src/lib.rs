//! Marker synchronization engine for the media inventory site map.
//!
//! This crate provides:
//! - `filter`: Odoo-style domains with canonical-form equality
//! - `record`: record types, field selection and the fetched site record
//! - `classify` / `popup`: visual classification and popup content
//! - `marker`: marker descriptors and per-marker click actions
//! - `capability`: traits for the record store, map renderer and navigation
//! - `inputs`: host inputs and the filter watcher
//! - `view`: `SiteMap`, tying the surface lifecycle, the watcher and the
//!   synchronizer together
//! - `rpc` (feature `rpc`): an Odoo JSON-RPC record store
//!
//! # Usage
//!
//! ```ignore
//! let map = SiteMap::new(backend, Rc::new(store), Rc::new(navigator), MapConfig::default());
//! map.mount()?;
//! map.load(&ViewInputs::default()).await?;
//!
//! // later, on every input change
//! if let Some(refresh) = map.apply_inputs(&inputs) {
//!     refresh.await?;
//! }
//!
//! map.unmount();
//! ```

pub mod capability;
pub mod classify;
pub mod config;
pub mod error;
pub mod filter;
pub mod inputs;
pub mod marker;
pub mod popup;
pub mod record;
#[cfg(feature = "rpc")]
pub mod rpc;
pub mod view;

pub use capability::{MapBackend, Navigator, RecordStore};
pub use classify::{classify, SiteKind, Style};
pub use config::{LatLng, MapConfig};
pub use error::{Result, SiteMapError};
pub use filter::{DomainTerm, Filter};
pub use inputs::{ActionConfig, ViewInputs};
pub use marker::{DetailRequest, MarkerAction, MarkerSpec};
pub use popup::Popup;
pub use record::{RecordType, SiteRecord};
pub use view::{SiteMap, SurfaceState, SyncReport};
