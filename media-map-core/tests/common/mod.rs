//! Recording fakes for the map, record store and navigation capabilities.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;

use futures::channel::oneshot;
use media_map_core::{
    DetailRequest, Filter, LatLng, MapBackend, MapConfig, MarkerAction, MarkerSpec, Navigator,
    RecordStore, Result, SiteMap, SiteMapError, SiteRecord,
};

#[derive(Default)]
pub struct MapLog {
    pub surfaces_created: usize,
    pub surfaces_removed: usize,
    pub surface_alive: bool,
    pub viewport: Option<(LatLng, u8)>,
    pub tile_layers: Vec<(String, String)>,
    pub markers: BTreeMap<u64, (MarkerSpec, MarkerAction)>,
    pub markers_added: usize,
    pub markers_removed: usize,
    pub next_id: u64,
    /// Reject every marker once this many are on the surface
    pub capacity: Option<usize>,
}

/// Map backend whose log is shared with the test.
#[derive(Clone, Default)]
pub struct FakeMap(pub Rc<RefCell<MapLog>>);

impl FakeMap {
    pub fn log(&self) -> std::cell::Ref<'_, MapLog> {
        self.0.borrow()
    }

    /// Simulate a click on the action button of the marker for `record_id`.
    pub fn click(&self, record_id: i64) {
        let action = self
            .0
            .borrow()
            .markers
            .values()
            .find(|(spec, _)| spec.record_id == record_id)
            .map(|(_, action)| action.clone())
            .expect("no marker for record");
        action.trigger();
    }
}

impl MapBackend for FakeMap {
    type Handle = u64;

    fn create_surface(&mut self, center: LatLng, zoom: u8) -> Result<()> {
        let mut log = self.0.borrow_mut();
        log.surfaces_created += 1;
        log.surface_alive = true;
        log.viewport = Some((center, zoom));
        Ok(())
    }

    fn add_tile_layer(&mut self, url_template: &str, attribution: &str) -> Result<()> {
        self.0
            .borrow_mut()
            .tile_layers
            .push((url_template.to_string(), attribution.to_string()));
        Ok(())
    }

    fn add_marker(&mut self, marker: &MarkerSpec, action: MarkerAction) -> Result<u64> {
        let mut log = self.0.borrow_mut();
        assert!(log.surface_alive, "marker added to a released surface");
        if log.capacity.is_some_and(|cap| log.markers.len() >= cap) {
            return Err(SiteMapError::Backend("surface is full".into()));
        }
        let id = log.next_id;
        log.next_id += 1;
        log.markers.insert(id, (marker.clone(), action));
        log.markers_added += 1;
        Ok(id)
    }

    fn remove_marker(&mut self, handle: u64) {
        let mut log = self.0.borrow_mut();
        assert!(log.markers.remove(&handle).is_some(), "unknown marker {handle}");
        log.markers_removed += 1;
    }

    fn remove_surface(&mut self) {
        let mut log = self.0.borrow_mut();
        log.surfaces_removed += 1;
        log.surface_alive = false;
        log.markers.clear();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub model: String,
    pub domain: Filter,
    pub fields: Vec<String>,
}

/// Record store returning a fixed record set, or gated responses queued
/// with [`FakeStore::gate`].
#[derive(Default)]
pub struct FakeStore {
    pub records: RefCell<Vec<SiteRecord>>,
    pub calls: RefCell<Vec<Call>>,
    gates: RefCell<VecDeque<oneshot::Receiver<Vec<SiteRecord>>>>,
    pub fail: Cell<bool>,
}

impl FakeStore {
    pub fn with_records(records: Vec<SiteRecord>) -> Rc<Self> {
        Rc::new(Self {
            records: RefCell::new(records),
            ..Self::default()
        })
    }

    /// The next read waits for the returned sender and answers with what it
    /// sends.
    pub fn gate(&self) -> oneshot::Sender<Vec<SiteRecord>> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().push_back(rx);
        tx
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn last_call(&self) -> Call {
        self.calls.borrow().last().cloned().expect("no read issued")
    }
}

impl RecordStore for FakeStore {
    async fn search_read(
        &self,
        model: &str,
        domain: &Filter,
        fields: &[&str],
    ) -> Result<Vec<SiteRecord>> {
        self.calls.borrow_mut().push(Call {
            model: model.to_string(),
            domain: domain.clone(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
        });
        let gate = self.gates.borrow_mut().pop_front();
        if let Some(gate) = gate {
            return gate
                .await
                .map_err(|_| SiteMapError::Fetch("read cancelled".into()));
        }
        if self.fail.get() {
            return Err(SiteMapError::Fetch("connection reset".into()));
        }
        Ok(self.records.borrow().clone())
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub opened: RefCell<Vec<DetailRequest>>,
}

impl Navigator for RecordingNavigator {
    fn open_detail(&self, request: &DetailRequest) -> Result<()> {
        self.opened.borrow_mut().push(request.clone());
        Ok(())
    }
}

pub type TestMap = SiteMap<FakeMap, FakeStore, RecordingNavigator>;

pub struct Harness {
    pub view: TestMap,
    pub map: FakeMap,
    pub store: Rc<FakeStore>,
    pub navigator: Rc<RecordingNavigator>,
}

impl Harness {
    pub fn new(records: Vec<SiteRecord>) -> Self {
        Self::with_config(records, MapConfig::default())
    }

    pub fn with_config(records: Vec<SiteRecord>, config: MapConfig) -> Self {
        let map = FakeMap::default();
        let store = FakeStore::with_records(records);
        let navigator = Rc::new(RecordingNavigator::default());
        let view = SiteMap::new(map.clone(), Rc::clone(&store), Rc::clone(&navigator), config);
        Self {
            view,
            map,
            store,
            navigator,
        }
    }

    pub fn mounted(records: Vec<SiteRecord>) -> Self {
        let harness = Self::new(records);
        harness.view.mount().expect("mount");
        harness
    }
}

pub fn canopy(id: i64, shop: &str, lat: f64, lng: f64) -> SiteRecord {
    SiteRecord {
        latitude: Some(lat),
        longitude: Some(lng),
        site_category: Some("canopy".into()),
        shop_name: Some(shop.into()),
        code: Some(format!("CN-{id:03}")),
        sub_county: Some("Nyali".into()),
        county: Some("Mombasa".into()),
        ..SiteRecord::new(id, &format!("Canopy {id}"))
    }
}

pub fn billboard(id: i64, lat: f64, lng: f64) -> SiteRecord {
    SiteRecord {
        latitude: Some(lat),
        longitude: Some(lng),
        site_category: Some("billboard".into()),
        city: Some("Mombasa".into()),
        ..SiteRecord::new(id, &format!("Billboard {id}"))
    }
}

pub fn screen(id: i64, lat: f64, lng: f64) -> SiteRecord {
    SiteRecord {
        latitude: Some(lat),
        longitude: Some(lng),
        ..SiteRecord::new(id, &format!("Screen {id}"))
    }
}
