mod common;

use common::{canopy, Harness};
use media_map_core::config::{DEFAULT_ATTRIBUTION, DEFAULT_TILE_URL};
use media_map_core::{Filter, LatLng, RecordType, SiteMapError, SurfaceState, SyncReport};

#[test]
fn mount_creates_one_surface_with_base_layer() {
    let h = Harness::new(vec![]);
    assert_eq!(h.view.surface_state(), SurfaceState::Unmounted);

    h.view.mount().unwrap();

    let log = h.map.log();
    assert_eq!(log.surfaces_created, 1);
    assert_eq!(log.viewport, Some((LatLng::new(-4.0435, 39.6682), 12)));
    assert_eq!(
        log.tile_layers,
        vec![(DEFAULT_TILE_URL.to_string(), DEFAULT_ATTRIBUTION.to_string())]
    );
    assert_eq!(h.view.surface_state(), SurfaceState::Mounted);
}

#[test]
fn second_mount_is_rejected() {
    let h = Harness::mounted(vec![]);
    assert!(matches!(h.view.mount(), Err(SiteMapError::AlreadyMounted)));
    assert_eq!(h.map.log().surfaces_created, 1);
    assert_eq!(h.map.log().tile_layers.len(), 1);
}

#[test]
fn unmount_without_mount_is_a_noop() {
    let h = Harness::new(vec![]);
    h.view.unmount();
    assert_eq!(h.map.log().surfaces_removed, 0);
    assert_eq!(h.view.surface_state(), SurfaceState::Released);
    assert!(matches!(h.view.mount(), Err(SiteMapError::SurfaceReleased)));
}

#[tokio::test]
async fn unmount_releases_markers_and_surface() {
    let h = Harness::mounted(vec![
        canopy(1, "Shop A", -4.05, 39.66),
        canopy(2, "Shop B", -4.06, 39.67),
    ]);
    h.view
        .synchronize(RecordType::Site, Filter::empty())
        .await
        .unwrap();
    assert_eq!(h.map.log().markers.len(), 2);

    h.view.unmount();
    h.view.unmount();

    let log = h.map.log();
    assert_eq!(log.surfaces_removed, 1);
    assert!(log.markers.is_empty());
    assert_eq!(h.view.marker_count(), 0);
}

#[tokio::test]
async fn synchronize_before_mount_fails_without_reading() {
    let h = Harness::new(vec![canopy(1, "Shop A", -4.05, 39.66)]);
    let result = h.view.synchronize(RecordType::Site, Filter::empty()).await;
    assert!(matches!(result, Err(SiteMapError::NotMounted)));
    assert_eq!(h.store.call_count(), 0);
}

#[tokio::test]
async fn synchronize_after_unmount_does_nothing() {
    let h = Harness::mounted(vec![canopy(1, "Shop A", -4.05, 39.66)]);
    h.view.unmount();
    let report = h
        .view
        .synchronize(RecordType::Site, Filter::empty())
        .await
        .unwrap();
    assert_eq!(report, SyncReport::Released);
    assert_eq!(h.store.call_count(), 0);
    assert_eq!(h.map.log().markers_added, 0);
}

#[tokio::test]
async fn unmount_during_inflight_read_is_safe() {
    let h = Harness::mounted(vec![]);
    let gate = h.store.gate();

    let mut pending = Box::pin(h.view.synchronize(RecordType::Site, Filter::empty()));
    assert!(futures::poll!(&mut pending).is_pending());
    assert_eq!(h.store.call_count(), 1);

    h.view.unmount();
    gate.send(vec![canopy(1, "Shop A", -4.05, 39.66)]).unwrap();

    // The fake panics if a marker lands on a removed surface.
    let report = pending.await.unwrap();
    assert_eq!(report, SyncReport::Released);
    let log = h.map.log();
    assert!(log.markers.is_empty());
    assert_eq!(log.markers_added, 0);
    assert_eq!(h.view.marker_count(), 0);
}
