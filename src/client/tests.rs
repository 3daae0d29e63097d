use super::*;
use crate::domain::homes::{AddFavoriteRequest, FavoriteHome, MarkSeenRequest, SeenHome};
use crate::domain::{Coordinate, Listing, Viewport};
use crate::map::{BoundingBox, LatLng, MapListener, MapWidget, PointerEvent};
use serde_json::json;
use std::cell::{Cell, RefCell};

#[derive(Default)]
struct FakeApi {
    seen: Vec<SeenHome>,
    favorites: Vec<FavoriteHome>,
    results: RefCell<Vec<Listing>>,
    fail_load: bool,
    fail_search: Cell<bool>,
    fail_mutations: Cell<bool>,
    missing_on_remove: bool,

    searches: RefCell<Vec<Viewport>>,
    marked: RefCell<Vec<MarkSeenRequest>>,
    added: RefCell<Vec<AddFavoriteRequest>>,
    removed: RefCell<Vec<String>>,
}

impl FakeApi {
    fn mutation(&self) -> Result<(), ClientError> {
        if self.fail_mutations.get() {
            Err(ClientError::Http(500))
        } else {
            Ok(())
        }
    }
}

impl HomesApi for FakeApi {
    fn seen_homes(&self) -> Result<Vec<SeenHome>, ClientError> {
        if self.fail_load {
            return Err(ClientError::Network("connection refused".into()));
        }
        Ok(self.seen.clone())
    }

    fn favorites(&self) -> Result<Vec<FavoriteHome>, ClientError> {
        if self.fail_load {
            return Err(ClientError::Network("connection refused".into()));
        }
        Ok(self.favorites.clone())
    }

    fn mark_seen(&self, body: &MarkSeenRequest) -> Result<(), ClientError> {
        self.marked.borrow_mut().push(body.clone());
        self.mutation()
    }

    fn add_favorite(&self, body: &AddFavoriteRequest) -> Result<(), ClientError> {
        self.added.borrow_mut().push(body.clone());
        self.mutation()
    }

    fn remove_favorite(&self, property_url: &str) -> Result<(), ClientError> {
        self.removed.borrow_mut().push(property_url.to_string());
        if self.missing_on_remove {
            return Err(ClientError::NotFound);
        }
        self.mutation()
    }

    fn search(&self, payload: &SearchPayload) -> Result<Vec<Listing>, ClientError> {
        self.searches
            .borrow_mut()
            .push(payload.variables.location.viewport);
        if self.fail_search.get() {
            return Err(ClientError::Http(502));
        }
        Ok(self.results.borrow().clone())
    }
}

fn listing(id: i64) -> Listing {
    serde_json::from_value(json!({
        "listingId": id,
        "name": format!("Home {id}"),
        "approxLocation": {"latitude": 37.79, "longitude": -122.41},
        "rentAmount": {"amount": 3500, "currency": "USD"}
    }))
    .unwrap()
}

fn seen_row(url: &str) -> SeenHome {
    SeenHome {
        id: 1,
        property_url: url.to_string(),
        property_name: None,
        listing_id: None,
        created_at: chrono::Utc::now().naive_utc(),
    }
}

fn manager_with(api: FakeApi) -> ListingManager<FakeApi, MemoryViewportStore> {
    ListingManager::new(api, MemoryViewportStore::default())
}

fn html_of(m: &ListingManager<FakeApi, MemoryViewportStore>) -> String {
    m.results_html().0.clone()
}

#[test]
fn init_loads_state_then_searches_default_viewport() {
    let api = FakeApi {
        seen: vec![seen_row("https://www.furnishedfinder.com/property/1")],
        results: RefCell::new(vec![listing(1), listing(2)]),
        ..Default::default()
    };
    let mut m = manager_with(api);
    m.init();

    assert_eq!(m.seen_urls().len(), 1);
    assert_eq!(m.api().searches.borrow().as_slice(), &[Viewport::default()]);
    assert_eq!(m.all_results().len(), 2);
}

#[test]
fn unseen_view_filters_seen_listings() {
    let a = listing(1);
    let b = listing(2);
    let api = FakeApi {
        seen: vec![seen_row(&a.url())],
        results: RefCell::new(vec![a.clone(), b.clone()]),
        ..Default::default()
    };
    let mut m = manager_with(api);
    m.init();

    let unseen: Vec<&Listing> = m.unseen_results();
    assert_eq!(unseen, vec![&b]);

    let html = html_of(&m);
    assert!(html.contains("card_2"));
    assert!(!html.contains("card_1"));

    // Markers follow the cards.
    assert_eq!(m.take_marker_update(), Some(vec![b]));
    assert_eq!(m.take_marker_update(), None);
}

#[test]
fn everything_seen_shows_message() {
    let a = listing(1);
    let api = FakeApi {
        seen: vec![seen_row(&a.url())],
        results: RefCell::new(vec![a]),
        ..Default::default()
    };
    let mut m = manager_with(api);
    m.init();

    assert!(html_of(&m).contains("All results have been seen"));
    assert_eq!(m.take_marker_update(), None);
}

#[test]
fn init_survives_backend_outage() {
    let api = FakeApi {
        fail_load: true,
        results: RefCell::new(vec![listing(1)]),
        ..Default::default()
    };
    let mut m = manager_with(api);
    m.init();

    assert!(m.seen_urls().is_empty());
    assert!(m.favorites().is_empty());
    assert_eq!(m.all_results().len(), 1);
}

#[test]
fn mark_as_seen_is_idempotent() {
    let api = FakeApi {
        results: RefCell::new(vec![listing(1), listing(2)]),
        ..Default::default()
    };
    let mut m = manager_with(api);
    m.init();

    let first = listing(1);
    m.mark_as_seen(&first);
    m.mark_as_seen(&first);

    assert_eq!(m.api().marked.borrow().len(), 1);
    assert_eq!(
        m.api().marked.borrow()[0].property_url.as_deref(),
        Some("https://www.furnishedfinder.com/property/1")
    );
    assert_eq!(m.unseen_results().len(), 1);
    assert_eq!(m.notification(), Some(&Notification::success("Marked as seen!")));
    assert!(!html_of(&m).contains("card_1"));
}

#[test]
fn failed_mark_leaves_cache_untouched() {
    let api = FakeApi {
        results: RefCell::new(vec![listing(1)]),
        ..Default::default()
    };
    let mut m = manager_with(api);
    m.init();
    m.api().fail_mutations.set(true);

    m.mark_as_seen(&listing(1));

    assert!(m.seen_urls().is_empty());
    assert_eq!(m.unseen_results().len(), 1);
    assert_eq!(m.notification(), Some(&Notification::error("Failed to mark as seen")));
}

#[test]
fn favorites_add_once_and_render() {
    let api = FakeApi {
        results: RefCell::new(vec![listing(1)]),
        ..Default::default()
    };
    let mut m = manager_with(api);
    m.init();

    m.add_to_favorites(&listing(1));
    m.add_to_favorites(&listing(1));

    assert_eq!(m.api().added.borrow().len(), 1);
    {
        let added = m.api().added.borrow();
        assert_eq!(added[0].property_data.as_ref().unwrap()["listingId"], json!(1));
    }
    assert_eq!(m.favorites().len(), 1);
    assert!(html_of(&m).contains("favorite-badge"));

    m.switch_tab(Tab::Favorites);
    assert!(m.favorites_html().0.contains("Remove from Favorites"));
}

#[test]
fn failed_favorite_is_not_cached() {
    let api = FakeApi::default();
    api.fail_mutations.set(true);
    let mut m = manager_with(api);

    m.add_to_favorites(&listing(1));

    assert!(m.favorites().is_empty());
    assert_eq!(m.notification(), Some(&Notification::error("Failed to add to favorites")));
}

#[test]
fn remove_not_found_is_reported_distinctly() {
    let url = listing(1).url();
    let api = FakeApi {
        favorites: vec![FavoriteHome {
            id: 1,
            property_url: url.clone(),
            property_name: Some("Home 1".into()),
            listing_id: Some("1".into()),
            property_data: Some(serde_json::to_value(listing(1)).unwrap()),
            created_at: chrono::Utc::now().naive_utc(),
        }],
        missing_on_remove: true,
        ..Default::default()
    };
    let mut m = manager_with(api);
    m.init();
    assert_eq!(m.favorites().len(), 1);

    m.remove_from_favorites(&url);

    assert_eq!(m.favorites().len(), 1);
    assert_eq!(
        m.notification(),
        Some(&Notification::error("Home not found in favorites"))
    );
}

#[test]
fn remove_drops_cached_favorite() {
    let mut m = manager_with(FakeApi::default());
    m.add_to_favorites(&listing(1));
    m.remove_from_favorites(&listing(1).url());

    assert!(m.favorites().is_empty());
    assert!(m.favorites_html().0.contains("No favorites yet"));
}

#[test]
fn favorites_without_snapshot_still_render() {
    let url = "https://www.furnishedfinder.com/property/9";
    let api = FakeApi {
        favorites: vec![FavoriteHome {
            id: 1,
            property_url: url.into(),
            property_name: None,
            listing_id: None,
            property_data: None,
            created_at: chrono::Utc::now().naive_utc(),
        }],
        ..Default::default()
    };
    let mut m = manager_with(api);
    m.init();

    m.switch_tab(Tab::Favorites);

    let html = m.favorites_html().0.clone();
    assert!(!html.contains("No favorites yet"));
    assert!(html.contains(&format!("data-url=\"{url}\"")));
    assert!(html.contains("Remove from Favorites"));
}

#[test]
fn bounds_change_persists_and_searches() {
    let mut m = manager_with(FakeApi::default());
    let bounds = BoundingBox::from_corners(LatLng::new(37.80, -122.45), LatLng::new(37.78, -122.40));

    m.on_bounds_changed(bounds);

    let expected = Viewport {
        min: Coordinate { longitude: -122.45, latitude: 37.78 },
        max: Coordinate { longitude: -122.40, latitude: 37.80 },
    };
    assert_eq!(m.viewport(), expected);
    assert_eq!(m.store().load().unwrap(), Some(expected));
    assert_eq!(m.api().searches.borrow().last(), Some(&expected));
}

#[test]
fn stored_viewport_is_used_at_startup() {
    let store = MemoryViewportStore::default();
    let saved = Viewport {
        min: Coordinate { longitude: -1.0, latitude: 50.0 },
        max: Coordinate { longitude: 1.0, latitude: 51.0 },
    };
    store.save(&saved).unwrap();

    let m = ListingManager::new(FakeApi::default(), store);
    assert_eq!(m.viewport(), saved);
}

#[test]
fn failed_search_keeps_previous_results() {
    let api = FakeApi {
        results: RefCell::new(vec![listing(1)]),
        ..Default::default()
    };
    let mut m = manager_with(api);
    m.init();

    m.api().fail_search.set(true);
    m.search();

    assert_eq!(m.all_results().len(), 1);
    assert!(html_of(&m).contains("Error loading data: HTTP error! status: 502"));
}

#[test]
fn stale_search_result_is_dropped() {
    let mut m = manager_with(FakeApi::default());

    let older = m.begin_search();
    let newer = m.begin_search();

    assert!(m.complete_search(newer, Ok(vec![listing(2)])));
    assert!(!m.complete_search(older, Ok(vec![listing(1)])));

    assert_eq!(m.all_results(), &[listing(2)]);
}

#[test]
fn drawing_on_the_map_drives_the_search() {
    let api = FakeApi {
        results: RefCell::new(vec![listing(1), listing(2)]),
        ..Default::default()
    };
    let mut widget = MapWidget::with_size(800.0, 600.0, manager_with(api));

    let p1 = widget.view().lat_lng_to_container_point(LatLng::new(37.80, -122.45));
    let p2 = widget.view().lat_lng_to_container_point(LatLng::new(37.78, -122.40));
    widget.start_drawing();
    widget.handle_pointer(PointerEvent::Down(p1));
    widget.handle_pointer(PointerEvent::Move(p2));
    widget.handle_pointer(PointerEvent::Up(p2));

    let v = widget.listener().viewport();
    assert!((v.min.latitude - 37.78).abs() < 1e-9);
    assert!((v.max.longitude + 122.40).abs() < 1e-9);
    assert_eq!(widget.markers().len(), 2);

    // Dismissing a card drops its marker.
    widget.listener_mut().mark_as_seen(&listing(1));
    widget.sync_markers();
    assert_eq!(widget.markers().len(), 1);

    assert!(widget.click_marker(0));
    assert_eq!(widget.listener().selected_listing_id(), Some("2"));
    assert!(widget.listener().results_html().0.contains("card active"));
}
