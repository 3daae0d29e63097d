// src/tests/router_tests/favorites_tests.rs

use crate::tests::utils::{body_json, count_rows, request, send, test_app};
use http::Method;
use serde_json::json;

const URL: &str = "https://www.furnishedfinder.com/property/77";

fn favorite_body(rent: i64) -> String {
    json!({
        "property_url": URL,
        "property_name": "Mission Flat",
        "listing_id": "77",
        "property_data": {"listingId": "77", "name": "Mission Flat", "rentAmount": {"amount": rent}}
    })
    .to_string()
}

#[test]
fn refavoriting_replaces_the_snapshot() {
    let t = test_app();

    let mut first = send(&t.app, request(Method::POST, "/api/homes/favorites", Some(&favorite_body(3200))));
    assert_eq!(first.status(), 201);
    assert_eq!(body_json(&mut first)["message"], "Home added to favorites");

    let second = send(&t.app, request(Method::POST, "/api/homes/favorites", Some(&favorite_body(3800))));
    assert_eq!(second.status(), 201);
    assert_eq!(count_rows(&t.app, "favorite_homes"), 1);

    let mut list = send(&t.app, request(Method::GET, "/api/homes/favorites", None));
    assert_eq!(list.status(), 200);
    let json = body_json(&mut list);
    let favorites = json["favorites"].as_array().unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["property_url"], URL);
    assert_eq!(favorites[0]["listing_id"], "77");
    assert_eq!(favorites[0]["property_data"]["rentAmount"]["amount"], 3800);
}

#[test]
fn favorite_without_snapshot_lists_null() {
    let t = test_app();
    let body = json!({"property_url": URL}).to_string();
    send(&t.app, request(Method::POST, "/api/homes/favorites", Some(&body)));

    let mut list = send(&t.app, request(Method::GET, "/api/homes/favorites", None));
    let json = body_json(&mut list);
    assert!(json["favorites"][0]["property_data"].is_null());
}

#[test]
fn removing_existing_favorite() {
    let t = test_app();
    send(&t.app, request(Method::POST, "/api/homes/favorites", Some(&favorite_body(3200))));

    let body = json!({"property_url": URL}).to_string();
    let mut resp = send(&t.app, request(Method::DELETE, "/api/homes/favorites", Some(&body)));
    assert_eq!(resp.status(), 200);
    assert_eq!(body_json(&mut resp), json!({"message": "Home removed from favorites"}));
    assert_eq!(count_rows(&t.app, "favorite_homes"), 0);
}

#[test]
fn removing_unknown_favorite_is_404() {
    let t = test_app();
    send(&t.app, request(Method::POST, "/api/homes/favorites", Some(&favorite_body(3200))));

    let body = json!({"property_url": "https://www.furnishedfinder.com/property/1"}).to_string();
    let mut resp = send(&t.app, request(Method::DELETE, "/api/homes/favorites", Some(&body)));
    assert_eq!(resp.status(), 404);
    assert_eq!(body_json(&mut resp), json!({"error": "Home not found in favorites"}));
    assert_eq!(count_rows(&t.app, "favorite_homes"), 1);
}

#[test]
fn remove_without_url_is_400() {
    let t = test_app();
    let resp = send(&t.app, request(Method::DELETE, "/api/homes/favorites", Some("{}")));
    assert_eq!(resp.status(), 400);
}
