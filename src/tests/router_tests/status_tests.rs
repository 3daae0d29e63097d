// src/tests/router_tests/status_tests.rs

use crate::tests::utils::{body_json, request, send, test_app};
use http::Method;
use serde_json::json;

#[test]
fn status_reports_both_tables() {
    let t = test_app();
    let url = "https://www.furnishedfinder.com/property/5";
    let body = json!({"property_url": url}).to_string();
    send(&t.app, request(Method::POST, "/api/homes/seen", Some(&body)));

    let uri = "/api/homes/status?property_url=https%3A%2F%2Fwww.furnishedfinder.com%2Fproperty%2F5";
    let mut resp = send(&t.app, request(Method::GET, uri, None));
    assert_eq!(resp.status(), 200);
    assert_eq!(
        body_json(&mut resp),
        json!({"property_url": url, "is_seen": true, "is_favorite": false})
    );

    send(&t.app, request(Method::POST, "/api/homes/favorites", Some(&body)));
    let mut resp = send(&t.app, request(Method::GET, uri, None));
    assert_eq!(body_json(&mut resp)["is_favorite"], true);
}

#[test]
fn status_needs_a_url() {
    let t = test_app();
    let mut resp = send(&t.app, request(Method::GET, "/api/homes/status", None));
    assert_eq!(resp.status(), 400);
    assert_eq!(
        body_json(&mut resp),
        json!({"error": "property_url parameter is required"})
    );
}
