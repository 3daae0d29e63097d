// src/tests/router_tests/seen_tests.rs

use crate::tests::utils::{body_json, count_rows, request, send, test_app};
use http::Method;
use serde_json::json;

#[test]
fn marking_twice_keeps_one_row() {
    let t = test_app();
    let body = r#"{"property_url":"https://www.furnishedfinder.com/property/1","property_name":"Loft","listing_id":1}"#;

    let mut first = send(&t.app, request(Method::POST, "/api/homes/seen", Some(body)));
    assert_eq!(first.status(), 201);
    let first_json = body_json(&mut first);
    assert_eq!(first_json["message"], "Home marked as seen");
    assert!(first_json["id"].is_i64());

    let mut second = send(&t.app, request(Method::POST, "/api/homes/seen", Some(body)));
    assert_eq!(second.status(), 200);
    assert_eq!(
        body_json(&mut second),
        json!({"message": "Home was already marked as seen"})
    );

    assert_eq!(count_rows(&t.app, "seen_homes"), 1);
}

#[test]
fn list_seen_returns_rows_newest_first() {
    let t = test_app();
    for url in ["a", "b"] {
        let body = format!(r#"{{"property_url":"{url}"}}"#);
        send(&t.app, request(Method::POST, "/api/homes/seen", Some(&body)));
    }

    let mut resp = send(&t.app, request(Method::GET, "/api/homes/seen", None));
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get("Access-Control-Allow-Origin").unwrap(), "*");

    let json = body_json(&mut resp);
    let rows = json["seen_homes"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["property_url"], "b");
    assert_eq!(rows[1]["property_url"], "a");
    assert!(rows[0]["property_name"].is_null());
}

#[test]
fn missing_url_is_rejected() {
    let t = test_app();

    for body in [r#"{"property_name":"Loft"}"#, r#"{"property_url":""}"#] {
        let mut resp = send(&t.app, request(Method::POST, "/api/homes/seen", Some(body)));
        assert_eq!(resp.status(), 400);
        assert_eq!(body_json(&mut resp), json!({"error": "property_url is required"}));
    }
    assert_eq!(count_rows(&t.app, "seen_homes"), 0);
}

#[test]
fn malformed_json_is_rejected() {
    let t = test_app();
    let mut resp = send(&t.app, request(Method::POST, "/api/homes/seen", Some("{not json")));
    assert_eq!(resp.status(), 400);
    assert_eq!(body_json(&mut resp), json!({"error": "Invalid JSON"}));
}
