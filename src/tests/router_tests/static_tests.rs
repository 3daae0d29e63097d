// src/tests/router_tests/static_tests.rs

use crate::tests::utils::{body_bytes, request, send, test_app};
use http::Method;

#[test]
fn root_serves_index_document() {
    let t = test_app();
    std::fs::write(t.static_dir.path().join("index.html"), "<div id=\"map\"></div>").unwrap();

    let mut resp = send(&t.app, request(Method::GET, "/", None));
    assert_eq!(resp.status(), 200);
    assert_eq!(body_bytes(&mut resp), b"<div id=\"map\"></div>".to_vec());
}

#[test]
fn unknown_path_is_plain_404() {
    let t = test_app();
    let mut resp = send(&t.app, request(Method::GET, "/nowhere.js", None));
    assert_eq!(resp.status(), 404);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/plain; charset=utf-8"
    );
    assert_eq!(body_bytes(&mut resp), b"Not found".to_vec());
}

#[test]
fn preflight_allows_any_origin() {
    let t = test_app();
    let resp = send(&t.app, request(Method::OPTIONS, "/api/homes/favorites", None));
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get("Access-Control-Allow-Origin").unwrap(), "*");
    assert_eq!(
        resp.headers().get("Access-Control-Allow-Methods").unwrap(),
        "GET, POST, PUT, DELETE, OPTIONS"
    );
}
