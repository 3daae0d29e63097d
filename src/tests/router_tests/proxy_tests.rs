// src/tests/router_tests/proxy_tests.rs

use crate::tests::utils::{body_json, request, send, test_app};
use http::Method;

#[test]
fn graphql_post_is_forwarded_without_browser_headers() {
    let t = test_app();
    let mut req = request(Method::POST, "/graphql", Some(r#"{"operationName":"Search"}"#));
    req.headers_mut()
        .insert("sec-fetch-mode", "navigate".parse().unwrap());
    req.headers_mut()
        .insert("referer", "http://127.0.0.1:8000/".parse().unwrap());
    req.headers_mut()
        .insert("content-type", "application/json".parse().unwrap());

    let mut resp = send(&t.app, req);
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get("access-control-allow-origin").unwrap(), "*");
    assert!(body_json(&mut resp)["data"]["search"]["results"].is_array());

    let requests = t.upstream.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let names: Vec<&str> = requests[0].headers.iter().map(|(n, _)| n.as_str()).collect();
    assert!(!names.contains(&"sec-fetch-mode"));
    assert!(!names.contains(&"referer"));
    assert!(names.contains(&"content-type"));
}

#[test]
fn graphql_get_is_not_proxied() {
    let t = test_app();
    let resp = send(&t.app, request(Method::GET, "/graphql", None));
    assert_eq!(resp.status(), 404);
    assert!(t.upstream.requests.lock().unwrap().is_empty());
}
