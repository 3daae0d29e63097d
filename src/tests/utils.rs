use crate::app::App;
use crate::db::{init_db, Database};
use crate::proxy::{ProxyError, Upstream, UpstreamRequest, UpstreamResponse};
use crate::responses::error_to_response;
use crate::router::handle;
use astra::{Body, Request, Response};
use http::Method;
use serde_json::Value;
use std::io::Read;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Upstream that answers every search with an empty result list.
pub struct StubUpstream {
    pub requests: Mutex<Vec<UpstreamRequest>>,
}

impl Upstream for StubUpstream {
    fn base_url(&self) -> &str {
        "https://graphql.test"
    }

    fn send(&self, req: UpstreamRequest) -> Result<UpstreamResponse, ProxyError> {
        self.requests.lock().unwrap().push(req);
        Ok(UpstreamResponse {
            status: 200,
            headers: vec![("content-type".into(), b"application/json".to_vec())],
            body: br#"{"data":{"search":{"results":[]}}}"#.to_vec(),
        })
    }
}

pub struct TestApp {
    pub app: App,
    pub upstream: Arc<StubUpstream>,
    // Held so the static root outlives the test.
    pub static_dir: TempDir,
}

/// Fresh in-memory database, stub upstream and an empty static root.
pub fn test_app() -> TestApp {
    let db = Database::open_in_memory()
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    let upstream = Arc::new(StubUpstream {
        requests: Mutex::new(Vec::new()),
    });
    let static_dir = tempfile::tempdir().unwrap();
    let app = App::new(db, upstream.clone(), static_dir.path());

    TestApp {
        app,
        upstream,
        static_dir,
    }
}

pub fn request(method: Method, uri: &str, body: Option<&str>) -> Request {
    let body = match body {
        Some(b) => Body::from(b.to_string()),
        None => Body::empty(),
    };
    let mut req = Request::new(body);
    *req.method_mut() = method;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

/// Route a request the way the server closure in main does.
pub fn send(app: &App, req: Request) -> Response {
    match handle(req, app) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    }
}

pub fn body_bytes(resp: &mut Response) -> Vec<u8> {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    bytes
}

pub fn body_json(resp: &mut Response) -> Value {
    serde_json::from_slice(&body_bytes(resp)).unwrap()
}

pub fn count_rows(app: &App, table: &str) -> i64 {
    app.db
        .with_conn(|conn| {
            conn.query_row(&format!("SELECT count(*) FROM {table}"), [], |r| r.get(0))
                .map_err(|e| crate::errors::ServerError::DbError(e.to_string()))
        })
        .unwrap()
}
