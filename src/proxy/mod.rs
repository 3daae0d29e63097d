mod upstream;

pub use upstream::{ReqwestUpstream, Upstream, UpstreamRequest, UpstreamResponse};

use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, Request, ResponseBuilder};
use std::io::Read;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Transport(String),

    #[error("could not read body: {0}")]
    Body(String),
}

/// Browser headers the GraphQL host rejects requests over.
pub const STRIPPED_REQUEST_HEADERS: [&str; 8] = [
    "sec-fetch-dest",
    "sec-fetch-mode",
    "sec-fetch-site",
    "sec-ch-ua-mobile",
    "sec-ch-ua",
    "sec-ch-ua-platform",
    "origin",
    "referer",
];

const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-connection",
    "transfer-encoding",
    "te",
    "trailer",
    "upgrade",
    "content-length",
];

const CORS_RESPONSE_HEADERS: [(&str, &str); 3] = [
    ("access-control-allow-origin", "*"),
    ("access-control-allow-methods", "GET, POST, OPTIONS"),
    ("access-control-allow-headers", "Content-Type, Authorization"),
];

/// Headers to pass upstream. `host` goes too: the client sets it from the
/// target URL.
pub fn scrub_request_headers<'a>(
    headers: impl IntoIterator<Item = (&'a str, &'a [u8])>,
) -> Vec<(String, Vec<u8>)> {
    headers
        .into_iter()
        .filter(|(name, _)| {
            let name = name.to_ascii_lowercase();
            let drop = name == "host"
                || STRIPPED_REQUEST_HEADERS.contains(&name.as_str())
                || HOP_BY_HOP.contains(&name.as_str());
            if drop {
                log::debug!("Removed header from request: {name}");
            }
            !drop
        })
        .map(|(name, value)| (name.to_string(), value.to_vec()))
        .collect()
}

/// Upstream response headers minus framing and any CORS headers, which get
/// replaced with our own.
pub fn scrub_response_headers(headers: Vec<(String, Vec<u8>)>) -> Vec<(String, Vec<u8>)> {
    headers
        .into_iter()
        .filter(|(name, _)| {
            let name = name.to_ascii_lowercase();
            !HOP_BY_HOP.contains(&name.as_str()) && !name.starts_with("access-control-")
        })
        .collect()
}

/// Pass-through to the external GraphQL endpoint.
#[derive(Clone)]
pub struct GraphqlProxy {
    upstream: Arc<dyn Upstream>,
}

impl GraphqlProxy {
    pub fn new(upstream: Arc<dyn Upstream>) -> Self {
        Self { upstream }
    }

    pub fn forward(&self, req: &mut Request) -> ResultResp {
        let path = req
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| "/graphql".to_string());

        let headers = scrub_request_headers(
            req.headers()
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_bytes())),
        );

        let mut body = Vec::new();
        req.body_mut()
            .reader()
            .read_to_end(&mut body)
            .map_err(|e| ProxyError::Body(e.to_string()))?;

        log::info!(
            "Proxying GraphQL request to: {}{}",
            self.upstream.base_url(),
            path
        );

        let resp = self.upstream.send(UpstreamRequest {
            path,
            headers,
            body,
        })?;

        let mut builder = ResponseBuilder::new().status(resp.status);
        for (name, value) in scrub_response_headers(resp.headers) {
            builder = builder.header(name.as_str(), value.as_slice());
        }
        for (name, value) in CORS_RESPONSE_HEADERS {
            builder = builder.header(name, value);
        }

        builder.body(Body::from(resp.body)).map_err(|e| {
            log::error!("Could not build proxied response: {e}");
            ServerError::InternalError
        })
    }
}
