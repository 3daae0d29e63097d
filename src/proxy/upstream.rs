use crate::proxy::ProxyError;
use reqwest::blocking::Client;
use std::time::Duration;

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

/// A request on its way to the GraphQL host, headers already scrubbed.
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    pub path: String,
    pub headers: Vec<(String, Vec<u8>)>,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub headers: Vec<(String, Vec<u8>)>,
    pub body: Vec<u8>,
}

/// Where proxied requests go. Plain header/byte pairs keep this independent of
/// which `http` version the client and the server crates are built on.
pub trait Upstream: Send + Sync {
    fn base_url(&self) -> &str;

    fn send(&self, req: UpstreamRequest) -> Result<UpstreamResponse, ProxyError>;
}

pub struct ReqwestUpstream {
    client: Client,
    base_url: String,
}

impl ReqwestUpstream {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProxyError> {
        let client = Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()
            .map_err(|e| ProxyError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

impl Upstream for ReqwestUpstream {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn send(&self, req: UpstreamRequest) -> Result<UpstreamResponse, ProxyError> {
        let url = format!("{}{}", self.base_url, req.path);

        let mut builder = self.client.post(&url);
        for (name, value) in &req.headers {
            builder = builder.header(name.as_str(), value.as_slice());
        }

        let resp = builder
            .body(req.body)
            .send()
            .map_err(|e| ProxyError::Transport(e.to_string()))?;

        let status = resp.status().as_u16();
        let headers = resp
            .headers()
            .iter()
            .map(|(name, value)| (name.as_str().to_string(), value.as_bytes().to_vec()))
            .collect();
        let body = resp
            .bytes()
            .map_err(|e| ProxyError::Body(e.to_string()))?
            .to_vec();

        log::debug!("Upstream answered {status} for {url}");

        Ok(UpstreamResponse {
            status,
            headers,
            body,
        })
    }
}
