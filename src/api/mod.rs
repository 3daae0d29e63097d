pub mod homes;

use crate::errors::ServerError;
use astra::Request;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::io::Read;

/// Read the whole request body and parse it as JSON.
pub fn read_json<T: DeserializeOwned>(req: &mut Request) -> Result<T, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut body)
        .map_err(|e| ServerError::InvalidJson(format!("could not read body: {e}")))?;

    serde_json::from_slice(&body).map_err(|e| ServerError::InvalidJson(e.to_string()))
}

/// Decoded query string parameters. Later duplicates win.
pub fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// `Some(value)` only for a present, non-empty string.
pub fn required(value: Option<String>, message: &str) -> Result<String, ServerError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ServerError::BadRequest(message.to_string()))
}
