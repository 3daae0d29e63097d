use crate::errors::ServerError;
use crate::responses::{ResultResp, ALLOW_HEADERS, ALLOW_METHODS, ALLOW_ORIGIN};
use astra::{Body, ResponseBuilder};
use serde::Serialize;

fn cors(builder: ResponseBuilder) -> ResponseBuilder {
    builder
        .header("Access-Control-Allow-Origin", ALLOW_ORIGIN)
        .header("Access-Control-Allow-Methods", ALLOW_METHODS)
        .header("Access-Control-Allow-Headers", ALLOW_HEADERS)
}

/// Serialize `data` as the JSON body, with the open CORS headers every API
/// response carries.
pub fn json_response<T: Serialize>(status: u16, data: &T) -> ResultResp {
    let body = serde_json::to_vec(data).map_err(|e| {
        log::error!("Failed to serialize response: {e}");
        ServerError::InternalError
    })?;

    cors(ResponseBuilder::new().status(status))
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}

/// Answer to a CORS preflight on any path.
pub fn preflight_response() -> ResultResp {
    cors(ResponseBuilder::new().status(200))
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
