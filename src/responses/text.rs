use crate::errors::ServerError;
use crate::responses::{ResultResp, ALLOW_ORIGIN};
use astra::{Body, ResponseBuilder};
use mime::Mime;

pub fn text_response(status: u16, text: impl Into<String>) -> ResultResp {
    bytes_response(status, &mime::TEXT_PLAIN_UTF_8, text.into().into_bytes())
}

pub fn bytes_response(status: u16, content_type: &Mime, bytes: Vec<u8>) -> ResultResp {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", content_type.as_ref())
        .header("Access-Control-Allow-Origin", ALLOW_ORIGIN)
        .body(Body::from(bytes))
        .map_err(|_| ServerError::InternalError)
}
