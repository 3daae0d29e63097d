pub mod errors;
pub mod json;
pub mod text;

use crate::errors::ServerError;
use astra::Response;

pub type ResultResp = Result<Response, ServerError>;

pub use errors::error_to_response;
pub use json::{json_response, preflight_response};
pub use text::{bytes_response, text_response};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";
