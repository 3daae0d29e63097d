// errors.rs
use crate::proxy::ProxyError;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, request validation) or downstream layers (DB, upstream API).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Database Error: {0}")]
    DbError(String),

    #[error("Proxy Error: {0}")]
    Proxy(#[from] ProxyError),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound(_) => 404,
            ServerError::BadRequest(_) | ServerError::InvalidJson(_) => 400,
            ServerError::DbError(_) | ServerError::Proxy(_) | ServerError::InternalError => 500,
        }
    }
}
