use crate::errors::ServerError;
use crate::responses::json_response;
use astra::{Body, Response};
use serde::Serialize;

/// JSON error envelope.
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// Convert a ServerError into a JSON response, logging the details that the
/// client doesn't get to see.
pub fn error_to_response(err: ServerError) -> Response {
    let status = err.status();
    let body = match &err {
        ServerError::NotFound(msg) | ServerError::BadRequest(msg) => ErrorBody {
            error: msg.as_str(),
            message: None,
        },
        ServerError::InvalidJson(detail) => {
            log::warn!("Error parsing request: {detail}");
            ErrorBody {
                error: "Invalid JSON",
                message: None,
            }
        }
        ServerError::DbError(detail) => {
            log::error!("Database error: {detail}");
            ErrorBody {
                error: "Database error",
                message: None,
            }
        }
        ServerError::Proxy(e) => {
            log::error!("Proxy error: {e}");
            ErrorBody {
                error: "Proxy error",
                message: Some(e.to_string()),
            }
        }
        ServerError::InternalError => {
            log::error!("Internal server error");
            ErrorBody {
                error: "Internal Server Error",
                message: None,
            }
        }
    };

    json_response(status, &body)
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
