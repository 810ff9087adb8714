use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error envelope returned by every endpoint: `{"message": "..."}`.
/// Messages are generic and never echo underlying store error text.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
