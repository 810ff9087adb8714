use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, message) = match &self {
            ProductError::InvalidDate => (
                StatusCode::BAD_REQUEST,
                "Mismatch data type or malformed request",
            ),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "Product not found"),
            ProductError::Repository(_) => (StatusCode::BAD_GATEWAY, "Server error"),
        };

        (status, Json(ErrorResponse::new(message)))
    }
}
