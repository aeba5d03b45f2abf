use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Errors surfaced by the HTTP layer
///
/// The scoring engine itself never fails; everything here is a malformed
/// request rejected before it reaches the engine.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("{0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidJson(_) => "invalid_json",
            ApiError::Validation(_) => "validation_failed",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: self.status_code().as_u16(),
        })
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::InvalidJson(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_json_response() {
        let err = ApiError::InvalidJson("expected value at line 1".to_string());

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.kind(), "invalid_json");
        assert_eq!(err.to_string(), "Invalid JSON: expected value at line 1");
    }
}
