//! HTTP mapping for prediction failures.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::classifier::PredictError;

impl IntoResponse for PredictError {
    fn into_response(self) -> Response {
        let status = match &self {
            PredictError::MissingInput | PredictError::InvalidShape { .. } => {
                StatusCode::BAD_REQUEST
            }
            PredictError::ModelUnavailable | PredictError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = self.to_string();
        if status.is_server_error() {
            log::error!("Prediction failed: {}", message);
        } else {
            log::warn!("Rejected request: {}", message);
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, PredictError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (PredictError::ModelUnavailable, StatusCode::INTERNAL_SERVER_ERROR),
            (PredictError::MissingInput, StatusCode::BAD_REQUEST),
            (
                PredictError::InvalidShape { expected: 63 },
                StatusCode::BAD_REQUEST,
            ),
            (
                PredictError::Internal("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_shape_error_names_expected_size() {
        let message = PredictError::InvalidShape { expected: 63 }.to_string();
        assert_eq!(message, "Invalid input shape, expected 63 values");
    }
}
