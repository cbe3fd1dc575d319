use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::greeting::GreetingError;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Custom error type for fixture endpoints
///
/// Faults raised inside a handler end here and are reported as a generic
/// server error; the cause is logged, not sent to the client.
#[derive(Debug)]
pub enum ApiError {
    /// The greeting could not be formatted or written
    Greeting(GreetingError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::Greeting(err) => {
                tracing::error!("Greeting handler failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<GreetingError> for ApiError {
    fn from(err: GreetingError) -> Self {
        ApiError::Greeting(err)
    }
}
