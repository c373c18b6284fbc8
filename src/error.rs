//! Error types for the key server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Key Error Enum ==
/// Unified error type for the key server.
#[derive(Error, Debug)]
pub enum KeyError {
    /// The OS entropy source could not supply random bytes
    #[error("Randomness failure: {0}")]
    RandomnessFailure(String),

    /// Presented key is missing, unknown or expired
    #[error("Unauthorized")]
    Unauthenticated,

    /// Key listing could not be encoded
    #[error("Serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),
}

// == IntoResponse Implementation ==
impl IntoResponse for KeyError {
    fn into_response(self) -> Response {
        let status = match &self {
            KeyError::Unauthenticated => StatusCode::UNAUTHORIZED,
            KeyError::RandomnessFailure(_) | KeyError::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the key server.
pub type Result<T> = std::result::Result<T, KeyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthenticated_maps_to_401() {
        let response = KeyError::Unauthenticated.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_randomness_failure_maps_to_500() {
        let response = KeyError::RandomnessFailure("no entropy".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(KeyError::Unauthenticated.to_string(), "Unauthorized");
        assert_eq!(
            KeyError::RandomnessFailure("boom".to_string()).to_string(),
            "Randomness failure: boom"
        );
    }
}
