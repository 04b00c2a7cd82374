use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::constants::{ERROR_RETRIEVE_FAILED, ERROR_SUBMISSION_FAILED, ERROR_UNAUTHORIZED};

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Storage error: {0:#}")]
    Storage(anyhow::Error),

    #[error("Retrieval error: {0:#}")]
    Retrieval(anyhow::Error),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            RelayError::Validation(message) => (StatusCode::BAD_REQUEST, json!({ "error": message })),
            RelayError::MalformedPayload(details) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Malformed payload", "details": details }),
            ),
            RelayError::Unauthorized => (StatusCode::UNAUTHORIZED, json!({ "error": ERROR_UNAUTHORIZED })),
            RelayError::Storage(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": ERROR_SUBMISSION_FAILED, "details": format!("{:#}", e) }),
            ),
            RelayError::Retrieval(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": ERROR_RETRIEVE_FAILED, "details": format!("{:#}", e) }),
            ),
        };

        if status.is_server_error() {
            log::error!("Relay: {}", self);
        } else {
            log::info!("Relay: rejected request: {}", self);
        }

        (status, Json(body)).into_response()
    }
}
