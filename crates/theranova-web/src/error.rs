//! API error type and its JSON rendering.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use theranova_db::DbError;
use theranova_scoring::ScoringError;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error(transparent)]
    Persistence(#[from] DbError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ApiError::Scoring(e) => match e {
                ScoringError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
                ScoringError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
                ScoringError::Unavailable(_)
                | ScoringError::Status { .. }
                | ScoringError::Deserialization(_) => StatusCode::BAD_GATEWAY,
                ScoringError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Persistence(DbError::MissingId) => StatusCode::BAD_REQUEST,
            ApiError::Persistence(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable kind for the `error` field.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidArgument(_) => "InvalidArgument",
            ApiError::Scoring(e) => match e {
                ScoringError::InvalidArgument(_) => "InvalidArgument",
                ScoringError::Unavailable(_) => "RemoteUnavailable",
                ScoringError::Timeout(_) => "RemoteTimeout",
                ScoringError::Status { .. } => "RemoteError",
                ScoringError::Deserialization(_) => "DeserializationError",
                ScoringError::Config(_) => "InternalError",
            },
            ApiError::Persistence(DbError::MissingId) => "InvalidArgument",
            ApiError::Persistence(_) => "PersistenceError",
            ApiError::Internal(_) => "InternalError",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidArgument(rejection.body_text())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        if status.is_server_error() {
            error!(status = status.as_u16(), kind = self.kind(), "{}", message);
        } else {
            warn!(status = status.as_u16(), kind = self.kind(), "{}", message);
        }

        let body = json!({ "error": self.kind(), "message": message });
        (status, Json(body)).into_response()
    }
}
