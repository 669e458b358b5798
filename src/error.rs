//! Error types for the auction server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

// == Store Error Enum ==
/// Failures surfaced by an auction store.
///
/// Callers of the closure path treat every variant as an opaque failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store cannot be reached
    #[error("auction store is unavailable")]
    Unavailable,

    /// An auction with the same id is already recorded
    #[error("auction {0} already exists")]
    Duplicate(Uuid),

    /// No auction with this id is recorded
    #[error("auction {0} not found")]
    NotFound(Uuid),
}

// == Auction Error Enum ==
/// Unified error type for the auction server.
#[derive(Error, Debug)]
pub enum AuctionError {
    /// Auction not found
    #[error("Auction not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The store rejected or could not serve the operation
    #[error("Store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for AuctionError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => AuctionError::NotFound(id.to_string()),
            other => AuctionError::Store(other),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AuctionError {
    fn into_response(self) -> Response {
        let status = match &self {
            AuctionError::NotFound(_) => StatusCode::NOT_FOUND,
            AuctionError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AuctionError::Store(StoreError::Unavailable) => StatusCode::SERVICE_UNAVAILABLE,
            AuctionError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the auction server.
pub type Result<T> = std::result::Result<T, AuctionError>;
