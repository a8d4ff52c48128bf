//! Response shapes and error mapping.
//!
//! # Responsibilities
//! - Success envelopes for mutations and reads
//! - Collapse every operation failure into one caller-visible shape:
//!   HTTP 500 with `{"error": message}`

use alloy::primitives::TxHash;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::blockchain::types::BlockchainError;

/// Error envelope returned for any failed operation.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// The single caller-visible failure. Network failure, estimation failure
/// and contract reverts all surface identically.
#[derive(Debug)]
pub struct ApiError(pub String);

impl From<BlockchainError> for ApiError {
    fn from(err: BlockchainError) -> Self {
        tracing::error!(error = %err, "Gateway operation failed");
        Self(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    // Body-deserialization failures get the same envelope as remote-call
    // failures; callers see exactly one failure shape.
    fn from(err: JsonRejection) -> Self {
        tracing::error!(error = %err, "Request body rejected");
        Self(format!("Invalid request body: {}", err.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody { error: self.0 }),
        )
            .into_response()
    }
}

/// Success envelope for mutating endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TxResponse {
    pub success: bool,
    pub transaction_hash: String,
}

impl TxResponse {
    pub fn confirmed(tx_hash: TxHash) -> Self {
        Self {
            success: true,
            transaction_hash: tx_hash.to_string(),
        }
    }
}

/// Response for the listing-index read.
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub index: String,
}

/// Response for the health probe.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
