//! REST handlers, one per contract operation.
//!
//! Each handler is a thin translation: parse inputs, call the gateway,
//! shape the response. No state is held here; the remote ledger is the
//! only source of truth.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::http::response::{ApiError, HealthResponse, IndexResponse, TxResponse};
use crate::http::server::AppState;
use crate::marketplace::types::{parse_id, AddReviewRequest, CreateListingRequest, Listing};

/// `GET /antiques` - all listings, including soft-deleted ones.
pub async fn list_antiques(
    State(state): State<AppState>,
) -> Result<Json<Vec<Listing>>, ApiError> {
    let listings = state.gateway.list_all().await?;
    Ok(Json(listings))
}

/// `POST /antiques` - list a new antique for sale.
///
/// The body extractor is taken as a `Result` so deserialization failures
/// go through [`ApiError`] like every other failure, instead of axum's
/// plain-text rejection.
pub async fn create_antique(
    State(state): State<AppState>,
    body: Result<Json<CreateListingRequest>, JsonRejection>,
) -> Result<Json<TxResponse>, ApiError> {
    let Json(req) = body?;
    let tx_hash = state.gateway.create_listing(req).await?;
    Ok(Json(TxResponse::confirmed(tx_hash)))
}

/// `POST /antiques/{id}/buy` - buy a listed antique.
pub async fn buy_antique(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TxResponse>, ApiError> {
    let item_id = parse_id(&id)?;
    let tx_hash = state.gateway.buy(item_id).await?;
    Ok(Json(TxResponse::confirmed(tx_hash)))
}

/// `DELETE /antiques/{id}` - soft-delete a listing.
pub async fn delete_antique(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TxResponse>, ApiError> {
    let item_id = parse_id(&id)?;
    let tx_hash = state.gateway.delete(item_id).await?;
    Ok(Json(TxResponse::confirmed(tx_hash)))
}

/// `POST /antiques/{id}/reviews` - attach a review to a listing.
pub async fn add_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<AddReviewRequest>, JsonRejection>,
) -> Result<Json<TxResponse>, ApiError> {
    let Json(req) = body?;
    let item_id = parse_id(&id)?;
    let tx_hash = state.gateway.add_review(item_id, req).await?;
    Ok(Json(TxResponse::confirmed(tx_hash)))
}

/// `GET /antique-index` - current listing-index value.
pub async fn antique_index(
    State(state): State<AppState>,
) -> Result<Json<IndexResponse>, ApiError> {
    let index = state.gateway.index().await?;
    Ok(Json(IndexResponse {
        index: index.to_string(),
    }))
}

/// `GET /health` - blockchain connectivity probe.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    if state.client.is_healthy().await {
        (StatusCode::OK, Json(HealthResponse { status: "ok" }))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse { status: "degraded" }),
        )
    }
}
