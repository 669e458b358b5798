//! API Handlers
//!
//! HTTP request handlers for each auction server endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use uuid::Uuid;

use crate::api::RequestContext;
use crate::auction::{Auction, AuctionService, InMemoryAuctionStore};
use crate::error::{AuctionError, Result};
use crate::models::{
    AuctionListResponse, CreateAuctionRequest, CreateAuctionResponse, HealthResponse,
    ListAuctionsQuery, StatsResponse,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Auction creation and lookup
    pub service: AuctionService,
}

impl AppState {
    /// Creates a new AppState with the given service.
    pub fn new(service: AuctionService) -> Self {
        Self { service }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Backs the service with an in-memory store.
    pub fn from_config(config: &crate::config::Config) -> Self {
        let store = Arc::new(InMemoryAuctionStore::new());
        Self::new(AuctionService::from_config(store, config))
    }
}

/// Handler for POST /auction
///
/// Records the auction and schedules its closure. Returns as soon as the
/// record is stored.
pub async fn create_auction_handler(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Json(req): Json<CreateAuctionRequest>,
) -> Result<(StatusCode, Json<CreateAuctionResponse>)> {
    let draft = req.into_draft().map_err(AuctionError::InvalidRequest)?;

    let auction = state.service.create(ctx.token(), draft).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateAuctionResponse::new(auction.id)),
    ))
}

/// Handler for GET /auction/:auction_id
pub async fn get_auction_handler(
    State(state): State<AppState>,
    Path(auction_id): Path<String>,
) -> Result<Json<Auction>> {
    let auction_id = Uuid::parse_str(&auction_id)
        .map_err(|_| AuctionError::InvalidRequest(format!("invalid auction id '{}'", auction_id)))?;

    let auction = state.service.find_by_id(auction_id).await?;
    Ok(Json(auction))
}

/// Handler for GET /auction
///
/// Supports `status`, `category` and `product_name` query filters.
pub async fn list_auctions_handler(
    State(state): State<AppState>,
    Query(query): Query<ListAuctionsQuery>,
) -> Result<Json<AuctionListResponse>> {
    let filter = query.into_filter().map_err(AuctionError::InvalidRequest)?;

    let auctions = state.service.find_all(&filter).await?;
    Ok(Json(AuctionListResponse::new(auctions)))
}

/// Handler for GET /stats
///
/// Returns closure task statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.service.stats().await;
    Json(StatsResponse::new(&stats, state.service.in_flight()))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
