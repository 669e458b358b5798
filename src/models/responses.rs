//! Response DTOs for the auction server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use uuid::Uuid;

use crate::auction::{Auction, ClosureStats};

/// Response body for auction creation (POST /auction)
#[derive(Debug, Clone, Serialize)]
pub struct CreateAuctionResponse {
    /// Success message
    pub message: String,
    /// Id of the created auction
    pub id: Uuid,
}

impl CreateAuctionResponse {
    /// Creates a new CreateAuctionResponse
    pub fn new(id: Uuid) -> Self {
        Self {
            message: format!("Auction '{}' created successfully", id),
            id,
        }
    }
}

/// Response body for listing auctions (GET /auction)
#[derive(Debug, Clone, Serialize)]
pub struct AuctionListResponse {
    pub count: usize,
    pub auctions: Vec<Auction>,
}

impl AuctionListResponse {
    pub fn new(auctions: Vec<Auction>) -> Self {
        Self {
            count: auctions.len(),
            auctions,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Closure tasks spawned
    pub scheduled: u64,
    /// Auctions closed by their task
    pub completed: u64,
    /// Tasks that found their auction already closed
    pub already_closed: u64,
    /// Tasks cancelled before their interval elapsed
    pub cancelled: u64,
    /// Tasks whose closing write failed
    pub failed: u64,
    /// Scheduled tasks without an outcome yet
    pub pending: u64,
    /// Tasks currently running on the tracker
    pub in_flight: usize,
}

impl StatsResponse {
    /// Creates a new StatsResponse from closure statistics
    pub fn new(stats: &ClosureStats, in_flight: usize) -> Self {
        Self {
            scheduled: stats.scheduled,
            completed: stats.completed,
            already_closed: stats.already_closed,
            cancelled: stats.cancelled,
            failed: stats.failed,
            pending: stats.pending(),
            in_flight,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
