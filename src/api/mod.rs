//! API Module
//!
//! HTTP handlers and routing for the auction server REST API.
//!
//! # Endpoints
//! - `POST /auction` - Create an auction and schedule its closure
//! - `GET /auction` - List auctions, optionally filtered
//! - `GET /auction/:auction_id` - Fetch one auction
//! - `GET /stats` - Closure task statistics
//! - `GET /health` - Health check endpoint

pub mod context;
pub mod handlers;
pub mod routes;

pub use context::RequestContext;
pub use handlers::*;
pub use routes::create_router;
