//! Mini Auction - A small auction backend
//!
//! Auctions are created active and close themselves once their configured
//! interval has elapsed.

pub mod api;
pub mod auction;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use auction::AuctionService;
pub use config::Config;
