//! Auction Module
//!
//! Auction records, their store, and the service that creates auctions and
//! schedules their automatic closure.

mod entity;
mod interval;
mod policy;
mod service;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entity::{Auction, AuctionDraft, AuctionStatus, ProductCondition};
pub use interval::{
    parse_interval, IntervalResolver, AUCTION_INTERVAL_VAR, DEFAULT_AUCTION_INTERVAL,
};
pub use policy::ClosurePolicy;
pub use service::AuctionService;
pub use stats::ClosureStats;
#[cfg(test)]
pub use store::MockAuctionStore;
pub use store::{AuctionFilter, AuctionStore, InMemoryAuctionStore};
