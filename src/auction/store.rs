//! Auction Store Module
//!
//! The durable record of auctions behind an async trait, plus an in-memory
//! implementation used by the server binary and tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::auction::{Auction, AuctionStatus};
use crate::error::StoreError;

// == Auction Filter ==
/// Optional criteria for listing auctions. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuctionFilter {
    pub status: Option<AuctionStatus>,
    pub category: Option<String>,
    /// Case-insensitive substring of the product name
    pub product_name: Option<String>,
}

impl AuctionFilter {
    pub fn matches(&self, auction: &Auction) -> bool {
        if let Some(status) = self.status {
            if auction.status != status {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &auction.category != category {
                return false;
            }
        }
        if let Some(name) = &self.product_name {
            if !auction
                .product_name
                .to_lowercase()
                .contains(&name.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

// == Auction Store Trait ==
/// Persistence contract consumed by the creation service and closure tasks.
///
/// Implementations own their concurrency discipline: a single
/// `update_status_if_active` must be atomic with respect to the status field.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AuctionStore: Send + Sync + 'static {
    async fn insert(&self, auction: &Auction) -> Result<(), StoreError>;

    /// Sets `new_status` only if the auction is currently `Active`.
    ///
    /// Returns `Ok(true)` when the write happened and `Ok(false)` when the
    /// auction was no longer active. `Active` to `Active` is not a transition
    /// and is never written.
    async fn update_status_if_active(
        &self,
        auction_id: Uuid,
        new_status: AuctionStatus,
    ) -> Result<bool, StoreError>;

    async fn find_by_id(&self, auction_id: Uuid) -> Result<Auction, StoreError>;

    async fn find_all(&self, filter: &AuctionFilter) -> Result<Vec<Auction>, StoreError>;
}

// == In-Memory Store ==
/// HashMap-backed store with a connectivity switch for simulating outages.
#[derive(Debug)]
pub struct InMemoryAuctionStore {
    auctions: RwLock<HashMap<Uuid, Auction>>,
    connected: AtomicBool,
}

impl InMemoryAuctionStore {
    pub fn new() -> Self {
        Self {
            auctions: RwLock::new(HashMap::new()),
            connected: AtomicBool::new(true),
        }
    }

    /// Makes every following call fail with [`StoreError::Unavailable`].
    pub fn disconnect(&self) {
        self.connected.store(false, Ordering::SeqCst);
    }

    pub fn reconnect(&self) {
        self.connected.store(true, Ordering::SeqCst);
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    pub async fn len(&self) -> usize {
        self.auctions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.auctions.read().await.is_empty()
    }

    fn ensure_connected(&self) -> Result<(), StoreError> {
        if self.is_connected() {
            Ok(())
        } else {
            Err(StoreError::Unavailable)
        }
    }
}

impl Default for InMemoryAuctionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuctionStore for InMemoryAuctionStore {
    async fn insert(&self, auction: &Auction) -> Result<(), StoreError> {
        self.ensure_connected()?;

        let mut auctions = self.auctions.write().await;
        if auctions.contains_key(&auction.id) {
            return Err(StoreError::Duplicate(auction.id));
        }
        auctions.insert(auction.id, auction.clone());
        Ok(())
    }

    async fn update_status_if_active(
        &self,
        auction_id: Uuid,
        new_status: AuctionStatus,
    ) -> Result<bool, StoreError> {
        self.ensure_connected()?;

        // Check and write under one guard
        let mut auctions = self.auctions.write().await;
        let auction = auctions
            .get_mut(&auction_id)
            .ok_or(StoreError::NotFound(auction_id))?;

        if auction.status != AuctionStatus::Active || new_status == AuctionStatus::Active {
            return Ok(false);
        }
        auction.status = new_status;
        Ok(true)
    }

    async fn find_by_id(&self, auction_id: Uuid) -> Result<Auction, StoreError> {
        self.ensure_connected()?;

        self.auctions
            .read()
            .await
            .get(&auction_id)
            .cloned()
            .ok_or(StoreError::NotFound(auction_id))
    }

    async fn find_all(&self, filter: &AuctionFilter) -> Result<Vec<Auction>, StoreError> {
        self.ensure_connected()?;

        let mut found: Vec<Auction> = self
            .auctions
            .read()
            .await
            .values()
            .filter(|auction| filter.matches(auction))
            .cloned()
            .collect();
        found.sort_by_key(|auction| auction.created_at);
        Ok(found)
    }
}
