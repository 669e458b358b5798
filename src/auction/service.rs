//! Auction Creation Service
//!
//! Records new auctions and schedules their automatic closure.

use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{error, info};
use uuid::Uuid;

use crate::auction::{
    Auction, AuctionDraft, AuctionFilter, AuctionStore, ClosurePolicy, ClosureStats,
    IntervalResolver,
};
use crate::config::Config;
use crate::error::Result;
use crate::tasks::{spawn_closure_task, ClosureOutcome};

/// Orchestrates auction creation and closure scheduling.
///
/// Cloning is cheap; clones share the store, the task tracker and the
/// background token.
#[derive(Clone)]
pub struct AuctionService {
    store: Arc<dyn AuctionStore>,
    interval: IntervalResolver,
    policy: ClosurePolicy,
    background: CancellationToken,
    tracker: TaskTracker,
    stats: Arc<RwLock<ClosureStats>>,
}

impl AuctionService {
    // == Constructor ==
    pub fn new(store: Arc<dyn AuctionStore>, interval: IntervalResolver, policy: ClosurePolicy) -> Self {
        Self {
            store,
            interval,
            policy,
            background: CancellationToken::new(),
            tracker: TaskTracker::new(),
            stats: Arc::new(RwLock::new(ClosureStats::new())),
        }
    }

    /// Builds the service with the mode-derived policy. `APP_MODE` is not
    /// consulted again after this.
    pub fn from_config(store: Arc<dyn AuctionStore>, config: &Config) -> Self {
        Self::new(
            store,
            config.auction_interval.clone(),
            config.app_mode.closure_policy(),
        )
    }

    pub fn policy(&self) -> ClosurePolicy {
        self.policy
    }

    pub fn interval(&self) -> &IntervalResolver {
        &self.interval
    }

    // == Create ==
    /// Inserts the auction and schedules its closure without waiting for it.
    ///
    /// If the insert fails the error is returned and nothing is scheduled.
    pub async fn create(&self, request: &CancellationToken, draft: AuctionDraft) -> Result<Auction> {
        self.create_tracked(request, draft)
            .await
            .map(|(auction, _handle)| auction)
    }

    /// Same as [`create`](Self::create), also handing back the closure task.
    pub async fn create_tracked(
        &self,
        request: &CancellationToken,
        draft: AuctionDraft,
    ) -> Result<(Auction, JoinHandle<ClosureOutcome>)> {
        let auction = Auction::from_draft(draft);

        if let Err(e) = self.store.insert(&auction).await {
            error!(auction_id = %auction.id, error = %e, "Error trying to insert auction");
            return Err(e.into());
        }

        let interval = self.interval.resolve();
        let governing = self.policy.governing_context(request, &self.background);

        self.stats.write().await.record_scheduled();

        let handle = spawn_closure_task(
            &self.tracker,
            governing,
            self.store.clone(),
            auction.id,
            interval,
            self.stats.clone(),
        );

        info!(
            auction_id = %auction.id,
            ?interval,
            closes_at = %auction.closes_at(interval),
            policy = ?self.policy,
            "Auction created, closure scheduled"
        );

        Ok((auction, handle))
    }

    // == Queries ==
    pub async fn find_by_id(&self, auction_id: Uuid) -> Result<Auction> {
        Ok(self.store.find_by_id(auction_id).await?)
    }

    pub async fn find_all(&self, filter: &AuctionFilter) -> Result<Vec<Auction>> {
        Ok(self.store.find_all(filter).await?)
    }

    // == Stats ==
    pub async fn stats(&self) -> ClosureStats {
        self.stats.read().await.clone()
    }

    /// Closure tasks currently running.
    pub fn in_flight(&self) -> usize {
        self.tracker.len()
    }

    // == Shutdown ==
    /// Cancels detached closures and waits for every tracked task to exit.
    ///
    /// Auctions whose closure had not fired stay active. Request-scoped
    /// closures follow the caller's token, not the background one: if that
    /// token is never cancelled this waits until their intervals elapse. The
    /// HTTP middleware always cancels it when the response is produced.
    pub async fn shutdown(&self) {
        self.background.cancel();
        self.tracker.close();
        self.tracker.wait().await;
        info!("Closure tasks stopped");
    }
}
