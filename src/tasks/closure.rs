//! Auction Closure Task
//!
//! One background task per created auction. It waits for the auction's
//! interval to elapse and then moves the auction from active to completed,
//! unless its governing context is cancelled first.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::auction::{AuctionStatus, AuctionStore, ClosureStats};

/// How a closure task ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosureOutcome {
    /// The auction was moved to completed
    Completed,
    /// The timer fired but the auction was no longer active
    AlreadyClosed,
    /// The governing context was cancelled first; the store was not touched
    Cancelled,
    /// The closing write failed; the auction stays active
    Failed,
}

/// Races the interval against `governing` and performs at most one write.
///
/// Cancellation wins ties, so a context that is already cancelled never
/// reaches the store. Once the write has started it runs to completion and is
/// not bounded by `governing`. Write failures are logged and swallowed.
pub async fn run_closure(
    governing: CancellationToken,
    store: Arc<dyn AuctionStore>,
    auction_id: Uuid,
    interval: Duration,
) -> ClosureOutcome {
    debug!(%auction_id, ?interval, "Closure task waiting");

    tokio::select! {
        biased;
        _ = governing.cancelled() => {
            debug!(%auction_id, "Closure cancelled before interval elapsed, auction stays active");
            return ClosureOutcome::Cancelled;
        }
        _ = tokio::time::sleep(interval) => {}
    }

    match store
        .update_status_if_active(auction_id, AuctionStatus::Completed)
        .await
    {
        Ok(true) => {
            info!(%auction_id, "Auction closed");
            ClosureOutcome::Completed
        }
        Ok(false) => {
            warn!(%auction_id, "Auction was no longer active at closing time");
            ClosureOutcome::AlreadyClosed
        }
        Err(e) => {
            error!(%auction_id, error = %e, "Error trying to close auction");
            ClosureOutcome::Failed
        }
    }
}

/// Spawns [`run_closure`] on `tracker` and returns immediately.
///
/// The outcome is recorded in `stats` when the task ends. Nobody is required
/// to await the returned handle; it exists for callers that want to observe
/// the outcome.
///
/// # Example
/// ```ignore
/// let tracker = TaskTracker::new();
/// let handle = spawn_closure_task(&tracker, token, store, auction.id, interval, stats);
/// // Later, during shutdown:
/// tracker.close();
/// tracker.wait().await;
/// ```
pub fn spawn_closure_task(
    tracker: &TaskTracker,
    governing: CancellationToken,
    store: Arc<dyn AuctionStore>,
    auction_id: Uuid,
    interval: Duration,
    stats: Arc<RwLock<ClosureStats>>,
) -> JoinHandle<ClosureOutcome> {
    tracker.spawn(async move {
        let outcome = run_closure(governing, store, auction_id, interval).await;
        stats.write().await.record_outcome(outcome);
        outcome
    })
}
