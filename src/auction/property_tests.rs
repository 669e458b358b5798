//! Property-Based Tests for Auction Module
//!
//! Uses proptest to check lifecycle and interval-parsing properties.

use proptest::prelude::*;
use std::time::Duration;

use crate::auction::{
    parse_interval, Auction, AuctionDraft, AuctionStatus, AuctionStore, InMemoryAuctionStore,
    ProductCondition, DEFAULT_AUCTION_INTERVAL,
};

#[test]
fn test_parse_interval_absent_is_default() {
    assert_eq!(parse_interval(None), DEFAULT_AUCTION_INTERVAL);
}

// == Strategies ==
fn status_strategy() -> impl Strategy<Value = AuctionStatus> {
    prop_oneof![Just(AuctionStatus::Active), Just(AuctionStatus::Completed)]
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

fn sample_auction() -> Auction {
    Auction::from_draft(AuctionDraft {
        product_name: "Bicicleta".to_string(),
        category: "Esporte".to_string(),
        description: "Aro 29, pouco uso".to_string(),
        condition: ProductCondition::Refurbished,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Any sequence of conditional updates flips the status at most once and
    // never brings a completed auction back to active.
    #[test]
    fn prop_at_most_one_transition(updates in prop::collection::vec(status_strategy(), 1..20)) {
        let rt = runtime();
        let store = InMemoryAuctionStore::new();
        let auction = sample_auction();

        rt.block_on(store.insert(&auction)).unwrap();

        let mut writes = 0;
        let mut seen_completed = false;
        for status in updates {
            if rt.block_on(store.update_status_if_active(auction.id, status)).unwrap() {
                writes += 1;
            }

            let current = rt.block_on(store.find_by_id(auction.id)).unwrap().status;
            if seen_completed {
                prop_assert_eq!(current, AuctionStatus::Completed, "status regressed");
            }
            seen_completed |= current == AuctionStatus::Completed;
        }

        prop_assert!(writes <= 1, "status written {} times", writes);
    }

    // Parsing never fails: anything humantime rejects becomes the default.
    #[test]
    fn prop_parse_interval_total(raw in ".{0,16}") {
        let interval = parse_interval(Some(&raw));
        match humantime::parse_duration(raw.trim()) {
            Ok(parsed) if !raw.trim().is_empty() => {
                prop_assert_eq!(interval, parsed);
            }
            _ => {
                prop_assert_eq!(interval, DEFAULT_AUCTION_INTERVAL);
            }
        }
    }

    #[test]
    fn prop_parse_interval_millis(ms in 1u64..1_000_000) {
        let raw = format!("{}ms", ms);
        prop_assert_eq!(parse_interval(Some(&raw)), Duration::from_millis(ms));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    // Concurrent completion attempts on one auction yield exactly one winner.
    #[test]
    fn prop_concurrent_updates_single_winner(writers in 2usize..16) {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(4)
            .enable_all()
            .build()
            .unwrap();
        let store = std::sync::Arc::new(InMemoryAuctionStore::new());
        let auction = sample_auction();
        rt.block_on(store.insert(&auction)).unwrap();

        let winners = rt.block_on(async {
            let handles: Vec<_> = (0..writers)
                .map(|_| {
                    let store = store.clone();
                    let id = auction.id;
                    tokio::spawn(async move {
                        store.update_status_if_active(id, AuctionStatus::Completed).await
                    })
                })
                .collect();

            let mut winners = 0;
            for handle in handles {
                if handle.await.unwrap().unwrap() {
                    winners += 1;
                }
            }
            winners
        });

        prop_assert_eq!(winners, 1);
    }
}
