//! Auction Entity Module
//!
//! Defines the auction record and its enumerated attributes.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// == Product Condition ==
/// Condition of the item for sale, carried on the wire as 1, 2 or 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ProductCondition {
    New = 1,
    Used = 2,
    Refurbished = 3,
}

impl TryFrom<u8> for ProductCondition {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ProductCondition::New),
            2 => Ok(ProductCondition::Used),
            3 => Ok(ProductCondition::Refurbished),
            other => Err(format!("condition must be one of [1 2 3], got {}", other)),
        }
    }
}

impl From<ProductCondition> for u8 {
    fn from(condition: ProductCondition) -> Self {
        condition as u8
    }
}

// == Auction Status ==
/// Lifecycle status. The only transition is `Active` to `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuctionStatus {
    Active,
    Completed,
}

impl std::str::FromStr for AuctionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(AuctionStatus::Active),
            "completed" => Ok(AuctionStatus::Completed),
            other => Err(format!("unknown auction status '{}'", other)),
        }
    }
}

// == Auction Draft ==
/// Already validated input for a new auction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuctionDraft {
    pub product_name: String,
    pub category: String,
    pub description: String,
    pub condition: ProductCondition,
}

// == Auction ==
/// A stored auction record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auction {
    pub id: Uuid,
    pub product_name: String,
    pub category: String,
    pub description: String,
    pub condition: ProductCondition,
    pub status: AuctionStatus,
    pub created_at: DateTime<Utc>,
}

impl Auction {
    // == Constructor ==
    /// Builds a fresh `Active` auction with a new id, stamped now.
    pub fn from_draft(draft: AuctionDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_name: draft.product_name,
            category: draft.category,
            description: draft.description,
            condition: draft.condition,
            status: AuctionStatus::Active,
            created_at: Utc::now(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == AuctionStatus::Active
    }

    // == Closes At ==
    /// Moment the auction is due to close for the given lifetime.
    pub fn closes_at(&self, interval: Duration) -> DateTime<Utc> {
        chrono::Duration::from_std(interval)
            .ok()
            .and_then(|d| self.created_at.checked_add_signed(d))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}
