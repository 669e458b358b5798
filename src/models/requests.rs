//! Request DTOs for the auction server API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

use crate::auction::{AuctionDraft, AuctionFilter, AuctionStatus, ProductCondition};

/// Minimum description length in characters
pub const MIN_DESCRIPTION_LENGTH: usize = 10;

/// Request body for creating an auction (POST /auction)
///
/// `condition` is the wire code: 1 = new, 2 = used, 3 = refurbished.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAuctionRequest {
    pub product_name: String,
    pub category: String,
    pub description: String,
    pub condition: u8,
}

impl CreateAuctionRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.product_name.trim().chars().count() <= 1 {
            return Some("product_name must be longer than 1 character".to_string());
        }
        if self.category.trim().chars().count() <= 2 {
            return Some("category must be longer than 2 characters".to_string());
        }
        if self.description.trim().chars().count() < MIN_DESCRIPTION_LENGTH {
            return Some(format!(
                "description must be at least {} characters in length",
                MIN_DESCRIPTION_LENGTH
            ));
        }
        if let Err(e) = ProductCondition::try_from(self.condition) {
            return Some(e);
        }
        None
    }

    /// Validates and converts into a draft ready for creation.
    pub fn into_draft(self) -> Result<AuctionDraft, String> {
        if let Some(error_msg) = self.validate() {
            return Err(error_msg);
        }
        let condition = ProductCondition::try_from(self.condition)?;

        Ok(AuctionDraft {
            product_name: self.product_name.trim().to_string(),
            category: self.category.trim().to_string(),
            description: self.description.trim().to_string(),
            condition,
        })
    }
}

/// Query string for listing auctions (GET /auction)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListAuctionsQuery {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
}

impl ListAuctionsQuery {
    pub fn into_filter(self) -> Result<AuctionFilter, String> {
        let status = self
            .status
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<AuctionStatus>())
            .transpose()?;

        Ok(AuctionFilter {
            status,
            category: self.category.filter(|c| !c.is_empty()),
            product_name: self.product_name.filter(|p| !p.is_empty()),
        })
    }
}
