//! Wire types for the marketplace REST surface.
//!
//! Numeric contract fields (`uint256`) are serialized as decimal strings,
//! never as JSON numbers, so clients don't lose precision in transports
//! that parse numbers as doubles.

use alloy::primitives::U256;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::blockchain::types::{BlockchainError, BlockchainResult};
use crate::marketplace::abi::AntiqueMarketplace::Antique;

/// A marketplace listing as exposed over HTTP.
///
/// Mirrors the contract's `Antique` tuple, including soft-deleted entries
/// and the parallel `reviews`/`reviewers` arrays as the contract stores
/// them, ordered by submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub item_id: String,
    pub reviews: Vec<String>,
    pub reviewers: Vec<String>,
    pub description: String,
    pub category: String,
    pub price: String,
    pub owner: String,
    pub item_title: String,
    pub year_of_origin: String,
    pub condition: String,
    pub is_authenticated: bool,
    pub is_deleted: bool,
    pub origin: String,
}

impl From<Antique> for Listing {
    fn from(a: Antique) -> Self {
        Self {
            item_id: a.itemId.to_string(),
            reviews: a.reviews,
            reviewers: a.reviewers.iter().map(|r| r.to_string()).collect(),
            description: a.description,
            category: a.category,
            price: a.price.to_string(),
            owner: a.owner.to_string(),
            item_title: a.itemTitle,
            year_of_origin: a.yearOfOrigin.to_string(),
            condition: a.condition,
            is_authenticated: a.isAuthenticated,
            is_deleted: a.isDeleted,
            origin: a.origin,
        }
    }
}

/// Request body for `POST /antiques`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListingRequest {
    pub owner: String,
    #[serde(deserialize_with = "u256_from_json")]
    pub price: U256,
    pub item_title: String,
    pub category: String,
    pub description: String,
    #[serde(deserialize_with = "u256_from_json")]
    pub year_of_origin: U256,
    pub condition: String,
    pub origin: String,
    pub is_authenticated: bool,
}

/// Request body for `POST /antiques/{id}/reviews`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddReviewRequest {
    #[serde(deserialize_with = "u256_from_json")]
    pub rating: U256,
    pub comment: String,
}

/// Parse a listing id from a path segment (decimal, or hex with 0x).
pub fn parse_id(raw: &str) -> BlockchainResult<U256> {
    raw.parse::<U256>()
        .map_err(|e| BlockchainError::InvalidInput(format!("Invalid listing id '{}': {}", raw, e)))
}

/// Accept a uint256 as either a decimal string (hex with 0x also parses)
/// or a JSON integer. The original clients sent both.
fn u256_from_json<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    struct U256Visitor;

    impl<'de> Visitor<'de> for U256Visitor {
        type Value = U256;

        fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("a decimal string or an unsigned integer")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<U256, E> {
            v.parse::<U256>().map_err(de::Error::custom)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<U256, E> {
            Ok(U256::from(v))
        }
    }

    deserializer.deserialize_any(U256Visitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, U256};

    fn sample_antique() -> Antique {
        Antique {
            itemId: U256::from(7u64),
            reviews: vec!["lovely".to_string()],
            reviewers: vec![address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266")],
            description: "A vase".to_string(),
            category: "Ceramics".to_string(),
            price: U256::from(1_000_000_000_000_000_000u128),
            owner: address!("70997970C51812dc3A010C7d01b50e0d17dc79C8"),
            itemTitle: "Ming vase".to_string(),
            yearOfOrigin: U256::from(1490u64),
            condition: "Good".to_string(),
            isAuthenticated: true,
            isDeleted: false,
            origin: "China".to_string(),
        }
    }

    #[test]
    fn test_numeric_fields_serialize_as_strings() {
        let listing = Listing::from(sample_antique());
        let json = serde_json::to_value(&listing).unwrap();

        assert_eq!(json["itemId"], "7");
        assert_eq!(json["price"], "1000000000000000000");
        assert_eq!(json["yearOfOrigin"], "1490");
        // Booleans stay booleans.
        assert_eq!(json["isAuthenticated"], true);
        assert_eq!(json["isDeleted"], false);
    }

    #[test]
    fn test_addresses_serialize_as_hex_strings() {
        let listing = Listing::from(sample_antique());
        assert!(listing.owner.starts_with("0x"));
        assert_eq!(listing.reviewers.len(), 1);
        assert!(listing.reviewers[0].starts_with("0x"));
    }

    #[test]
    fn test_deleted_listing_survives_conversion() {
        let mut antique = sample_antique();
        antique.isDeleted = true;
        let listing = Listing::from(antique);
        assert!(listing.is_deleted);
    }

    #[test]
    fn test_create_request_camel_case() {
        let req: CreateListingRequest = serde_json::from_str(
            r#"{
                "owner": "0x70997970C51812dc3A010C7d01b50e0d17dc79C8",
                "price": "2500",
                "itemTitle": "Pocket watch",
                "category": "Horology",
                "description": "Brass, working",
                "yearOfOrigin": 1890,
                "condition": "Fair",
                "origin": "Switzerland",
                "isAuthenticated": false
            }"#,
        )
        .unwrap();
        assert_eq!(req.price, U256::from(2500u64));
        assert_eq!(req.year_of_origin, U256::from(1890u64));
        assert_eq!(req.item_title, "Pocket watch");
    }

    #[test]
    fn test_u256_accepts_string_and_number() {
        let req: AddReviewRequest =
            serde_json::from_str(r#"{"rating": 5, "comment": "great"}"#).unwrap();
        assert_eq!(req.rating, U256::from(5u64));

        let req: AddReviewRequest =
            serde_json::from_str(r#"{"rating": "4", "comment": "ok"}"#).unwrap();
        assert_eq!(req.rating, U256::from(4u64));
    }

    #[test]
    fn test_u256_rejects_garbage() {
        let result: Result<AddReviewRequest, _> =
            serde_json::from_str(r#"{"rating": "five", "comment": "no"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), U256::from(42u64));
        assert_eq!(parse_id("0x2a").unwrap(), U256::from(42u64));
        assert!(parse_id("banana").is_err());
    }
}
