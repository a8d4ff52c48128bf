//! Marketplace contract gateway subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP handler
//!     → gateway.rs (one operation per contract method)
//!     → abi.rs (typed call encoding/decoding)
//!     → blockchain client (signed provider, timeouts)
//!     → remote AntiqueMarketplace contract
//! ```
//!
//! # Design Decisions
//! - Stateless pass-through: no caching, every read hits the ledger
//! - Mutations estimate gas first; any failure aborts the operation
//! - uint256 values cross the HTTP boundary as decimal strings

pub mod abi;
pub mod gateway;
pub mod types;

pub use gateway::MarketplaceGateway;
pub use types::{AddReviewRequest, CreateListingRequest, Listing};
