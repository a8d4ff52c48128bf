//! Antique Marketplace Gateway
//!
//! An HTTP-to-blockchain gateway: REST endpoints translate 1:1 into calls
//! against a fixed AntiqueMarketplace smart contract on an EVM chain.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                 GATEWAY                       │
//!                    │                                               │
//!   Client Request   │  ┌─────────┐   ┌──────────┐   ┌───────────┐  │
//!   ─────────────────┼─▶│  http   │──▶│marketplace│──▶│blockchain │──┼──▶ JSON-RPC node
//!                    │  │ server  │   │  gateway  │   │  client   │  │    (contract)
//!                    │  └─────────┘   └──────────┘   └───────────┘  │
//!                    │                                               │
//!                    │  ┌─────────────────────────────────────────┐  │
//!                    │  │          Cross-Cutting Concerns          │  │
//!                    │  │  ┌────────┐ ┌─────────────┐ ┌─────────┐  │  │
//!                    │  │  │ config │ │observability│ │lifecycle│  │  │
//!                    │  │  └────────┘ └─────────────┘ └─────────┘  │  │
//!                    │  └─────────────────────────────────────────┘  │
//!                    └──────────────────────────────────────────────┘
//! ```
//!
//! The gateway holds no authoritative state: listings live in the remote
//! contract, every read hits the ledger, and the remote chain's own
//! ordering serializes conflicting mutations.

// Core subsystems
pub mod blockchain;
pub mod config;
pub mod http;
pub mod marketplace;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::GatewayConfig;
pub use http::{AppState, HttpServer};
pub use lifecycle::Shutdown;
pub use marketplace::MarketplaceGateway;
