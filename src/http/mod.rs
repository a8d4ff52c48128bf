//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, shutdown)
//!     → request.rs (request ID)
//!     → handlers.rs (parse input, call marketplace gateway)
//!     → response.rs (success envelopes, single error shape)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use response::{ApiError, TxResponse};
pub use server::{AppState, HttpServer};
