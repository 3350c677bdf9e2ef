//! HTTP API module
//!
//! - Statistics endpoints: /height, /difficulty, /hashrate, /avg-block-time, /halving
//! - Diagnostic endpoints: /health, /metrics
//! - Errors are JSON `{"detail": ...}`: 502 for node failures, 400/422 for bad input
//!
//! Handlers are generic over `ChainRpc` so the router can be driven by any node client.

pub mod server;
pub mod handlers;
pub mod types;

pub use server::{router, ApiServer};
pub use handlers::StatsHandler;
