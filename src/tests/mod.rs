//! Crate-level tests.
//!
//! - Integration tests (router + real RPC client against a mock node)
//! - Property tests (halving boundaries, duration formatting)

pub mod support;
pub mod fuzz;
