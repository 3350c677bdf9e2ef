//! Node RPC module
//!
//! - `ChainRpc`: the capability the statistics handlers depend on
//! - `RpcClient`: JSON-RPC 1.0 over HTTP with basic auth and a bounded timeout
//!
//! The client performs no retries; fallback between methods is the caller's job.

pub mod client;
pub mod types;

pub use client::RpcClient;
pub use types::{decode, methods, RpcRequest, RpcResponse};

use async_trait::async_trait;
use serde_json::Value;
use crate::utils::errors::Result;

/// One JSON-RPC call against the node, returning the untyped `result`.
#[async_trait]
pub trait ChainRpc: Send + Sync + 'static {
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value>;
}
