//! Chain statistics API: height, difficulty, hashrate, average block time and
//! next-halving estimate of a proof-of-work chain, served over HTTP and backed
//! by the node's JSON-RPC interface.

pub mod api;
pub mod app;
pub mod rpc;
pub mod stats;
pub mod utils;

#[cfg(test)]
mod tests;
