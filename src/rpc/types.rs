use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::utils::errors::RpcError;

/// Protocol marker sent with every request.
pub const JSONRPC_VERSION: &str = "1.0";

/// Fixed request id; requests are never pipelined so ids need not be unique.
pub const REQUEST_ID: &str = "palladium-api";

/// Node RPC methods used by the statistics endpoints.
pub mod methods {
    pub const GET_BLOCK_COUNT: &str = "getblockcount";
    pub const GET_BLOCK_HASH: &str = "getblockhash";
    pub const GET_BLOCK: &str = "getblock";
    pub const GET_DIFFICULTY: &str = "getdifficulty";
    pub const GET_BLOCKCHAIN_INFO: &str = "getblockchaininfo";
    pub const GET_NETWORK_HASHPS: &str = "getnetworkhashps";
    pub const GET_MINING_INFO: &str = "getmininginfo";
}

/// JSON-RPC 1.0 request envelope
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: &'static str,
    pub method: &'a str,
    pub params: Vec<Value>,
}

impl<'a> RpcRequest<'a> {
    pub fn new(method: &'a str, params: Vec<Value>) -> Self {
        Self { jsonrpc: JSONRPC_VERSION, id: REQUEST_ID, method, params }
    }
}

/// JSON-RPC response envelope. A JSON `null` error deserializes to `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub id: Option<Value>,
}

impl RpcResponse {
    pub fn into_result(self) -> Result<Value, RpcError> {
        match self.error {
            Some(err) => Err(RpcError::Protocol(err.to_string())),
            None => Ok(self.result),
        }
    }
}

/// Interpret an untyped `result` as `T`.
pub fn decode<T: DeserializeOwned>(method: &str, value: Value) -> Result<T, RpcError> {
    serde_json::from_value(value)
        .map_err(|e| RpcError::InvalidResponse(format!("{}: {}", method, e)))
}
