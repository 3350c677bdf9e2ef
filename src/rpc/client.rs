//! HTTP transport for node JSON-RPC calls.

use async_trait::async_trait;
use reqwest::StatusCode;
use std::fmt;
use serde_json::Value;
use tracing::{debug, warn};

use crate::app::config::RpcConfig;
use crate::rpc::types::{RpcRequest, RpcResponse};
use crate::rpc::ChainRpc;
use crate::utils::errors::{Result, RpcError};
use crate::utils::metrics::{METRICS, RPC_CALLS, RPC_FAILURES};

/// JSON-RPC client bound to a single node endpoint.
#[derive(Clone)]
pub struct RpcClient {
    url: String,
    user: String,
    password: String,
    client: reqwest::Client,
}

impl RpcClient {
    pub fn new(cfg: &RpcConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(cfg.timeout).build()?;
        Ok(Self {
            url: cfg.url(),
            user: cfg.user.clone(),
            password: cfg.password.clone(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn send(&self, request: &RpcRequest<'_>) -> Result<Value> {
        let resp = self
            .client
            .post(&self.url)
            .basic_auth(&self.user, Some(&self.password))
            .json(request)
            .send()
            .await
            .map_err(|e| RpcError::Connection(e.to_string()))?;

        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            return Err(RpcError::Http { status: status.as_u16(), body });
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| RpcError::Connection(e.to_string()))?;
        let envelope: RpcResponse = serde_json::from_slice(&bytes)
            .map_err(|e| RpcError::InvalidResponse(e.to_string()))?;
        envelope.into_result()
    }
}

impl fmt::Debug for RpcClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcClient")
            .field("url", &self.url)
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ChainRpc for RpcClient {
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value> {
        debug!(method, "rpc call");
        METRICS.inc_counter(RPC_CALLS);

        let request = RpcRequest::new(method, params);
        let res = self.send(&request).await;
        if let Err(e) = &res {
            METRICS.inc_counter(RPC_FAILURES);
            warn!(method, error = %e, "rpc call failed");
        }
        res
    }
}
