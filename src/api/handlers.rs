use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::warn;
use crate::api::types::{MAX_WINDOW, MIN_WINDOW};
use crate::app::config::ChainParams;
use crate::rpc::{decode, methods, ChainRpc};
use crate::stats::{self, HalvingEstimate};
use crate::utils::errors::{ApiError, RpcError};
use crate::utils::metrics::{CHAIN_HEIGHT, METRICS, RPC_FALLBACKS};

/// A number obtained from `primary`, or read from `field` of the object
/// returned by `fallback` when the primary method is unavailable.
struct FallbackSource {
    primary: &'static str,
    fallback: &'static str,
    field: &'static str,
    /// Capability named in the error when both methods fail.
    label: &'static str,
}

const DIFFICULTY: FallbackSource = FallbackSource {
    primary: methods::GET_DIFFICULTY,
    fallback: methods::GET_BLOCKCHAIN_INFO,
    field: "difficulty",
    label: "difficulty",
};

const HASHRATE: FallbackSource = FallbackSource {
    primary: methods::GET_NETWORK_HASHPS,
    fallback: methods::GET_MINING_INFO,
    field: "networkhashps",
    label: "hashrate",
};

/// Blocks averaged by `getnetworkhashps`, and the "current tip" height marker.
const HASHPS_PARAMS: [i64; 2] = [120, -1];

#[derive(Deserialize)]
struct BlockTime {
    time: i64,
}

/// Statistics computed from node RPC responses. Holds no mutable state, so a
/// single instance serves all concurrent requests.
pub struct StatsHandler<D: ChainRpc> {
    rpc: Arc<D>,
    chain: ChainParams,
}

impl<D: ChainRpc> StatsHandler<D> {
    pub fn new(rpc: Arc<D>, chain: ChainParams) -> Self {
        Self { rpc, chain }
    }

    /// Current chain height (`getblockcount`).
    pub async fn height(&self) -> Result<u64, RpcError> {
        let v = self.rpc.call(methods::GET_BLOCK_COUNT, vec![]).await?;
        let height: u64 = decode(methods::GET_BLOCK_COUNT, v)?;
        METRICS.set_gauge(CHAIN_HEIGHT, height as f64);
        Ok(height)
    }

    pub async fn difficulty(&self) -> Result<f64, ApiError> {
        self.number_with_fallback(&DIFFICULTY, vec![]).await
    }

    pub async fn hashrate(&self) -> Result<f64, ApiError> {
        let params = HASHPS_PARAMS.iter().map(|p| json!(p)).collect();
        self.number_with_fallback(&HASHRATE, params).await
    }

    /// Mean seconds per block over the last `window` blocks, from raw block
    /// timestamps: `(time(h) - time(h - window)) / window`.
    pub async fn avg_block_time(&self, window: i64) -> Result<f64, ApiError> {
        let window = check_window(window)?;

        let height = self.height().await?;
        if window >= height {
            return Err(ApiError::ChainTooShort);
        }

        let t_last = self.block_time(height).await?;
        let t_prev = self.block_time(height - window).await?;
        Ok((t_last - t_prev) as f64 / window as f64)
    }

    pub async fn halving(&self) -> Result<HalvingEstimate, ApiError> {
        let height = self.height().await?;
        Ok(stats::estimate(height, self.chain.halving_interval))
    }

    /// Block timestamp (header `time`, not median time) at `height`.
    async fn block_time(&self, height: u64) -> Result<i64, RpcError> {
        let hash = self.rpc.call(methods::GET_BLOCK_HASH, vec![json!(height)]).await?;
        let hash: String = decode(methods::GET_BLOCK_HASH, hash)?;
        let block = self.rpc.call(methods::GET_BLOCK, vec![json!(hash)]).await?;
        let block: BlockTime = decode(methods::GET_BLOCK, block)?;
        Ok(block.time)
    }

    /// Two-step lookup: the primary method's numeric result, otherwise the
    /// fallback object's field (0 when absent). Fails only if both fail, with
    /// the fallback's error detail.
    async fn number_with_fallback(
        &self,
        src: &FallbackSource,
        params: Vec<Value>,
    ) -> Result<f64, ApiError> {
        let primary = self
            .rpc
            .call(src.primary, params)
            .await
            .and_then(|v| decode::<f64>(src.primary, v));

        match primary {
            Ok(v) => return Ok(v),
            Err(e) => {
                METRICS.inc_counter(RPC_FALLBACKS);
                warn!(primary = src.primary, fallback = src.fallback, error = %e, "primary method failed, using fallback");
            }
        }

        match self.rpc.call(src.fallback, vec![]).await {
            Ok(obj) => Ok(obj.get(src.field).and_then(Value::as_f64).unwrap_or(0.0)),
            Err(e) => Err(ApiError::Upstream(format!("Unable to get {}: {}", src.label, e.detail()))),
        }
    }
}

fn check_window(window: i64) -> Result<u64, ApiError> {
    if !(MIN_WINDOW..=MAX_WINDOW).contains(&window) {
        return Err(ApiError::InvalidParameter(format!(
            "window must be between {} and {}, got {}",
            MIN_WINDOW, MAX_WINDOW, window
        )));
    }
    Ok(window as u64)
}
