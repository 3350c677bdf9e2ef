use serde::{Deserialize, Serialize};

/// Default `/avg-block-time` window, in blocks.
pub const DEFAULT_WINDOW: i64 = 120;
/// Inclusive bounds for the `/avg-block-time` window.
pub const MIN_WINDOW: i64 = 2;
pub const MAX_WINDOW: i64 = 2016;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeightResponse {
    pub height: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyResponse {
    pub difficulty: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashrateResponse {
    pub hashrate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvgBlockTimeResponse {
    pub avg_block_time: f64,
    pub window: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AvgBlockTimeQuery {
    pub window: Option<i64>,
}

/// Error body for every non-2xx response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
