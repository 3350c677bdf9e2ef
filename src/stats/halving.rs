//! Next-halving estimate.
//!
//! The ETA always assumes a fixed block time rather than the measured average
//! served by `/avg-block-time`.

use serde::{Deserialize, Serialize};
use crate::stats::duration::format_duration;

/// Block time used for every halving ETA, in seconds.
pub const ASSUMED_BLOCK_TIME_SECS: f64 = 120.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HalvingEstimate {
    pub next_halving_height: u64,
    pub blocks_remaining: u64,
    pub eta_seconds: f64,
    pub eta_formatted: String,
}

/// First halving boundary strictly above `height`.
///
/// On a boundary the *next* one is returned (`height + interval`).
/// `interval` must be non-zero; configuration enforces this at startup.
pub fn next_halving_height(height: u64, interval: u64) -> u64 {
    (height / interval + 1) * interval
}

pub fn estimate(height: u64, interval: u64) -> HalvingEstimate {
    let next = next_halving_height(height, interval);
    let blocks_remaining = next.saturating_sub(height);
    let eta_seconds = blocks_remaining as f64 * ASSUMED_BLOCK_TIME_SECS;

    HalvingEstimate {
        next_halving_height: next,
        blocks_remaining,
        eta_seconds,
        eta_formatted: format_duration(eta_seconds),
    }
}
