//! Chain statistics derived from raw node values: halving estimate and ETA formatting.

pub mod duration;
pub mod halving;

pub use duration::format_duration;
pub use halving::{estimate, next_halving_height, HalvingEstimate, ASSUMED_BLOCK_TIME_SECS};
