//! Property tests for the halving estimate and duration formatting.

use proptest::prelude::*;
use crate::stats::{estimate, format_duration, next_halving_height, ASSUMED_BLOCK_TIME_SECS};

proptest! {
    #[test]
    fn next_halving_is_boundary_above_height(h in 0u64..1_000_000_000_000, interval in 1u64..10_000_000) {
        let next = next_halving_height(h, interval);
        prop_assert_eq!(next % interval, 0);
        prop_assert!(next > h);
        prop_assert!(next - h <= interval);
    }

    #[test]
    fn boundary_heights_skip_a_full_interval(k in 0u64..100_000, interval in 1u64..1_000_000) {
        let h = k * interval;
        prop_assert_eq!(next_halving_height(h, interval), h + interval);
    }

    #[test]
    fn estimate_is_consistent(h in 0u64..100_000_000, interval in 1u64..5_000_000) {
        let est = estimate(h, interval);
        prop_assert_eq!(est.blocks_remaining, est.next_halving_height - h);
        prop_assert_eq!(est.eta_seconds, est.blocks_remaining as f64 * ASSUMED_BLOCK_TIME_SECS);
        prop_assert_eq!(est.eta_formatted, format_duration(est.eta_seconds));
    }

    #[test]
    fn formatting_truncates_fractions(secs in 0u64..10_000_000_000, frac in 0.0f64..1.0) {
        // stay well inside f64's exact integer range so the sum cannot round up
        let with_frac = secs as f64 + frac.min(0.999);
        prop_assert_eq!(format_duration(with_frac), format_duration(secs as f64));
    }

    #[test]
    fn formatting_always_ends_in_seconds(secs in 0u64..10_000_000_000) {
        let s = format_duration(secs as f64);
        let expected_tail = format!("{} seconds", secs % 60);
        prop_assert!(s.ends_with(&expected_tail));
        prop_assert!(!s.contains(" 0 days") && !s.starts_with("0 days"));
        prop_assert!(!s.contains(" 0 hours") && !s.starts_with("0 hours"));
        prop_assert!(!s.contains(" 0 minutes") && !s.starts_with("0 minutes"));
    }

    #[test]
    fn formatting_round_trips_total(secs in 0u64..10_000_000_000) {
        let total: u64 = format_duration(secs as f64)
            .split(", ")
            .map(|part| {
                let (n, unit) = part.split_once(' ').unwrap();
                let n: u64 = n.parse().unwrap();
                match unit {
                    "days" => n * 86_400,
                    "hours" => n * 3_600,
                    "minutes" => n * 60,
                    "seconds" => n,
                    other => panic!("unexpected unit {}", other),
                }
            })
            .sum();
        prop_assert_eq!(total, secs);
    }
}
