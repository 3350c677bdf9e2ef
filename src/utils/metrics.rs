use std::collections::BTreeMap;
use std::fmt::Write;
use std::sync::Arc;
use lazy_static::lazy_static;
use parking_lot::Mutex;

pub const RPC_CALLS: &str = "rpc_calls_total";
pub const RPC_FAILURES: &str = "rpc_failures_total";
pub const RPC_FALLBACKS: &str = "rpc_fallbacks_total";
pub const CHAIN_HEIGHT: &str = "chain_height";

/// Metrics registry (simple, Prometheus-style)
#[derive(Clone, Default)]
pub struct MetricsRegistry {
    counters: Arc<Mutex<BTreeMap<String, u64>>>,
    gauges: Arc<Mutex<BTreeMap<String, f64>>>,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inc_counter(&self, name: &str) {
        let mut counters = self.counters.lock();
        *counters.entry(name.to_string()).or_insert(0) += 1;
    }

    pub fn set_gauge(&self, name: &str, val: f64) {
        self.gauges.lock().insert(name.to_string(), val);
    }

    pub fn counter(&self, name: &str) -> u64 {
        self.counters.lock().get(name).copied().unwrap_or(0)
    }

    pub fn snapshot(&self) -> (BTreeMap<String, u64>, BTreeMap<String, f64>) {
        (self.counters.lock().clone(), self.gauges.lock().clone())
    }

    /// Text exposition format, one `name value` line per series.
    pub fn render(&self) -> String {
        let (counters, gauges) = self.snapshot();
        let mut out = String::new();
        for (name, v) in counters {
            let _ = writeln!(out, "# TYPE {} counter", name);
            let _ = writeln!(out, "{} {}", name, v);
        }
        for (name, v) in gauges {
            let _ = writeln!(out, "# TYPE {} gauge", name);
            let _ = writeln!(out, "{} {}", name, v);
        }
        out
    }
}

lazy_static! {
    pub static ref METRICS: MetricsRegistry = MetricsRegistry::new();
}
