//! In-process metric handle.
//!
//! Stands in for a client-library metric wherever one is not available:
//! embedder-owned readings, fixtures, tests. The value sits behind an
//! `RwLock` so writers (the embedder) and readers (polling threads) can
//! race safely.

use std::sync::RwLock;

use crate::metric::{Metric, MetricValue};

/// Thread-safe metric whose value is set by the owner and read by gauges.
#[derive(Debug)]
pub struct SharedMetric {
    value: RwLock<MetricValue>,
}

impl SharedMetric {
    /// Create with an initial reading.
    pub fn new(value: MetricValue) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Replace the current reading.
    pub fn set(&self, value: MetricValue) {
        let mut guard = self.value.write().unwrap_or_else(|p| p.into_inner());
        *guard = value;
    }
}

impl Default for SharedMetric {
    fn default() -> Self {
        Self::new(MetricValue::NotMeasurable)
    }
}

impl Metric for SharedMetric {
    fn metric_value(&self) -> MetricValue {
        // A writer can only poison the lock mid-replace; the stored value
        // is still whole, so recover it rather than fail the poll.
        self.value
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .clone()
    }
}
