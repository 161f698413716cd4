//! Gauge whose underlying metric handle can be swapped.
//!
//! Client libraries tear down and rebuild their metric objects when the
//! connection is re-established. Registrations outlive that rebuild, so the
//! reporting side needs a gauge that can follow the replacement handle
//! without being re-registered.

use std::sync::{Arc, RwLock};

use crate::gauge::Gauge;
use crate::metric::{Metric, MetricValue};

/// [`MetricValueAdapter`](crate::gauge::MetricValueAdapter) variant with a
/// replaceable metric handle.
pub struct MutableMetricAdapter {
    metric: RwLock<Arc<dyn Metric>>,
}

impl MutableMetricAdapter {
    /// Wrap an initial client metric handle.
    pub fn new(metric: Arc<dyn Metric>) -> Self {
        Self {
            metric: RwLock::new(metric),
        }
    }

    /// Point the gauge at a replacement metric handle.
    pub fn set_metric(&self, metric: Arc<dyn Metric>) {
        let mut guard = self.metric.write().unwrap_or_else(|p| p.into_inner());
        *guard = metric;
        tracing::trace!("metric handle replaced");
    }
}

impl Gauge for MutableMetricAdapter {
    fn value(&self) -> f64 {
        // Same coercion contract as MetricValueAdapter: doubles pass
        // through, every other shape reads as 0.0.
        let handle = {
            let guard = self.metric.read().unwrap_or_else(|p| p.into_inner());
            Arc::clone(&guard)
        };
        match handle.metric_value() {
            MetricValue::Double(d) => d,
            _ => 0.0,
        }
    }
}
