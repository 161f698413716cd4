//! Gauge for reading the current value of a client metric.

use std::sync::Arc;

use crate::gauge::Gauge;
use crate::metric::{Metric, MetricValue};

/// Presents a client metric's untyped value as a float gauge reading.
///
/// The adapter holds a shared handle fixed at construction; it owns no
/// state of its own and performs no caching — every poll re-reads the
/// underlying metric. Dropping the adapter drops only its handle; the
/// metric's lifetime belongs to the client library.
pub struct MetricValueAdapter {
    metric: Arc<dyn Metric>,
}

impl MetricValueAdapter {
    /// Wrap a client metric handle.
    pub fn new(metric: Arc<dyn Metric>) -> Self {
        Self { metric }
    }
}

impl Gauge for MetricValueAdapter {
    fn value(&self) -> f64 {
        let v = self.metric.metric_value();
        // The client library's value accessor is untyped and reports
        // non-double shapes for metrics that are not measurable. Earlier
        // client versions coerced every such reading to 0.0, and consumers
        // depend on that, so the fallback is kept deliberately — silent,
        // not an error. Drop it once the client's typed accessor lands.
        match v {
            MetricValue::Double(d) => d,
            _ => 0.0,
        }
    }
}

/// Convenience: any client metric handle can be polled through the adapter.
impl From<Arc<dyn Metric>> for MetricValueAdapter {
    fn from(metric: Arc<dyn Metric>) -> Self {
        Self::new(metric)
    }
}
