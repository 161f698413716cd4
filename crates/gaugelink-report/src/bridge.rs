//! Client-metric registration bridge.
//!
//! Wraps a batch of client metric handles in value adapters and registers
//! them. Client libraries re-report the same metric names after a rebuild,
//! so duplicates are skipped with a warning instead of aborting the batch.

use std::sync::Arc;

use gaugelink_core::error::{GaugeLinkError, Result};
use gaugelink_core::gauge::MetricValueAdapter;
use gaugelink_core::metric::Metric;

use crate::registry::GaugeRegistry;

/// Register a batch of named client metrics as gauges.
///
/// Returns the number of gauges newly registered. Names already present
/// are skipped. An empty name fails the batch fast: entries registered
/// before it stay in place, and their count is lost with the error.
/// Callers that need atomicity should validate names before bridging.
pub fn register_client_metrics<I>(registry: &GaugeRegistry, metrics: I) -> Result<usize>
where
    I: IntoIterator<Item = (String, Arc<dyn Metric>)>,
{
    let mut registered = 0usize;
    for (name, metric) in metrics {
        let gauge = Arc::new(MetricValueAdapter::new(metric));
        match registry.register(&name, gauge) {
            Ok(()) => registered += 1,
            Err(GaugeLinkError::AlreadyRegistered(_)) => {
                tracing::warn!(gauge = %name, "already registered, skipping");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(registered)
}
