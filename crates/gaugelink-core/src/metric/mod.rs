//! Client-side metric contract.
//!
//! Re-exports the dynamic value type and the shared in-process metric so
//! downstream consumers can depend on this module directly.

pub mod shared;
pub mod value;

pub use shared::SharedMetric;
pub use value::MetricValue;

/// Capability exposed by an externally-owned metric: report the current
/// value as an untyped result.
///
/// Implementations are owned by the client library that produces them; this
/// crate only ever holds shared handles to them. Reads must be safe to call
/// concurrently from reporting-framework polling threads.
pub trait Metric: Send + Sync {
    /// Current value of the metric, whatever its runtime shape.
    fn metric_value(&self) -> MetricValue;
}
