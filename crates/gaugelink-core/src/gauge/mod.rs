//! Reporting-side gauge contract and the metric adapters.
//!
//! Re-exports the adapters so downstream consumers can depend on this
//! module directly.

pub mod adapter;
pub mod mutable;

pub use adapter::MetricValueAdapter;
pub use mutable::MutableMetricAdapter;

/// Capability polled by the reporting framework: report the current value
/// as a double.
///
/// A gauge is read on demand; it accumulates nothing. Implementations must
/// be non-blocking and safe for concurrent reads, since the framework polls
/// from its own threads on its own schedule.
pub trait Gauge: Send + Sync {
    /// Current reading.
    fn value(&self) -> f64;
}
