//! Dynamic metric value (tagged variant).
//!
//! The client library's value accessor is untyped; this enum is its
//! runtime-shape surface. Variant order matters for deserialization:
//! `serde(untagged)` tries variants in declared order, so `Int` must come
//! before `Double` or JSON integers would silently widen.

use serde::{Deserialize, Serialize};

/// Current reading of a client metric, in whatever shape the client
/// library reported it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    /// Boolean reading (e.g., a connectivity flag).
    Bool(bool),
    /// Integer reading (counts, sizes).
    Int(i64),
    /// Double-precision reading; the only shape a gauge passes through.
    Double(f64),
    /// Textual reading (ids, versions, sentinel strings).
    Text(String),
    /// The metric is not measurable right now (JSON `null`).
    NotMeasurable,
}

impl MetricValue {
    /// The reading as a double, if and only if it was reported as one.
    ///
    /// Intentionally strict: `Int(7)` is *not* `Some(7.0)`. Integer-shaped
    /// readings come from client metrics that were never measurable as
    /// doubles, and widening them here would change what the legacy
    /// coercion reported.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            MetricValue::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// True when the reading is the not-measurable sentinel.
    pub fn is_measurable(&self) -> bool {
        !matches!(self, MetricValue::NotMeasurable)
    }
}

impl From<f64> for MetricValue {
    fn from(v: f64) -> Self {
        MetricValue::Double(v)
    }
}

impl From<i64> for MetricValue {
    fn from(v: i64) -> Self {
        MetricValue::Int(v)
    }
}

impl From<bool> for MetricValue {
    fn from(v: bool) -> Self {
        MetricValue::Bool(v)
    }
}

impl From<&str> for MetricValue {
    fn from(v: &str) -> Self {
        MetricValue::Text(v.to_string())
    }
}
