//! Named gauge registry.
//!
//! Gauges are registered under plain metric names backed by `DashMap`.
//! Rendering walks a sorted name list to keep deterministic output. The
//! registry never interprets readings: a misbehaving metric renders as
//! whatever its gauge reports (typically `0.0`), it does not fail the pass.

use std::fmt::Write;
use std::sync::Arc;

use dashmap::DashMap;

use gaugelink_core::error::{GaugeLinkError, Result};
use gaugelink_core::gauge::Gauge;

/// Concurrent registry of polled gauges.
#[derive(Default)]
pub struct GaugeRegistry {
    gauges: DashMap<String, Arc<dyn Gauge>>,
}

impl GaugeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a gauge under `name`.
    ///
    /// Names must be non-empty and unique; the registry holds one handle
    /// per name until [`deregister`](Self::deregister).
    pub fn register(&self, name: &str, gauge: Arc<dyn Gauge>) -> Result<()> {
        if name.is_empty() {
            return Err(GaugeLinkError::InvalidArgument(
                "gauge name must be non-empty".into(),
            ));
        }
        match self.gauges.entry(name.to_string()) {
            dashmap::mapref::entry::Entry::Occupied(_) => {
                Err(GaugeLinkError::AlreadyRegistered(name.to_string()))
            }
            dashmap::mapref::entry::Entry::Vacant(e) => {
                e.insert(gauge);
                tracing::debug!(gauge = name, "registered");
                Ok(())
            }
        }
    }

    /// Tear down one registration. Returns whether the name was present.
    pub fn deregister(&self, name: &str) -> bool {
        let removed = self.gauges.remove(name).is_some();
        if removed {
            tracing::debug!(gauge = name, "deregistered");
        }
        removed
    }

    /// Poll a single gauge by name.
    pub fn read(&self, name: &str) -> Option<f64> {
        self.gauges.get(name).map(|g| (*g).value())
    }

    /// Number of registered gauges.
    pub fn len(&self) -> usize {
        self.gauges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gauges.is_empty()
    }

    /// Render all gauges in Prometheus text exposition format.
    pub fn render(&self) -> String {
        let mut names: Vec<String> = self.gauges.iter().map(|r| r.key().clone()).collect();
        names.sort();

        let mut out = String::new();
        for name in names {
            // A gauge may be deregistered between the snapshot and here.
            if let Some(g) = self.gauges.get(&name) {
                let _ = writeln!(out, "# TYPE {} gauge", name);
                let _ = writeln!(out, "{} {}", name, (*g).value());
            }
        }
        out
    }
}
