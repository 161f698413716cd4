//! gaugelink reporting side: gauge registry and client-metric bridge.
//!
//! This crate is the consumer of the [`gaugelink_core::gauge::Gauge`]
//! contract: it holds registered gauges, polls them on demand, and renders
//! them in Prometheus text format. Polling cadence belongs to whatever
//! scheduler embeds the registry.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod bridge;
pub mod registry;

pub use bridge::register_client_metrics;
pub use registry::GaugeRegistry;
