//! gaugelink core: metric and gauge contracts plus the value adapter.
//!
//! This crate defines the capability traits bridged by gaugelink — the
//! untyped [`metric::Metric`] surface reported by a messaging-client library
//! and the float-valued [`gauge::Gauge`] surface polled by a reporting
//! framework — together with the adapters that connect them. It carries no
//! runtime dependencies so it can be embedded wherever the client library
//! lives.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Gauge reads happen on reporting-framework polling threads; a poisoned or
//! surprising metric must never take the reporter down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod gauge;
pub mod metric;

/// Shared result type.
pub use error::{GaugeLinkError, Result};
