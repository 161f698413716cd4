//! Top-level facade crate for gaugelink.
//!
//! Re-exports the core contracts and the reporting registry so users can
//! depend on a single crate.

pub mod core {
    pub use gaugelink_core::*;
}

pub mod report {
    pub use gaugelink_report::*;
}
