//! Command implementations for the letsbus CLI

pub mod pages;
pub mod report;
#[cfg(feature = "server")]
pub mod serve;
pub mod stats;

// Re-export dispatcher functions for flat access from main.rs
pub use pages::{run_bus, run_open, run_routes, run_user, run_users};
pub use report::run_report;
#[cfg(feature = "server")]
pub use serve::run_serve;
pub use stats::run_stats;
