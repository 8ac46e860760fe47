//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod insights;
pub mod stats;
pub mod tasks;

// Re-export all handlers for use in router
pub use insights::*;
pub use stats::*;
pub use tasks::*;
