//! Taskify Core Library
//!
//! Shared functionality for the Taskify task tracker:
//! - Task model with partial updates and validation
//! - Rule-based insight generator
//! - Dashboard statistics, search and filtering
//! - Pluggable task stores (in-memory, JSON snapshot file)
//! - Task board that recomputes insights only when tasks change
//! - "Apply insight" dispatch to a host-supplied handler
//! - Layered TOML configuration

pub mod apply;
pub mod board;
pub mod config;
pub mod error;
pub mod filter;
pub mod insights;
pub mod models;
pub mod stats;
pub mod store;

/// Test fixtures
#[cfg(test)]
pub mod test_utils;

pub use apply::{ApplyHandler, ApplyOutcome, InsightDispatcher, LoggingHandler};
pub use board::TaskBoard;
pub use config::{Config, ServerSettings};
pub use error::{Error, Result};
pub use filter::{categories, TaskFilter};
pub use insights::{Insight, InsightGenerator, InsightId, InsightKind, InsightRule};
pub use models::{NewTask, Priority, Task, TaskUpdate};
pub use stats::TaskStats;
pub use store::{JsonFileStore, MemoryStore, TaskStore};
