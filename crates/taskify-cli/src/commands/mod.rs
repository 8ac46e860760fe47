//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `config` - Effective configuration output
//! - `core` - Shared utilities (open_board, resolve_id, parse_due_date)
//! - `insights` - Insight and statistics commands
//! - `serve` - Web server command
//! - `tasks` - Task commands (list, add, edit, complete, delete, categories)

pub mod config;
pub mod core;
pub mod insights;
pub mod serve;
pub mod tasks;

// Re-export command functions for main.rs
pub use config::*;
pub use core::*;
pub use insights::*;
pub use serve::*;
pub use tasks::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
