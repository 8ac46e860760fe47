//! Shared command utilities
//!
//! This module contains:
//! - `open_board` - Open the task file as a task board
//! - `resolve_id` - Expand a task ID prefix to the full ID
//! - `parse_due_date` - Parse a `YYYY-MM-DD` due date

use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use taskify_core::{JsonFileStore, TaskBoard};

/// Number of ID characters shown in listings
pub const SHORT_ID_LEN: usize = 8;

/// Open the task snapshot file (created on first write)
pub fn open_board(data_file: &Path) -> Result<TaskBoard> {
    tracing::debug!(path = %data_file.display(), "Opening task file");
    let store = JsonFileStore::open(data_file)
        .with_context(|| format!("Failed to open task file {}", data_file.display()))?;
    Ok(TaskBoard::new(Box::new(store)))
}

/// Resolve a full task ID or a unique prefix of one
pub fn resolve_id(board: &TaskBoard, query: &str) -> Result<String> {
    let query = query.trim();
    if query.is_empty() {
        bail!("Task ID must not be empty");
    }

    let tasks = board.tasks()?;
    if tasks.iter().any(|t| t.id == query) {
        return Ok(query.to_string());
    }

    let matches: Vec<&str> = tasks
        .iter()
        .filter(|t| t.id.starts_with(query))
        .map(|t| t.id.as_str())
        .collect();

    match matches.as_slice() {
        [id] => Ok(id.to_string()),
        [] => bail!("Task not found: {}", query),
        _ => bail!(
            "'{}' matches {} tasks; use more of the ID",
            query,
            matches.len()
        ),
    }
}

/// Parse a `YYYY-MM-DD` date as midnight UTC
pub fn parse_due_date(input: &str) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid due date '{}' (expected YYYY-MM-DD)", input))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .context("Invalid due date time")?;
    Ok(Utc.from_utc_datetime(&midnight))
}

/// First characters of an ID, for display
pub fn short_id(id: &str) -> String {
    id.chars().take(SHORT_ID_LEN).collect()
}
