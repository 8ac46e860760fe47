//! Task storage with pluggable backends
//!
//! The store owns the canonical task list. The insight generator only ever
//! sees read-only snapshots from [`TaskStore::list`].
//!
//! # Architecture
//!
//! - `TaskStore` trait defines the CRUD interface
//! - `MemoryStore` keeps tasks in process memory
//! - `JsonFileStore` wraps a `MemoryStore` and writes a JSON snapshot after
//!   every mutation
//!
//! # Snapshot Format
//!
//! A pretty-printed JSON array of tasks with snake_case fields and RFC 3339
//! timestamps, e.g.
//!
//! ```json
//! [{"id": "…", "title": "Ship release", "completed": false, "priority": "high", …}]
//! ```

use crate::error::{Error, Result};
use crate::models::{NewTask, Task, TaskUpdate};

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Trait for task storage backends
pub trait TaskStore: Send + Sync {
    /// Human-readable name for this backend
    fn name(&self) -> &str;

    /// All tasks, newest created first
    fn list(&self) -> Result<Vec<Task>>;

    /// Look up a single task
    fn get(&self, id: &str) -> Result<Option<Task>>;

    /// Create a task, assigning its ID and timestamps
    fn create(&mut self, new: NewTask) -> Result<Task>;

    /// Apply a partial update
    ///
    /// Returns `Error::NotFound` for an unknown ID.
    fn update(&mut self, id: &str, update: TaskUpdate) -> Result<Task>;

    /// Remove a task
    ///
    /// Returns `Error::NotFound` for an unknown ID.
    fn delete(&mut self, id: &str) -> Result<()>;

    /// Flip the completed flag
    fn toggle_complete(&mut self, id: &str) -> Result<Task> {
        let task = self
            .get(id)?
            .ok_or_else(|| Error::NotFound(format!("Task {}", id)))?;
        self.update(id, TaskUpdate::completed(!task.completed))
    }
}
