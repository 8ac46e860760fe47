//! JSON snapshot file task store

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use super::{MemoryStore, TaskStore};
use crate::error::{Error, Result};
use crate::models::{NewTask, Task, TaskUpdate};

/// Task store that rewrites a JSON snapshot file after every change
///
/// Writes go to a temporary file in the same directory which is then
/// renamed over the snapshot, so a crash never leaves a half-written file.
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonFileStore {
    /// Open a snapshot file
    ///
    /// A missing file is treated as an empty task list; it is created on the
    /// first mutation.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let tasks: Vec<Task> = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                vec![]
            } else {
                serde_json::from_str(&content).map_err(|e| {
                    Error::InvalidData(format!(
                        "Failed to parse task file {}: {}",
                        path.display(),
                        e
                    ))
                })?
            }
        } else {
            debug!(path = %path.display(), "Task file not found, starting empty");
            vec![]
        };

        info!(path = %path.display(), count = tasks.len(), "Opened task file");

        Ok(Self {
            inner: MemoryStore::with_tasks(tasks)?,
            path,
        })
    }

    /// Path of the snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply a mutation and write the snapshot
    ///
    /// If the write fails the in-memory list is restored, so memory and
    /// file never disagree.
    fn commit<T, F>(&mut self, mutate: F) -> Result<T>
    where
        F: FnOnce(&mut MemoryStore) -> Result<T>,
    {
        let before = self.inner.clone();
        let out = mutate(&mut self.inner)?;
        if let Err(e) = self.save() {
            warn!(path = %self.path.display(), error = %e, "Failed to save task file, change rolled back");
            self.inner = before;
            return Err(e);
        }
        Ok(out)
    }

    fn save(&self) -> Result<()> {
        let dir = match self.path.parent() {
            Some(d) if !d.as_os_str().is_empty() => d.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
            info!("Created data directory: {}", dir.display());
        }

        let tasks = self.inner.list()?;
        let tmp = NamedTempFile::new_in(&dir)?;
        {
            let mut writer = BufWriter::new(tmp.as_file());
            serde_json::to_writer_pretty(&mut writer, &tasks)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        tmp.persist(&self.path).map_err(|e| Error::Io(e.error))?;

        debug!(path = %self.path.display(), count = tasks.len(), "Saved task file");
        Ok(())
    }
}

impl TaskStore for JsonFileStore {
    fn name(&self) -> &str {
        "json-file"
    }

    fn list(&self) -> Result<Vec<Task>> {
        self.inner.list()
    }

    fn get(&self, id: &str) -> Result<Option<Task>> {
        self.inner.get(id)
    }

    fn create(&mut self, new: NewTask) -> Result<Task> {
        self.commit(|tasks| tasks.create(new))
    }

    fn update(&mut self, id: &str, update: TaskUpdate) -> Result<Task> {
        self.commit(|tasks| tasks.update(id, update))
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        self.commit(|tasks| tasks.delete(id))
    }
}
