//! In-memory task store

use std::collections::HashSet;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::TaskStore;
use crate::error::{Error, Result};
use crate::models::{NewTask, Task, TaskUpdate};

/// Task store backed by a `Vec` in process memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// Newest first
    tasks: Vec<Task>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing tasks
    ///
    /// Rejects lists containing duplicate IDs.
    pub fn with_tasks(mut tasks: Vec<Task>) -> Result<Self> {
        let mut seen = HashSet::new();
        for task in &tasks {
            if !seen.insert(task.id.as_str()) {
                return Err(Error::InvalidData(format!("Duplicate task id: {}", task.id)));
            }
        }

        // Stable sort keeps the given order among equal timestamps
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(Self { tasks })
    }

    /// Number of stored tasks
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| Error::NotFound(format!("Task {}", id)))
    }
}

impl TaskStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn list(&self) -> Result<Vec<Task>> {
        let mut tasks = self.tasks.clone();
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tasks)
    }

    fn get(&self, id: &str) -> Result<Option<Task>> {
        Ok(self.tasks.iter().find(|t| t.id == id).cloned())
    }

    fn create(&mut self, new: NewTask) -> Result<Task> {
        let task = new.into_task(Uuid::new_v4().to_string(), Utc::now())?;
        info!(id = %task.id, title = %task.title, "Created task");
        self.tasks.insert(0, task.clone());
        Ok(task)
    }

    fn update(&mut self, id: &str, update: TaskUpdate) -> Result<Task> {
        let idx = self.position(id)?;
        let task = &mut self.tasks[idx];
        task.apply_update(update, Utc::now())?;
        info!(id = %task.id, "Updated task");
        Ok(task.clone())
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let idx = self.position(id)?;
        let task = self.tasks.remove(idx);
        info!(id = %task.id, "Deleted task");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;
    use crate::test_utils::*;
    use chrono::Duration;

    #[test]
    fn test_create_and_get() {
        let mut store = MemoryStore::new();
        let task = store
            .create(NewTask::new("Pay rent").with_priority(Priority::High))
            .unwrap();

        assert!(!task.id.is_empty());
        assert_eq!(task.category, "General");
        assert_eq!(store.get(&task.id).unwrap().unwrap(), task);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut store = MemoryStore::new();
        let a = store.create(NewTask::new("a")).unwrap();
        let b = store.create(NewTask::new("b")).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_list_newest_first() {
        let mut store = MemoryStore::new();
        store.create(NewTask::new("first")).unwrap();
        store.create(NewTask::new("second")).unwrap();
        store.create(NewTask::new("third")).unwrap();

        let titles: Vec<String> = store.list().unwrap().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["third", "second", "first"]);
    }

    #[test]
    fn test_with_tasks_sorts_by_created() {
        let store = MemoryStore::with_tasks(vec![
            task("old").created(now() - Duration::days(3)),
            task("new").created(now()),
            task("mid").created(now() - Duration::days(1)),
        ])
        .unwrap();

        let titles: Vec<String> = store.list().unwrap().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_with_tasks_rejects_duplicate_ids() {
        let err = MemoryStore::with_tasks(vec![task("a"), task("a")]).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn test_update() {
        let mut store = MemoryStore::new();
        let task = store.create(NewTask::new("Draft")).unwrap();

        let updated = store
            .update(
                &task.id,
                TaskUpdate {
                    title: Some("Final".into()),
                    category: Some("Work".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.title, "Final");
        assert_eq!(updated.category, "Work");
        assert!(updated.updated_at >= updated.created_at);
        assert_eq!(store.get(&task.id).unwrap().unwrap().title, "Final");
    }

    #[test]
    fn test_update_rejects_blank_title() {
        let mut store = MemoryStore::new();
        let task = store.create(NewTask::new("Draft")).unwrap();
        let err = store
            .update(
                &task.id,
                TaskUpdate {
                    title: Some(" ".into()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn test_toggle_complete() {
        let mut store = MemoryStore::new();
        let task = store.create(NewTask::new("Laundry")).unwrap();

        assert!(store.toggle_complete(&task.id).unwrap().completed);
        assert!(!store.toggle_complete(&task.id).unwrap().completed);
    }

    #[test]
    fn test_delete() {
        let mut store = MemoryStore::new();
        let task = store.create(NewTask::new("Temp")).unwrap();
        store.delete(&task.id).unwrap();
        assert!(store.get(&task.id).unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let mut store = MemoryStore::new();
        assert!(matches!(
            store.delete("missing").unwrap_err(),
            Error::NotFound(_)
        ));
        assert!(matches!(
            store.update("missing", TaskUpdate::completed(true)).unwrap_err(),
            Error::NotFound(_)
        ));
        assert!(matches!(
            store.toggle_complete("missing").unwrap_err(),
            Error::NotFound(_)
        ));
    }
}
