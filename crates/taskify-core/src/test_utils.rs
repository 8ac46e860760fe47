//! Test utilities for taskify-core
//!
//! Fixture helpers for building task lists against a fixed clock.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::models::{Priority, Task};

/// Fixed reference time used as "now" in tests
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
}

/// An incomplete medium-priority "General" task created an hour before `now()`
pub fn task(title: &str) -> Task {
    let created = now() - Duration::hours(1);
    Task {
        id: format!("task-{}", title),
        title: title.to_string(),
        description: None,
        completed: false,
        priority: Priority::Medium,
        category: "General".to_string(),
        due_date: None,
        created_at: created,
        updated_at: created,
        ai_suggested: false,
    }
}

/// Chainable tweaks for fixture tasks
pub trait TaskFixture {
    fn priority(self, priority: Priority) -> Self;
    fn category(self, category: &str) -> Self;
    fn due(self, due: DateTime<Utc>) -> Self;
    fn created(self, created: DateTime<Utc>) -> Self;
    fn completed(self, completed: bool) -> Self;
    fn described(self, description: &str) -> Self;
}

impl TaskFixture for Task {
    fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    fn category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    fn due(mut self, due: DateTime<Utc>) -> Self {
        self.due_date = Some(due);
        self
    }

    fn created(mut self, created: DateTime<Utc>) -> Self {
        self.created_at = created;
        self.updated_at = self.updated_at.max(created);
        self
    }

    fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    fn described(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// `n` tasks with the given title prefix
pub fn tasks(prefix: &str, n: usize) -> Vec<Task> {
    (0..n).map(|i| task(&format!("{}-{}", prefix, i))).collect()
}
