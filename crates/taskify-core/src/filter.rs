//! Task list filtering and category listing
//!
//! Filters are presentation state: applying one never changes the task list
//! and never triggers insight recomputation.

use serde::{Deserialize, Serialize};

use crate::models::{Priority, Task, PREDEFINED_CATEGORIES};

/// Search text plus optional priority and category constraints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskFilter {
    /// Case-insensitive substring of the title or description
    pub search: Option<String>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
}

impl TaskFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Whether a single task passes the filter
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_search(task)
            && self.priority.map_or(true, |p| task.priority == p)
            && self
                .category
                .as_deref()
                .map_or(true, |c| task.category == c)
    }

    fn matches_search(&self, task: &Task) -> bool {
        let query = match self.search.as_deref().map(str::trim) {
            Some(q) if !q.is_empty() => q.to_lowercase(),
            _ => return true,
        };

        task.title.to_lowercase().contains(&query)
            || task
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&query))
    }

    /// Tasks passing the filter, in their original order
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|t| self.matches(t)).collect()
    }
}

/// Predefined categories followed by any others used by tasks, first-seen
/// order, without duplicates
pub fn categories(tasks: &[Task]) -> Vec<String> {
    let mut out: Vec<String> = PREDEFINED_CATEGORIES.iter().map(|c| c.to_string()).collect();
    for task in tasks {
        if !out.iter().any(|c| c == &task.category) {
            out.push(task.category.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn sample() -> Vec<Task> {
        vec![
            task("Write quarterly report")
                .priority(Priority::High)
                .category("Work"),
            task("Gym").category("Health").described("Leg day REPORT"),
            task("Groceries").priority(Priority::Low).category("Shopping"),
            task("Pottery class").category("Hobbies"),
        ]
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let tasks = sample();
        assert_eq!(TaskFilter::new().apply(&tasks).len(), 4);
        assert_eq!(TaskFilter::new().search("   ").apply(&tasks).len(), 4);
    }

    #[test]
    fn test_search_title_and_description() {
        let tasks = sample();
        let found = TaskFilter::new().search("report").apply(&tasks);
        let titles: Vec<&str> = found.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Write quarterly report", "Gym"]);
    }

    #[test]
    fn test_priority_and_category() {
        let tasks = sample();
        assert_eq!(
            TaskFilter::new().priority(Priority::Low).apply(&tasks)[0].title,
            "Groceries"
        );
        assert!(TaskFilter::new()
            .priority(Priority::High)
            .category("Health")
            .apply(&tasks)
            .is_empty());
        assert_eq!(TaskFilter::new().category("Work").apply(&tasks).len(), 1);
    }

    #[test]
    fn test_categories_appends_custom() {
        let cats = categories(&sample());
        assert_eq!(cats.len(), PREDEFINED_CATEGORIES.len() + 1);
        assert_eq!(cats[0], "Work");
        assert_eq!(cats.last().unwrap(), "Hobbies");
    }

    #[test]
    fn test_categories_deduplicates() {
        let tasks = vec![
            task("a").category("Garden"),
            task("b").category("Garden"),
            task("c").category("Work"),
        ];
        let cats = categories(&tasks);
        assert_eq!(cats.iter().filter(|c| *c == "Garden").count(), 1);
        assert_eq!(cats.iter().filter(|c| *c == "Work").count(), 1);
    }
}
