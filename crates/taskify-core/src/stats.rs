//! Aggregate task statistics for the dashboard header

use serde::{Deserialize, Serialize};

use crate::insights::completion_rate;
use crate::models::{Priority, Task};

/// Counts shown above the task list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    /// High-priority tasks, complete or not
    pub high_priority: usize,
    pub ai_suggested: usize,
    /// Completed share as a whole percentage
    pub completion_rate: u32,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        Self {
            total: tasks.len(),
            completed: tasks.iter().filter(|t| t.completed).count(),
            high_priority: tasks
                .iter()
                .filter(|t| t.priority == Priority::High)
                .count(),
            ai_suggested: tasks.iter().filter(|t| t.ai_suggested).count(),
            completion_rate: completion_rate(tasks).round() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_stats_empty() {
        assert_eq!(TaskStats::from_tasks(&[]), TaskStats::default());
    }

    #[test]
    fn test_stats_counts() {
        let mut suggested = task("d");
        suggested.ai_suggested = true;

        let tasks = vec![
            task("a").priority(Priority::High).completed(true),
            task("b").priority(Priority::High),
            task("c").completed(true),
            suggested,
        ];

        let stats = TaskStats::from_tasks(&tasks);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.high_priority, 2);
        assert_eq!(stats.ai_suggested, 1);
        assert_eq!(stats.completion_rate, 50);
    }

    #[test]
    fn test_stats_rate_rounds() {
        let tasks = vec![task("a").completed(true), task("b"), task("c")];
        assert_eq!(TaskStats::from_tasks(&tasks).completion_rate, 33);

        let tasks = vec![task("a").completed(true), task("b").completed(true), task("c")];
        assert_eq!(TaskStats::from_tasks(&tasks).completion_rate, 67);
    }
}
