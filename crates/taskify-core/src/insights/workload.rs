//! Workload insights
//!
//! Looks at how the task list is shaped rather than at dates:
//! - High-priority backlog: too many open high-priority tasks
//! - Category imbalance: one category dominates the list

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::models::{Priority, Task};

use super::engine::InsightRule;
use super::types::{Insight, InsightId, InsightKind};

/// Open high-priority tasks above this count form a backlog
pub const HIGH_PRIORITY_BACKLOG_THRESHOLD: usize = 3;

/// Share of all tasks a single category must exceed
pub const CATEGORY_DOMINANCE_SHARE: f64 = 0.6;

/// Category imbalance is only reported above this many tasks
pub const CATEGORY_MIN_TASKS: usize = 5;

/// Suggests splitting work when too many high-priority tasks are open
pub struct HighPriorityBacklogRule;

impl InsightRule for HighPriorityBacklogRule {
    fn id(&self) -> &'static str {
        "high-priority-backlog"
    }

    fn name(&self) -> &'static str {
        "High Priority Backlog"
    }

    fn evaluate(&self, tasks: &[Task], now: DateTime<Utc>) -> Option<Insight> {
        let open_high = tasks
            .iter()
            .filter(|t| t.priority == Priority::High && !t.completed)
            .count();
        if open_high <= HIGH_PRIORITY_BACKLOG_THRESHOLD {
            return None;
        }

        Some(
            Insight::new(
                InsightId::HighPriorityBacklog,
                InsightKind::Optimization,
                "High priority task backlog",
                format!(
                    "You have {} high-priority tasks. Consider breaking them into smaller chunks.",
                    open_high
                ),
                now,
            )
            .actionable(),
        )
    }
}

/// Reports when most tasks sit in a single category
pub struct CategoryImbalanceRule;

impl InsightRule for CategoryImbalanceRule {
    fn id(&self) -> &'static str {
        "category-imbalance"
    }

    fn name(&self) -> &'static str {
        "Category Imbalance"
    }

    fn evaluate(&self, tasks: &[Task], now: DateTime<Utc>) -> Option<Insight> {
        let total = tasks.len();
        if total <= CATEGORY_MIN_TASKS {
            return None;
        }

        let (category, count) = dominant_category(tasks)?;
        if count as f64 <= total as f64 * CATEGORY_DOMINANCE_SHARE {
            return None;
        }

        Some(
            Insight::new(
                InsightId::CategoryImbalance,
                InsightKind::Optimization,
                "Task category imbalance",
                format!(
                    "Most of your tasks ({}) are in \"{}\". Consider diversifying your focus areas.",
                    count, category
                ),
                now,
            )
            .actionable(),
        )
    }
}

/// Largest category by task count
///
/// Categories are grouped in first-seen order; on equal counts the category
/// seen first wins.
pub fn dominant_category(tasks: &[Task]) -> Option<(&str, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, usize)> = Vec::new();

    for task in tasks {
        let category = task.category.as_str();
        match index.get(category) {
            Some(&i) => groups[i].1 += 1,
            None => {
                index.insert(category, groups.len());
                groups.push((category, 1));
            }
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for group in groups {
        // Strictly greater keeps the earlier category on ties
        if best.map_or(true, |(_, count)| group.1 > count) {
            best = Some(group);
        }
    }
    best
}
