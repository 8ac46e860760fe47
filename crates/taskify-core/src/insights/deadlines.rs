//! Deadline insights
//!
//! - Overdue tasks: incomplete tasks whose due date has passed
//! - Upcoming deadlines: incomplete tasks due within the next few days

use chrono::{DateTime, Utc};

use crate::models::Task;

use super::engine::InsightRule;
use super::types::{tasks_noun, Insight, InsightId, InsightKind};

/// Tasks due within this many days count as upcoming
pub const UPCOMING_WINDOW_DAYS: i64 = 3;

/// Flags incomplete tasks that are past their due date
pub struct OverdueTasksRule;

impl InsightRule for OverdueTasksRule {
    fn id(&self) -> &'static str {
        "overdue-tasks"
    }

    fn name(&self) -> &'static str {
        "Overdue Tasks"
    }

    fn evaluate(&self, tasks: &[Task], now: DateTime<Utc>) -> Option<Insight> {
        let overdue = tasks.iter().filter(|t| t.is_overdue(now)).count();
        if overdue == 0 {
            return None;
        }

        Some(
            Insight::new(
                InsightId::OverdueTasks,
                InsightKind::Priority,
                "Overdue tasks detected",
                format!(
                    "You have {} overdue {}. Consider prioritizing them.",
                    overdue,
                    tasks_noun(overdue)
                ),
                now,
            )
            .actionable(),
        )
    }
}

/// Counts incomplete tasks due in the next few days
///
/// Tasks already past due belong to [`OverdueTasksRule`] instead.
pub struct UpcomingDeadlinesRule;

impl InsightRule for UpcomingDeadlinesRule {
    fn id(&self) -> &'static str {
        "upcoming-deadlines"
    }

    fn name(&self) -> &'static str {
        "Upcoming Deadlines"
    }

    fn evaluate(&self, tasks: &[Task], now: DateTime<Utc>) -> Option<Insight> {
        let upcoming = tasks
            .iter()
            .filter(|t| !t.completed)
            .filter_map(|t| t.days_until_due(now))
            .filter(|days| *days > 0 && *days <= UPCOMING_WINDOW_DAYS)
            .count();
        if upcoming == 0 {
            return None;
        }

        Some(Insight::new(
            InsightId::UpcomingDeadlines,
            InsightKind::Priority,
            "Deadlines approaching",
            format!(
                "You have {} {} due within the next {} days.",
                upcoming,
                tasks_noun(upcoming),
                UPCOMING_WINDOW_DAYS
            ),
            now,
        ))
    }
}
