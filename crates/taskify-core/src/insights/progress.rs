//! Progress insights
//!
//! - Completion rate: praises a high completion rate, or nudges toward
//!   smaller goals when it is low (at most one of the two fires)
//! - Weekly summary: tasks created and completed over the last seven days

use chrono::{DateTime, Duration, Utc};

use crate::models::Task;

use super::engine::InsightRule;
use super::types::{Insight, InsightId, InsightKind};

/// Completion rate (percent) above which productivity is praised
pub const HIGH_COMPLETION_RATE: f64 = 80.0;

/// Minimum task count for the high-productivity insight
pub const HIGH_COMPLETION_MIN_TASKS: usize = 5;

/// Completion rate (percent) below which smaller goals are suggested
pub const LOW_COMPLETION_RATE: f64 = 30.0;

/// Minimum task count for the low-completion insight
pub const LOW_COMPLETION_MIN_TASKS: usize = 3;

/// Length of the weekly summary window
pub const WEEKLY_WINDOW_DAYS: i64 = 7;

/// Share of this week's tasks that must be completed to count as progress
pub const WEEKLY_PROGRESS_SHARE: f64 = 0.7;

/// Percentage of tasks completed, 0 for an empty list
pub fn completion_rate(tasks: &[Task]) -> f64 {
    if tasks.is_empty() {
        return 0.0;
    }
    let completed = tasks.iter().filter(|t| t.completed).count();
    completed as f64 / tasks.len() as f64 * 100.0
}

/// Either high-productivity or low-completion, never both
pub struct CompletionRateRule;

impl InsightRule for CompletionRateRule {
    fn id(&self) -> &'static str {
        "completion-rate"
    }

    fn name(&self) -> &'static str {
        "Completion Rate"
    }

    fn evaluate(&self, tasks: &[Task], now: DateTime<Utc>) -> Option<Insight> {
        let total = tasks.len();
        let rate = completion_rate(tasks);

        if rate > HIGH_COMPLETION_RATE && total > HIGH_COMPLETION_MIN_TASKS {
            Some(Insight::new(
                InsightId::HighProductivity,
                InsightKind::Suggestion,
                "Excellent productivity!",
                format!(
                    "You've completed {}% of your tasks. Keep up the great work!",
                    rate.round() as i64
                ),
                now,
            ))
        } else if rate < LOW_COMPLETION_RATE && total > LOW_COMPLETION_MIN_TASKS {
            Some(
                Insight::new(
                    InsightId::LowCompletion,
                    InsightKind::Suggestion,
                    "Focus on completion",
                    "Consider setting smaller, more achievable goals to build momentum.",
                    now,
                )
                .actionable(),
            )
        } else {
            None
        }
    }
}

/// Summarizes the tasks created during the last week
pub struct WeeklySummaryRule;

impl InsightRule for WeeklySummaryRule {
    fn id(&self) -> &'static str {
        "weekly-summary"
    }

    fn name(&self) -> &'static str {
        "Weekly Summary"
    }

    fn evaluate(&self, tasks: &[Task], now: DateTime<Utc>) -> Option<Insight> {
        let week_ago = now - Duration::days(WEEKLY_WINDOW_DAYS);
        let (created, completed) = tasks
            .iter()
            .filter(|t| t.created_at > week_ago)
            .fold((0usize, 0usize), |(created, completed), t| {
                (created + 1, completed + usize::from(t.completed))
            });
        if created == 0 {
            return None;
        }

        let verdict = if completed as f64 >= created as f64 * WEEKLY_PROGRESS_SHARE {
            "Great progress!"
        } else {
            "Room for improvement!"
        };

        Some(Insight::new(
            InsightId::WeeklySummary,
            InsightKind::Suggestion,
            "Weekly summary",
            format!(
                "This week you created {} tasks and completed {}. {}",
                created, completed, verdict
            ),
            now,
        ))
    }
}
