//! Core types for the Insight Generator

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of insights the built-in rules can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsightId {
    OverdueTasks,
    UpcomingDeadlines,
    HighPriorityBacklog,
    HighProductivity,
    LowCompletion,
    CategoryImbalance,
    WeeklySummary,
}

impl InsightId {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightId::OverdueTasks => "overdue-tasks",
            InsightId::UpcomingDeadlines => "upcoming-deadlines",
            InsightId::HighPriorityBacklog => "high-priority-backlog",
            InsightId::HighProductivity => "high-productivity",
            InsightId::LowCompletion => "low-completion",
            InsightId::CategoryImbalance => "category-imbalance",
            InsightId::WeeklySummary => "weekly-summary",
        }
    }
}

impl fmt::Display for InsightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overdue-tasks" => Ok(InsightId::OverdueTasks),
            "upcoming-deadlines" => Ok(InsightId::UpcomingDeadlines),
            "high-priority-backlog" => Ok(InsightId::HighPriorityBacklog),
            "high-productivity" => Ok(InsightId::HighProductivity),
            "low-completion" => Ok(InsightId::LowCompletion),
            "category-imbalance" => Ok(InsightId::CategoryImbalance),
            "weekly-summary" => Ok(InsightId::WeeklySummary),
            _ => Err(format!("Unknown insight id: {}", s)),
        }
    }
}

/// Broad kind of an insight, used by the presentation layer to pick an icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// General advice about habits
    Suggestion,
    /// Something time-sensitive
    Priority,
    /// A way to organize the workload better
    Optimization,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::Suggestion => "suggestion",
            InsightKind::Priority => "priority",
            InsightKind::Optimization => "optimization",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An advisory message derived from the current task list
///
/// Insights are never persisted or patched; the whole list is replaced
/// whenever the task list changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub id: InsightId,
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
    /// Whether the presentation layer should offer an "apply" action
    pub actionable: bool,
    pub created_at: DateTime<Utc>,
}

impl Insight {
    /// Create an informational insight stamped with `created_at`
    pub fn new(
        id: InsightId,
        kind: InsightKind,
        title: impl Into<String>,
        description: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            kind,
            title: title.into(),
            description: description.into(),
            actionable: false,
            created_at,
        }
    }

    /// Mark the insight as offering a follow-up action
    pub fn actionable(mut self) -> Self {
        self.actionable = true;
        self
    }
}

/// "task" or "tasks" depending on the count
pub(crate) fn tasks_noun(n: usize) -> &'static str {
    if n == 1 {
        "task"
    } else {
        "tasks"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insight_id_round_trips_through_str() {
        assert_eq!(InsightId::OverdueTasks.as_str(), "overdue-tasks");
        assert_eq!(
            InsightId::from_str("category-imbalance").unwrap(),
            InsightId::CategoryImbalance
        );
        assert!(InsightId::from_str("unknown").is_err());
    }

    #[test]
    fn test_insight_serializes_kind_as_type() {
        let insight = Insight::new(
            InsightId::WeeklySummary,
            InsightKind::Suggestion,
            "Weekly summary",
            "text",
            Utc::now(),
        );
        let json = serde_json::to_value(&insight).unwrap();
        assert_eq!(json["id"], "weekly-summary");
        assert_eq!(json["type"], "suggestion");
        assert_eq!(json["actionable"], false);
    }

    #[test]
    fn test_actionable_builder() {
        let insight = Insight::new(
            InsightId::OverdueTasks,
            InsightKind::Priority,
            "t",
            "d",
            Utc::now(),
        )
        .actionable();
        assert!(insight.actionable);
    }

    #[test]
    fn test_tasks_noun() {
        assert_eq!(tasks_noun(1), "task");
        assert_eq!(tasks_noun(0), "tasks");
        assert_eq!(tasks_noun(2), "tasks");
    }
}
