//! Domain models for Taskify

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Category assigned when a task is created without one
pub const DEFAULT_CATEGORY: &str = "General";

/// Categories offered before the user has created any of their own
pub const PREDEFINED_CATEGORIES: &[&str] = &[
    "Work", "Personal", "Health", "Finance", "Learning", "Shopping", "Travel", "General",
];

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" | "med" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("Unknown priority: {}", s)),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user-owned unit of work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub priority: Priority,
    pub category: String,
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub ai_suggested: bool,
}

impl Task {
    /// True when the task is incomplete and its due date has passed
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.completed && self.due_date.is_some_and(|due| due < now)
    }

    /// Whole days until the due date, rounded up
    ///
    /// A task due in one millisecond is one day away; a task due now or in
    /// the past yields zero or a negative count.
    pub fn days_until_due(&self, now: DateTime<Utc>) -> Option<i64> {
        let due = self.due_date?;
        let millis = (due - now).num_milliseconds();
        Some(ceil_div(millis, MILLIS_PER_DAY))
    }

    /// Apply a partial update, bumping `updated_at`
    pub fn apply_update(&mut self, update: TaskUpdate, now: DateTime<Utc>) -> Result<()> {
        if let Some(title) = update.title {
            self.title = normalize_title(&title)?;
        }
        if let Some(description) = update.description {
            self.description = description.filter(|d| !d.trim().is_empty());
        }
        if let Some(completed) = update.completed {
            self.completed = completed;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(category) = update.category {
            self.category = normalize_category(&category);
        }
        if let Some(due_date) = update.due_date {
            self.due_date = due_date;
        }
        if let Some(ai_suggested) = update.ai_suggested {
            self.ai_suggested = ai_suggested;
        }
        self.updated_at = now.max(self.created_at);
        Ok(())
    }
}

/// Fields supplied by the caller when creating a task
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ai_suggested: bool,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Validate and stamp a new task with its ID and timestamps
    pub fn into_task(self, id: String, now: DateTime<Utc>) -> Result<Task> {
        Ok(Task {
            id,
            title: normalize_title(&self.title)?,
            description: self.description.filter(|d| !d.trim().is_empty()),
            completed: self.completed,
            priority: self.priority,
            category: normalize_category(&self.category),
            due_date: self.due_date,
            created_at: now,
            updated_at: now,
            ai_suggested: self.ai_suggested,
        })
    }
}

/// Partial update for a task
///
/// `description` and `due_date` are double options: absent leaves the field
/// alone, `null` clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub due_date: Option<Option<DateTime<Utc>>>,
    #[serde(default)]
    pub ai_suggested: Option<bool>,
}

impl TaskUpdate {
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.completed.is_none()
            && self.priority.is_none()
            && self.category.is_none()
            && self.due_date.is_none()
            && self.ai_suggested.is_none()
    }
}

fn deserialize_some<'de, T, D>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn normalize_title(title: &str) -> Result<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(Error::InvalidData("Task title must not be empty".into()));
    }
    Ok(title.to_string())
}

fn normalize_category(category: &str) -> String {
    let category = category.trim();
    if category.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        category.to_string()
    }
}

fn ceil_div(numerator: i64, denominator: i64) -> i64 {
    let quotient = numerator / denominator;
    if numerator % denominator > 0 {
        quotient + 1
    } else {
        quotient
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
    }

    fn task_due(due: Option<DateTime<Utc>>) -> Task {
        NewTask::new("Write report")
            .into_task("t1".into(), now() - Duration::days(1))
            .map(|mut t| {
                t.due_date = due;
                t
            })
            .unwrap()
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("med".parse::<Priority>().unwrap(), Priority::Medium);
        assert!("urgent".parse::<Priority>().is_err());
        assert_eq!(Priority::Low.to_string(), "low");
    }

    #[test]
    fn test_days_until_due_rounds_up() {
        let t = task_due(Some(now() + Duration::milliseconds(1)));
        assert_eq!(t.days_until_due(now()), Some(1));

        let t = task_due(Some(now() + Duration::days(3)));
        assert_eq!(t.days_until_due(now()), Some(3));

        let t = task_due(Some(now() + Duration::days(3) + Duration::hours(1)));
        assert_eq!(t.days_until_due(now()), Some(4));
    }

    #[test]
    fn test_days_until_due_past_and_now() {
        let t = task_due(Some(now()));
        assert_eq!(t.days_until_due(now()), Some(0));

        // Ceiling of -0.5 days is 0
        let t = task_due(Some(now() - Duration::hours(12)));
        assert_eq!(t.days_until_due(now()), Some(0));

        let t = task_due(Some(now() - Duration::hours(36)));
        assert_eq!(t.days_until_due(now()), Some(-1));

        assert_eq!(task_due(None).days_until_due(now()), None);
    }

    #[test]
    fn test_is_overdue() {
        let mut t = task_due(Some(now() - Duration::minutes(5)));
        assert!(t.is_overdue(now()));

        t.completed = true;
        assert!(!t.is_overdue(now()));

        assert!(!task_due(None).is_overdue(now()));
    }

    #[test]
    fn test_new_task_defaults() {
        let task = NewTask::new("  Buy milk  ").into_task("id".into(), now()).unwrap();
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.category, DEFAULT_CATEGORY);
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.created_at, task.updated_at);
        assert!(!task.ai_suggested);
    }

    #[test]
    fn test_new_task_rejects_blank_title() {
        let err = NewTask::new("   ").into_task("id".into(), now()).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn test_apply_update() {
        let mut task = NewTask::new("Draft")
            .with_description("notes")
            .into_task("id".into(), now())
            .unwrap();

        let later = now() + Duration::hours(2);
        let update = TaskUpdate {
            title: Some("Final".into()),
            description: Some(None),
            priority: Some(Priority::High),
            ..Default::default()
        };
        task.apply_update(update, later).unwrap();

        assert_eq!(task.title, "Final");
        assert_eq!(task.description, None);
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.updated_at, later);
    }

    #[test]
    fn test_apply_update_keeps_updated_after_created() {
        let mut task = NewTask::new("Draft").into_task("id".into(), now()).unwrap();
        task.apply_update(TaskUpdate::completed(true), now() - Duration::days(1))
            .unwrap();
        assert!(task.updated_at >= task.created_at);
    }

    #[test]
    fn test_task_update_double_option() {
        let update: TaskUpdate = serde_json::from_str(r#"{"due_date": null}"#).unwrap();
        assert_eq!(update.due_date, Some(None));
        assert_eq!(update.description, None);

        let update: TaskUpdate = serde_json::from_str(r#"{"completed": true}"#).unwrap();
        assert_eq!(update.due_date, None);
        assert!(!update.is_empty());

        let update: TaskUpdate = serde_json::from_str("{}").unwrap();
        assert!(update.is_empty());
    }
}
