//! Insight Generator - Rule-Based Task Insights
//!
//! Scans the current task list and surfaces short advisory messages: what
//! is overdue, what is coming up, and how the workload is shaped. Each
//! heuristic is an independent [`InsightRule`]; the [`InsightGenerator`]
//! runs them in a fixed order and each contributes at most one insight.
//!
//! ## Built-in Rules (in output order)
//!
//! 1. **Overdue tasks** - incomplete tasks past their due date
//! 2. **Upcoming deadlines** - incomplete tasks due within 3 days
//! 3. **High-priority backlog** - more than 3 open high-priority tasks
//! 4. **Completion rate** - high productivity or low completion
//! 5. **Category imbalance** - one category holds over 60% of tasks
//! 6. **Weekly summary** - tasks created and completed this week
//!
//! ## Usage
//!
//! ```rust,ignore
//! use taskify_core::insights::InsightGenerator;
//!
//! let generator = InsightGenerator::new();
//! let insights = generator.generate(&tasks);
//! ```

pub mod deadlines;
pub mod engine;
pub mod progress;
pub mod types;
pub mod workload;

pub use deadlines::{OverdueTasksRule, UpcomingDeadlinesRule};
pub use engine::{InsightGenerator, InsightRule};
pub use progress::{completion_rate, CompletionRateRule, WeeklySummaryRule};
pub use types::{Insight, InsightId, InsightKind};
pub use workload::{dominant_category, CategoryImbalanceRule, HighPriorityBacklogRule};
