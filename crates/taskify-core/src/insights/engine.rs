//! Insight Generator - runs the registered rules in order

use chrono::{DateTime, Utc};

use crate::models::Task;

use super::types::Insight;
use super::{
    CategoryImbalanceRule, CompletionRateRule, HighPriorityBacklogRule, OverdueTasksRule,
    UpcomingDeadlinesRule, WeeklySummaryRule,
};

/// A single heuristic over the task list
///
/// Rules are pure: they read the task slice and `now`, and produce at most
/// one insight.
pub trait InsightRule: Send + Sync {
    /// Stable rule name, used for logging
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule against the current task list
    fn evaluate(&self, tasks: &[Task], now: DateTime<Utc>) -> Option<Insight>;
}

/// Registry of insight rules, evaluated in registration order
pub struct InsightGenerator {
    rules: Vec<Box<dyn InsightRule>>,
}

impl Default for InsightGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightGenerator {
    /// Create a generator with the built-in rules in their display order
    pub fn new() -> Self {
        let mut generator = Self::empty();

        generator.register(Box::new(OverdueTasksRule));
        generator.register(Box::new(UpcomingDeadlinesRule));
        generator.register(Box::new(HighPriorityBacklogRule));
        generator.register(Box::new(CompletionRateRule));
        generator.register(Box::new(CategoryImbalanceRule));
        generator.register(Box::new(WeeklySummaryRule));

        generator
    }

    /// Create a generator with no rules
    pub fn empty() -> Self {
        Self { rules: vec![] }
    }

    /// Append a rule; it runs after every rule registered before it
    pub fn register(&mut self, rule: Box<dyn InsightRule>) {
        self.rules.push(rule);
    }

    /// Generate insights as of the current wall-clock time
    pub fn generate(&self, tasks: &[Task]) -> Vec<Insight> {
        self.generate_at(tasks, Utc::now())
    }

    /// Generate insights as of `now`
    pub fn generate_at(&self, tasks: &[Task], now: DateTime<Utc>) -> Vec<Insight> {
        if tasks.is_empty() {
            return vec![];
        }

        let insights: Vec<Insight> = self
            .rules
            .iter()
            .filter_map(|rule| {
                let insight = rule.evaluate(tasks, now)?;
                tracing::debug!(rule = rule.id(), insight = %insight.id, "Insight rule fired");
                Some(insight)
            })
            .collect();

        tracing::debug!(
            tasks = tasks.len(),
            insights = insights.len(),
            "Insight generation complete"
        );

        insights
    }

    /// Names of the registered rules, in evaluation order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.id()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use crate::insights::{InsightId, InsightKind};
    use crate::models::Priority;
    use chrono::Duration;

    #[test]
    fn test_generator_creation() {
        let generator = InsightGenerator::new();
        assert_eq!(
            generator.rule_names(),
            vec![
                "overdue-tasks",
                "upcoming-deadlines",
                "high-priority-backlog",
                "completion-rate",
                "category-imbalance",
                "weekly-summary",
            ]
        );
    }

    #[test]
    fn test_empty_task_list() {
        let generator = InsightGenerator::new();
        assert!(generator.generate_at(&[], now()).is_empty());
    }

    #[test]
    fn test_empty_list_skips_rules() {
        struct AlwaysFires;
        impl InsightRule for AlwaysFires {
            fn id(&self) -> &'static str {
                "always"
            }
            fn name(&self) -> &'static str {
                "Always"
            }
            fn evaluate(&self, _tasks: &[Task], now: DateTime<Utc>) -> Option<Insight> {
                Some(Insight::new(
                    InsightId::WeeklySummary,
                    InsightKind::Suggestion,
                    "t",
                    "d",
                    now,
                ))
            }
        }

        let mut generator = InsightGenerator::empty();
        generator.register(Box::new(AlwaysFires));
        assert!(generator.generate_at(&[], now()).is_empty());
        assert_eq!(generator.generate_at(&[task("a")], now()).len(), 1);
    }

    /// A list that trips every rule except the completion-rate pair's
    /// high-productivity branch.
    fn busy_list() -> Vec<Task> {
        let mut tasks = vec![];
        for i in 0..4 {
            tasks.push(
                task(&format!("high-{}", i))
                    .priority(Priority::High)
                    .category("Work")
                    .due(now() - Duration::days(1))
                    .created(now() - Duration::days(2)),
            );
        }
        tasks.push(
            task("soon")
                .category("Work")
                .due(now() + Duration::days(2))
                .created(now() - Duration::days(30)),
        );
        tasks.push(task("other").category("Home").created(now() - Duration::days(30)));
        tasks
    }

    #[test]
    fn test_output_follows_rule_order() {
        let generator = InsightGenerator::new();
        let insights = generator.generate_at(&busy_list(), now());
        let ids: Vec<InsightId> = insights.iter().map(|i| i.id).collect();

        assert_eq!(
            ids,
            vec![
                InsightId::OverdueTasks,
                InsightId::UpcomingDeadlines,
                InsightId::HighPriorityBacklog,
                InsightId::LowCompletion,
                InsightId::CategoryImbalance,
                InsightId::WeeklySummary,
            ]
        );
    }

    #[test]
    fn test_order_independent_of_input_order() {
        let generator = InsightGenerator::new();
        let forward = generator.generate_at(&busy_list(), now());

        let mut reversed = busy_list();
        reversed.reverse();
        let backward = generator.generate_at(&reversed, now());

        let ids = |v: &[Insight]| v.iter().map(|i| i.id).collect::<Vec<_>>();
        assert_eq!(ids(&forward), ids(&backward));
    }

    #[test]
    fn test_idempotent_except_timestamp() {
        let generator = InsightGenerator::new();
        let tasks = busy_list();

        let first = generator.generate_at(&tasks, now());
        let second = generator.generate_at(&tasks, now() + Duration::milliseconds(5));

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.kind, b.kind);
            assert_eq!(a.title, b.title);
            assert_eq!(a.description, b.description);
            assert_eq!(a.actionable, b.actionable);
        }
        assert!(second.iter().all(|i| i.created_at == now() + Duration::milliseconds(5)));
    }

    #[test]
    fn test_insight_count_bounded() {
        let generator = InsightGenerator::new();
        let lists = vec![
            vec![],
            vec![task("a")],
            busy_list(),
            (0..10)
                .map(|i| task(&format!("done-{}", i)).completed(true).category("Work"))
                .collect(),
        ];

        for tasks in lists {
            let count = generator.generate_at(&tasks, now()).len();
            assert!(count <= 6, "got {} insights", count);
        }
    }

    #[test]
    fn test_does_not_mutate_input() {
        let generator = InsightGenerator::new();
        let tasks = busy_list();
        let before = tasks.clone();
        let _ = generator.generate_at(&tasks, now());
        assert_eq!(tasks, before);
    }

    #[test]
    fn test_insights_carry_generation_time() {
        let generator = InsightGenerator::new();
        let insights = generator.generate_at(&busy_list(), now());
        assert!(insights.iter().all(|i| i.created_at == now()));
    }
}
