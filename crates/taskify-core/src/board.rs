//! Task board - the hosting application state
//!
//! Owns the task store, the current insight list, and the apply dispatcher.
//! Insights are regenerated only when the task list changes: every store
//! mutation bumps a revision counter, and the cached insight list is reused
//! while the revision stays the same. Filtering and stats never touch the
//! cache.

use tracing::debug;

use crate::apply::{ApplyHandler, ApplyOutcome, InsightDispatcher};
use crate::error::{Error, Result};
use crate::filter::{categories, TaskFilter};
use crate::insights::{Insight, InsightGenerator, InsightId};
use crate::models::{NewTask, Task, TaskUpdate};
use crate::stats::TaskStats;
use crate::store::TaskStore;

pub struct TaskBoard {
    store: Box<dyn TaskStore>,
    generator: InsightGenerator,
    dispatcher: InsightDispatcher,
    revision: u64,
    /// Revision the cached insights were computed for
    cached: Option<(u64, Vec<Insight>)>,
    recomputations: u64,
}

impl TaskBoard {
    /// Create a board with the built-in insight rules and no apply handler
    pub fn new(store: Box<dyn TaskStore>) -> Self {
        Self::with_generator(store, InsightGenerator::new())
    }

    pub fn with_generator(store: Box<dyn TaskStore>, generator: InsightGenerator) -> Self {
        Self {
            store,
            generator,
            dispatcher: InsightDispatcher::new(),
            revision: 0,
            cached: None,
            recomputations: 0,
        }
    }

    /// Register the handler that receives applied insights
    pub fn set_apply_handler(&mut self, handler: Box<dyn ApplyHandler>) {
        self.dispatcher.set_handler(handler);
    }

    /// Name of the underlying store backend
    pub fn store_name(&self) -> &str {
        self.store.name()
    }

    /// Bumped on every successful mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// How many times insights have been generated
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    pub fn tasks(&self) -> Result<Vec<Task>> {
        self.store.list()
    }

    pub fn task(&self, id: &str) -> Result<Task> {
        self.store
            .get(id)?
            .ok_or_else(|| Error::NotFound(format!("Task {}", id)))
    }

    pub fn create_task(&mut self, new: NewTask) -> Result<Task> {
        let task = self.store.create(new)?;
        self.touch();
        Ok(task)
    }

    pub fn update_task(&mut self, id: &str, update: TaskUpdate) -> Result<Task> {
        let task = self.store.update(id, update)?;
        self.touch();
        Ok(task)
    }

    pub fn delete_task(&mut self, id: &str) -> Result<()> {
        self.store.delete(id)?;
        self.touch();
        Ok(())
    }

    pub fn toggle_complete(&mut self, id: &str) -> Result<Task> {
        let task = self.store.toggle_complete(id)?;
        self.touch();
        Ok(task)
    }

    /// Current insights, regenerated only if the task list changed
    pub fn insights(&mut self) -> Result<&[Insight]> {
        let stale = !matches!(&self.cached, Some((rev, _)) if *rev == self.revision);
        if stale {
            let tasks = self.store.list()?;
            let insights = self.generator.generate(&tasks);
            self.recomputations += 1;
            debug!(
                revision = self.revision,
                count = insights.len(),
                "Regenerated insights"
            );
            self.cached = Some((self.revision, insights));
        }

        Ok(self
            .cached
            .as_ref()
            .map(|(_, insights)| insights.as_slice())
            .unwrap_or_default())
    }

    /// Apply one of the currently generated insights
    pub fn apply_insight(&mut self, id: InsightId) -> Result<ApplyOutcome> {
        let insight = self
            .insights()?
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Insight {}", id)))?;
        self.dispatcher.apply(&insight)
    }

    pub fn stats(&self) -> Result<TaskStats> {
        Ok(TaskStats::from_tasks(&self.store.list()?))
    }

    /// Tasks passing `filter`, newest first
    pub fn filtered(&self, filter: &TaskFilter) -> Result<Vec<Task>> {
        let tasks = self.store.list()?;
        Ok(filter.apply(&tasks).into_iter().cloned().collect())
    }

    pub fn categories(&self) -> Result<Vec<String>> {
        Ok(categories(&self.store.list()?))
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}
