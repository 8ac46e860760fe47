//! "Apply insight" dispatch
//!
//! Applying an insight has no built-in effect. The dispatcher checks that the
//! insight is actionable and forwards it, unchanged, to whatever handler the
//! host application registered.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::insights::Insight;

/// Host-supplied reaction to an applied insight
pub trait ApplyHandler: Send + Sync {
    fn apply(&self, insight: &Insight) -> Result<()>;
}

/// What happened to an apply request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyOutcome {
    /// Passed to the registered handler
    Forwarded,
    /// No handler registered; nothing happened
    Unhandled,
}

/// Routes apply requests to an optional handler
#[derive(Default)]
pub struct InsightDispatcher {
    handler: Option<Box<dyn ApplyHandler>>,
}

impl InsightDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_handler(handler: Box<dyn ApplyHandler>) -> Self {
        Self {
            handler: Some(handler),
        }
    }

    pub fn set_handler(&mut self, handler: Box<dyn ApplyHandler>) {
        self.handler = Some(handler);
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Forward an actionable insight to the handler
    pub fn apply(&self, insight: &Insight) -> Result<ApplyOutcome> {
        if !insight.actionable {
            return Err(Error::NotActionable(insight.id.to_string()));
        }

        match &self.handler {
            Some(handler) => {
                handler.apply(insight)?;
                Ok(ApplyOutcome::Forwarded)
            }
            None => {
                warn!(insight = %insight.id, "No apply handler registered");
                Ok(ApplyOutcome::Unhandled)
            }
        }
    }
}

/// Handler that only records the trigger in the log
pub struct LoggingHandler;

impl ApplyHandler for LoggingHandler {
    fn apply(&self, insight: &Insight) -> Result<()> {
        info!(
            insight = %insight.id,
            kind = %insight.kind,
            title = %insight.title,
            "Insight applied"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::{InsightId, InsightKind};
    use crate::test_utils::now;
    use std::sync::{Arc, Mutex};

    struct Recorder(Arc<Mutex<Vec<Insight>>>);

    impl ApplyHandler for Recorder {
        fn apply(&self, insight: &Insight) -> Result<()> {
            self.0.lock().unwrap().push(insight.clone());
            Ok(())
        }
    }

    struct Failing;

    impl ApplyHandler for Failing {
        fn apply(&self, _insight: &Insight) -> Result<()> {
            Err(Error::InvalidData("backend rejected".into()))
        }
    }

    fn overdue() -> Insight {
        Insight::new(
            InsightId::OverdueTasks,
            InsightKind::Priority,
            "Overdue tasks detected",
            "You have 1 overdue task. Consider prioritizing them.",
            now(),
        )
        .actionable()
    }

    #[test]
    fn test_forwards_insight_unchanged() {
        let seen = Arc::new(Mutex::new(vec![]));
        let dispatcher = InsightDispatcher::with_handler(Box::new(Recorder(seen.clone())));

        let insight = overdue();
        assert_eq!(dispatcher.apply(&insight).unwrap(), ApplyOutcome::Forwarded);
        assert_eq!(seen.lock().unwrap().as_slice(), &[insight]);
    }

    #[test]
    fn test_rejects_non_actionable() {
        let dispatcher = InsightDispatcher::with_handler(Box::new(LoggingHandler));
        let mut insight = overdue();
        insight.actionable = false;

        let err = dispatcher.apply(&insight).unwrap_err();
        assert!(matches!(err, Error::NotActionable(id) if id == "overdue-tasks"));
    }

    #[test]
    fn test_without_handler() {
        let dispatcher = InsightDispatcher::new();
        assert!(!dispatcher.has_handler());
        assert_eq!(dispatcher.apply(&overdue()).unwrap(), ApplyOutcome::Unhandled);
    }

    #[test]
    fn test_handler_errors_propagate() {
        let dispatcher = InsightDispatcher::with_handler(Box::new(Failing));
        assert!(dispatcher.apply(&overdue()).is_err());
    }
}
