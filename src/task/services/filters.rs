//! Conjunctive task filters.

use crate::task::domain::{Priority, Status, Task, Timestamp};
use serde::{Deserialize, Serialize};

/// Criteria for selecting tasks.
///
/// Every criterion that is set must match (logical AND). The creation bounds
/// are inclusive: a task created exactly at `created_after` or exactly at
/// `created_before` is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFilters {
    /// Required status.
    #[serde(default)]
    pub status: Option<Status>,
    /// Required priority.
    #[serde(default)]
    pub priority: Option<Priority>,
    /// Earliest accepted creation timestamp.
    #[serde(default)]
    pub created_after: Option<Timestamp>,
    /// Latest accepted creation timestamp.
    #[serde(default)]
    pub created_before: Option<Timestamp>,
}

impl TaskFilters {
    /// Creates filters that accept every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the given status.
    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Requires the given priority.
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Requires creation at or after `timestamp`.
    #[must_use]
    pub fn created_after(mut self, timestamp: impl Into<Timestamp>) -> Self {
        self.created_after = Some(timestamp.into());
        self
    }

    /// Requires creation at or before `timestamp`.
    #[must_use]
    pub fn created_before(mut self, timestamp: impl Into<Timestamp>) -> Self {
        self.created_before = Some(timestamp.into());
        self
    }

    /// Returns `true` when `task` satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        let created_at = task.created_at();
        self.status.is_none_or(|status| task.status() == status)
            && self.priority.is_none_or(|priority| task.priority() == priority)
            && self
                .created_after
                .as_ref()
                .is_none_or(|bound| created_at >= bound)
            && self
                .created_before
                .as_ref()
                .is_none_or(|bound| created_at <= bound)
    }
}
