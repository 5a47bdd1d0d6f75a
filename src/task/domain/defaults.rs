//! Configurable defaults applied when a creation payload omits a field.

use super::{Priority, Status};
use serde::{Deserialize, Serialize};

/// Default status and priority for new tasks.
///
/// Deserialises from `{"status": "...", "priority": "..."}`; either key may be
/// omitted to keep the built-in value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskDefaults {
    /// Status assigned when the payload has none.
    pub status: Status,
    /// Priority assigned when the payload has none.
    pub priority: Priority,
}

impl TaskDefaults {
    /// Built-in defaults: `todo` status and `medium` priority.
    pub const BUILT_IN: Self = Self {
        status: Status::Todo,
        priority: Priority::Medium,
    };
}

impl Default for TaskDefaults {
    fn default() -> Self {
        Self::BUILT_IN
    }
}
