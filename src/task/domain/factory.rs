//! Creation payloads and the factory that turns them into tasks.

use super::{Task, TaskDefaults, TaskDomainError, TaskDraft, Timestamp, VariantInput};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Discriminated request for creating a task.
///
/// The `type` key selects the variant; variant-specific keys
/// (`severity`, `parentTaskId`, `storyPoints`, `subtaskIds`) sit alongside
/// the shared ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskPayload {
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    deadline: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed_at: Option<Timestamp>,
    #[serde(flatten)]
    variant: VariantInput,
}

impl CreateTaskPayload {
    /// Creates a payload for the given variant with only a title set.
    #[must_use]
    pub fn new(title: impl Into<String>, variant: VariantInput) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: None,
            priority: None,
            deadline: None,
            completed_at: None,
            variant,
        }
    }

    /// Creates a plain task payload.
    #[must_use]
    pub fn task(title: impl Into<String>) -> Self {
        Self::new(title, VariantInput::Task)
    }

    /// Creates a bug payload with an optional raw severity label.
    #[must_use]
    pub fn bug(title: impl Into<String>, severity: Option<&str>) -> Self {
        Self::new(
            title,
            VariantInput::Bug {
                severity: severity.map(str::to_owned),
            },
        )
    }

    /// Creates a subtask payload referencing its parent.
    #[must_use]
    pub fn subtask(title: impl Into<String>, parent_task_id: i64) -> Self {
        Self::new(title, VariantInput::Subtask { parent_task_id })
    }

    /// Creates a story payload with an optional estimate.
    #[must_use]
    pub fn story(title: impl Into<String>, story_points: Option<f64>) -> Self {
        Self::new(title, VariantInput::Story { story_points })
    }

    /// Creates an epic payload grouping the given subtasks.
    #[must_use]
    pub fn epic(title: impl Into<String>, subtask_ids: impl IntoIterator<Item = i64>) -> Self {
        Self::new(
            title,
            VariantInput::Epic {
                subtask_ids: subtask_ids.into_iter().collect(),
            },
        )
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the raw status label.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the raw priority label.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the deadline.
    #[must_use]
    pub fn with_deadline(mut self, deadline: impl Into<Timestamp>) -> Self {
        self.deadline = Some(deadline.into());
        self
    }

    /// Sets the completion timestamp.
    #[must_use]
    pub fn with_completed_at(mut self, completed_at: impl Into<Timestamp>) -> Self {
        self.completed_at = Some(completed_at.into());
        self
    }

    /// Returns the requested title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the variant section.
    #[must_use]
    pub const fn variant(&self) -> &VariantInput {
        &self.variant
    }
}

/// Allocates identifiers and timestamps and builds tasks from payloads.
///
/// The id counter only moves forward. A payload that fails validation still
/// consumes its id, so failed creations leave gaps in the sequence. Once
/// `i64::MAX` has been handed out the counter is exhausted and every later
/// creation fails with [`TaskDomainError::IdSpaceExhausted`].
#[derive(Debug, Clone)]
pub struct TaskFactory<C>
where
    C: Clock,
{
    next_id: Option<i64>,
    clock: Arc<C>,
    defaults: TaskDefaults,
}

impl<C> TaskFactory<C>
where
    C: Clock,
{
    /// Creates a factory whose first allocated id is `start_id`.
    #[must_use]
    pub const fn new(start_id: i64, clock: Arc<C>) -> Self {
        Self {
            next_id: Some(start_id),
            clock,
            defaults: TaskDefaults::BUILT_IN,
        }
    }

    /// Creates a factory that continues after the highest id in `existing`,
    /// or starts at 1 when there are none.
    ///
    /// When `existing` already holds `i64::MAX` the factory starts exhausted.
    #[must_use]
    pub fn continuing_after<'a>(
        existing: impl IntoIterator<Item = &'a Task>,
        clock: Arc<C>,
    ) -> Self {
        let next_id = existing
            .into_iter()
            .map(|task| task.id().value())
            .max()
            .map_or(Some(1), |max_id| max_id.checked_add(1));
        Self {
            next_id,
            clock,
            defaults: TaskDefaults::BUILT_IN,
        }
    }

    /// Replaces the defaults used for omitted status and priority.
    #[must_use]
    pub fn with_defaults(mut self, defaults: TaskDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Resets the next id to allocate.
    pub const fn set_start_id(&mut self, start_id: i64) {
        self.next_id = Some(start_id);
    }

    /// Returns the id the next [`create`](Self::create) call will consume, or
    /// `None` once the id space is exhausted.
    #[must_use]
    pub const fn next_id(&self) -> Option<i64> {
        self.next_id
    }

    /// Returns the defaults applied to omitted fields.
    #[must_use]
    pub const fn defaults(&self) -> TaskDefaults {
        self.defaults
    }

    /// Builds a task from `payload`.
    ///
    /// Consumes one id and stamps `createdAt` from the clock before
    /// validating, then dispatches on the payload's variant.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::IdSpaceExhausted`] when no id is left, or
    /// the validator's [`TaskDomainError`] unchanged when the payload violates
    /// a rule.
    pub fn create(&mut self, payload: CreateTaskPayload) -> Result<Task, TaskDomainError> {
        let id = self.allocate_id()?;
        let created_at = Timestamp::now(&*self.clock);
        let status = payload
            .status
            .unwrap_or_else(|| self.defaults.status.as_str().to_owned());
        let priority = payload
            .priority
            .unwrap_or_else(|| self.defaults.priority.as_str().to_owned());

        Task::new(TaskDraft {
            id,
            title: payload.title,
            status,
            priority,
            created_at,
            description: payload.description,
            completed_at: payload.completed_at,
            deadline: payload.deadline,
            variant: payload.variant,
        })
    }

    const fn allocate_id(&mut self) -> Result<i64, TaskDomainError> {
        let Some(id) = self.next_id else {
            return Err(TaskDomainError::IdSpaceExhausted);
        };
        self.next_id = id.checked_add(1);
        Ok(id)
    }
}
