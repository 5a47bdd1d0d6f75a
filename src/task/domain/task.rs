//! Task entity and the parameter objects used to build and patch it.

use super::{
    Priority, Severity, Status, TaskDomainError, TaskId, TaskVariant, Timestamp, VariantInput,
    validate_dates, validate_description, validate_id, validate_priority, validate_status,
    validate_title,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unvalidated field set for constructing a [`Task`].
///
/// The factory fills this from a creation payload; seed datasets deserialise
/// straight into it. Enumerated fields stay as raw labels so that
/// [`Task::new`] reports invalid ones through the same rules as every other
/// field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    /// Allocated identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Raw status label.
    pub status: String,
    /// Raw priority label.
    pub priority: String,
    /// Creation timestamp.
    pub created_at: Timestamp,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional completion timestamp.
    #[serde(default)]
    pub completed_at: Option<Timestamp>,
    /// Optional deadline.
    #[serde(default)]
    pub deadline: Option<Timestamp>,
    /// Variant discriminant and its extra attribute.
    #[serde(flatten)]
    pub variant: VariantInput,
}

/// Partial update for the mutable base fields of a task.
///
/// Only fields set to `Some` are validated and applied. `id`, `createdAt`
/// and variant attributes cannot be patched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    /// Replacement title.
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement description.
    #[serde(default)]
    pub description: Option<String>,
    /// Replacement raw status label.
    #[serde(default)]
    pub status: Option<String>,
    /// Replacement raw priority label.
    #[serde(default)]
    pub priority: Option<String>,
    /// Replacement deadline.
    #[serde(default)]
    pub deadline: Option<Timestamp>,
    /// Replacement completion timestamp.
    #[serde(default)]
    pub completed_at: Option<Timestamp>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the replacement status label.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the replacement priority label.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the replacement deadline.
    #[must_use]
    pub fn with_deadline(mut self, deadline: impl Into<Timestamp>) -> Self {
        self.deadline = Some(deadline.into());
        self
    }

    /// Sets the replacement completion timestamp.
    #[must_use]
    pub fn with_completed_at(mut self, completed_at: impl Into<Timestamp>) -> Self {
        self.completed_at = Some(completed_at.into());
        self
    }

    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.deadline.is_none()
            && self.completed_at.is_none()
    }
}

/// A validated unit of work.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    status: Status,
    priority: Priority,
    created_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    completed_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deadline: Option<Timestamp>,
    #[serde(flatten)]
    variant: TaskVariant,
}

impl Task {
    /// Validates `draft` and builds the task.
    ///
    /// Base rules run first (id, title, status, priority, description, date
    /// order), followed by the variant's own rule. Nothing is returned unless
    /// every rule passes. Empty `completedAt` and `deadline` values are stored
    /// as unset.
    ///
    /// # Errors
    ///
    /// Returns the [`TaskDomainError`] of the first rule that fails.
    pub fn new(draft: TaskDraft) -> Result<Self, TaskDomainError> {
        let id = validate_id(draft.id)?;
        validate_title(&draft.title)?;
        let status = validate_status(&draft.status)?;
        let priority = validate_priority(&draft.priority)?;
        validate_description(draft.description.as_deref())?;
        validate_dates(
            &draft.created_at,
            draft.completed_at.as_ref(),
            draft.deadline.as_ref(),
        )?;
        let variant = TaskVariant::try_from(draft.variant)?;

        Ok(Self {
            id,
            title: draft.title,
            status,
            priority,
            created_at: draft.created_at,
            description: draft.description,
            completed_at: Timestamp::present(draft.completed_at),
            deadline: Timestamp::present(draft.deadline),
            variant,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the completion timestamp, if any.
    #[must_use]
    pub const fn completed_at(&self) -> Option<&Timestamp> {
        self.completed_at.as_ref()
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<&Timestamp> {
        self.deadline.as_ref()
    }

    /// Returns the variant attributes.
    #[must_use]
    pub const fn variant(&self) -> &TaskVariant {
        &self.variant
    }

    /// Returns the bug severity, if this is an assessed bug.
    #[must_use]
    pub const fn severity(&self) -> Option<Severity> {
        match &self.variant {
            TaskVariant::Bug { severity } => *severity,
            _ => None,
        }
    }

    /// Returns the parent reference when this is a subtask.
    #[must_use]
    pub const fn parent_task_id(&self) -> Option<TaskId> {
        match &self.variant {
            TaskVariant::Subtask { parent_task_id } => Some(*parent_task_id),
            _ => None,
        }
    }

    /// Returns the story points when this is a sized story.
    #[must_use]
    pub const fn story_points(&self) -> Option<f64> {
        match &self.variant {
            TaskVariant::Story { story_points } => *story_points,
            _ => None,
        }
    }

    /// Returns the subtask references of an epic; empty for other variants.
    #[must_use]
    pub fn subtask_ids(&self) -> &[TaskId] {
        match &self.variant {
            TaskVariant::Epic { subtask_ids } => subtask_ids,
            _ => &[],
        }
    }

    /// Returns the number of subtasks when this is an epic.
    #[must_use]
    pub fn subtask_count(&self) -> Option<usize> {
        match &self.variant {
            TaskVariant::Epic { subtask_ids } => Some(subtask_ids.len()),
            _ => None,
        }
    }

    /// Returns a copy with `patch` applied.
    ///
    /// Only the fields present in the patch are validated. New `completedAt`
    /// and `deadline` values are checked against the unchanged `createdAt`;
    /// an empty one clears the field.
    ///
    /// # Errors
    ///
    /// Returns the [`TaskDomainError`] of the first patched field that fails
    /// validation; `self` is left untouched.
    pub fn patched(&self, patch: TaskPatch) -> Result<Self, TaskDomainError> {
        if let Some(title) = patch.title.as_deref() {
            validate_title(title)?;
        }
        let status = patch.status.as_deref().map(validate_status).transpose()?;
        let priority = patch
            .priority
            .as_deref()
            .map(validate_priority)
            .transpose()?;
        validate_description(patch.description.as_deref())?;
        validate_dates(
            &self.created_at,
            patch.completed_at.as_ref(),
            patch.deadline.as_ref(),
        )?;

        let mut updated = self.clone();
        if let Some(title) = patch.title {
            updated.title = title;
        }
        if let Some(description) = patch.description {
            updated.description = Some(description);
        }
        if let Some(new_status) = status {
            updated.status = new_status;
        }
        if let Some(new_priority) = priority {
            updated.priority = new_priority;
        }
        if let Some(deadline) = patch.deadline {
            updated.deadline = Timestamp::present(Some(deadline));
        }
        if let Some(completed_at) = patch.completed_at {
            updated.completed_at = Timestamp::present(Some(completed_at));
        }
        Ok(updated)
    }

    /// Reports whether the task was completed by its deadline.
    ///
    /// Returns `None` when either timestamp is missing.
    #[must_use]
    pub fn completed_on_time(&self) -> Option<bool> {
        let completed_at = self.completed_at.as_ref()?;
        let deadline = self.deadline.as_ref()?;
        Some(completed_at <= deadline)
    }

    /// Returns the one-line human-readable summary.
    ///
    /// The base form is `Task #<id>: <title> [<status>]`; variants prefix a
    /// glyph and append their extra attribute.
    #[must_use]
    pub fn summary(&self) -> String {
        let base = format!("Task #{}: {} [{}]", self.id, self.title, self.status);
        match &self.variant {
            TaskVariant::Task => base,
            TaskVariant::Bug { severity } => severity.map_or_else(
                || format!("🐛 {base}"),
                |level| format!("🐛 {base} | Severity: {level}"),
            ),
            TaskVariant::Subtask { parent_task_id } => {
                format!("📌 {base} | Parent Task: #{parent_task_id}")
            }
            TaskVariant::Story { story_points } => story_points.map_or_else(
                || format!("📖 {base}"),
                |points| format!("📖 {base} | Story Points: {points}"),
            ),
            TaskVariant::Epic { subtask_ids } => {
                format!("🎯 {base} | Subtasks: {}", subtask_ids.len())
            }
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
