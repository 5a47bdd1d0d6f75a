//! Variant-specific task attributes.
//!
//! Every task carries the same base fields plus exactly one [`TaskVariant`].
//! [`VariantInput`] is the unvalidated counterpart used by creation payloads
//! and seed records; it is keyed by the `type` discriminant.

use super::{
    Severity, TaskDomainError, TaskId, validate_parent_task_id, validate_severity,
    validate_story_points, validate_subtask_ids,
};
use serde::{Deserialize, Serialize};

/// Unvalidated variant section of a creation payload or seed record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VariantInput {
    /// A plain task with no extra attributes.
    Task,
    /// A defect report.
    Bug {
        /// Raw severity label, if known.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        severity: Option<String>,
    },
    /// A child of another task.
    Subtask {
        /// Raw identifier of the parent task.
        #[serde(rename = "parentTaskId")]
        parent_task_id: i64,
    },
    /// A user story.
    Story {
        /// Raw estimate, if any. Fractional estimates are allowed.
        #[serde(default, rename = "storyPoints", skip_serializing_if = "Option::is_none")]
        story_points: Option<f64>,
    },
    /// A container of subtasks.
    Epic {
        /// Raw identifiers of the grouped subtasks.
        #[serde(default, rename = "subtaskIds")]
        subtask_ids: Vec<i64>,
    },
}

/// Validated variant attributes of a task.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TaskVariant {
    /// A plain task.
    Task,
    /// A defect report.
    Bug {
        /// Impact classification, when assessed.
        #[serde(skip_serializing_if = "Option::is_none")]
        severity: Option<Severity>,
    },
    /// A child of another task, referenced softly by id.
    Subtask {
        /// Identifier of the parent task.
        #[serde(rename = "parentTaskId")]
        parent_task_id: TaskId,
    },
    /// A user story.
    Story {
        /// Positive estimate, when sized.
        #[serde(rename = "storyPoints", skip_serializing_if = "Option::is_none")]
        story_points: Option<f64>,
    },
    /// A container of subtasks, referenced softly by id.
    Epic {
        /// Identifiers of the grouped subtasks.
        #[serde(rename = "subtaskIds")]
        subtask_ids: Vec<TaskId>,
    },
}

impl TaskVariant {
    /// Returns the discriminant label (`task`, `bug`, `subtask`, `story`,
    /// `epic`).
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Bug { .. } => "bug",
            Self::Subtask { .. } => "subtask",
            Self::Story { .. } => "story",
            Self::Epic { .. } => "epic",
        }
    }
}

impl TryFrom<VariantInput> for TaskVariant {
    type Error = TaskDomainError;

    fn try_from(input: VariantInput) -> Result<Self, Self::Error> {
        let variant = match input {
            VariantInput::Task => Self::Task,
            VariantInput::Bug { severity } => Self::Bug {
                severity: validate_severity(severity.as_deref())?,
            },
            VariantInput::Subtask { parent_task_id } => Self::Subtask {
                parent_task_id: validate_parent_task_id(parent_task_id)?,
            },
            VariantInput::Story { story_points } => Self::Story {
                story_points: validate_story_points(story_points)?,
            },
            VariantInput::Epic { subtask_ids } => Self::Epic {
                subtask_ids: validate_subtask_ids(&subtask_ids)?,
            },
        };
        Ok(variant)
    }
}
