//! Field-level validation rules for task records.
//!
//! Each rule is a pure function that either returns the validated value (or
//! `()`) or the [`TaskDomainError`] describing the violated invariant. Rules
//! run eagerly when a task is constructed, and only for the fields present in
//! a patch when a task is updated.

use super::{Priority, Severity, Status, TaskDomainError, TaskId, Timestamp};

/// Validates a task identifier.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidId`] when `id <= 0`.
pub const fn validate_id(id: i64) -> Result<TaskId, TaskDomainError> {
    TaskId::new(id)
}

/// Validates that a title has visible content.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidTitle`] when the title is empty or
/// whitespace-only.
pub fn validate_title(title: &str) -> Result<(), TaskDomainError> {
    if title.trim().is_empty() {
        return Err(TaskDomainError::InvalidTitle);
    }
    Ok(())
}

/// Parses a raw status label.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidEnum`] for labels outside
/// `todo | inProgress | done`.
pub fn validate_status(status: &str) -> Result<Status, TaskDomainError> {
    Status::try_from(status)
}

/// Parses a raw priority label.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidEnum`] for labels outside
/// `low | medium | high`.
pub fn validate_priority(priority: &str) -> Result<Priority, TaskDomainError> {
    Priority::try_from(priority)
}

/// Parses an optional raw severity label. Absence means "not applicable".
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidEnum`] for labels outside
/// `low | medium | high | critical`.
pub fn validate_severity(severity: Option<&str>) -> Result<Option<Severity>, TaskDomainError> {
    severity.map(Severity::try_from).transpose()
}

/// Validates an optional description.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidDescription`] when a description is
/// supplied but empty or whitespace-only.
pub fn validate_description(description: Option<&str>) -> Result<(), TaskDomainError> {
    match description {
        Some(text) if text.trim().is_empty() => Err(TaskDomainError::InvalidDescription),
        _ => Ok(()),
    }
}

/// Validates that completion and deadline timestamps do not precede creation.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidDateOrder`] when either timestamp is
/// earlier than `created_at`. The completion timestamp is checked first.
/// Empty timestamps count as unset and are not compared.
pub fn validate_dates(
    created_at: &Timestamp,
    completed_at: Option<&Timestamp>,
    deadline: Option<&Timestamp>,
) -> Result<(), TaskDomainError> {
    let checks = [("completedAt", completed_at), ("deadline", deadline)];
    for (field, value) in checks {
        if let Some(timestamp) = value.filter(|ts| !ts.is_empty() && *ts < created_at) {
            return Err(TaskDomainError::InvalidDateOrder {
                field,
                value: timestamp.to_string(),
                created_at: created_at.to_string(),
            });
        }
    }
    Ok(())
}

/// Validates the parent reference of a subtask.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidReference`] when the id is not positive.
pub fn validate_parent_task_id(parent_task_id: i64) -> Result<TaskId, TaskDomainError> {
    positive_reference("parentTaskId", parent_task_id)
}

/// Validates optional story points.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidValue`] when points are supplied but are
/// not a finite positive number.
pub fn validate_story_points(story_points: Option<f64>) -> Result<Option<f64>, TaskDomainError> {
    match story_points {
        Some(points) if !(points.is_finite() && points > 0.0) => {
            Err(TaskDomainError::InvalidValue {
                field: "storyPoints",
                value: points,
            })
        }
        valid => Ok(valid),
    }
}

/// Validates every subtask reference of an epic.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidReference`] for the first id that is not
/// positive.
pub fn validate_subtask_ids(subtask_ids: &[i64]) -> Result<Vec<TaskId>, TaskDomainError> {
    subtask_ids
        .iter()
        .map(|id| positive_reference("subtaskIds", *id))
        .collect()
}

fn positive_reference(field: &'static str, value: i64) -> Result<TaskId, TaskDomainError> {
    TaskId::new(value).map_err(|_| TaskDomainError::InvalidReference { field, value })
}
