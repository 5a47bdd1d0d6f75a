//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while validating and constructing task values.
///
/// Each variant corresponds to one field-level rule. Factories and services
/// surface these unchanged so callers can match on the failing rule.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TaskDomainError {
    /// The task identifier is not a positive integer.
    #[error("task id must be positive, got {0}")]
    InvalidId(i64),

    /// Every task id up to `i64::MAX` has already been allocated.
    #[error("no task ids left to allocate")]
    IdSpaceExhausted,

    /// The task title is empty after trimming.
    #[error("title cannot be empty")]
    InvalidTitle,

    /// A value is not a member of its closed enumeration.
    #[error("invalid {field}: {value}")]
    InvalidEnum {
        /// Name of the enumerated field (`status`, `priority`, `severity`).
        field: &'static str,
        /// The rejected raw value.
        value: String,
    },

    /// The description was supplied but is empty after trimming.
    #[error("description cannot be an empty string")]
    InvalidDescription,

    /// A timestamp precedes the task creation timestamp.
    #[error("{field} {value} cannot be earlier than created date {created_at}")]
    InvalidDateOrder {
        /// Name of the offending timestamp field (`completedAt`, `deadline`).
        field: &'static str,
        /// The offending timestamp.
        value: String,
        /// The task creation timestamp it was compared against.
        created_at: String,
    },

    /// A soft reference to another task is not a positive identifier.
    #[error("{field} must reference a positive task id, got {value}")]
    InvalidReference {
        /// Name of the reference field (`parentTaskId`, `subtaskIds`).
        field: &'static str,
        /// The rejected identifier.
        value: i64,
    },

    /// A numeric attribute is outside its permitted range.
    #[error("{field} must be positive, got {value}")]
    InvalidValue {
        /// Name of the numeric field (`storyPoints`).
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}
