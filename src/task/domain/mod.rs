//! Domain model for tasks.
//!
//! A task is one record of shared base fields plus a closed set of variant
//! attributes (bug severity, subtask parent, story points, epic subtasks).
//! Every field rule is a `validate_*` function and runs before a [`Task`]
//! value can exist. The [`TaskFactory`] owns id and
//! timestamp allocation.

mod defaults;
mod error;
mod factory;
mod fields;
mod ids;
mod task;
mod validators;
mod variant;

pub use defaults::TaskDefaults;
pub use error::TaskDomainError;
pub use factory::{CreateTaskPayload, TaskFactory};
pub use fields::{Priority, Severity, Status};
pub use ids::{TaskId, Timestamp};
pub use task::{Task, TaskDraft, TaskPatch};
pub use validators::{
    validate_dates, validate_description, validate_id, validate_parent_task_id,
    validate_priority, validate_severity, validate_status, validate_story_points,
    validate_subtask_ids, validate_title,
};
pub use variant::{TaskVariant, VariantInput};
