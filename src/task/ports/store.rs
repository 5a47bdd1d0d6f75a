//! Store port for the ordered task collection.

use crate::task::domain::{Task, TaskDomainError, TaskId};
use std::sync::Arc;
use thiserror::Error;

/// Result type for store construction and export.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Ordered task collection owned by a service.
///
/// Tasks are kept in insertion order. Lookups match the first task with the
/// requested id. Implementations perform no locking; callers sharing a store
/// across threads must serialise access themselves.
pub trait TaskStore {
    /// Returns every task in insertion order.
    fn tasks(&self) -> &[Task];

    /// Appends a task at the end of the collection.
    fn append(&mut self, task: Task);

    /// Replaces the task with the same id in place.
    ///
    /// Returns `false` when no task with that id exists.
    fn replace(&mut self, task: Task) -> bool;

    /// Removes and returns the first task with the given id.
    fn remove(&mut self, id: i64) -> Option<Task>;

    /// Finds the first task with the given id.
    fn find_by_id(&self, id: i64) -> Option<&Task> {
        self.tasks().iter().find(|task| task.id() == id)
    }

    /// Returns the number of stored tasks.
    fn len(&self) -> usize {
        self.tasks().len()
    }

    /// Returns `true` when the store holds no tasks.
    fn is_empty(&self) -> bool {
        self.tasks().is_empty()
    }
}

/// Errors returned while loading or exporting a task collection.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The serialised collection could not be decoded or encoded.
    #[error("task records could not be (de)serialised: {0}")]
    Serialisation(Arc<serde_json::Error>),

    /// A record decoded but violates a domain rule.
    #[error("task record at index {index} is invalid: {source}")]
    InvalidRecord {
        /// Position of the record in the input array.
        index: usize,
        /// The violated rule.
        #[source]
        source: TaskDomainError,
    },

    /// Two records share an identifier.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),
}

impl From<serde_json::Error> for TaskStoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialisation(Arc::new(err))
    }
}
