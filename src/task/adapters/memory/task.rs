//! Vector-backed implementation of [`TaskStore`].

use crate::task::{
    domain::{Task, TaskDraft},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};
use std::collections::HashSet;

/// Task store holding its records in a `Vec` in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryTaskStore {
    tasks: Vec<Task>,
}

impl InMemoryTaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from already validated tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::DuplicateTask`] when two tasks share an id.
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> TaskStoreResult<Self> {
        let mut seen = HashSet::new();
        let mut store = Self::new();
        for task in tasks {
            if !seen.insert(task.id()) {
                return Err(TaskStoreError::DuplicateTask(task.id()));
            }
            store.tasks.push(task);
        }
        Ok(store)
    }

    /// Decodes a JSON array of task records and validates each one.
    ///
    /// Records use the same camelCase shape that [`to_json_string`]
    /// produces, including the `type` discriminant.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Serialisation`] for malformed JSON,
    /// [`TaskStoreError::InvalidRecord`] for the first record that breaks a
    /// domain rule, or [`TaskStoreError::DuplicateTask`] for repeated ids.
    ///
    /// [`to_json_string`]: Self::to_json_string
    pub fn from_json_str(json: &str) -> TaskStoreResult<Self> {
        let drafts: Vec<TaskDraft> = serde_json::from_str(json)?;
        let tasks = drafts
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                Task::new(draft).map_err(|source| TaskStoreError::InvalidRecord { index, source })
            })
            .collect::<TaskStoreResult<Vec<_>>>()?;
        Self::with_tasks(tasks)
    }

    /// Encodes the collection as a pretty-printed JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Serialisation`] if encoding fails.
    pub fn to_json_string(&self) -> TaskStoreResult<String> {
        Ok(serde_json::to_string_pretty(&self.tasks)?)
    }
}

impl TaskStore for InMemoryTaskStore {
    fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn append(&mut self, task: Task) {
        self.tasks.push(task);
    }

    fn replace(&mut self, task: Task) -> bool {
        let Some(slot) = self.tasks.iter_mut().find(|stored| stored.id() == task.id()) else {
            return false;
        };
        *slot = task;
        true
    }

    fn remove(&mut self, id: i64) -> Option<Task> {
        let position = self.tasks.iter().position(|task| task.id() == id)?;
        Some(self.tasks.remove(position))
    }
}
