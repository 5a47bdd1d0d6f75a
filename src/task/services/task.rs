//! Service layer owning the task collection.

use super::TaskFilters;
use crate::task::{
    domain::{CreateTaskPayload, Task, TaskDefaults, TaskDomainError, TaskFactory, TaskPatch},
    ports::TaskStore,
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Task management service.
///
/// Owns a [`TaskStore`] and the [`TaskFactory`] that allocates ids for it.
/// Missing tasks are reported as `None`/`false`; validation failures are the
/// domain's [`TaskDomainError`], returned unchanged.
#[derive(Debug)]
pub struct TaskService<S, C>
where
    S: TaskStore,
    C: Clock,
{
    store: S,
    factory: TaskFactory<C>,
}

impl<S, C> TaskService<S, C>
where
    S: TaskStore,
    C: Clock,
{
    /// Creates a service over `store`.
    ///
    /// The factory continues after the highest id already in the store.
    #[must_use]
    pub fn new(store: S, clock: Arc<C>) -> Self {
        let factory = TaskFactory::continuing_after(store.tasks(), clock);
        Self { store, factory }
    }

    /// Creates a service whose factory uses `defaults` for omitted fields.
    #[must_use]
    pub fn with_defaults(store: S, clock: Arc<C>, defaults: TaskDefaults) -> Self {
        let factory = TaskFactory::continuing_after(store.tasks(), clock).with_defaults(defaults);
        Self { store, factory }
    }

    /// Returns the task with `id`, if any.
    #[must_use]
    pub fn get_task_details(&self, id: i64) -> Option<Task> {
        self.store.find_by_id(id).cloned()
    }

    /// Builds a task from `payload` and appends it to the collection.
    ///
    /// # Errors
    ///
    /// Returns the [`TaskDomainError`] raised by validation. The id allocated
    /// for the attempt is not reused.
    pub fn create_task(&mut self, payload: CreateTaskPayload) -> Result<Task, TaskDomainError> {
        let task = self.factory.create(payload).inspect_err(|err| {
            warn!(error = %err, next_id = ?self.factory.next_id(), "Task creation rejected");
        })?;
        info!(
            task_id = %task.id(),
            task_type = task.variant().type_name(),
            "Task created"
        );
        self.store.append(task.clone());
        Ok(task)
    }

    /// Applies `patch` to the task with `id`.
    ///
    /// Returns `Ok(None)` when no such task exists. Only fields present in
    /// the patch are validated; the updated copy replaces the original at the
    /// same position.
    ///
    /// # Errors
    ///
    /// Returns the [`TaskDomainError`] of the first invalid patched field; the
    /// stored task is unchanged in that case.
    pub fn update_task_details(
        &mut self,
        id: i64,
        patch: TaskPatch,
    ) -> Result<Option<Task>, TaskDomainError> {
        let Some(existing) = self.store.find_by_id(id) else {
            debug!(task_id = id, "Update requested for unknown task");
            return Ok(None);
        };
        let updated = existing.patched(patch).inspect_err(|err| {
            warn!(task_id = id, error = %err, "Task update rejected");
        })?;
        self.store.replace(updated.clone());
        info!(task_id = id, "Task updated");
        Ok(Some(updated))
    }

    /// Removes the task with `id`.
    ///
    /// Returns `true` when a task was removed. Subtasks and epics referring
    /// to it are left as they are.
    pub fn delete_task_details(&mut self, id: i64) -> bool {
        let removed = self.store.remove(id).is_some();
        if removed {
            info!(task_id = id, "Task deleted");
        } else {
            debug!(task_id = id, "Delete requested for unknown task");
        }
        removed
    }

    /// Returns the tasks matching every criterion in `filters`, in insertion
    /// order.
    #[must_use]
    pub fn filter_tasks(&self, filters: &TaskFilters) -> Vec<Task> {
        self.store
            .tasks()
            .iter()
            .filter(|task| filters.matches(task))
            .cloned()
            .collect()
    }

    /// Reports whether the task with `id` was completed by its deadline.
    ///
    /// Returns `None` when the task does not exist or lacks a completion
    /// timestamp or deadline.
    #[must_use]
    pub fn is_task_on_time(&self, id: i64) -> Option<bool> {
        self.store.find_by_id(id)?.completed_on_time()
    }

    /// Returns every task in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns the factory used for new tasks.
    #[must_use]
    pub const fn factory(&self) -> &TaskFactory<C> {
        &self.factory
    }
}
