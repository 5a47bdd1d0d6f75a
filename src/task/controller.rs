//! Pass-through handlers adapting external calls to [`TaskService`].

use crate::task::{
    domain::{CreateTaskPayload, Task, TaskDomainError, TaskPatch},
    ports::TaskStore,
    services::{TaskFilters, TaskService},
};
use mockable::Clock;

/// Entry point for callers such as an HTTP layer.
///
/// Each handler forwards to the matching service operation and returns its
/// result unchanged.
#[derive(Debug)]
pub struct TaskController<S, C>
where
    S: TaskStore,
    C: Clock,
{
    service: TaskService<S, C>,
}

impl<S, C> TaskController<S, C>
where
    S: TaskStore,
    C: Clock,
{
    /// Wraps `service`.
    #[must_use]
    pub const fn new(service: TaskService<S, C>) -> Self {
        Self { service }
    }

    /// Forwards to [`TaskService::get_task_details`].
    #[must_use]
    pub fn handle_get_task(&self, id: i64) -> Option<Task> {
        self.service.get_task_details(id)
    }

    /// Forwards to [`TaskService::create_task`].
    ///
    /// # Errors
    ///
    /// Returns the service's [`TaskDomainError`] unchanged.
    pub fn handle_create_task(
        &mut self,
        payload: CreateTaskPayload,
    ) -> Result<Task, TaskDomainError> {
        self.service.create_task(payload)
    }

    /// Forwards to [`TaskService::update_task_details`].
    ///
    /// # Errors
    ///
    /// Returns the service's [`TaskDomainError`] unchanged.
    pub fn handle_update_task(
        &mut self,
        id: i64,
        patch: TaskPatch,
    ) -> Result<Option<Task>, TaskDomainError> {
        self.service.update_task_details(id, patch)
    }

    /// Forwards to [`TaskService::delete_task_details`].
    pub fn handle_delete_task(&mut self, id: i64) -> bool {
        self.service.delete_task_details(id)
    }

    /// Forwards to [`TaskService::filter_tasks`].
    #[must_use]
    pub fn handle_filter_tasks(&self, filters: &TaskFilters) -> Vec<Task> {
        self.service.filter_tasks(filters)
    }

    /// Forwards to [`TaskService::is_task_on_time`].
    #[must_use]
    pub fn handle_check_task_deadline(&self, id: i64) -> Option<bool> {
        self.service.is_task_on_time(id)
    }

    /// Returns the wrapped service.
    #[must_use]
    pub const fn service(&self) -> &TaskService<S, C> {
        &self.service
    }

    /// Unwraps the controller, returning its service.
    #[must_use]
    pub fn into_service(self) -> TaskService<S, C> {
        self.service
    }
}
