//! Shared world state for task catalogue BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{Task, TaskDomainError},
    services::TaskService,
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskService<InMemoryTaskStore, DefaultClock>;

/// Scenario world for task catalogue behaviour tests.
pub struct TaskCatalogueWorld {
    pub service: TestTaskService,
    pub snapshot: Option<Task>,
    pub last_created_task: Option<Task>,
    pub last_creation_result: Option<Result<Task, TaskDomainError>>,
    pub last_deletion: Option<bool>,
}

impl TaskCatalogueWorld {
    /// Creates a world around an empty service.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: TaskService::new(InMemoryTaskStore::new(), Arc::new(DefaultClock)),
            snapshot: None,
            last_created_task: None,
            last_creation_result: None,
            last_deletion: None,
        }
    }

    /// Records a creation attempt, remembering the task when it succeeded.
    pub fn record_creation(&mut self, result: Result<Task, TaskDomainError>) {
        if let Ok(ref task) = result {
            self.last_created_task = Some(task.clone());
        }
        self.last_creation_result = Some(result);
    }

    /// Returns the most recently created task.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been created in the scenario.
    pub fn created_task(&self) -> Result<&Task, eyre::Report> {
        self.last_created_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))
    }
}

impl Default for TaskCatalogueWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskCatalogueWorld {
    TaskCatalogueWorld::default()
}
