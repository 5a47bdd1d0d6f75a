//! Shared fixtures for in-memory task service integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::task::{adapters::memory::InMemoryTaskStore, services::TaskService};

/// Service type used across the in-memory integration tests.
pub type TestService = TaskService<InMemoryTaskStore, DefaultClock>;

/// Seed dataset shaped like the records the store exports.
pub const SEED_DATASET: &str = r#"[
    {
        "id": 1,
        "type": "task",
        "title": "Draft onboarding guide",
        "description": "Cover local setup and first deploy",
        "status": "done",
        "priority": "medium",
        "createdAt": "2024-02-01T09:00:00.000Z",
        "completedAt": "2024-02-03T17:00:00.000Z",
        "deadline": "2024-02-05T17:00:00.000Z"
    },
    {
        "id": 2,
        "type": "subtask",
        "title": "Record setup video",
        "status": "inProgress",
        "priority": "low",
        "createdAt": "2024-02-02T09:00:00.000Z",
        "parentTaskId": 1
    },
    {
        "id": 3,
        "type": "bug",
        "title": "Broken link in README",
        "status": "done",
        "priority": "high",
        "createdAt": "2024-02-04T09:00:00.000Z",
        "completedAt": "2024-02-09T09:00:00.000Z",
        "deadline": "2024-02-06T09:00:00.000Z",
        "severity": "low"
    }
]"#;

/// Provides a fresh, empty service backed by the system clock.
#[fixture]
pub fn service() -> TestService {
    TaskService::new(InMemoryTaskStore::new(), Arc::new(DefaultClock))
}

/// Provides a service seeded from [`SEED_DATASET`].
///
/// # Errors
///
/// Returns an error if the seed dataset fails to load.
#[fixture]
pub fn seeded_service() -> Result<TestService, eyre::Report> {
    let store = InMemoryTaskStore::from_json_str(SEED_DATASET)?;
    Ok(TaskService::new(store, Arc::new(DefaultClock)))
}
