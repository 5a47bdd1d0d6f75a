//! Behaviour of a service started from a seed dataset.

use super::helpers::{TestService, seeded_service};
use rstest::rstest;
use taskboard::task::{
    domain::{CreateTaskPayload, Priority, Status},
    services::TaskFilters,
};

#[rstest]
fn new_tasks_continue_after_seeded_ids(
    seeded_service: Result<TestService, eyre::Report>,
) -> Result<(), eyre::Report> {
    let mut service = seeded_service?;

    let created = service.create_task(CreateTaskPayload::subtask("Proofread guide", 1))?;

    eyre::ensure!(created.id().value() == 4, "expected id 4, got {}", created.id());
    eyre::ensure!(
        created.summary().contains("Parent Task: #1"),
        "unexpected summary: {}",
        created.summary()
    );
    Ok(())
}

#[rstest]
fn on_time_checks_use_seeded_timestamps(
    seeded_service: Result<TestService, eyre::Report>,
) -> Result<(), eyre::Report> {
    let service = seeded_service?;

    eyre::ensure!(service.is_task_on_time(1) == Some(true), "task 1 finished early");
    eyre::ensure!(service.is_task_on_time(2).is_none(), "task 2 has no dates");
    eyre::ensure!(service.is_task_on_time(3) == Some(false), "task 3 finished late");
    eyre::ensure!(service.is_task_on_time(404).is_none(), "task 404 does not exist");
    Ok(())
}

#[rstest]
fn filters_combine_status_priority_and_creation_window(
    seeded_service: Result<TestService, eyre::Report>,
) -> Result<(), eyre::Report> {
    let service = seeded_service?;

    let done_in_window = service.filter_tasks(
        &TaskFilters::new()
            .with_status(Status::Done)
            .created_after("2024-02-01T09:00:00.000Z")
            .created_before("2024-02-04T09:00:00.000Z"),
    );
    let high_priority = service.filter_tasks(&TaskFilters::new().with_priority(Priority::High));

    let window_ids: Vec<i64> = done_in_window.iter().map(|task| task.id().value()).collect();
    let high_ids: Vec<i64> = high_priority.iter().map(|task| task.id().value()).collect();
    eyre::ensure!(window_ids == vec![1, 3], "unexpected window match: {window_ids:?}");
    eyre::ensure!(high_ids == vec![3], "unexpected priority match: {high_ids:?}");
    Ok(())
}

#[rstest]
fn deleting_a_parent_keeps_its_subtask(
    seeded_service: Result<TestService, eyre::Report>,
) -> Result<(), eyre::Report> {
    let mut service = seeded_service?;

    eyre::ensure!(service.delete_task_details(1), "task 1 should be deleted");
    let orphan = service
        .get_task_details(2)
        .ok_or_else(|| eyre::eyre!("subtask 2 should remain"))?;
    eyre::ensure!(
        orphan.parent_task_id().map(|id| id.value()) == Some(1),
        "soft parent reference should be untouched"
    );
    Ok(())
}
