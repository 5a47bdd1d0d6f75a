//! End-to-end task service behaviour over the in-memory store.

use super::helpers::{TestService, service};
use rstest::rstest;
use taskboard::task::{
    controller::TaskController,
    domain::{CreateTaskPayload, Status, TaskDomainError, TaskPatch},
    services::TaskFilters,
};

#[rstest]
fn created_tasks_get_increasing_ids_and_iso_timestamps(mut service: TestService) {
    let first = service
        .create_task(CreateTaskPayload::task("First"))
        .expect("valid payload");
    let second = service
        .create_task(CreateTaskPayload::bug("Second", None))
        .expect("valid payload");

    assert!(second.id() > first.id());
    let created_at = second.created_at().as_str();
    assert_eq!(created_at.len(), "2024-01-01T00:00:00.000Z".len());
    assert!(created_at.ends_with('Z'));
    assert!(second.created_at() >= first.created_at());
}

#[rstest]
fn rejected_payloads_leave_id_gaps(mut service: TestService) {
    let first = service
        .create_task(CreateTaskPayload::task("Kept"))
        .expect("valid payload");
    let rejected = service.create_task(CreateTaskPayload::epic("Broken epic", [1, 0]));
    let third = service
        .create_task(CreateTaskPayload::task("Also kept"))
        .expect("valid payload");

    assert!(matches!(
        rejected,
        Err(TaskDomainError::InvalidReference {
            field: "subtaskIds",
            value: 0
        })
    ));
    assert_eq!(first.id().value(), 1);
    assert_eq!(third.id().value(), 3);
    assert_eq!(service.tasks().len(), 2);
}

#[rstest]
fn json_payloads_flow_through_the_controller(service: TestService) {
    let mut controller = TaskController::new(service);
    let payload = serde_json::from_str(
        r#"{"type": "story", "title": "User authentication", "storyPoints": 8}"#,
    )
    .expect("story payload decodes");
    let patch: TaskPatch =
        serde_json::from_str(r#"{"status": "done"}"#).expect("patch decodes");

    let story = controller
        .handle_create_task(payload)
        .expect("valid story payload");
    let id = story.id().value();
    let updated = controller
        .handle_update_task(id, patch)
        .expect("valid patch")
        .expect("story exists");

    assert_eq!(updated.story_points(), Some(8.0));
    assert_eq!(updated.status(), Status::Done);
    assert_eq!(updated.created_at(), story.created_at());
    assert_eq!(
        controller.handle_filter_tasks(&TaskFilters::new().with_status(Status::Done)),
        vec![updated]
    );
}
