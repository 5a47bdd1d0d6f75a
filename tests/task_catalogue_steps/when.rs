//! When steps for task catalogue BDD scenarios.

use super::world::TaskCatalogueWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::task::domain::{CreateTaskPayload, TaskPatch};

#[when(r#"a subtask titled "{title}" is created under parent {parent:i64}"#)]
fn create_subtask(world: &mut TaskCatalogueWorld, title: String, parent: i64) {
    let result = world
        .service
        .create_task(CreateTaskPayload::subtask(title, parent));
    world.record_creation(result);
}

#[when(r#"an epic titled "{title}" is created with subtasks "{subtasks}""#)]
fn create_epic(
    world: &mut TaskCatalogueWorld,
    title: String,
    subtasks: String,
) -> Result<(), eyre::Report> {
    let subtask_ids = subtasks
        .split(',')
        .map(|id| id.trim().parse::<i64>())
        .collect::<Result<Vec<_>, _>>()
        .wrap_err("parse subtask ids in scenario")?;
    let result = world
        .service
        .create_task(CreateTaskPayload::epic(title, subtask_ids));
    world.record_creation(result);
    Ok(())
}

#[when(r#"the last created task is updated to status "{status}""#)]
fn update_status(world: &mut TaskCatalogueWorld, status: String) -> Result<(), eyre::Report> {
    let id = world.created_task()?.id().value();
    let updated = world
        .service
        .update_task_details(id, TaskPatch::new().with_status(status))
        .wrap_err("update task status in scenario")?
        .ok_or_else(|| eyre::eyre!("task {id} vanished before update"))?;
    world.last_created_task = Some(updated);
    Ok(())
}

#[when("task {id:i64} is deleted")]
fn delete_task(world: &mut TaskCatalogueWorld, id: i64) {
    world.last_deletion = Some(world.service.delete_task_details(id));
}
