//! Given steps for task catalogue BDD scenarios.

use super::world::TaskCatalogueWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::task::domain::CreateTaskPayload;

#[given("an empty task service")]
fn empty_task_service(world: &mut TaskCatalogueWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.service.tasks().is_empty(),
        "scenario world should start with no tasks"
    );
    Ok(())
}

#[given(r#"a task titled "{title}" has been created"#)]
fn task_has_been_created(
    world: &mut TaskCatalogueWorld,
    title: String,
) -> Result<(), eyre::Report> {
    let created = world
        .service
        .create_task(CreateTaskPayload::task(title))
        .wrap_err("create task for scenario setup")?;
    world.snapshot = Some(created.clone());
    world.last_created_task = Some(created);
    Ok(())
}
