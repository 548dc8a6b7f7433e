//! Given steps for board stage BDD scenarios.

use super::world::{BoardWorld, run_async};
use chrono::Days;
use eyre::WrapErr;
use mockable::{Clock, DefaultClock};
use rstest_bdd_macros::given;
use taskboard::task::domain::{Direction, TaskDraft};

#[given("a signed-in user with a task in stage {stage:u8}")]
fn task_in_stage(world: &mut BoardWorld, stage: u8) -> Result<(), eyre::Report> {
    let deadline = DefaultClock
        .local()
        .date_naive()
        .checked_add_days(Days::new(14))
        .ok_or_else(|| eyre::eyre!("deadline overflow"))?;
    let task = run_async(
        world
            .board
            .create_task(TaskDraft::new("Prepare demo").with_deadline(deadline)),
    )
    .wrap_err("create task for board scenario")?;

    for _ in 0..stage {
        run_async(world.board.move_task(task.id(), Direction::Forward))
            .wrap_err("advance task in scenario setup")?;
    }
    world.task_id = Some(task.id().clone());
    Ok(())
}
