//! Board operations persisted through blob storage.

use super::helpers::{blobs, board_for, days_from_today, task_repository};
use rstest::rstest;
use std::sync::Arc;
use taskboard::account::domain::UserId;
use taskboard::storage::{BlobStore, InMemoryBlobStore};
use taskboard::task::{
    adapters::blob::tasks_key,
    domain::{Direction, DropOutcome, DropTarget, Priority, Stage, TaskDraft},
    ports::TaskRepository,
    services::{BoardError, load_stats},
};

fn owner(raw: &str) -> UserId {
    UserId::new(raw).expect("valid user id")
}

fn draft(name: &str) -> TaskDraft {
    TaskDraft::new(name).with_deadline(days_from_today(7))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_tasks_survive_a_reload(blobs: Arc<InMemoryBlobStore>) -> eyre::Result<()> {
    let alice = owner("alice");
    let mut board = board_for(&blobs, &alice);
    let first = board
        .create_task(draft("Draft agenda").with_priority(Priority::High))
        .await?;
    let second = board.create_task(draft("Book room")).await?;

    let mut reopened = board_for(&blobs, &alice);
    let count = reopened.load().await?;

    eyre::ensure!(count == 2);
    let ids: Vec<_> = reopened.store().tasks().iter().map(|task| task.id()).collect();
    eyre::ensure!(ids == [first.id(), second.id()]);
    eyre::ensure!(reopened.store().tasks().iter().all(|task| task.stage() == Stage::Backlog));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_are_stored_per_owner(blobs: Arc<InMemoryBlobStore>) -> eyre::Result<()> {
    let alice = owner("alice");
    let bob = owner("bob");
    board_for(&blobs, &alice).create_task(draft("Alice task")).await?;

    let mut bobs_board = board_for(&blobs, &bob);
    eyre::ensure!(bobs_board.load().await? == 0);
    eyre::ensure!(blobs.get(&tasks_key(&alice))?.is_some());
    eyre::ensure!(blobs.get(&tasks_key(&bob))?.is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_walks_the_board_and_back(blobs: Arc<InMemoryBlobStore>) -> eyre::Result<()> {
    let alice = owner("alice");
    let mut board = board_for(&blobs, &alice);
    let task = board.create_task(draft("Release 1.0")).await?;

    for expected in [Stage::ToDo, Stage::Ongoing, Stage::Done] {
        let moved = board.move_task(task.id(), Direction::Forward).await?;
        eyre::ensure!(moved.stage() == expected);
    }
    let past_end = board.move_task(task.id(), Direction::Forward).await;
    eyre::ensure!(matches!(past_end, Err(BoardError::Domain(_))));

    let moved_back = board.move_task(task.id(), Direction::Back).await?;
    eyre::ensure!(moved_back.stage() == Stage::Ongoing);

    let stored = task_repository(&blobs).list(&alice).await?;
    eyre::ensure!(stored.first().map(|task| task.stage()) == Some(Stage::Ongoing));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn drag_to_trash_deletes_after_confirmation(
    blobs: Arc<InMemoryBlobStore>,
) -> eyre::Result<()> {
    let alice = owner("alice");
    let mut board = board_for(&blobs, &alice);
    let keep = board.create_task(draft("Keep me")).await?;
    let doomed = board.create_task(draft("Delete me")).await?;

    board.begin_drag(doomed.id())?;
    eyre::ensure!(board.gesture().trash_visible());
    let outcome = board.end_drag(Some(DropTarget::Trash)).await?;
    eyre::ensure!(matches!(outcome, DropOutcome::ConfirmDelete { .. }));
    eyre::ensure!(task_repository(&blobs).list(&alice).await?.len() == 2);

    board.confirm_delete().await?;

    let stored = task_repository(&blobs).list(&alice).await?;
    eyre::ensure!(stored.len() == 1);
    eyre::ensure!(stored.first().map(|task| task.id()) == Some(keep.id()));
    eyre::ensure!(board.store().len() == 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn drag_between_columns_persists_stage(blobs: Arc<InMemoryBlobStore>) -> eyre::Result<()> {
    let alice = owner("alice");
    let mut board = board_for(&blobs, &alice);
    let task = board.create_task(draft("Write tests")).await?;

    board.begin_drag(task.id())?;
    board.end_drag(Some(DropTarget::Column(Stage::Ongoing))).await?;

    let mut reopened = board_for(&blobs, &alice);
    reopened.load().await?;
    eyre::ensure!(reopened.store().by_stage(Stage::Ongoing).count() == 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edit_updates_fields_but_not_stage(blobs: Arc<InMemoryBlobStore>) -> eyre::Result<()> {
    let alice = owner("alice");
    let mut board = board_for(&blobs, &alice);
    let task = board.create_task(draft("Old name")).await?;
    board.move_task(task.id(), Direction::Forward).await?;

    let edited = board
        .edit_task(
            task.id(),
            TaskDraft::new("New name")
                .with_priority(Priority::Low)
                .with_deadline(days_from_today(30))
                .with_stage(Stage::Done),
        )
        .await?;

    eyre::ensure!(edited.name().as_str() == "New name");
    eyre::ensure!(edited.priority() == Priority::Low);
    eyre::ensure!(edited.stage() == Stage::ToDo);
    eyre::ensure!(edited.created_at() == task.created_at());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dashboard_reflects_completed_tasks(blobs: Arc<InMemoryBlobStore>) -> eyre::Result<()> {
    let alice = owner("alice");
    let mut board = board_for(&blobs, &alice);
    let done = board.create_task(draft("Finish me")).await?;
    board.create_task(draft("Later")).await?;
    for _ in 0..3 {
        board.move_task(done.id(), Direction::Forward).await?;
    }

    let stats = load_stats(&*task_repository(&blobs), &alice).await?;

    eyre::ensure!(stats.total() == 2);
    eyre::ensure!(stats.completed() == 1);
    eyre::ensure!(stats.pending() == 1);
    eyre::ensure!(stats.completion_percent() == 50);
    eyre::ensure!(board.stats() == stats);
    Ok(())
}
