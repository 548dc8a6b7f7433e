//! Dashboard statistics over a user's tasks.

use crate::account::domain::UserId;
use crate::task::{
    domain::{Stage, Task},
    ports::{TaskRepository, TaskRepositoryResult},
};

/// Task counts shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardStats {
    per_stage: [usize; 4],
}

impl BoardStats {
    /// Counts `tasks` by stage.
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let mut per_stage = [0_usize; 4];
        for task in tasks {
            if let Some(count) = per_stage.get_mut(usize::from(task.stage().index())) {
                *count += 1;
            }
        }
        Self { per_stage }
    }

    /// Returns the number of tasks in `stage`.
    #[must_use]
    pub fn count_in(&self, stage: Stage) -> usize {
        self.per_stage
            .get(usize::from(stage.index()))
            .copied()
            .unwrap_or(0)
    }

    /// Returns the total number of tasks.
    #[must_use]
    pub fn total(&self) -> usize {
        self.per_stage.iter().sum()
    }

    /// Returns the number of tasks in [`Stage::Done`].
    #[must_use]
    pub fn completed(&self) -> usize {
        self.count_in(Stage::Done)
    }

    /// Returns the number of tasks not yet done.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.total() - self.completed()
    }

    /// Returns the share of completed tasks as a whole percentage, rounded
    /// half up. An empty board reports `0`.
    #[must_use]
    pub fn completion_percent(&self) -> usize {
        let total = self.total();
        (self.completed() * 200 + total)
            .checked_div(total * 2)
            .unwrap_or(0)
    }
}

/// Loads `owner`'s tasks from the boundary and summarizes them.
///
/// # Errors
///
/// Returns the repository error when the task list cannot be read.
pub async fn load_stats<R>(repository: &R, owner: &UserId) -> TaskRepositoryResult<BoardStats>
where
    R: TaskRepository + ?Sized,
{
    let tasks = repository.list(owner).await?;
    let stats = BoardStats::from_tasks(&tasks);
    tracing::debug!(
        user_id = %owner,
        total = stats.total(),
        completed = stats.completed(),
        "dashboard statistics loaded"
    );
    Ok(stats)
}
