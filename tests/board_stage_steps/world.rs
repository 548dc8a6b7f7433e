//! Shared world state for board stage BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::account::domain::UserId;
use taskboard::storage::InMemoryBlobStore;
use taskboard::task::{
    adapters::blob::BlobTaskRepository,
    domain::{DropOutcome, Task, TaskId},
    services::{BoardResult, BoardService},
};

/// Task repository used by the BDD world.
pub type TestTasks = BlobTaskRepository<InMemoryBlobStore, DefaultClock>;

/// Board service used by the BDD world.
pub type TestBoard = BoardService<TestTasks, DefaultClock>;

/// Scenario world for board stage behaviour tests.
pub struct BoardWorld {
    pub owner: UserId,
    pub repository: Arc<TestTasks>,
    pub board: TestBoard,
    pub task_id: Option<TaskId>,
    pub last_move: Option<BoardResult<Task>>,
    pub last_drop: Option<BoardResult<DropOutcome>>,
}

impl BoardWorld {
    /// Creates a world with an empty board for a fresh user.
    #[must_use]
    pub fn new() -> Self {
        let owner = UserId::generate();
        let repository = Arc::new(BlobTaskRepository::new(
            Arc::new(InMemoryBlobStore::new()),
            Arc::new(DefaultClock),
        ));
        let board = BoardService::new(
            Arc::clone(&repository),
            Arc::new(DefaultClock),
            owner.clone(),
        );

        Self {
            owner,
            repository,
            board,
            task_id: None,
            last_move: None,
            last_drop: None,
        }
    }

    /// Returns the scenario's task identifier.
    ///
    /// # Errors
    ///
    /// Returns an error when no task was created by a previous step.
    pub fn task_id(&self) -> Result<TaskId, eyre::Report> {
        self.task_id
            .clone()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
