//! Repository port: the per-user persistence boundary for tasks.

use crate::account::domain::UserId;
use crate::task::domain::{Task, TaskFields, TaskId, TaskPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract, scoped by owning user.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every task owned by `owner` in stored order.
    async fn list(&self, owner: &UserId) -> TaskRepositoryResult<Vec<Task>>;

    /// Stores a new task for `owner`.
    ///
    /// The repository assigns the identifier and creation timestamp, and the
    /// task always starts in the backlog.
    async fn create(&self, owner: &UserId, fields: TaskFields) -> TaskRepositoryResult<Task>;

    /// Merges `patch` into the stored task and returns the result.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when `owner` has no task
    /// with `id`.
    async fn update(
        &self,
        owner: &UserId,
        id: &TaskId,
        patch: TaskPatch,
    ) -> TaskRepositoryResult<Task>;

    /// Deletes the task with `id`. Deleting an absent task succeeds.
    async fn delete(&self, owner: &UserId, id: &TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
