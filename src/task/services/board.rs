//! Board orchestration: the task store, stage transitions and deletion
//! confirmation for one signed-in user.
//!
//! Every mutating operation follows the same order: validate locally, call
//! the repository, and only on success apply the matching [`TaskAction`] to
//! the store. A failed boundary call therefore leaves the board exactly as it
//! was and is returned to the caller to surface.

use crate::account::domain::UserId;
use crate::config::TaskRules;
use crate::task::{
    domain::{
        Direction, DragGesture, DragState, DropOutcome, DropTarget, GestureError, Stage, Task, TaskAction,
        TaskDomainError, TaskDraft, TaskId, TaskPatch, TaskStore, TaskStoreError,
    },
    ports::{TaskRepository, TaskRepositoryError},
    services::BoardStats,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Domain validation or a stage rule rejected the request.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// The store rejected the action, typically an unknown task.
    #[error(transparent)]
    Store(#[from] TaskStoreError),

    /// The persistence boundary failed; the board is unchanged.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),

    /// A drag event arrived out of order.
    #[error(transparent)]
    Gesture(#[from] GestureError),

    /// Confirmation was requested without a pending deletion.
    #[error("no task deletion is awaiting confirmation")]
    NoPendingDeletion,
}

/// Result type for board service operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Task board for one user.
///
/// Owns the session's [`TaskStore`]; callers hold the service and pass it to
/// whatever renders the board.
pub struct BoardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    rules: TaskRules,
    owner: UserId,
    store: TaskStore,
    gesture: DragGesture,
    pending_deletion: Option<TaskId>,
}

impl<R, C> BoardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates an empty board for `owner` with default task rules.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>, owner: UserId) -> Self {
        Self::with_rules(repository, clock, owner, TaskRules::default())
    }

    /// Creates an empty board for `owner` with custom task rules.
    #[must_use]
    pub fn with_rules(
        repository: Arc<R>,
        clock: Arc<C>,
        owner: UserId,
        rules: TaskRules,
    ) -> Self {
        Self {
            repository,
            clock,
            rules,
            owner,
            store: TaskStore::new(),
            gesture: DragGesture::new(),
            pending_deletion: None,
        }
    }

    /// Returns the board owner.
    #[must_use]
    pub const fn owner(&self) -> &UserId {
        &self.owner
    }

    /// Returns the task store.
    #[must_use]
    pub const fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Returns the drag gesture state.
    #[must_use]
    pub const fn gesture(&self) -> &DragGesture {
        &self.gesture
    }

    /// Returns the task awaiting deletion confirmation, if any.
    #[must_use]
    pub fn pending_deletion(&self) -> Option<&Task> {
        self.pending_deletion
            .as_ref()
            .and_then(|id| self.store.get(id))
    }

    /// Summarizes the tasks currently on the board.
    #[must_use]
    pub fn stats(&self) -> BoardStats {
        BoardStats::from_tasks(self.store.tasks())
    }

    /// Reloads every task from the boundary, replacing the store contents.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Repository`] when the list cannot be read; the
    /// store keeps its previous contents.
    pub async fn load(&mut self) -> BoardResult<usize> {
        let tasks = self
            .repository
            .list(&self.owner)
            .await
            .inspect_err(|err| {
                tracing::warn!(user_id = %self.owner, error = %err, "failed to load tasks");
            })?;
        let count = tasks.len();
        self.store.apply(TaskAction::ReplaceAll(tasks))?;
        tracing::debug!(user_id = %self.owner, count, "tasks loaded");
        Ok(count)
    }

    /// Creates a task from form input. New tasks always enter the backlog,
    /// whatever stage the draft carries.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Domain`] when the draft is invalid, or
    /// [`BoardError::Repository`] when the boundary rejects the task.
    pub async fn create_task(&mut self, draft: TaskDraft) -> BoardResult<Task> {
        let fields = draft.validate(&self.rules, self.today())?;
        if let Some(stage) = draft.requested_stage().filter(|stage| *stage != Stage::Backlog) {
            tracing::debug!(%stage, "ignoring requested stage for new task");
        }

        let task = self
            .repository
            .create(&self.owner, fields)
            .await
            .inspect_err(|err| tracing::warn!(error = %err, "failed to create task"))?;
        self.store.apply(TaskAction::Add(task.clone()))?;
        tracing::info!(task_id = %task.id(), "task created");
        Ok(task)
    }

    /// Replaces a task's name, priority and deadline from form input. The
    /// stage is left as it is.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] for an unknown task,
    /// [`BoardError::Domain`] when the draft is invalid, or
    /// [`BoardError::Repository`] when the boundary call fails.
    pub async fn edit_task(&mut self, id: &TaskId, draft: TaskDraft) -> BoardResult<Task> {
        self.require(id)?;
        let fields = draft.validate(&self.rules, self.today())?;
        let task = self.push_update(id, TaskPatch::fields(fields)).await?;
        tracing::info!(task_id = %id, "task edited");
        Ok(task)
    }

    /// Moves a task one stage back or forward.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] for an unknown task,
    /// [`BoardError::Domain`] with [`TaskDomainError::StageOutOfRange`] when
    /// the move would leave the board (no boundary call is made), or
    /// [`BoardError::Repository`] when the boundary call fails.
    pub async fn move_task(&mut self, id: &TaskId, direction: Direction) -> BoardResult<Task> {
        let target = self.require(id)?.next_stage(direction)?;
        let task = self.push_update(id, TaskPatch::stage(target)).await?;
        tracing::info!(task_id = %id, stage = %target, "task moved");
        Ok(task)
    }

    /// Starts dragging the task with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] for an unknown task or
    /// [`BoardError::Gesture`] when a drag is already in progress.
    pub fn begin_drag(&mut self, id: &TaskId) -> BoardResult<()> {
        let source = self.require(id)?.stage();
        self.gesture.start(id.clone(), source)?;
        Ok(())
    }

    /// Ends the current drag over `target`, or outside every target when
    /// `None`.
    ///
    /// A drop onto a column other than the task's current one moves the task
    /// there, even when it was moved elsewhere since the drag began. A drop
    /// onto the trash only marks the task for deletion, to be confirmed with
    /// [`Self::confirm_delete`]. The gesture is idle again when this returns,
    /// whether or not the move succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Gesture`] when no drag is in progress, or
    /// [`BoardError::Repository`] when the move's boundary call fails.
    pub async fn end_drag(&mut self, target: Option<DropTarget>) -> BoardResult<DropOutcome> {
        let DragState::Dragging { task_id, source } = self.gesture.state() else {
            return Err(GestureError::NotDragging.into());
        };
        let current = self.store.get(task_id).map_or(*source, Task::stage);
        let outcome = self.gesture.release(target, current)?;
        match &outcome {
            DropOutcome::Move { task_id, to, .. } => {
                let moved = self.push_update(task_id, TaskPatch::stage(*to)).await;
                self.gesture.settle()?;
                moved?;
                tracing::info!(%task_id, stage = %to, "task dropped on column");
            }
            DropOutcome::ConfirmDelete { task_id } => {
                self.pending_deletion = Some(task_id.clone());
                self.gesture.settle()?;
                tracing::debug!(%task_id, "task dropped on trash");
            }
            DropOutcome::Cancelled | DropOutcome::Unchanged => {}
        }
        Ok(outcome)
    }

    /// Marks the task with `id` for deletion, pending confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] for an unknown task.
    pub fn request_delete(&mut self, id: &TaskId) -> BoardResult<&Task> {
        self.require(id)?;
        self.pending_deletion = Some(id.clone());
        self.require(id)
    }

    /// Abandons the pending deletion and returns the task it named.
    pub const fn cancel_delete(&mut self) -> Option<TaskId> {
        self.pending_deletion.take()
    }

    /// Deletes the task awaiting confirmation.
    ///
    /// On a boundary failure the deletion stays pending so the user can
    /// retry or cancel.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NoPendingDeletion`] when nothing awaits
    /// confirmation, or [`BoardError::Repository`] when the boundary call
    /// fails.
    pub async fn confirm_delete(&mut self) -> BoardResult<TaskId> {
        let id = self
            .pending_deletion
            .clone()
            .ok_or(BoardError::NoPendingDeletion)?;
        self.repository
            .delete(&self.owner, &id)
            .await
            .inspect_err(|err| {
                tracing::warn!(task_id = %id, error = %err, "failed to delete task");
            })?;

        self.pending_deletion = None;
        self.store.apply(TaskAction::Remove(id.clone()))?;
        tracing::info!(task_id = %id, "task deleted");
        Ok(id)
    }

    async fn push_update(&mut self, id: &TaskId, patch: TaskPatch) -> BoardResult<Task> {
        let task = self
            .repository
            .update(&self.owner, id, patch)
            .await
            .inspect_err(|err| {
                tracing::warn!(task_id = %id, error = %err, "failed to update task");
            })?;
        self.store.apply(TaskAction::Update(task.clone()))?;
        Ok(task)
    }

    fn require(&self, id: &TaskId) -> BoardResult<&Task> {
        self.store
            .get(id)
            .ok_or_else(|| TaskStoreError::NotFound(id.clone()).into())
    }

    fn today(&self) -> chrono::NaiveDate {
        self.clock.local().date_naive()
    }
}
