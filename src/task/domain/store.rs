//! Ordered in-memory task collection for the current session.
//!
//! The store is the board's single source of truth between boundary calls.
//! It never talks to persistence itself; callers apply an action once the
//! boundary has confirmed the matching operation.

use super::{Stage, Task, TaskId};
use thiserror::Error;

/// Errors returned by task store actions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskStoreError {
    /// A task with the same identifier is already in the store.
    #[error("duplicate task identifier: {0}")]
    DuplicateId(TaskId),

    /// No task with the identifier is in the store.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

/// Mutation dispatched against a [`TaskStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    /// Discard the collection and install these tasks in order.
    ReplaceAll(Vec<Task>),
    /// Append a task.
    Add(Task),
    /// Replace the task with the same identifier.
    Update(Task),
    /// Remove the task with this identifier, if present.
    Remove(TaskId),
}

/// Ordered collection of the session's tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    items: Vec<Task>,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Applies `action` to the store.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] under the same conditions as the matching
    /// direct method; the store is unchanged on error.
    pub fn apply(&mut self, action: TaskAction) -> Result<(), TaskStoreError> {
        match action {
            TaskAction::ReplaceAll(tasks) => {
                self.replace_all(tasks);
                Ok(())
            }
            TaskAction::Add(task) => self.add(task),
            TaskAction::Update(task) => self.update(task),
            TaskAction::Remove(id) => {
                self.remove(&id);
                Ok(())
            }
        }
    }

    /// Discards the current collection and installs `tasks` verbatim.
    pub fn replace_all(&mut self, tasks: impl IntoIterator<Item = Task>) {
        self.items = tasks.into_iter().collect();
    }

    /// Appends `task`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::DuplicateId`] when a task with the same
    /// identifier is already present.
    pub fn add(&mut self, task: Task) -> Result<(), TaskStoreError> {
        if self.position(task.id()).is_some() {
            return Err(TaskStoreError::DuplicateId(task.id().clone()));
        }
        self.items.push(task);
        Ok(())
    }

    /// Replaces the task whose identifier matches `task`, keeping its
    /// position.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no task matches.
    pub fn update(&mut self, task: Task) -> Result<(), TaskStoreError> {
        let slot = self
            .items
            .iter_mut()
            .find(|existing| existing.id() == task.id())
            .ok_or_else(|| TaskStoreError::NotFound(task.id().clone()))?;
        *slot = task;
        Ok(())
    }

    /// Removes the task with `id`, preserving the order of the rest.
    ///
    /// Removing an absent identifier is a no-op and returns `None`.
    pub fn remove(&mut self, id: &TaskId) -> Option<Task> {
        self.position(id).map(|index| self.items.remove(index))
    }

    /// Returns the task with `id`.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.items.iter().find(|task| task.id() == id)
    }

    /// Returns every task in collection order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.items
    }

    /// Returns the tasks in `stage`, in collection order.
    pub fn by_stage(&self, stage: Stage) -> impl Iterator<Item = &Task> {
        self.items.iter().filter(move |task| task.stage() == stage)
    }

    /// Returns the number of tasks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the store holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: &TaskId) -> Option<usize> {
        self.items.iter().position(|task| task.id() == id)
    }
}
