//! Task repository over a JSON blob store.
//!
//! Each user's tasks live in one JSON array under `tasks_{user_id}`. Every
//! write is a read-modify-write of that array; concurrent writers through
//! different repositories race with last write winning.

use async_trait::async_trait;
use mockable::Clock;
use std::sync::{Arc, Mutex};

use crate::account::domain::UserId;
use crate::storage::{BlobStore, read_records, write_records};
use crate::task::{
    domain::{Task, TaskFields, TaskId, TaskPatch},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Returns the storage key holding `owner`'s tasks.
#[must_use]
pub fn tasks_key(owner: &UserId) -> String {
    format!("tasks_{owner}")
}

/// Task repository persisting to a [`BlobStore`].
#[derive(Debug)]
pub struct BlobTaskRepository<S, C>
where
    S: BlobStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    write_lock: Mutex<()>,
}

impl<S, C> BlobTaskRepository<S, C>
where
    S: BlobStore,
    C: Clock + Send + Sync,
{
    /// Creates a repository over `store`, stamping new tasks with `clock`.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            store,
            clock,
            write_lock: Mutex::new(()),
        }
    }

    fn load(&self, key: &str) -> TaskRepositoryResult<Vec<Task>> {
        read_records(&*self.store, key).map_err(TaskRepositoryError::persistence)
    }

    fn save(&self, key: &str, tasks: &[Task]) -> TaskRepositoryResult<()> {
        write_records(&*self.store, key, tasks).map_err(TaskRepositoryError::persistence)
    }

    /// Runs `f` over the owner's task list under the write lock and saves
    /// the result.
    fn modify<T>(
        &self,
        owner: &UserId,
        f: impl FnOnce(&mut Vec<Task>) -> TaskRepositoryResult<T>,
    ) -> TaskRepositoryResult<T> {
        let _guard = self.write_lock.lock().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let key = tasks_key(owner);
        let mut tasks = self.load(&key)?;
        let result = f(&mut tasks)?;
        self.save(&key, &tasks)?;
        Ok(result)
    }
}

#[async_trait]
impl<S, C> TaskRepository for BlobTaskRepository<S, C>
where
    S: BlobStore,
    C: Clock + Send + Sync,
{
    async fn list(&self, owner: &UserId) -> TaskRepositoryResult<Vec<Task>> {
        self.load(&tasks_key(owner))
    }

    async fn create(&self, owner: &UserId, fields: TaskFields) -> TaskRepositoryResult<Task> {
        let task = Task::create(TaskId::generate(), owner.clone(), fields, self.clock.utc());
        self.modify(owner, |tasks| {
            tasks.push(task.clone());
            Ok(())
        })?;
        Ok(task)
    }

    async fn update(
        &self,
        owner: &UserId,
        id: &TaskId,
        patch: TaskPatch,
    ) -> TaskRepositoryResult<Task> {
        self.modify(owner, |tasks| {
            let task = tasks
                .iter_mut()
                .find(|task| task.id() == id)
                .ok_or_else(|| TaskRepositoryError::NotFound(id.clone()))?;
            task.apply(&patch);
            Ok(task.clone())
        })
    }

    async fn delete(&self, owner: &UserId, id: &TaskId) -> TaskRepositoryResult<()> {
        self.modify(owner, |tasks| {
            tasks.retain(|task| task.id() != id);
            Ok(())
        })
    }
}
