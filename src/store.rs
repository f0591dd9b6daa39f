// Task store: one load/mutate/persist cycle per process

use crate::error::TaskError;
use crate::storage;
use crate::task::{Status, Task};
use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Next id to assign for `tasks`.
///
/// 1 for an empty list, otherwise one past the highest existing id. Ids below
/// the maximum are never refilled after a deletion. Saturates at `u32::MAX`
/// rather than overflowing on a hand-edited file.
pub fn next_id(tasks: &[Task]) -> u32 {
    tasks.iter().map(|t| t.id).max().map_or(1, |max| max.saturating_add(1))
}

/// Owns the full lifecycle of the task list: loading the backing file,
/// assigning ids, applying mutations, and persisting the result.
///
/// Every mutating operation writes the whole list back before returning.
/// There is no cache across invocations; each CLI run opens a fresh store.
#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Open the store backed by `path`, creating an empty file if absent.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, TaskError> {
        let path = path.as_ref().to_path_buf();
        let tasks = storage::read_tasks(&path)?;
        Ok(Self { path, tasks })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All tasks, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task by id.
    pub fn find(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Create a task with a fresh id and persist the list.
    ///
    /// The description is validated by the caller beforehand; `add` does not
    /// re-check it. New tasks start as [`Status::Todo`] with
    /// `created_at == updated_at`.
    pub fn add(&mut self, description: impl Into<String>) -> Result<Task, TaskError> {
        let now = Utc::now();
        let task = Task {
            id: next_id(&self.tasks),
            description: description.into(),
            status: Status::Todo,
            created_at: now,
            updated_at: now,
        };

        debug!(id = task.id, "Adding task");
        self.tasks.push(task.clone());
        self.persist()?;
        Ok(task)
    }

    /// Tasks matching `filter`, or every task when no filter is given.
    ///
    /// Relative order is preserved. Read-only; never persists.
    pub fn list(&self, filter: Option<Status>) -> Vec<&Task> {
        match filter {
            Some(status) => self.tasks.iter().filter(|t| t.status == status).collect(),
            None => self.tasks.iter().collect(),
        }
    }

    /// Replace the description of task `id` and persist the list.
    ///
    /// A missing id performs no write at all.
    pub fn update(&mut self, id: u32, description: impl Into<String>) -> Result<Task, TaskError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))?;

        task.description = description.into();
        task.updated_at = Utc::now();
        let updated = task.clone();

        debug!(id, "Updated task description");
        self.persist()?;
        Ok(updated)
    }

    /// Remove task `id` and persist the list.
    ///
    /// Removal is permanent; there is no tombstone.
    pub fn delete(&mut self, id: u32) -> Result<Task, TaskError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))?;

        let removed = self.tasks.remove(index);
        debug!(id, "Deleted task");
        self.persist()?;
        Ok(removed)
    }

    /// Set the status of task `id` and persist the list.
    ///
    /// Any status may be applied regardless of the current one; transitions
    /// are not validated.
    pub fn change_status(&mut self, id: u32, status: Status) -> Result<Task, TaskError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))?;

        task.status = status;
        task.updated_at = Utc::now();
        let updated = task.clone();

        debug!(id, status = %updated.status, "Changed task status");
        self.persist()?;
        Ok(updated)
    }

    fn persist(&self) -> Result<(), TaskError> {
        storage::write_tasks(&self.path, &self.tasks)
    }
}
