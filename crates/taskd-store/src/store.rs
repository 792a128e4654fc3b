use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;

use crate::error::StoreError;
use crate::task::{Task, TaskId, TaskStatus};

/// The single owner of all task records and the ID counter.
///
/// Cheaply cloneable handle over shared state; constructed once at startup
/// and passed into whatever layer exposes it. Every operation takes the one
/// interior lock for the duration of a scan/insert/remove only — nothing
/// holds it across I/O.
#[derive(Clone, Default)]
pub struct TaskStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    /// Records in insertion order.
    tasks: Vec<Task>,
    /// Last assigned ID. Strictly increasing, never reused after deletion.
    last_id: TaskId,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a task. The trimmed title must be non-empty; description
    /// defaults to empty. The new record starts as `pending` with the next
    /// unused ID. ID allocation is not rolled back for any caller-side
    /// failure after this returns.
    pub fn create(&self, title: &str, description: &str) -> Result<Task, StoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::Validation(
                "task title must be a non-empty string".into(),
            ));
        }

        let mut inner = self.inner.lock();
        inner.last_id += 1;
        let now = Utc::now().to_rfc3339();
        let task = Task {
            id: inner.last_id,
            title: title.to_owned(),
            description: description.trim().to_owned(),
            status: TaskStatus::Pending,
            created_at: now.clone(),
            updated_at: now,
        };
        inner.tasks.push(task.clone());

        tracing::info!(task_id = task.id, "task created");
        Ok(task)
    }

    /// Snapshot of all tasks in creation order.
    pub fn list(&self) -> Vec<Task> {
        self.inner.lock().tasks.clone()
    }

    /// Snapshot of one task by ID.
    pub fn get(&self, id: TaskId) -> Result<Task, StoreError> {
        let inner = self.inner.lock();
        inner
            .tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Set a task's status. Any status may follow any other, including
    /// itself. Only `status` and `updated_at` change.
    pub fn update_status(&self, id: TaskId, status: TaskStatus) -> Result<Task, StoreError> {
        let mut inner = self.inner.lock();
        let task = inner
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        task.status = status;
        task.updated_at = Utc::now().to_rfc3339();

        tracing::info!(task_id = id, status = %status, "task status updated");
        Ok(task.clone())
    }

    /// Remove a task permanently. The ID is never handed out again.
    pub fn delete(&self, id: TaskId) -> Result<(), StoreError> {
        let mut inner = self.inner.lock();
        let pos = inner
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        inner.tasks.remove(pos);

        tracing::info!(task_id = id, "task deleted");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.inner.lock().tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().tasks.is_empty()
    }
}
