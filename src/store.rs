use chrono::Local;

use crate::model::{Task, TaskId};

/// Policy rejection from [`TaskStore::add`]. The `Display` text doubles as
/// the user-facing warning message.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AddError {
    #[error("a task titled \"{0}\" already exists")]
    DuplicateTitle(String),
}

/// Owner of the ordered task sequence and its mutation operations.
///
/// All operations are synchronous and in-memory; unknown ids are ignored
/// (the `bool` results exist for callers that want to show a status line,
/// never for error propagation).
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    last_id: TaskId,
}

impl TaskStore {
    pub fn new() -> Self {
        TaskStore::default()
    }

    /// Append a new open task with a fresh id.
    /// Rejects the add when any existing task already has `title`; the
    /// sequence is left unchanged in that case.
    pub fn add(&mut self, title: &str) -> Result<TaskId, AddError> {
        if self.tasks.iter().any(|t| t.title == title) {
            return Err(AddError::DuplicateTitle(title.to_string()));
        }
        let id = self.next_id();
        self.tasks.push(Task::new(id, title.to_string()));
        Ok(id)
    }

    /// Flip the completion flag of the task with `id`.
    /// Returns false (sequence unchanged) when no task has `id`.
    pub fn toggle_done(&mut self, id: TaskId) -> bool {
        match self.find_mut(id) {
            Some(task) => {
                task.done = !task.done;
                true
            }
            None => false,
        }
    }

    /// Replace the title of the task with `id`. Duplicates are not
    /// re-checked here; a rename may legitimately produce one.
    /// Returns false (sequence unchanged) when no task has `id`.
    pub fn rename(&mut self, id: TaskId, new_title: &str) -> bool {
        match self.find_mut(id) {
            Some(task) => {
                task.title = new_title.to_string();
                true
            }
            None => false,
        }
    }

    /// Remove the task with `id`, preserving the order of the rest.
    /// Returns false (sequence unchanged) when no task has `id`.
    /// Asking the user first is the UI's job; the store removes
    /// unconditionally.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Number of tasks currently in the sequence
    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn find_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Fresh id: current time in milliseconds, bumped past the previous id
    /// when two creations land in the same millisecond.
    fn next_id(&mut self) -> TaskId {
        let now = Local::now().timestamp_millis().max(0) as TaskId;
        let id = now.max(self.last_id + 1);
        self.last_id = id;
        id
    }
}
