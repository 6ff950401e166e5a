use crate::domain::{Task, TaskFields, TaskId};
use crate::persistence::{Storage, StorageError};
use chrono::NaiveDate;

/// The ordered task collection, kept in sync with its storage backend.
///
/// Tasks stay in insertion order. Every mutation that changes the
/// collection rewrites the whole persisted store before returning.
pub struct TaskStore {
    storage: Box<dyn Storage>,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Load the store from the given backend
    pub fn open(storage: Box<dyn Storage>) -> Result<Self, StorageError> {
        let tasks = storage.load()?;
        Ok(Self { storage, tasks })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Append a task for the given day.
    ///
    /// A blank submission (empty or whitespace-only) is rejected without
    /// touching the backend. Returns the new task's id when one was added.
    pub fn add(
        &mut self,
        text: &str,
        date: NaiveDate,
        now_millis: i64,
    ) -> Result<Option<TaskId>, StorageError> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let id = self.next_id(now_millis);
        self.tasks.push(Task::new(id, text.to_string(), date));
        self.persist()?;
        Ok(Some(id))
    }

    /// Flip a task's done flag.
    ///
    /// Past-dated tasks are locked; toggling one is refused. Returns
    /// whether the flag changed.
    pub fn toggle_done(&mut self, id: TaskId, today: NaiveDate) -> Result<bool, StorageError> {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            if task.is_past(today) {
                return Ok(false);
            }
            task.done = !task.done;
            self.persist()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Replace a task's editable fields with a committed draft.
    ///
    /// The task keeps its id and done flag. Returns whether a task with
    /// that id existed.
    pub fn update(&mut self, id: TaskId, fields: TaskFields) -> Result<bool, StorageError> {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            task.apply(fields);
            self.persist()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Delete a task. Returns whether a task with that id existed.
    pub fn remove(&mut self, id: TaskId) -> Result<bool, StorageError> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return Ok(false);
        }

        self.persist()?;
        Ok(true)
    }

    /// Next task id: the current time in milliseconds, bumped past the
    /// highest existing id so ids stay unique even within one millisecond.
    fn next_id(&self, now_millis: i64) -> TaskId {
        let max_id = self.tasks.iter().map(|task| task.id.as_millis()).max();
        match max_id {
            Some(max) if now_millis <= max => TaskId(max + 1),
            _ => TaskId(now_millis),
        }
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        self.storage.save(&self.tasks)
    }
}
