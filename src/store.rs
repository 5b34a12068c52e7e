//! The in-memory task store
//!
//! There is exactly one store per process. It is created at startup, shared as a [`SharedStore`] with every consumer, and simply dropped at exit.
//! Every mutation publishes a fresh snapshot on a [`tokio::sync::watch`] channel, so that derived views (see [`crate::board`] and [`crate::calendar::navigation`]) never poll.

use std::error::Error;
use std::sync::{Arc, Mutex};

use tokio::sync::watch;

use crate::task::{Task, TaskId};
use crate::schedule::Schedule;

/// An immutable snapshot of the store content, in store order
pub type TaskList = Arc<Vec<Task>>;
/// See [`TaskStore::subscribe`]
pub type TaskListReceiver = watch::Receiver<TaskList>;
/// The single store instance, shared between its consumers. Every mutation goes through the mutex.
pub type SharedStore = Arc<Mutex<TaskStore>>;


/// The canonical, ordered collection of tasks
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    snapshot_sender: watch::Sender<TaskList>,
}

impl TaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        let (snapshot_sender, _) = watch::channel(Arc::new(Vec::new()));
        Self {
            tasks: Vec::new(),
            snapshot_sender,
        }
    }

    /// Create an empty store, already wrapped to be shared
    pub fn new_shared() -> SharedStore {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Returns the tasks, in store order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the latest published snapshot
    pub fn snapshot(&self) -> TaskList {
        self.snapshot_sender.borrow().clone()
    }

    /// Get notified of every change of this store.
    ///
    /// The receiver immediately holds the current content.
    pub fn subscribe(&self) -> TaskListReceiver {
        self.snapshot_sender.subscribe()
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn index_of(&self, id: &TaskId) -> Result<usize, Box<dyn Error>> {
        match self.tasks.iter().position(|t| t.id() == id) {
            Some(index) => Ok(index),
            None => {
                log::warn!("No task for id {}", id);
                Err(format!("no task for this id: {}", id).into())
            }
        }
    }

    fn publish(&self) {
        self.snapshot_sender.send_replace(Arc::new(self.tasks.clone()));
    }

    /// Append a task at the end of the collection.
    ///
    /// Fails (and leaves the store untouched) if a task with the same id is already stored
    pub fn add(&mut self, task: Task) -> Result<(), Box<dyn Error>> {
        if self.get(task.id()).is_some() {
            log::warn!("Refusing to add task {}: this id already exists", task.id());
            return Err(format!("a task with id {} already exists", task.id()).into());
        }
        log::debug!("Adding task {} ({:?})", task.id(), task.title());
        self.tasks.push(task);
        self.publish();
        Ok(())
    }

    /// Flip the completion status of a task, in place. The collection is never reordered.
    pub fn toggle_completion(&mut self, id: &TaskId) -> Result<(), Box<dyn Error>> {
        let index = self.index_of(id)?;
        let toggled = self.tasks[index].toggled();
        log::debug!("Task {} is now {}", id, if toggled.completed() { "completed" } else { "active" });
        self.tasks[index] = toggled;
        self.publish();
        Ok(())
    }

    /// Replace the details and every date/time field of a task.
    ///
    /// Values are assigned verbatim: keeping `start <= end` is the caller's job (see [`Schedule::set_start_date`])
    pub fn update(&mut self, id: &TaskId, details: String, schedule: Schedule) -> Result<(), Box<dyn Error>> {
        let index = self.index_of(id)?;
        let updated = self.tasks[index].edited(details, schedule);
        log::debug!("Updating task {}", id);
        self.tasks[index] = updated;
        self.publish();
        Ok(())
    }

    /// Remove the task with this id
    pub fn delete(&mut self, id: &TaskId) -> Result<(), Box<dyn Error>> {
        let index = self.index_of(id)?;
        let removed = self.tasks.remove(index);
        log::debug!("Deleted task {} ({:?})", id, removed.title());
        self.publish();
        Ok(())
    }

    /// Remove every completed task, preserving the order of the others.
    /// Returns how many tasks have been removed
    pub fn delete_all_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.completed() == false);
        let n_removed = before - self.tasks.len();
        log::debug!("Deleted {} completed task(s)", n_removed);
        if n_removed > 0 {
            self.publish();
        }
        n_removed
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
