//! The task board: what the task list screens work with
//!
//! A [`TaskBoard`] wraps the shared store. It holds the current filter mode, tracks the task being added, and hands out [`FilteredView`]s that stay consistent with the latest store content and filter mode.

use std::error::Error;
use std::sync::{Arc, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::watch;
use tokio::sync::watch::error::RecvError;

use crate::config::Settings;
use crate::filter::{filtered_tasks, filtered_tasks_on, DatelessPolicy, FilterMode, TaskCounts};
use crate::schedule::Schedule;
use crate::store::{SharedStore, TaskList, TaskListReceiver, TaskStore};
use crate::task::{Task, TaskId};


/// Something to wait for before a new task is stored.
///
/// This gives the UI a chance to show some "adding..." feedback. It does not affect correctness.
#[async_trait]
pub trait Latency {
    async fn wait(&self);
}

/// Add tasks immediately
#[derive(Clone, Copy, Debug, Default)]
pub struct NoLatency;

#[async_trait]
impl Latency for NoLatency {
    async fn wait(&self) {}
}

/// Wait for a fixed duration
#[derive(Clone, Copy, Debug)]
pub struct FixedLatency(pub Duration);

#[async_trait]
impl Latency for FixedLatency {
    async fn wait(&self) {
        tokio::time::sleep(self.0).await;
    }
}


/// The content of the "add task" dialog
#[derive(Clone, Debug, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub details: String,
    pub schedule: Schedule,
}

impl TaskDraft {
    /// A draft that starts on `initial_date`, usually the day being viewed. The end date is left unset
    pub fn new(title: String, initial_date: NaiveDate) -> Self {
        Self {
            title,
            details: String::new(),
            schedule: Schedule::new(Some(initial_date), None, None, None),
        }
    }

    /// A draft without any date
    pub fn undated(title: String) -> Self {
        Self {
            title,
            details: String::new(),
            schedule: Schedule::default(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.title.trim().is_empty() == false
    }

    /// Turn this draft into a brand new task
    pub fn into_task(self) -> Task {
        Task::new(self.title)
            .with_details(self.details)
            .with_schedule(self.schedule)
    }
}


/// The content of the "task details" dialog
#[derive(Clone, Debug, PartialEq)]
pub struct TaskEdit {
    pub task_id: TaskId,
    pub details: String,
    pub schedule: Schedule,
}

impl TaskEdit {
    pub fn of(task: &Task) -> Self {
        Self {
            task_id: task.id().clone(),
            details: task.details().to_string(),
            schedule: task.schedule().clone(),
        }
    }
}


/// A filtered list of tasks, always recomputed from the latest store content and filter mode
#[derive(Debug)]
pub struct FilteredView {
    tasks: TaskListReceiver,
    mode: watch::Receiver<FilterMode>,
    dateless_policy: DatelessPolicy,
}

impl FilteredView {
    pub fn mode(&mut self) -> FilterMode {
        *self.mode.borrow_and_update()
    }

    fn snapshot(&mut self) -> TaskList {
        self.tasks.borrow_and_update().clone()
    }

    /// The filtered tasks, incomplete ones first
    pub fn tasks(&mut self) -> Vec<Task> {
        let mode = self.mode();
        filtered_tasks(&self.snapshot(), mode)
    }

    /// The filtered tasks that span `date`
    pub fn tasks_on(&mut self, date: NaiveDate) -> Vec<Task> {
        let mode = self.mode();
        filtered_tasks_on(&self.snapshot(), mode, date, self.dateless_policy)
    }

    /// Counts over the whole store, regardless of the filter mode
    pub fn counts(&mut self) -> TaskCounts {
        TaskCounts::of(&self.snapshot())
    }

    /// Wait until either the store content or the filter mode change.
    ///
    /// This returns an error when the store or the board have been dropped
    pub async fn changed(&mut self) -> Result<(), RecvError> {
        tokio::select! {
            res = self.tasks.changed() => res,
            res = self.mode.changed() => res,
        }
    }
}


/// Clears the "adding" state when an add finishes, including when its future is dropped half-way
struct AddingGuard<'a>(&'a watch::Sender<Option<String>>);

impl Drop for AddingGuard<'_> {
    fn drop(&mut self) {
        self.0.send_replace(None);
    }
}


/// The task list state of the app
pub struct TaskBoard {
    store: SharedStore,
    filter_sender: watch::Sender<FilterMode>,
    /// The title of the task being added, if any
    adding_sender: watch::Sender<Option<String>>,
    latency: Arc<dyn Latency + Send + Sync>,
    dateless_policy: DatelessPolicy,
}

impl TaskBoard {
    /// Create a board over `store`, that waits for [`Settings::add_task_delay`] when adding tasks
    pub fn new(store: SharedStore, settings: &Settings) -> Self {
        let latency: Arc<dyn Latency + Send + Sync> = if settings.add_task_delay.is_zero() {
            Arc::new(NoLatency)
        } else {
            Arc::new(FixedLatency(settings.add_task_delay))
        };
        Self::new_with_latency(store, settings, latency)
    }

    /// Create a board with a custom add-task latency
    pub fn new_with_latency(store: SharedStore, settings: &Settings, latency: Arc<dyn Latency + Send + Sync>) -> Self {
        let (filter_sender, _) = watch::channel(FilterMode::default());
        let (adding_sender, _) = watch::channel(None);
        Self {
            store,
            filter_sender,
            adding_sender,
            latency,
            dateless_policy: settings.dateless_policy,
        }
    }

    /// The store this board works on
    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    fn lock_store(&self) -> Result<MutexGuard<'_, TaskStore>, Box<dyn Error>> {
        self.store.lock()
            .map_err(|err| format!("Unable to lock the task store: {}", err).into())
    }

    fn snapshot(&self) -> Result<TaskList, Box<dyn Error>> {
        Ok(self.lock_store()?.snapshot())
    }

    pub fn filter(&self) -> FilterMode {
        *self.filter_sender.borrow()
    }

    pub fn set_filter(&self, mode: FilterMode) {
        log::debug!("Filter set to {:?}", mode);
        self.filter_sender.send_replace(mode);
    }

    /// A view that follows this board's filter mode and the store content
    pub fn subscribe(&self) -> Result<FilteredView, Box<dyn Error>> {
        Ok(FilteredView {
            tasks: self.lock_store()?.subscribe(),
            mode: self.filter_sender.subscribe(),
            dateless_policy: self.dateless_policy,
        })
    }

    /// The tasks matching the current filter mode, incomplete ones first
    pub fn filtered_tasks(&self) -> Result<Vec<Task>, Box<dyn Error>> {
        Ok(filtered_tasks(&self.snapshot()?, self.filter()))
    }

    /// The tasks matching the current filter mode that span `date`
    pub fn filtered_tasks_on(&self, date: NaiveDate) -> Result<Vec<Task>, Box<dyn Error>> {
        Ok(filtered_tasks_on(&self.snapshot()?, self.filter(), date, self.dateless_policy))
    }

    pub fn counts(&self) -> Result<TaskCounts, Box<dyn Error>> {
        Ok(TaskCounts::of(&self.snapshot()?))
    }

    /// The title of the task currently being added
    pub fn adding(&self) -> Option<String> {
        self.adding_sender.borrow().clone()
    }

    /// Get notified when a task starts or finishes being added
    pub fn subscribe_adding(&self) -> watch::Receiver<Option<String>> {
        self.adding_sender.subscribe()
    }

    /// Store a new task from a draft.
    ///
    /// Blank titles are rejected, and so is a new draft while another one is being added.
    pub async fn add_task(&self, draft: TaskDraft) -> Result<TaskId, Box<dyn Error>> {
        if draft.is_valid() == false {
            log::warn!("Refusing to add a task with a blank title");
            return Err("a task title cannot be blank".into());
        }

        let title = draft.title.clone();
        let started = self.adding_sender.send_if_modified(|adding| {
            if adding.is_some() {
                return false;
            }
            *adding = Some(title.clone());
            true
        });
        if started == false {
            log::warn!("Refusing to add {:?}: another task is being added", title);
            return Err("another task is being added".into());
        }

        let _adding = AddingGuard(&self.adding_sender);

        log::info!("Adding task {:?}", title);
        self.latency.wait().await;
        self.store_new_task(draft.into_task())
    }

    fn store_new_task(&self, task: Task) -> Result<TaskId, Box<dyn Error>> {
        let id = task.id().clone();
        self.lock_store()?.add(task)?;
        Ok(id)
    }

    pub fn toggle_completion(&self, id: &TaskId) -> Result<(), Box<dyn Error>> {
        self.lock_store()?.toggle_completion(id)
    }

    /// Commit the content of a "task details" dialog
    pub fn update_task(&self, edit: TaskEdit) -> Result<(), Box<dyn Error>> {
        self.lock_store()?.update(&edit.task_id, edit.details, edit.schedule)
    }

    pub fn delete_task(&self, id: &TaskId) -> Result<(), Box<dyn Error>> {
        self.lock_store()?.delete(id)
    }

    /// Returns how many tasks have been removed
    pub fn delete_all_completed(&self) -> Result<usize, Box<dyn Error>> {
        Ok(self.lock_store()?.delete_all_completed())
    }
}
