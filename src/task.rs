//! To-do tasks

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{Local, NaiveDate};

use crate::schedule::Schedule;


/// An opaque, immutable task identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId {
    content: Uuid,
}

impl TaskId {
    /// Generate a random TaskId.
    pub fn random() -> Self {
        Self { content: Uuid::new_v4() }
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.content
    }
}

impl From<Uuid> for TaskId {
    fn from(uuid: Uuid) -> Self {
        Self { content: uuid }
    }
}

impl FromStr for TaskId {
    type Err = uuid::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let u = Uuid::parse_str(s)?;
        Ok(Self::from(u))
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content.to_hyphenated())
    }
}


/// A to-do task
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Assigned at creation, never changes afterwards
    id: TaskId,

    /// The display name of the task
    title: String,
    /// Free text, empty by default
    details: String,

    completed: bool,
    /// Carried along for the UI, no logic depends on it
    important: bool,

    /// The day this task was created
    creation_date: NaiveDate,

    /// Optional dates and times
    schedule: Schedule,
}

impl Task {
    /// Create a brand new, uncompleted Task.
    /// This will pick a new (random) task ID, and use today (local time) as its creation date.
    ///
    /// Rejecting blank titles is the caller's job, see [`TaskDraft`](crate::board::TaskDraft)
    pub fn new(title: String) -> Self {
        Self::new_with_parameters(
            TaskId::random(), title, String::new(),
            false, false,
            Local::now().date_naive(),
            Schedule::default(),
        )
    }

    /// Create a new Task instance with every field given explicitly
    pub fn new_with_parameters(id: TaskId, title: String, details: String,
                               completed: bool, important: bool,
                               creation_date: NaiveDate, schedule: Schedule,
                            ) -> Self
    {
        Self {
            id,
            title,
            details,
            completed,
            important,
            creation_date,
            schedule,
        }
    }

    /// Builder-style helper to set the details
    pub fn with_details(mut self, details: String) -> Self {
        self.details = details;
        self
    }

    /// Builder-style helper to set the schedule
    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Builder-style helper to set the completion status
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Builder-style helper to set the importance flag
    pub fn with_important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }

    pub fn id(&self) -> &TaskId      { &self.id         }
    pub fn title(&self) -> &str      { &self.title      }
    pub fn details(&self) -> &str    { &self.details    }
    pub fn completed(&self) -> bool  { self.completed   }
    pub fn important(&self) -> bool  { self.important   }
    pub fn creation_date(&self) -> NaiveDate { self.creation_date }
    pub fn schedule(&self) -> &Schedule      { &self.schedule }

    /// Returns a copy of this task, with its completion status flipped
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }

    /// Returns a copy of this task, carrying new details and a new schedule.
    ///
    /// The schedule is taken verbatim, no date snapping happens here.
    pub fn edited(&self, details: String, schedule: Schedule) -> Self {
        Self {
            details,
            schedule,
            ..self.clone()
        }
    }
}
