//! This crate provides the core of a to-do and calendar app.
//!
//! Tasks live in a single, in-memory [`TaskStore`](store::TaskStore), created at startup and shared with every consumer as a [`SharedStore`](store::SharedStore).
//!
//! Two kinds of views are derived from it:
//! * the task lists of a [`TaskBoard`](board::TaskBoard), filtered by completion state (see the [`filter`] module), and optionally scoped to a date
//! * the [`calendar`], which projects tasks with dates onto a 6-week month grid, slicing multi-day tasks into per-day bar segments
//!
//! Views subscribe to the store and to their own inputs (filter mode, displayed month) through `tokio::sync::watch` channels, so that they never poll and always reflect the latest state. \
//! Identity (signing in and out) is handled outside of this crate, behind the [`IdentityProvider`](identity::IdentityProvider) trait.

mod task;
pub use task::{Task, TaskId};
pub mod schedule;
pub use schedule::Schedule;

pub mod store;
pub use store::{SharedStore, TaskStore};
pub mod filter;
pub use filter::{DatelessPolicy, FilterMode, TaskCounts};
pub mod board;
pub use board::TaskBoard;

pub mod calendar;
pub use calendar::{CalendarEvent, WeekStart, YearMonth};

pub mod identity;
pub mod config;
pub mod utils;
