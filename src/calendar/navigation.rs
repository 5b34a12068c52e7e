//! The displayed month, and the calendar view that follows it
//!
//! [`MonthNavigator`] publishes the displayed month on a watch channel. A [`CalendarView`] subscribes to it and to the task store, and rebuilds the whole grid from the latest values whenever it is read.

use chrono::{Local, NaiveDate};
use csscolorparser::Color;
use tokio::sync::watch;
use tokio::sync::watch::error::RecvError;

use crate::calendar::{events_for_month, CalendarEvent, WeekStart, YearMonth};
use crate::calendar::grid::MonthGrid;
use crate::config::Settings;
use crate::store::TaskListReceiver;


/// What the calendar currently shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationState {
    pub month: YearMonth,
    /// The day that is focused, e.g. to scope the task list. It may belong to another month than `month`
    pub selected_day: NaiveDate,
}


/// Tracks the displayed month
#[derive(Debug)]
pub struct MonthNavigator {
    sender: watch::Sender<NavigationState>,
}

impl MonthNavigator {
    /// Start by displaying the month of `today`, with `today` selected
    pub fn new(today: NaiveDate) -> Self {
        let (sender, _) = watch::channel(NavigationState {
            month: YearMonth::of(today),
            selected_day: today,
        });
        Self { sender }
    }

    pub fn state(&self) -> NavigationState {
        *self.sender.borrow()
    }

    pub fn current_month(&self) -> YearMonth {
        self.state().month
    }

    pub fn selected_day(&self) -> NaiveDate {
        self.state().selected_day
    }

    /// Get notified whenever the displayed month or the selected day change
    pub fn subscribe(&self) -> watch::Receiver<NavigationState> {
        self.sender.subscribe()
    }

    fn set_month(&self, month: YearMonth) {
        log::debug!("Displaying {}", month);
        self.sender.send_if_modified(|state| {
            let modified = state.month != month;
            state.month = month;
            modified
        });
    }

    pub fn previous_month(&self) {
        self.set_month(self.current_month().minus_months(1));
    }

    pub fn next_month(&self) {
        self.set_month(self.current_month().plus_months(1));
    }

    pub fn previous_year(&self) {
        self.set_month(self.current_month().minus_years(1));
    }

    pub fn next_year(&self) {
        self.set_month(self.current_month().plus_years(1));
    }

    /// Display the month of `today`. The selection is not changed
    pub fn jump_to_today(&self, today: NaiveDate) {
        self.set_month(YearMonth::of(today));
    }

    /// Same as [`Self::jump_to_today`], with today's date in the local time zone
    pub fn jump_to_today_local(&self) {
        self.jump_to_today(Local::now().date_naive());
    }

    /// Select a day. The month of that day gets displayed
    pub fn select_day(&self, day: NaiveDate) {
        log::debug!("Selecting {}", day);
        self.sender.send_replace(NavigationState {
            month: YearMonth::of(day),
            selected_day: day,
        });
    }
}


/// A calendar view, always consistent with the latest tasks and the displayed month
#[derive(Debug)]
pub struct CalendarView {
    tasks: TaskListReceiver,
    navigation: watch::Receiver<NavigationState>,
    week_start: WeekStart,
    event_color: Color,
}

impl CalendarView {
    pub fn new(tasks: TaskListReceiver, navigation: watch::Receiver<NavigationState>, settings: &Settings) -> Self {
        Self {
            tasks,
            navigation,
            week_start: settings.week_start,
            event_color: settings.event_color.clone(),
        }
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Change the week start convention. The next grid is laid out accordingly
    pub fn set_week_start(&mut self, week_start: WeekStart) {
        self.week_start = week_start;
    }

    pub fn month(&mut self) -> YearMonth {
        self.navigation.borrow_and_update().month
    }

    /// The events of the displayed month
    pub fn events(&mut self) -> Vec<CalendarEvent> {
        let month = self.month();
        let tasks = self.tasks.borrow_and_update();
        events_for_month(&tasks, month, &self.event_color)
    }

    /// The grid of the displayed month
    pub fn grid(&mut self, today: NaiveDate) -> MonthGrid {
        let events = self.events();
        MonthGrid::build(self.month(), self.week_start, &events, today)
    }

    /// Same as [`Self::grid`], with today's date in the local time zone
    pub fn grid_local(&mut self) -> MonthGrid {
        self.grid(Local::now().date_naive())
    }

    /// Wait until either the tasks or the navigation change.
    ///
    /// This returns an error when the store or the navigator have been dropped
    pub async fn changed(&mut self) -> Result<(), RecvError> {
        tokio::select! {
            res = self.tasks.changed() => res,
            res = self.navigation.changed() => res,
        }
    }
}
