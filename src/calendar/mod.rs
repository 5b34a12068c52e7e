//! Month calendar: projection of tasks as calendar events, the 42-day grid, and month navigation

pub mod month;
pub mod grid;
pub mod navigation;

pub use month::YearMonth;

use serde::{Deserialize, Serialize};
use chrono::{NaiveDate, Weekday};
use csscolorparser::Color;

use crate::task::{Task, TaskId};


/// Whether calendar weeks are laid out Monday-first or Sunday-first
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekStart {
    Monday,
    Sunday,
}

impl WeekStart {
    /// The first day of a week
    pub fn weekday(&self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Sunday => Weekday::Sun,
        }
    }

    /// The seven days of a week, in display order
    pub fn weekdays(&self) -> [Weekday; 7] {
        let mut days = [self.weekday(); 7];
        for i in 1..7 {
            days[i] = days[i - 1].succ();
        }
        days
    }

    /// Short labels of the grid header, in display order
    pub fn weekday_labels(&self) -> [String; 7] {
        let days = self.weekdays();
        let mut labels: [String; 7] = Default::default();
        for (label, day) in labels.iter_mut().zip(days.iter()) {
            *label = short_name(*day).to_string();
        }
        labels
    }

    /// The position of `weekday` in a week laid out with this convention, in `0..7`
    pub fn offset_of(&self, weekday: Weekday) -> u32 {
        let day_idx = weekday.num_days_from_monday();
        let start_idx = self.weekday().num_days_from_monday();
        (7 + day_idx - start_idx) % 7
    }
}

fn short_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

impl Default for WeekStart {
    fn default() -> Self {
        WeekStart::Monday
    }
}


/// A read-only projection of a task's date span, as displayed on the calendar.
///
/// These are never stored, they are built again whenever the tasks or the displayed month change.
#[derive(Clone, Debug, PartialEq)]
pub struct CalendarEvent {
    pub id: TaskId,
    pub title: String,
    /// First day of the event
    pub start: NaiveDate,
    /// Last day of the event (inclusive), never before `start`
    pub end: NaiveDate,
    pub color: Color,
}

impl CalendarEvent {
    /// Build a multi-day event. `end` snaps to `start` if it is earlier
    pub fn new(id: TaskId, title: String, start: NaiveDate, end: NaiveDate, color: Color) -> Self {
        let end = if end < start {
            log::debug!("Event {} ends before it starts, showing it on {} only", id, start);
            start
        } else {
            end
        };
        Self { id, title, start, end, color }
    }

    /// Project a task. Returns `None` for tasks without a start date, which have no calendar presence
    pub fn from_task(task: &Task, color: Color) -> Option<Self> {
        let (start, end) = task.schedule().date_span()?;
        Some(Self::new(task.id().clone(), task.title().to_string(), start, end, color))
    }

    /// Whether `day` is within this event (both ends included)
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Whether this event has at least one day in `month`
    pub fn overlaps(&self, month: YearMonth) -> bool {
        !(self.end < month.first_day() || self.start > month.last_day())
    }
}


/// The events to display for `month`, in task order
pub fn events_for_month(tasks: &[Task], month: YearMonth, color: &Color) -> Vec<CalendarEvent> {
    tasks.iter()
        .filter_map(|task| CalendarEvent::from_task(task, color.clone()))
        .filter(|event| event.overlaps(month))
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::Schedule;

    fn red() -> Color {
        csscolorparser::parse("#e74c3c").unwrap()
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn week_layouts() {
        assert_eq!(WeekStart::Monday.weekdays()[0], Weekday::Mon);
        assert_eq!(WeekStart::Monday.weekdays()[6], Weekday::Sun);
        assert_eq!(WeekStart::Sunday.weekdays()[0], Weekday::Sun);
        assert_eq!(WeekStart::Sunday.weekdays()[6], Weekday::Sat);
        assert_eq!(WeekStart::Sunday.weekday_labels()[1], "Mon");

        assert_eq!(WeekStart::Monday.offset_of(Weekday::Mon), 0);
        assert_eq!(WeekStart::Monday.offset_of(Weekday::Sun), 6);
        assert_eq!(WeekStart::Sunday.offset_of(Weekday::Sun), 0);
        assert_eq!(WeekStart::Sunday.offset_of(Weekday::Sat), 6);
        assert_eq!(WeekStart::Sunday.offset_of(Weekday::Mon), 1);
    }

    #[test]
    fn undated_tasks_are_not_projected() {
        let task = Task::new("undated".to_string());
        assert!(CalendarEvent::from_task(&task, red()).is_none());
    }

    #[test]
    fn single_day_task_projection() {
        let task = Task::new("x".to_string()).with_schedule(Schedule::on(d(2025, 12, 9)));
        let event = CalendarEvent::from_task(&task, red()).unwrap();
        assert_eq!(event.start, d(2025, 12, 9));
        assert_eq!(event.end, d(2025, 12, 9));
        assert_eq!(&event.id, task.id());
    }

    #[test]
    fn inverted_range_snaps() {
        let event = CalendarEvent::new(TaskId::random(), "x".to_string(), d(2025, 3, 5), d(2025, 3, 1), red());
        assert_eq!(event.end, d(2025, 3, 5));
    }

    #[test]
    fn month_projection() {
        let tasks = vec![
            Task::new("october".to_string()).with_schedule(Schedule::on(d(2025, 10, 20))),
            Task::new("across".to_string()).with_schedule(Schedule::between(d(2025, 10, 30), d(2025, 11, 2))),
            Task::new("november".to_string()).with_schedule(Schedule::on(d(2025, 11, 11))),
            Task::new("undated".to_string()),
            Task::new("december".to_string()).with_schedule(Schedule::on(d(2025, 12, 1))),
        ];
        let november = YearMonth::new(2025, 11).unwrap();
        let events = events_for_month(&tasks, november, &red());
        let titles: Vec<_> = events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["across", "november"]);
    }
}
