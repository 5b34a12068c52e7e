//! Derived, filtered views of the task collection

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

use crate::task::Task;


/// Which subset of tasks is displayed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterMode {
    /// Every task
    All,
    /// Tasks that are not completed yet
    Active,
    /// Completed tasks only
    Completed,
}

impl FilterMode {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => task.completed() == false,
            FilterMode::Completed => task.completed(),
        }
    }

    /// Every mode, in tab order
    pub fn all() -> [FilterMode; 3] {
        [FilterMode::All, FilterMode::Active, FilterMode::Completed]
    }
}

impl Default for FilterMode {
    fn default() -> Self {
        FilterMode::All
    }
}


/// Whether tasks without a start date show up in date-scoped views
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatelessPolicy {
    /// A task without dates matches every date
    MatchEveryDate,
    /// A task without dates never matches a date
    Exclude,
}

impl Default for DatelessPolicy {
    fn default() -> Self {
        DatelessPolicy::MatchEveryDate
    }
}


/// Task totals, always computed over the whole (unfiltered) collection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub all: usize,
    pub active: usize,
    pub completed: usize,
}

impl TaskCounts {
    pub fn of(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|t| t.completed()).count();
        Self {
            all: tasks.len(),
            active: tasks.len() - completed,
            completed,
        }
    }

    /// The count shown next to a filter tab
    pub fn for_mode(&self, mode: FilterMode) -> usize {
        match mode {
            FilterMode::All => self.all,
            FilterMode::Active => self.active,
            FilterMode::Completed => self.completed,
        }
    }
}


/// Select the tasks matching `mode`, incomplete tasks first.
///
/// The sort is stable: within each group, tasks keep their store order.
pub fn filtered_tasks(tasks: &[Task], mode: FilterMode) -> Vec<Task> {
    let mut result: Vec<Task> = tasks.iter()
        .filter(|t| mode.matches(t))
        .cloned()
        .collect();
    // `sort_by_key` is stable
    result.sort_by_key(|t| t.completed());
    result
}

/// Whether `task` should show up when `date` is selected
pub fn matches_date(task: &Task, date: NaiveDate, policy: DatelessPolicy) -> bool {
    match task.schedule().contains(date) {
        Some(contained) => contained,
        None => policy == DatelessPolicy::MatchEveryDate,
    }
}

/// [`filtered_tasks`], further restricted to the tasks that span `date`
pub fn filtered_tasks_on(tasks: &[Task], mode: FilterMode, date: NaiveDate, policy: DatelessPolicy) -> Vec<Task> {
    filtered_tasks(tasks, mode)
        .into_iter()
        .filter(|t| matches_date(t, date, policy))
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::Schedule;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, day).unwrap()
    }

    fn sample() -> Vec<Task> {
        vec![
            Task::new("A".to_string()).with_completed(true),
            Task::new("B".to_string()),
            Task::new("C".to_string()).with_completed(true),
            Task::new("D".to_string()),
        ]
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title()).collect()
    }

    #[test]
    fn incomplete_first_and_stable() {
        let tasks = sample();
        assert_eq!(titles(&filtered_tasks(&tasks, FilterMode::All)), vec!["B", "D", "A", "C"]);
        assert_eq!(titles(&filtered_tasks(&tasks, FilterMode::Active)), vec!["B", "D"]);
        assert_eq!(titles(&filtered_tasks(&tasks, FilterMode::Completed)), vec!["A", "C"]);
    }

    #[test]
    fn counts_ignore_the_filter() {
        let tasks = sample();
        let counts = TaskCounts::of(&tasks);
        assert_eq!(counts, TaskCounts { all: 4, active: 2, completed: 2 });
        assert_eq!(counts.all, counts.active + counts.completed);
        assert_eq!(counts.for_mode(FilterMode::Active), 2);

        assert_eq!(TaskCounts::of(&[]), TaskCounts::default());
    }

    #[test]
    fn date_scoped_filter() {
        let tasks = vec![
            Task::new("span".to_string()).with_schedule(Schedule::between(d(11), d(14))),
            Task::new("single".to_string()).with_schedule(Schedule::on(d(20))),
            Task::new("undated".to_string()),
        ];

        let on_12 = filtered_tasks_on(&tasks, FilterMode::All, d(12), DatelessPolicy::MatchEveryDate);
        assert_eq!(titles(&on_12), vec!["span", "undated"]);

        let on_20 = filtered_tasks_on(&tasks, FilterMode::All, d(20), DatelessPolicy::Exclude);
        assert_eq!(titles(&on_20), vec!["single"]);

        let on_15 = filtered_tasks_on(&tasks, FilterMode::All, d(15), DatelessPolicy::Exclude);
        assert!(on_15.is_empty());
    }

    #[test]
    fn single_day_task_matches_its_day_only() {
        let task = Task::new("x".to_string()).with_schedule(Schedule::on(d(9)));
        assert!(matches_date(&task, d(9), DatelessPolicy::Exclude));
        assert!(!matches_date(&task, d(10), DatelessPolicy::MatchEveryDate));
    }
}
