//! Some utility functions

use crate::calendar::grid::{MonthGrid, SlicePosition};
use crate::task::Task;

/// A debug utility that pretty-prints a task
pub fn print_task(task: &Task) {
    let completion = if task.completed() { "✓" } else { " " };
    let importance = if task.important() { "!" } else { " " };
    match task.schedule().date_range_label() {
        Some(dates) => println!("    {}{} {}\t[{}]\t{}", completion, importance, task.title(), dates, task.id()),
        None => println!("    {}{} {}\t\t{}", completion, importance, task.title(), task.id()),
    }
}

/// A debug utility that pretty-prints a list of tasks
pub fn print_task_list(title: &str, tasks: &[Task]) {
    println!("{} ({})", title, tasks.len());
    for task in tasks {
        print_task(task);
    }
}

/// A debug utility that pretty-prints a month grid, with one line per week and the titles of the events that start on each day
pub fn print_month_grid(grid: &MonthGrid, max_bars: usize) {
    println!("---- {} ----", grid.month());
    println!("{}", grid.weekday_labels().join("  "));

    for week in grid.weeks() {
        let days: Vec<String> = week.iter()
            .map(|cell| {
                let marker = if cell.is_today { '*' } else if cell.in_month { ' ' } else { '.' };
                let bars: String = cell.visible_slices(max_bars).iter()
                    .map(|s| match s.position {
                        SlicePosition::Single => 'o',
                        SlicePosition::Start => '[',
                        SlicePosition::Middle => '=',
                        SlicePosition::End => ']',
                    })
                    .collect();
                format!("{:>2}{}{:<3}", cell.date.format("%d"), marker, bars)
            })
            .collect();
        println!("{}", days.join(" "));

        for cell in week {
            for slice in cell.visible_slices(max_bars) {
                if slice.title.is_empty() == false {
                    println!("    {} {}", cell.date, slice.title);
                }
            }
            let overflow = cell.overflow(max_bars);
            if overflow > 0 {
                println!("    {} +{} more", cell.date, overflow);
            }
        }
    }
}
