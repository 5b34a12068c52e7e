//! Support for library configuration options

use std::sync::{Arc, Mutex};
use std::time::Duration;

use once_cell::sync::Lazy;
use csscolorparser::Color;

use crate::calendar::WeekStart;
use crate::filter::DatelessPolicy;

/// The color of calendar event bars, unless the [`Settings`] say otherwise.
/// Feel free to override it when initing this library.
pub static DEFAULT_EVENT_COLOR: Lazy<Arc<Mutex<Color>>> = Lazy::new(|| {
    let color = csscolorparser::parse("#e74c3c").unwrap(/* this cannot panic since this is a valid, hardcoded color */);
    Arc::new(Mutex::new(color))
});

/// How long adding a task takes, unless the [`Settings`] say otherwise.
/// This only gives the UI a chance to display some feedback. Feel free to override it when initing this library.
pub static ADD_TASK_DELAY: Lazy<Arc<Mutex<Duration>>> = Lazy::new(|| Arc::new(Mutex::new(Duration::from_millis(500))));

/// How many event bars a day cell shows before collapsing the rest into a "+N more"
pub const DEFAULT_MAX_BARS_PER_DAY: usize = 3;


/// Options given to the task board and the calendar view when they are built
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub week_start: WeekStart,
    pub dateless_policy: DatelessPolicy,
    pub max_bars_per_day: usize,
    pub add_task_delay: Duration,
    pub event_color: Color,
}

impl Default for Settings {
    fn default() -> Self {
        let event_color = match DEFAULT_EVENT_COLOR.lock() {
            Ok(color) => color.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };
        let add_task_delay = match ADD_TASK_DELAY.lock() {
            Ok(delay) => *delay,
            Err(poisoned) => *poisoned.into_inner(),
        };

        Self {
            week_start: WeekStart::default(),
            dateless_policy: DatelessPolicy::default(),
            max_bars_per_day: DEFAULT_MAX_BARS_PER_DAY,
            add_task_delay,
            event_color,
        }
    }
}
