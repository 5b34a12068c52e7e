//! The 6-week day grid of a month, and the per-day slices of multi-day events

use chrono::{Datelike, NaiveDate};
use csscolorparser::Color;

use crate::calendar::{CalendarEvent, WeekStart, YearMonth};
use crate::calendar::month::add_days;
use crate::task::TaskId;

/// A grid always holds 6 full weeks
pub const GRID_CELLS: usize = 42;
const DAYS_PER_WEEK: usize = 7;


/// The top-left day of the grid of `month`
pub fn first_cell(month: YearMonth, week_start: WeekStart) -> NaiveDate {
    let first_of_month = month.first_day();
    let offset = week_start.offset_of(first_of_month.weekday());
    add_days(first_of_month, -(offset as i64))
}

/// The 42 consecutive days displayed for `month`.
///
/// They cover the whole month, plus leading and trailing days of the adjacent months to complete full weeks
pub fn month_grid(month: YearMonth, week_start: WeekStart) -> Vec<NaiveDate> {
    let first = first_cell(month, week_start);
    (0..GRID_CELLS as i64)
        .map(|offset| add_days(first, offset))
        .collect()
}


/// Which part of an event bar lies on a given day
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlicePosition {
    /// First day of an event that spans several days
    Start,
    /// Neither the first nor the last day
    Middle,
    /// Last day of an event that spans several days
    End,
    /// The event lasts this day only
    Single,
}

impl SlicePosition {
    /// The position of `day` within `[start, end]`. `day` is expected to be in this range
    pub fn of(day: NaiveDate, start: NaiveDate, end: NaiveDate) -> Self {
        if day == start && day == end {
            SlicePosition::Single
        } else if day == start {
            SlicePosition::Start
        } else if day == end {
            SlicePosition::End
        } else {
            SlicePosition::Middle
        }
    }

    /// Whether the title is displayed on slices at this position
    pub fn shows_title(&self) -> bool {
        matches!(self, SlicePosition::Start | SlicePosition::Single)
    }
}


/// The segment of an event bar drawn in a single day cell
#[derive(Clone, Debug, PartialEq)]
pub struct SpanSlice {
    pub event_id: TaskId,
    /// The event title on `Start` and `Single` slices, empty otherwise, so that a bar reads as one title at its left edge
    pub title: String,
    pub position: SlicePosition,
    pub color: Color,
}

/// The slices of the events that include `day`, in event order
pub fn slices_for_day(day: NaiveDate, events: &[CalendarEvent]) -> Vec<SpanSlice> {
    events.iter()
        .filter(|e| e.contains(day))
        .map(|e| {
            let position = SlicePosition::of(day, e.start, e.end);
            let title = if position.shows_title() { e.title.clone() } else { String::new() };
            SpanSlice {
                event_id: e.id.clone(),
                title,
                position,
                color: e.color.clone(),
            }
        })
        .collect()
}


/// Everything needed to draw one day of the grid
#[derive(Clone, Debug, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// `false` for the leading and trailing days of the adjacent months
    pub in_month: bool,
    pub is_today: bool,
    pub slices: Vec<SpanSlice>,
}

impl DayCell {
    /// The slices that fit in the cell
    pub fn visible_slices(&self, max: usize) -> &[SpanSlice] {
        &self.slices[..self.slices.len().min(max)]
    }

    /// How many slices do not fit in the cell (the "+N more")
    pub fn overflow(&self, max: usize) -> usize {
        self.slices.len().saturating_sub(max)
    }
}


/// A fully built month grid
#[derive(Clone, Debug, PartialEq)]
pub struct MonthGrid {
    month: YearMonth,
    week_start: WeekStart,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Build the grid of `month`. Rebuilding it from scratch is cheap, it is done on every change.
    ///
    /// Cells only get slices for the `events` they are given. [`CalendarView`](super::navigation::CalendarView) passes the events that overlap `month`, so an event that only spans leading or trailing days of the adjacent months leaves those cells empty.
    pub fn build(month: YearMonth, week_start: WeekStart, events: &[CalendarEvent], today: NaiveDate) -> Self {
        let cells = month_grid(month, week_start)
            .into_iter()
            .map(|date| DayCell {
                date,
                in_month: month.contains(date),
                is_today: date == today,
                slices: slices_for_day(date, events),
            })
            .collect();

        Self { month, week_start, cells }
    }

    pub fn month(&self) -> YearMonth          { self.month      }
    pub fn week_start(&self) -> WeekStart     { self.week_start }
    pub fn cells(&self) -> &[DayCell]         { &self.cells     }

    /// The cell of `date`, if it is displayed
    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        self.cells.iter().find(|c| c.date == date)
    }

    /// The 6 rows of the grid
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// Header labels, in the same order as the columns
    pub fn weekday_labels(&self) -> [String; 7] {
        self.week_start.weekday_labels()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn event(title: &str, start: NaiveDate, end: NaiveDate) -> CalendarEvent {
        CalendarEvent::new(TaskId::random(), title.to_string(), start, end, csscolorparser::parse("#5dade2").unwrap())
    }

    #[test]
    fn grid_of_november_2025() {
        // 2025-11-01 is a Saturday
        let november = YearMonth::new(2025, 11).unwrap();
        assert_eq!(first_cell(november, WeekStart::Monday), d(2025, 10, 27));
        assert_eq!(first_cell(november, WeekStart::Sunday), d(2025, 10, 26));

        let grid = month_grid(november, WeekStart::Monday);
        assert_eq!(grid.len(), GRID_CELLS);
        assert_eq!(grid[41], d(2025, 12, 7));
    }

    #[test]
    fn month_starting_on_week_start_has_no_leading_days() {
        // 2025-09-01 is a Monday, 2025-06-01 a Sunday
        assert_eq!(first_cell(YearMonth::new(2025, 9).unwrap(), WeekStart::Monday), d(2025, 9, 1));
        assert_eq!(first_cell(YearMonth::new(2025, 6).unwrap(), WeekStart::Sunday), d(2025, 6, 1));
        // A Sunday-first month seen Monday-first needs 6 leading days
        assert_eq!(first_cell(YearMonth::new(2025, 6).unwrap(), WeekStart::Monday), d(2025, 5, 26));
    }

    #[test]
    fn grid_coverage_over_years() {
        let mut month = YearMonth::new(2023, 1).unwrap();
        for _ in 0..48 {
            for week_start in &[WeekStart::Monday, WeekStart::Sunday] {
                let grid = month_grid(month, *week_start);
                assert_eq!(grid.len(), GRID_CELLS);
                assert_eq!(grid[0].weekday(), week_start.weekday());
                for pair in grid.windows(2) {
                    assert_eq!(pair[1], pair[0].succ_opt().unwrap());
                }
                assert!(grid.contains(&month.first_day()));
                assert!(grid.contains(&month.last_day()));
            }
            month = month.plus_months(1);
        }
    }

    #[test]
    fn multi_day_slices() {
        let events = vec![event("Team meeting", d(2025, 11, 11), d(2025, 11, 14))];

        let positions: Vec<_> = (10..=15)
            .map(|day| slices_for_day(d(2025, 11, day), &events).iter().map(|s| s.position).collect::<Vec<_>>())
            .collect();
        assert_eq!(positions, vec![
            vec![],
            vec![SlicePosition::Start],
            vec![SlicePosition::Middle],
            vec![SlicePosition::Middle],
            vec![SlicePosition::End],
            vec![],
        ]);

        assert_eq!(slices_for_day(d(2025, 11, 11), &events)[0].title, "Team meeting");
        assert_eq!(slices_for_day(d(2025, 11, 12), &events)[0].title, "");
        assert_eq!(slices_for_day(d(2025, 11, 14), &events)[0].title, "");
    }

    #[test]
    fn single_day_slice() {
        let events = vec![event("Dentist", d(2025, 12, 9), d(2025, 12, 9))];
        let slices = slices_for_day(d(2025, 12, 9), &events);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].position, SlicePosition::Single);
        assert_eq!(slices[0].title, "Dentist");
        assert!(slices_for_day(d(2025, 12, 8), &events).is_empty());
        assert!(slices_for_day(d(2025, 12, 10), &events).is_empty());
    }

    #[test]
    fn built_grid_cells() {
        let november = YearMonth::new(2025, 11).unwrap();
        let events = vec![
            event("a", d(2025, 11, 11), d(2025, 11, 11)),
            event("b", d(2025, 11, 11), d(2025, 11, 14)),
            event("c", d(2025, 11, 11), d(2025, 11, 11)),
            event("d", d(2025, 11, 10), d(2025, 11, 11)),
        ];
        let grid = MonthGrid::build(november, WeekStart::Monday, &events, d(2025, 11, 12));

        assert_eq!(grid.cells().len(), GRID_CELLS);
        assert_eq!(grid.weeks().count(), 6);
        assert!(grid.weeks().all(|week| week.len() == 7 && week[0].date.weekday() == Weekday::Mon));

        let first = &grid.cells()[0];
        assert_eq!(first.date, d(2025, 10, 27));
        assert!(!first.in_month);

        let eleventh = grid.cell(d(2025, 11, 11)).unwrap();
        assert!(eleventh.in_month);
        assert!(!eleventh.is_today);
        assert_eq!(eleventh.slices.len(), 4);
        assert_eq!(eleventh.visible_slices(3).len(), 3);
        assert_eq!(eleventh.overflow(3), 1);
        assert_eq!(eleventh.slices[3].position, SlicePosition::End);

        let twelfth = grid.cell(d(2025, 11, 12)).unwrap();
        assert!(twelfth.is_today);
        assert_eq!(twelfth.overflow(3), 0);

        assert_eq!(grid.weekday_labels()[0], "Mon");
    }
}
