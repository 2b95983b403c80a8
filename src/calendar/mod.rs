//! Month grids, as displayed by the dashboard calendar widget
//!
//! A month is always rendered as 6 weeks of 7 days, starting on a Sunday. The days of the previous and next months
//! that fill the gaps are part of the grid too, flagged as not belonging to the viewed month.

pub mod view;
pub use view::{CalendarView, DayCell};

use std::convert::TryFrom;
use std::error::Error;

use serde::Serialize;
use chrono::{Datelike, Days, Months, NaiveDate};

/// Number of cells in a month grid (6 weeks × 7 days)
pub const GRID_CELLS: usize = 42;

/// Column headings of a grid, Sunday first
pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];


/// One day in a month grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CalendarCell {
    /// Day of the month, as displayed in the cell
    day: u32,
    /// Whether this day belongs to the viewed month (rather than being padding from a neighbouring month)
    in_current_month: bool,
    /// Serialized as `YYYY-MM-DD`
    date: NaiveDate,
}

impl CalendarCell {
    pub fn day(&self) -> u32                { self.day              }
    pub fn in_current_month(&self) -> bool  { self.in_current_month }
    pub fn date(&self) -> NaiveDate         { self.date             }

    /// The `YYYY-MM-DD` form of this cell's date
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}


/// The 42 cells used to render a month.
/// Only [`build_month_grid`] creates grids, so there is no way to deserialize one.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MonthGrid {
    /// The 1st of the viewed month
    first_day: NaiveDate,
    cells: Vec<CalendarCell>,
}

impl MonthGrid {
    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// Zero-based month index (0 is January)
    pub fn month(&self) -> u32 {
        self.first_day.month0()
    }

    /// Weekday of the 1st of the month, 0 being Sunday.
    /// This is also the index of that day in [`Self::cells`], and the count of cells borrowed from the previous month.
    pub fn first_weekday(&self) -> u32 {
        self.first_day.weekday().num_days_from_sunday()
    }

    pub fn cells(&self) -> &[CalendarCell] {
        &self.cells
    }

    /// The grid, one week (row of 7 cells) at a time
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(WEEKDAY_LABELS.len())
    }

    /// E.g. `February 2024`
    pub fn title(&self) -> String {
        self.first_day.format("%B %Y").to_string()
    }
}


/// Build the grid of a given month.
///
/// `month` is zero-based (0 is January, 11 is December).
/// Cells are the trailing days of the previous month (so that the 1st lands on its weekday column), then every day of
/// the month, then as many leading days of the next month as needed to reach [`GRID_CELLS`].
///
/// This returns an error if `month` is greater than 11, or if the year is beyond what `chrono` can represent.
pub fn build_month_grid(year: i32, month: u32) -> Result<MonthGrid, Box<dyn Error>> {
    if month > 11 {
        return Err(format!("month index must be in 0..=11 (got {})", month).into());
    }
    let first_day = NaiveDate::from_ymd_opt(year, month + 1, 1)
        .ok_or_else(|| format!("year {} is out of the supported range", year))?;

    let first_weekday = first_day.weekday().num_days_from_sunday();
    let grid_start = first_day.checked_sub_days(Days::new(u64::from(first_weekday)))
        .ok_or_else(|| format!("the grid of {} starts before the supported range", first_day))?;
    if grid_start.checked_add_days(Days::new(GRID_CELLS as u64 - 1)).is_none() {
        return Err(format!("the grid of {} ends after the supported range", first_day).into());
    }

    let cells: Vec<CalendarCell> = grid_start.iter_days()
        .take(GRID_CELLS)
        .map(|date| CalendarCell {
            day: date.day(),
            in_current_month: date.year() == year && date.month0() == month,
            date,
        })
        .collect();

    log::trace!("Built the grid of {} ({} leading cells)", first_day, first_weekday);
    Ok(MonthGrid { first_day, cells })
}

/// Number of days in a month (`month` is zero-based).
/// Returns `None` for invalid months or unsupported years.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first_day = NaiveDate::from_ymd_opt(year, month.checked_add(1)?, 1)?;
    let next_month = first_day.checked_add_months(Months::new(1))?;
    let days = next_month.signed_duration_since(first_day).num_days();
    u32::try_from(days).ok()
}
