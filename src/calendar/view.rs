//! The state of the calendar widget: which month is shown, which day is selected

use std::error::Error;

use chrono::{Datelike, Months, NaiveDate};

use super::{build_month_grid, CalendarCell, MonthGrid};

/// A grid cell, along with what the widget highlights on it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayCell {
    pub cell: CalendarCell,
    pub is_today: bool,
    pub is_selected: bool,
    /// Whether the "has a task" marker is shown. It never is on days outside the viewed month.
    pub has_task: bool,
}

/// Month navigation and day selection
#[derive(Clone, Debug, PartialEq)]
pub struct CalendarView {
    /// The 1st of the month being shown
    view_month: NaiveDate,
    selected: NaiveDate,
}

impl CalendarView {
    /// Create a view showing the month of the selected date
    pub fn new(selected: NaiveDate) -> Self {
        Self {
            view_month: first_of_month(selected),
            selected,
        }
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    pub fn view_year(&self) -> i32 {
        self.view_month.year()
    }

    /// Zero-based index of the month being shown
    pub fn view_month(&self) -> u32 {
        self.view_month.month0()
    }

    /// E.g. `October 2026`
    pub fn title(&self) -> String {
        self.view_month.format("%B %Y").to_string()
    }

    /// Show the previous month. This does not change the selected date.
    pub fn previous_month(&mut self) {
        match self.view_month.checked_sub_months(Months::new(1)) {
            Some(month) => self.view_month = month,
            None => log::warn!("Cannot show the month before {}", self.view_month),
        }
    }

    /// Show the next month. This does not change the selected date.
    pub fn next_month(&mut self) {
        match self.view_month.checked_add_months(Months::new(1)) {
            Some(month) => self.view_month = month,
            None => log::warn!("Cannot show the month after {}", self.view_month),
        }
    }

    /// Select the day of a cell.
    /// Only days of the month being shown can be selected; returns whether the selection changed hands.
    pub fn select(&mut self, cell: &CalendarCell) -> bool {
        if cell.in_current_month() == false {
            log::debug!("Ignoring click on {}, which is outside of the shown month", cell.iso_date());
            return false;
        }
        self.selected = cell.date();
        true
    }

    /// The grid of the month being shown
    pub fn grid(&self) -> Result<MonthGrid, Box<dyn Error>> {
        build_month_grid(self.view_year(), self.view_month())
    }

    /// The grid of the month being shown, with today, the selected date and the days with tasks flagged
    pub fn cells(&self, today: NaiveDate, task_dates: &[NaiveDate]) -> Result<Vec<DayCell>, Box<dyn Error>> {
        let grid = self.grid()?;
        let cells = grid.cells().iter()
            .map(|cell| DayCell {
                cell: *cell,
                is_today: cell.date() == today,
                is_selected: cell.date() == self.selected,
                has_task: cell.in_current_month() && task_dates.contains(&cell.date()),
            })
            .collect();
        Ok(cells)
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    // the 1st exists in every month
    date.with_day(1).unwrap_or(date)
}
