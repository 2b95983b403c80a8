//! This crate provides the logic behind the Kally dashboard, where users list the phone calls they want Kally to place for them.
//!
//! It provides the month grids drawn by the calendar widget in the [`calendar`] module, and the status sections of the task list in
//! the [`grouping`] module. Both are plain functions that can be used on their own.
//!
//! A [`Dashboard`] ties them together, with the rest of the (in-memory) state a dashboard needs: the tasks, the active filter and tab,
//! and the calendar navigation.

pub mod calendar;
pub use calendar::{build_month_grid, CalendarCell, CalendarView, MonthGrid};
mod task;
pub use task::{Category, Task, TaskIcon, TaskStatus, UnknownCategory};
pub mod grouping;
pub use grouping::{group_tasks, CategoryFilter, TaskGroup};
pub mod dashboard;
pub use dashboard::{Dashboard, Tab};

pub mod config;
pub mod utils;
