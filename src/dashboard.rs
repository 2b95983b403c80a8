//! The dashboard: a task list, its filter tabs and a calendar

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

use crate::calendar::CalendarView;
use crate::grouping::{group_tasks, CategoryFilter, TaskGroup};
use crate::task::{Category, Task, TaskIcon, TaskStatus};

/// The top-level sections of the dashboard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Tasks,
    Threads,
    PostCall,
    Escalation,
}

impl Tab {
    /// Every tab, in display order
    pub const ALL: [Tab; 4] = [Tab::Tasks, Tab::Threads, Tab::PostCall, Tab::Escalation];
}

impl Default for Tab {
    fn default() -> Self {
        Tab::Tasks
    }
}

impl Display for Tab {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Tab::Tasks => write!(f, "Tasks"),
            Tab::Threads => write!(f, "Threads"),
            Tab::PostCall => write!(f, "Post-Call"),
            Tab::Escalation => write!(f, "Escalation"),
        }
    }
}


/// The state of a user's dashboard
#[derive(Clone, Debug)]
pub struct Dashboard {
    tasks: Vec<Task>,
    filter: CategoryFilter,
    active_tab: Tab,
    calendar: CalendarView,
    today: NaiveDate,
}

impl Dashboard {
    /// Create a dashboard for the given tasks, with today selected in the calendar
    pub fn new(tasks: Vec<Task>, today: NaiveDate) -> Self {
        Self {
            tasks,
            filter: CategoryFilter::default(),
            active_tab: Tab::default(),
            calendar: CalendarView::new(today),
            today,
        }
    }

    /// Create a dashboard filled with sample tasks
    pub fn demo(today: NaiveDate) -> Self {
        Self::new(demo_tasks(), today)
    }

    pub fn tasks(&self) -> &[Task]                  { &self.tasks       }
    pub fn filter(&self) -> CategoryFilter          { self.filter       }
    pub fn active_tab(&self) -> Tab                 { self.active_tab   }
    pub fn today(&self) -> NaiveDate                { self.today        }
    pub fn calendar(&self) -> &CalendarView         { &self.calendar    }
    pub fn calendar_mut(&mut self) -> &mut CalendarView { &mut self.calendar }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Add a task typed by the user.
    /// Blank input is ignored (and `None` is returned).
    pub fn add_task(&mut self, text: &str) -> Option<&Task> {
        if text.trim().is_empty() {
            return None;
        }
        let task = Task::new(text.to_string(), crate::config::new_task_category());
        log::debug!("Adding task {} ({:?})", task.id(), task.title());
        self.tasks.push(task);
        self.tasks.last()
    }

    /// Mark a task as done, or back to not done
    pub fn toggle_task(&mut self, id: &str) -> Result<(), Box<dyn Error>> {
        match self.tasks.iter_mut().find(|t| t.id() == id) {
            None => {
                log::warn!("Cannot toggle task {}: no such task", id);
                Err("no task for this id".into())
            },
            Some(task) => {
                task.toggle();
                Ok(())
            },
        }
    }

    /// The tasks passing the current filter, in their status sections
    pub fn groups(&self) -> Vec<TaskGroup<'_>> {
        group_tasks(&self.tasks, &self.filter)
    }

    /// Number of tasks not done yet, regardless of the current filter
    pub fn pending_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.done() == false).count()
    }

    /// E.g. `TODAY · MONDAY, OCT 19 · 4 TASKS`
    pub fn header_label(&self) -> String {
        let date_label = self.today.format("%A, %b %-d").to_string().to_uppercase();
        format!("TODAY · {} · {} TASKS", date_label, self.pending_count())
    }

    /// The days the calendar marks as having tasks.
    /// Tasks carry no date, so every task counts as today's.
    pub fn task_dates(&self) -> Vec<NaiveDate> {
        vec![self.today]
    }
}


/// The tasks shown to first-time users
pub fn demo_tasks() -> Vec<Task> {
    let sample = |id: &str, title: &str, category, status, icon, done| {
        Task::new_with_parameters(id.to_string(), title.to_string(), category, status, icon, done)
    };
    vec![
        sample("1", "Get refund for broken headphones",    Category::Support, TaskStatus::Escalated, TaskIcon::Package, false),
        sample("2", "Book Dune tickets for tonight",       Category::Booking, TaskStatus::Active,    TaskIcon::Film,    false),
        sample("3", "Reserve table at Nobu Saturday",      Category::Booking, TaskStatus::Queued,    TaskIcon::Food,    false),
        sample("4", "Cancel Delta flight, request credit", Category::Support, TaskStatus::Queued,    TaskIcon::Plane,   false),
        sample("5", "Remind Jake about 7am standup",       Category::Mundane, TaskStatus::Done,      TaskIcon::Alarm,   true),
    ]
}
