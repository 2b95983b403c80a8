//! Some utility functions

use std::error::Error;
use std::path::Path;

use crate::calendar::{CalendarView, DayCell, WEEKDAY_LABELS};
use crate::grouping::TaskGroup;
use crate::Dashboard;
use crate::Task;

/// Read a list of tasks from a JSON file
pub fn load_tasks(path: &Path) -> Result<Vec<Task>, Box<dyn Error>> {
    let tasks: Vec<Task> = match std::fs::File::open(path) {
        Err(err) => {
            return Err(format!("Unable to open file {:?}: {}", path, err).into());
        },
        Ok(file) => serde_json::from_reader(std::io::BufReader::new(file))?,
    };
    log::debug!("Loaded {} task(s) from {:?}", tasks.len(), path);
    Ok(tasks)
}


/// A debug utility that pretty-prints a task
pub fn print_task(task: &Task) {
    let completion = if task.done() { "✓" } else { " " };
    println!("    {} {}\t[{}] {}", completion, task.title(), task.category(), task.id());
}

/// A debug utility that pretty-prints task groups
pub fn print_groups(groups: &[TaskGroup]) {
    for group in groups {
        println!("{}", group.label().to_uppercase());
        for task in group.tasks() {
            print_task(task);
        }
    }
}

/// A debug utility that pretty-prints the month shown by a calendar
pub fn print_month(view: &CalendarView, today: chrono::NaiveDate, task_dates: &[chrono::NaiveDate]) {
    let cells = match view.cells(today, task_dates) {
        Err(err) => {
            log::error!("Unable to build the grid of {}: {}", view.title(), err);
            return;
        },
        Ok(cells) => cells,
    };

    println!("{}", view.title());
    println!("{}", WEEKDAY_LABELS.iter().map(|l| format!(" {:>2}   ", l)).collect::<String>());
    for week in cells.chunks(WEEKDAY_LABELS.len()) {
        println!("{}", week.iter().map(format_day_cell).collect::<String>());
    }
}

/// Render a calendar cell on 6 columns.
/// The selected day is bracketed, today is starred, days with tasks get a dot, days of other months are dimmed.
pub fn format_day_cell(cell: &DayCell) -> String {
    if cell.cell.in_current_month() == false {
        return format!(" {:>2}   ", "·");
    }
    let (open, close) = if cell.is_selected { ('[', ']') } else { (' ', ' ') };
    let today = if cell.is_today { '*' } else { ' ' };
    let task = if cell.has_task { '•' } else { ' ' };
    format!("{}{:>2}{}{}{}", open, cell.cell.day(), close, today, task)
}

/// A debug utility that pretty-prints a whole dashboard
pub fn print_dashboard(dashboard: &Dashboard) {
    println!("==== {} ====", crate::config::product_name());
    println!("{}", dashboard.header_label());
    println!("Filter: {}", dashboard.filter());
    println!();
    print_groups(&dashboard.groups());
    println!();
    print_month(dashboard.calendar(), dashboard.today(), &dashboard.task_dates());
}



#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_day_cell() {
        let view = CalendarView::new(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
        let today = NaiveDate::from_ymd_opt(2024, 2, 12).unwrap();
        let cells = view.cells(today, &[today]).unwrap();

        assert_eq!(format_day_cell(&cells[0]), "  ·   ");
        assert_eq!(format_day_cell(&cells[4 + 9]), "[10]  ");
        assert_eq!(format_day_cell(&cells[4 + 11]), " 12 *•");
        assert_eq!(format_day_cell(&cells[4 + 12]), " 13   ");
    }

    #[test]
    fn test_load_tasks() {
        let path = std::env::temp_dir().join(format!("kally-tasks-{}.json", uuid::Uuid::new_v4()));
        let json = serde_json::to_string(&crate::dashboard::demo_tasks()).unwrap();
        std::fs::write(&path, json).unwrap();

        let tasks = load_tasks(&path).unwrap();
        assert_eq!(tasks, crate::dashboard::demo_tasks());

        std::fs::remove_file(&path).unwrap();
        assert!(load_tasks(&path).is_err());
    }
}
