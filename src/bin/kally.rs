//! Print a text rendering of the dashboard
//!
//! Usage: `kally [TASKS_JSON] [FILTER]`, where FILTER is `All`, `Mundane`, `Support` or `Booking`.
//! Without a task file, the sample tasks are shown.

use std::path::Path;

use chrono::Local;

use kally::CategoryFilter;
use kally::Dashboard;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let today = Local::now().date_naive();

    let mut dashboard = match args.get(0) {
        None => Dashboard::demo(today),
        Some(path) => match kally::utils::load_tasks(Path::new(path)) {
            Ok(tasks) => Dashboard::new(tasks, today),
            Err(err) => {
                log::warn!("Invalid task file: {}. Using the sample tasks", err);
                Dashboard::demo(today)
            },
        },
    };

    if let Some(filter) = args.get(1) {
        match filter.parse::<CategoryFilter>() {
            Ok(filter) => dashboard.set_filter(filter),
            Err(err) => {
                eprintln!("{}. Expected one of: All, Mundane, Support, Booking", err);
                std::process::exit(1);
            },
        }
    }

    kally::utils::print_dashboard(&dashboard);
}
