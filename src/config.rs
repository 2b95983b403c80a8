//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

use crate::task::Category;

/// The product name, shown in banners (e.g. by [`print_dashboard`](crate::utils::print_dashboard)).
/// Feel free to override it when initing this library.
pub static PRODUCT_NAME: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("Kally".to_string())));

/// The category given to tasks typed into the dashboard (see [`Dashboard::add_task`](crate::Dashboard::add_task)).
/// Feel free to override it when initing this library.
pub static NEW_TASK_CATEGORY: Lazy<Arc<Mutex<Category>>> = Lazy::new(|| Arc::new(Mutex::new(Category::Mundane)));

/// Returns the current value of [`PRODUCT_NAME`]
pub fn product_name() -> String {
    match PRODUCT_NAME.lock() {
        Ok(name) => name.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Returns the current value of [`NEW_TASK_CATEGORY`]
pub fn new_task_category() -> Category {
    match NEW_TASK_CATEGORY.lock() {
        Ok(category) => *category,
        Err(poisoned) => *poisoned.into_inner(),
    }
}
