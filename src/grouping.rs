//! Splitting a task list into the status sections of the dashboard

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::task::{Category, Task, TaskStatus, UnknownCategory};

/// Rank given to the groups whose status this crate does not know about
const UNKNOWN_PRIORITY: u8 = 99;


/// Which categories of tasks are listed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every task
    All,
    /// Only the tasks of a given category
    Only(Category),
}

impl CategoryFilter {
    /// The filter tabs, in display order
    pub const TABS: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Mundane),
        CategoryFilter::Only(Category::Support),
        CategoryFilter::Only(Category::Booking),
    ];

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => task.category() == *category,
        }
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl From<Option<Category>> for CategoryFilter {
    fn from(category: Option<Category>) -> Self {
        match category {
            None => CategoryFilter::All,
            Some(c) => CategoryFilter::Only(c),
        }
    }
}

impl Display for CategoryFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            CategoryFilter::All => write!(f, "All"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All" => Ok(CategoryFilter::All),
            other => other.parse().map(CategoryFilter::Only),
        }
    }
}



/// A section of the task list: every task sharing a status, in their original order
#[derive(Clone, Debug, PartialEq)]
pub struct TaskGroup<'a> {
    key: TaskStatus,
    tasks: Vec<&'a Task>,
}

impl<'a> TaskGroup<'a> {
    pub fn key(&self) -> &TaskStatus {
        &self.key
    }

    /// The heading of this section
    pub fn label(&self) -> &str {
        self.key.label()
    }

    pub fn tasks(&self) -> &[&'a Task] {
        &self.tasks
    }
}


/// Group the tasks that pass the filter by status.
///
/// A task is filed under its [`group key`](Task::group_key), so that a task flagged as done is always in the `done` group.
/// Tasks keep their relative order within a group. Groups are ordered escalated, active, queued, done; groups of
/// unknown statuses come last, in the order they first appeared.
pub fn group_tasks<'a, I>(tasks: I, filter: &CategoryFilter) -> Vec<TaskGroup<'a>>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut groups: Vec<TaskGroup<'a>> = Vec::new();

    for task in tasks.into_iter().filter(|t| filter.matches(t)) {
        let key = task.group_key();
        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.tasks.push(task),
            None => groups.push(TaskGroup { key, tasks: vec![task] }),
        }
    }

    // This sort is stable, which keeps unknown statuses in first-seen order
    groups.sort_by_key(|g| g.key.priority().unwrap_or(UNKNOWN_PRIORITY));

    log::debug!("{} group(s) for filter {}", groups.len(), filter);
    groups
}



#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskIcon;

    fn task(id: &str, category: Category, status: &str, done: bool) -> Task {
        Task::new_with_parameters(id.to_string(), format!("Task {}", id), category, TaskStatus::from(status), TaskIcon::Alarm, done)
    }

    fn summary(groups: &[TaskGroup]) -> Vec<(String, Vec<String>)> {
        groups.iter()
            .map(|g| (g.key().to_string(), g.tasks().iter().map(|t| t.id().to_string()).collect()))
            .collect()
    }

    fn sample() -> Vec<Task> {
        vec![
            task("1", Category::Support, "queued", false),
            task("2", Category::Booking, "done", true),
            task("3", Category::Support, "escalated", false),
        ]
    }

    #[test]
    fn test_group_all() {
        let tasks = sample();
        let groups = group_tasks(&tasks, &"All".parse().unwrap());
        assert_eq!(summary(&groups), vec![
            ("escalated".to_string(), vec!["3".to_string()]),
            ("queued".to_string(), vec!["1".to_string()]),
            ("done".to_string(), vec!["2".to_string()]),
        ]);
    }

    #[test]
    fn test_group_filtered() {
        let tasks = sample();
        let groups = group_tasks(&tasks, &"Booking".parse().unwrap());
        assert_eq!(summary(&groups), vec![
            ("done".to_string(), vec!["2".to_string()]),
        ]);

        let groups = group_tasks(&tasks, &CategoryFilter::Only(Category::Mundane));
        assert!(groups.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let tasks: Vec<Task> = Vec::new();
        let groups = group_tasks(&tasks, &CategoryFilter::All);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_done_flag_wins() {
        let tasks = vec![
            task("1", Category::Mundane, "queued", true),
            task("2", Category::Mundane, "queued", false),
            task("3", Category::Mundane, "escalated", true),
        ];
        let groups = group_tasks(&tasks, &CategoryFilter::All);
        assert_eq!(summary(&groups), vec![
            ("queued".to_string(), vec!["2".to_string()]),
            ("done".to_string(), vec!["1".to_string(), "3".to_string()]),
        ]);
    }

    #[test]
    fn test_order_within_groups_is_kept() {
        let tasks = vec![
            task("a", Category::Booking, "queued", false),
            task("b", Category::Support, "active", false),
            task("c", Category::Booking, "queued", false),
            task("d", Category::Support, "active", false),
            task("e", Category::Mundane, "queued", false),
        ];
        let groups = group_tasks(&tasks, &CategoryFilter::All);
        assert_eq!(summary(&groups), vec![
            ("active".to_string(), vec!["b".to_string(), "d".to_string()]),
            ("queued".to_string(), vec!["a".to_string(), "c".to_string(), "e".to_string()]),
        ]);

        // every task lands in exactly one group
        let n_grouped: usize = groups.iter().map(|g| g.tasks().len()).sum();
        assert_eq!(n_grouped, tasks.len());
    }

    #[test]
    fn test_unknown_statuses_come_last() {
        let tasks = vec![
            task("1", Category::Support, "waiting-callback", false),
            task("2", Category::Support, "done", true),
            task("3", Category::Support, "on-hold", false),
            task("4", Category::Support, "escalated", false),
            task("5", Category::Support, "waiting-callback", false),
        ];
        let groups = group_tasks(&tasks, &CategoryFilter::All);
        assert_eq!(summary(&groups), vec![
            ("escalated".to_string(), vec!["4".to_string()]),
            ("done".to_string(), vec!["2".to_string()]),
            ("waiting-callback".to_string(), vec!["1".to_string(), "5".to_string()]),
            ("on-hold".to_string(), vec!["3".to_string()]),
        ]);
        assert_eq!(groups[0].label(), "Needs Attention");
        assert_eq!(groups[3].label(), "on-hold");
    }

    #[test]
    fn test_hand_built_known_status_joins_its_group() {
        let tasks = vec![
            Task::new_with_parameters("1".into(), "x".into(), Category::Support,
                TaskStatus::Other("escalated".into()), TaskIcon::Alarm, false),
            task("2", Category::Support, "queued", false),
            task("3", Category::Support, "escalated", false),
        ];
        let groups = group_tasks(&tasks, &CategoryFilter::All);
        assert_eq!(summary(&groups), vec![
            ("escalated".to_string(), vec!["1".to_string(), "3".to_string()]),
            ("queued".to_string(), vec!["2".to_string()]),
        ]);
        assert_eq!(groups[0].key(), &TaskStatus::Escalated);
    }

    #[test]
    fn test_same_input_same_groups() {
        let tasks = sample();
        assert_eq!(group_tasks(&tasks, &CategoryFilter::All), group_tasks(&tasks, &CategoryFilter::All));
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!("All".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!("Support".parse::<CategoryFilter>(), Ok(CategoryFilter::Only(Category::Support)));
        assert!("Everything".parse::<CategoryFilter>().is_err());
        let labels: Vec<String> = CategoryFilter::TABS.iter().map(|f| f.to_string()).collect();
        assert_eq!(labels, vec!["All", "Mundane", "Support", "Booking"]);
    }
}
