//! Dashboard tasks (things Kally should call someone about)

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// The kind of errand a task is about
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Mundane,
    Support,
    Booking,
}

impl Category {
    /// Every category, in the order the filter tabs show them
    pub const ALL: [Category; 3] = [Category::Mundane, Category::Support, Category::Booking];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Mundane => "Mundane",
            Category::Support => "Support",
            Category::Booking => "Booking",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Mundane
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL.iter()
            .find(|category| category.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Returned when parsing a string that names no [`Category`]
#[derive(Clone, Debug, PartialEq)]
pub struct UnknownCategory(pub String);

impl Display for UnknownCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "unknown task category {:?}", self.0)
    }
}

impl Error for UnknownCategory {}



/// Where a task stands.
///
/// The dashboard only ever produces the four known variants, but task lists coming from elsewhere may carry
/// other values. These are kept verbatim in [`TaskStatus::Other`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    /// Kally needs the user to step in
    Escalated,
    /// A call is in progress
    Active,
    /// Waiting for its turn
    Queued,
    Done,
    /// Any other status. Never holds one of the strings above once it went through [`TaskStatus::from`] or a [`Task`].
    Other(String),
}

impl TaskStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Escalated => "escalated",
            TaskStatus::Active => "active",
            TaskStatus::Queued => "queued",
            TaskStatus::Done => "done",
            TaskStatus::Other(s) => s.as_str(),
        }
    }

    /// Turn an `Other` holding one of the known strings into the matching variant
    pub fn normalized(self) -> Self {
        match self {
            TaskStatus::Other(s) => TaskStatus::from(s.as_str()),
            known => known,
        }
    }

    /// Display rank of the group holding this status (lower comes first).
    /// `None` for statuses this crate does not know about.
    pub fn priority(&self) -> Option<u8> {
        match self {
            TaskStatus::Escalated => Some(0),
            TaskStatus::Active => Some(1),
            TaskStatus::Queued => Some(2),
            TaskStatus::Done => Some(3),
            TaskStatus::Other(_) => None,
        }
    }

    /// The heading shown above the group holding this status
    pub fn label(&self) -> &str {
        match self {
            TaskStatus::Escalated => "Needs Attention",
            TaskStatus::Active => "Active",
            TaskStatus::Queued => "Queued",
            TaskStatus::Done => "Done",
            TaskStatus::Other(s) => s.as_str(),
        }
    }
}

impl From<&str> for TaskStatus {
    fn from(s: &str) -> Self {
        match s {
            "escalated" => TaskStatus::Escalated,
            "active" => TaskStatus::Active,
            "queued" => TaskStatus::Queued,
            "done" => TaskStatus::Done,
            other => TaskStatus::Other(other.to_string()),
        }
    }
}

impl FromStr for TaskStatus {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.as_str())
    }
}

/// Used to support serde
impl Serialize for TaskStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for TaskStatus {
    fn deserialize<D>(deserializer: D) -> Result<TaskStatus, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(TaskStatus::from(s.as_str()))
    }
}



/// The pictogram of a task, which also tells who is going to be called
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskIcon {
    Package,
    Film,
    Food,
    Plane,
    Alarm,
}

impl TaskIcon {
    /// The party Kally pretends to dial for this kind of task
    pub fn service_name(&self) -> &'static str {
        match self {
            TaskIcon::Package => "Amazon Support",
            TaskIcon::Film => "AMC Theaters",
            TaskIcon::Food => "Restaurant",
            TaskIcon::Plane => "Delta Airlines",
            TaskIcon::Alarm => "Reminder Call",
        }
    }
}

impl Default for TaskIcon {
    fn default() -> Self {
        TaskIcon::Alarm
    }
}



/// A dashboard task
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque, unique identifier
    id: String,
    title: String,
    category: Category,
    status: TaskStatus,
    #[serde(default)]
    icon: TaskIcon,

    /// Tracked separately from `status`. When set, it wins over `status` (see [`Task::group_key`])
    done: bool,
}


impl Task {
    /// Create a brand new task, as typed by the user.
    /// This will pick a new (random) task ID.
    pub fn new(title: String, category: Category) -> Self {
        let new_id = Uuid::new_v4().to_hyphenated().to_string();
        Self::new_with_parameters(new_id, title, category, TaskStatus::Queued, TaskIcon::default(), false)
    }

    /// Create a new Task instance from known values
    pub fn new_with_parameters(id: String, title: String, category: Category,
                               status: TaskStatus, icon: TaskIcon, done: bool) -> Self
    {
        Self { id, title, category, status: status.normalized(), icon, done }
    }

    pub fn id(&self) -> &str                { &self.id       }
    pub fn title(&self) -> &str             { &self.title    }
    pub fn category(&self) -> Category      { self.category  }
    pub fn status(&self) -> &TaskStatus     { &self.status   }
    pub fn icon(&self) -> TaskIcon          { self.icon      }
    pub fn done(&self) -> bool              { self.done      }

    /// The status group this task is listed under: `done` overrides whatever `status` says
    pub fn group_key(&self) -> TaskStatus {
        if self.done {
            TaskStatus::Done
        } else {
            self.status.clone()
        }
    }

    /// Flip the completion of this task.
    /// A task that becomes done gets the `done` status; a task that is un-done goes back to the queue.
    pub fn toggle(&mut self) {
        let was_done = self.done;
        self.done = !was_done;
        self.status = if was_done { TaskStatus::Queued } else { TaskStatus::Done };
        log::trace!("Task {} toggled (done: {})", self.id, self.done);
    }
}
