//! A day's punch list for one employee.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::task::{Task, TaskKind, hours_in};

/// The tasks one employee clocked on one date, kept sorted by start time.
///
/// Tasks are only ever added or amended, never removed. The amount of time
/// worked and the breaks taken are derived from the billable tasks.
///
/// # Example
///
/// ```
/// use timecard_engine::models::{Punches, TaskKind};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = NaiveDate::from_ymd_opt(2019, 5, 20).unwrap();
/// let mut punches = Punches::new();
/// punches.new_task(TaskKind::Clock, day.and_hms_opt(13, 0, 0).unwrap(), day.and_hms_opt(17, 0, 0).unwrap());
/// punches.new_task(TaskKind::Clock, day.and_hms_opt(8, 0, 0).unwrap(), day.and_hms_opt(12, 30, 0).unwrap());
///
/// assert_eq!(punches.hours(), Decimal::new(85, 1));
/// assert_eq!(punches.breaks(), Decimal::new(5, 1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Punches {
    tasks: Vec<Task>,
}

impl Punches {
    /// Creates an empty punch list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new billable task, keeping the list ordered by start time.
    pub fn new_task(&mut self, name: TaskKind, start: NaiveDateTime, finish: NaiveDateTime) {
        self.insert(Task::new(name, start, finish));
    }

    /// Inserts an arbitrary task at its chronological position.
    pub fn insert(&mut self, task: Task) {
        let at = self.tasks.partition_point(|t| t.start <= task.start);
        self.tasks.insert(at, task);
    }

    /// The tasks in chronological order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Iterates over the tasks in chronological order.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// The number of tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether no task has been recorded.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Mutable access to the earliest task.
    pub fn first_mut(&mut self) -> Option<&mut Task> {
        self.tasks.first_mut()
    }

    /// Mutable access to the latest task.
    pub fn last_mut(&mut self) -> Option<&mut Task> {
        self.tasks.last_mut()
    }

    /// Restores chronological order after tasks were edited in place.
    pub fn reorder(&mut self) {
        self.tasks.sort_by_key(|t| t.start);
    }

    /// Total hours over the billable tasks.
    pub fn hours(&self) -> Decimal {
        self.billable().map(Task::hours).sum()
    }

    /// Total time between consecutive billable tasks, in hours.
    ///
    /// Overlapping tasks contribute no break time.
    pub fn breaks(&self) -> Decimal {
        let billable: Vec<&Task> = self.billable().collect();
        billable
            .windows(2)
            .map(|pair| hours_in(pair[1].start - pair[0].finish))
            .filter(|gap| *gap > Decimal::ZERO)
            .sum()
    }

    fn billable(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.billable)
    }
}

impl<'a> IntoIterator for &'a Punches {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
