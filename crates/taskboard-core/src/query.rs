//! Pure, read-only derivations over a project's task list.
//!
//! Nothing here mutates the project; every function returns a fresh value.
//! "now" always comes in through the `Clock` port.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::{Project, Task, TaskStatus};
use crate::ports::Clock;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Sort direction for [`sort_by_limit_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Per-status bucket counts. Every task lands in exactly one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.pending + self.in_progress + self.completed
    }
}

/// Counts plus the one-line rendering (via `Display`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub name: String,
    pub counts: StatusCounts,
}

impl fmt::Display for ProjectSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Summary of project {}: pending: {}, in progress: {}, completed: {}",
            self.name, self.counts.pending, self.counts.in_progress, self.counts.completed
        )
    }
}

/// Partition the project's tasks by status.
pub fn project_summary(project: &Project) -> ProjectSummary {
    let mut counts = StatusCounts::default();
    for task in project.tasks() {
        // The default arm is the completed bucket; anything the
        // classification does not name falls through to it.
        match task.status() {
            TaskStatus::Pending => counts.pending += 1,
            TaskStatus::InProgress => counts.in_progress += 1,
            _ => counts.completed += 1,
        }
    }
    ProjectSummary {
        name: project.name().to_string(),
        counts,
    }
}

/// New vector of the project's tasks ordered by `limit_date`.
///
/// The sort is stable, so tasks sharing a deadline keep their relative
/// insertion order in both directions.
pub fn sort_by_limit_date(project: &Project, order: SortOrder) -> Vec<Task> {
    let mut tasks = project.tasks().to_vec();
    tasks.sort_by(|a, b| match order {
        SortOrder::Asc => a.limit_date().cmp(&b.limit_date()),
        SortOrder::Desc => b.limit_date().cmp(&a.limit_date()),
    });
    tasks
}

/// Generic predicate selection over a task sequence.
pub fn filter_tasks<F>(tasks: &[Task], mut keep: F) -> Vec<&Task>
where
    F: FnMut(&Task) -> bool,
{
    tasks.iter().filter(|task| keep(task)).collect()
}

/// Whole-day difference `later - earlier`, rounded up.
///
/// Computed on milliseconds so a partial day counts as a full day: 1 ms into
/// tomorrow is 1 day, exactly 48 h is 2 days, 48 h + 1 ms is 3 days.
pub fn days_between(later: DateTime<Utc>, earlier: DateTime<Utc>) -> i64 {
    let millis = (later - earlier).num_milliseconds();
    millis.div_euclid(MILLIS_PER_DAY) + i64::from(millis.rem_euclid(MILLIS_PER_DAY) != 0)
}

/// Sum of remaining whole days across the project's open tasks.
///
/// Only tasks with status != completed count, and only while their deadline
/// is strictly in the future; an overdue task contributes 0, never a
/// negative amount. The result is always >= 0.
pub fn remaining_days(project: &Project, clock: &dyn Clock) -> i64 {
    let now = clock.now();
    let open = filter_tasks(project.tasks(), |task| !task.status().is_completed());
    open.into_iter()
        .filter(|task| task.limit_date() > now)
        .map(|task| days_between(task.limit_date(), now))
        .sum()
}

/// Open tasks due within the next 1-2 days, insertion order preserved.
///
/// The window is exclusive on both ends of the day-diff: 0 (due now or
/// overdue) is out, 3+ is out.
pub fn critical_tasks(project: &Project, clock: &dyn Clock) -> Vec<Task> {
    let now = clock.now();
    filter_tasks(project.tasks(), |task| {
        if task.status().is_completed() {
            return false;
        }
        let days = days_between(task.limit_date(), now);
        days > 0 && days < 3
    })
    .into_iter()
    .cloned()
    .collect()
}
