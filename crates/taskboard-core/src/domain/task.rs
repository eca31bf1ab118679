//! Task: a unit of work with description, status and deadline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::TaskStatus;

/// Identifier of a task, unique within its project.
///
/// Assigned sequentially starting at 1 (`tasks.len() + 1` at insertion), so
/// ids are *not* globally unique across projects.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TaskId(u32);

impl TaskId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Pre-insertion shape of a task: everything the caller supplies.
/// The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub description: String,
    pub status: TaskStatus,
    pub limit_date: DateTime<Utc>,
}

/// A task stored inside a project.
///
/// id, description and limit_date are immutable after creation; status is
/// mutated only through the status-update protocol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    description: String,
    status: TaskStatus,
    limit_date: DateTime<Utc>,
}

impl Task {
    pub(crate) fn new(id: TaskId, draft: TaskDraft) -> Self {
        Self {
            id,
            description: draft.description,
            status: draft.status,
            limit_date: draft.limit_date,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn limit_date(&self) -> DateTime<Utc> {
        self.limit_date
    }

    pub(crate) fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }
}
