//! Project: a named, append-only container of tasks.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Task, TaskDraft, TaskId};

/// Identifier of a project. Caller-supplied; the store does not enforce
/// uniqueness (duplicates coexist, lookups return the first match).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProjectId(u32);

impl ProjectId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A project and its ordered task list.
///
/// Insertion order is display/iteration order. The task sequence only grows;
/// there is no deletion operation, which is what makes the `len + 1` id
/// assignment safe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: String,
    tasks: Vec<Task>,
}

impl Project {
    pub(crate) fn new(id: ProjectId, name: impl Into<String>, initial_tasks: Vec<TaskDraft>) -> Self {
        let mut project = Self {
            id,
            name: name.into(),
            tasks: Vec::new(),
        };
        for draft in initial_tasks {
            project.add_task(draft);
        }
        project
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Append a task, assigning `id = tasks.len() + 1`.
    pub(crate) fn add_task(&mut self, draft: TaskDraft) -> Task {
        let id = TaskId::new(self.tasks.len() as u32 + 1);
        let task = Task::new(id, draft);
        self.tasks.push(task.clone());
        task
    }

    pub fn find_task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == task_id)
    }

    pub(crate) fn find_task_mut(&mut self, task_id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == task_id)
    }
}
