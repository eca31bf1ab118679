//! In-memory project registry.

use std::sync::Mutex;

use crate::domain::{Project, ProjectId, Task, TaskDraft, TaskId, TrackerError};

/// Registry state behind the lock.
struct StoreState {
    /// Projects in creation order. A `Vec` (not a map) on purpose: duplicate
    /// ids are allowed to coexist, and lookups take the first match.
    projects: Vec<Project>,
}

/// ProjectStore - single source of truth for projects and their tasks.
///
/// Design:
/// - Interior `Mutex`, synchronous API; the lock is never held across an
///   await point.
/// - Populated at startup, mutated only through `add_task` and the
///   status-update protocol. No deletion operations exist.
/// - Read operations return owned snapshots, so views never observe a
///   half-applied mutation.
pub struct ProjectStore {
    state: Mutex<StoreState>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StoreState {
                projects: Vec::new(),
            }),
        }
    }

    /// Register a new project and return its stored snapshot.
    ///
    /// Ids are caller-supplied and not checked for uniqueness; `initial_tasks`
    /// get ids assigned exactly as `add_task` would.
    pub fn create_project(
        &self,
        id: ProjectId,
        name: impl Into<String>,
        initial_tasks: Vec<TaskDraft>,
    ) -> Project {
        let project = Project::new(id, name, initial_tasks);
        let mut state = self.state.lock().unwrap();
        state.projects.push(project.clone());
        project
    }

    /// Append a task to the project's sequence, assigning
    /// `id = tasks.len() + 1`. Returns the stored task.
    pub fn add_task(
        &self,
        project_id: ProjectId,
        draft: TaskDraft,
    ) -> Result<Task, TrackerError> {
        let mut state = self.state.lock().unwrap();
        let project = state
            .projects
            .iter_mut()
            .find(|project| project.id() == project_id)
            .ok_or(TrackerError::ProjectNotFound(project_id))?;
        Ok(project.add_task(draft))
    }

    /// Snapshot of the first project with a matching id.
    pub fn find_project(&self, id: ProjectId) -> Option<Project> {
        let state = self.state.lock().unwrap();
        state
            .projects
            .iter()
            .find(|project| project.id() == id)
            .cloned()
    }

    /// Snapshot of a task within the first matching project.
    pub fn find_task(&self, project_id: ProjectId, task_id: TaskId) -> Option<Task> {
        let state = self.state.lock().unwrap();
        state
            .projects
            .iter()
            .find(|project| project.id() == project_id)
            .and_then(|project| project.find_task(task_id))
            .cloned()
    }

    pub fn project_count(&self) -> usize {
        self.state.lock().unwrap().projects.len()
    }

    /// Snapshot of every project, in creation order.
    pub fn snapshot(&self) -> Vec<Project> {
        self.state.lock().unwrap().projects.clone()
    }

    /// Run `f` against the first matching project under the lock.
    ///
    /// This is the protocol's validate-then-apply window: `f` runs
    /// synchronously and must not call back into the store.
    pub(crate) fn with_project_mut<R>(
        &self,
        id: ProjectId,
        f: impl FnOnce(&mut Project) -> R,
    ) -> Option<R> {
        let mut state = self.state.lock().unwrap();
        state
            .projects
            .iter_mut()
            .find(|project| project.id() == id)
            .map(f)
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskStatus;
    use chrono::Utc;

    fn draft(description: &str) -> TaskDraft {
        TaskDraft {
            description: description.to_string(),
            status: TaskStatus::Pending,
            limit_date: Utc::now(),
        }
    }

    #[test]
    fn create_and_find_project() {
        let store = ProjectStore::new();
        store.create_project(ProjectId::new(1), "Project Alpha", vec![]);

        let found = store.find_project(ProjectId::new(1)).unwrap();
        assert_eq!(found.name(), "Project Alpha");
        assert!(found.tasks().is_empty());
        assert!(store.find_project(ProjectId::new(4)).is_none());
    }

    #[test]
    fn add_task_assigns_strictly_increasing_ids() {
        let store = ProjectStore::new();
        store.create_project(ProjectId::new(1), "p", vec![]);

        for expected in 1..=5u32 {
            let task = store
                .add_task(ProjectId::new(1), draft(&format!("t{expected}")))
                .unwrap();
            assert_eq!(task.id(), TaskId::new(expected));
        }

        let project = store.find_project(ProjectId::new(1)).unwrap();
        assert_eq!(project.tasks().len(), 5);
    }

    #[test]
    fn add_task_to_unknown_project_is_rejected() {
        let store = ProjectStore::new();
        let err = store.add_task(ProjectId::new(9), draft("t")).unwrap_err();
        assert!(matches!(err, TrackerError::ProjectNotFound(id) if id == ProjectId::new(9)));
    }

    #[test]
    fn find_task_returns_snapshot() {
        let store = ProjectStore::new();
        store.create_project(ProjectId::new(1), "p", vec![draft("a"), draft("b")]);

        let task = store.find_task(ProjectId::new(1), TaskId::new(2)).unwrap();
        assert_eq!(task.description(), "b");
        assert!(store.find_task(ProjectId::new(1), TaskId::new(3)).is_none());
    }

    #[test]
    fn duplicate_project_ids_coexist_and_first_match_wins() {
        let store = ProjectStore::new();
        store.create_project(ProjectId::new(1), "first", vec![]);
        store.create_project(ProjectId::new(1), "second", vec![]);

        assert_eq!(store.project_count(), 2);
        assert_eq!(store.find_project(ProjectId::new(1)).unwrap().name(), "first");

        // Mutation through the id also lands on the first match.
        store.add_task(ProjectId::new(1), draft("t")).unwrap();
        let snapshot = store.snapshot();
        assert_eq!(snapshot[0].tasks().len(), 1);
        assert_eq!(snapshot[1].tasks().len(), 0);
    }
}
