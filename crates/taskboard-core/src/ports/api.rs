//! ProjectApi port - the awaitable remote surface.

use async_trait::async_trait;

use crate::domain::{Project, ProjectId, TaskId, TaskStatus, TrackerError};

/// The two simulated remote operations.
///
/// Both resolve only after the implementation's configured delay; every
/// rejection is terminal for that call (no retry, no cancellation). Callers
/// that want another attempt re-invoke explicitly.
#[async_trait]
pub trait ProjectApi: Send + Sync {
    /// Resolve a project snapshot by id.
    async fn load_project_detail(
        &self,
        project_id: ProjectId,
    ) -> Result<Project, TrackerError>;

    /// Validate and apply one status transition, publishing the matching
    /// event on success.
    async fn set_task_status(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
        new_status: TaskStatus,
    ) -> Result<(), TrackerError>;
}
