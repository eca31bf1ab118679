//! Error taxonomy for the tracker.

use thiserror::Error;

use super::{ProjectId, TaskId, TaskStatus};

/// Rejections surfaced by the store and the simulated remote operations.
///
/// `Transport` is a reserved category: nothing produces it unless a fault is
/// injected through `RemoteConfig`. `Failed` is the wrapping calls' generic
/// re-raise; the underlying detail survives only in the message.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("project with ID: {0} not found")]
    ProjectNotFound(ProjectId),

    #[error("task {task_id} not found in project {project_name} id: {project_id}")]
    TaskNotFound {
        task_id: TaskId,
        project_name: String,
        project_id: ProjectId,
    },

    #[error("task {task_id} already has the status {status}")]
    AlreadyHasStatus { task_id: TaskId, status: TaskStatus },

    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Failed(String),
}
