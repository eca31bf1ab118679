//! Simulated remote operations over the store.
//!
//! Each call sleeps for its configured delay before anything becomes
//! observable, then validates and applies under one store lock. Two calls in
//! flight against the same task race on validation time, not on start time:
//! last-validated-wins.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use crate::domain::{Project, ProjectId, TaskEvent, TaskId, TaskStatus, TrackerError};
use crate::ports::{EventSink, ProjectApi};
use crate::store::ProjectStore;

/// Latency and fault injection knobs.
///
/// `fail_transport` is the reserved transport-failure branch: the production
/// wiring never sets it, but the seam is real so tests can exercise the
/// `Transport` category.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub load_delay: Duration,
    pub update_delay: Duration,
    pub fail_transport: bool,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            load_delay: Duration::from_millis(1500),
            update_delay: Duration::from_millis(2500),
            fail_transport: false,
        }
    }
}

/// ProjectApi implementation backed by the in-memory store.
pub struct SimulatedRemote {
    store: Arc<ProjectStore>,
    events: Arc<dyn EventSink>,
    config: RemoteConfig,
}

impl SimulatedRemote {
    pub fn new(store: Arc<ProjectStore>, events: Arc<dyn EventSink>) -> Self {
        Self::with_config(store, events, RemoteConfig::default())
    }

    pub fn with_config(
        store: Arc<ProjectStore>,
        events: Arc<dyn EventSink>,
        config: RemoteConfig,
    ) -> Self {
        Self {
            store,
            events,
            config,
        }
    }
}

#[async_trait]
impl ProjectApi for SimulatedRemote {
    async fn load_project_detail(
        &self,
        project_id: ProjectId,
    ) -> Result<Project, TrackerError> {
        sleep(self.config.load_delay).await;

        if self.config.fail_transport {
            return Err(TrackerError::Transport(format!(
                "Error getting data from {project_id}"
            )));
        }
        self.store
            .find_project(project_id)
            .ok_or(TrackerError::ProjectNotFound(project_id))
    }

    async fn set_task_status(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
        new_status: TaskStatus,
    ) -> Result<(), TrackerError> {
        sleep(self.config.update_delay).await;

        let fail_transport = self.config.fail_transport;
        let events = Arc::clone(&self.events);
        let applied = self.store.with_project_mut(project_id, |project| {
            // Validation order: existence, transport seam, no-op transition.
            let current = match project.find_task(task_id) {
                Some(task) => task.status(),
                None => {
                    return Err(TrackerError::TaskNotFound {
                        task_id,
                        project_name: project.name().to_string(),
                        project_id: project.id(),
                    });
                }
            };
            if fail_transport {
                return Err(TrackerError::Transport(format!(
                    "Error getting data for taskId {task_id}"
                )));
            }
            if current == new_status {
                return Err(TrackerError::AlreadyHasStatus {
                    task_id,
                    status: new_status,
                });
            }

            events.emit(&TaskEvent::for_transition(task_id, new_status));
            if let Some(task) = project.find_task_mut(task_id) {
                task.set_status(new_status);
            }
            Ok(())
        });

        match applied {
            Some(result) => result,
            None => Err(TrackerError::ProjectNotFound(project_id)),
        }
    }
}

/// Await the load and re-raise any rejection as a generic failure after
/// logging it. The underlying detail survives only in the message.
pub async fn fetch_project_detail(
    api: &dyn ProjectApi,
    project_id: ProjectId,
) -> Result<Project, TrackerError> {
    match api.load_project_detail(project_id).await {
        Ok(project) => Ok(project),
        Err(err) => {
            tracing::warn!(%project_id, error = %err, "load project detail rejected");
            Err(TrackerError::Failed(err.to_string()))
        }
    }
}

/// Await the status update and re-raise any rejection as a generic failure
/// after logging it.
pub async fn update_task_status(
    api: &dyn ProjectApi,
    project_id: ProjectId,
    task_id: TaskId,
    new_status: TaskStatus,
) -> Result<(), TrackerError> {
    match api.set_task_status(project_id, task_id, new_status).await {
        Ok(()) => Ok(()),
        Err(err) => {
            tracing::warn!(%project_id, %task_id, %new_status, error = %err, "status update rejected");
            Err(TrackerError::Failed(err.to_string()))
        }
    }
}
