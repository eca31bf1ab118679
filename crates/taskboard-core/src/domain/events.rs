//! Domain events published by the status-update protocol.

use serde::{Deserialize, Serialize};

use super::{TaskId, TaskStatus};

/// One variant per bus channel.
///
/// - `Updated` rides the `task-updated` channel (transitions to `pending`
///   or `inProgress`).
/// - `Completed` rides the `task-completed` channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "channel", rename_all = "kebab-case")]
pub enum TaskEvent {
    #[serde(rename = "task-updated")]
    Updated {
        task_id: TaskId,
        new_status: TaskStatus,
    },
    #[serde(rename = "task-completed")]
    Completed { task_id: TaskId },
}

impl TaskEvent {
    pub fn task_id(&self) -> TaskId {
        match self {
            TaskEvent::Updated { task_id, .. } | TaskEvent::Completed { task_id } => *task_id,
        }
    }

    /// The event a transition to `new_status` publishes.
    pub fn for_transition(task_id: TaskId, new_status: TaskStatus) -> Self {
        if new_status.is_completed() {
            TaskEvent::Completed { task_id }
        } else {
            TaskEvent::Updated {
                task_id,
                new_status,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_transition_maps_to_completed_channel() {
        let event = TaskEvent::for_transition(TaskId::new(3), TaskStatus::Completed);
        assert_eq!(event, TaskEvent::Completed {
            task_id: TaskId::new(3)
        });
    }

    #[test]
    fn other_transitions_map_to_updated_channel() {
        for status in [TaskStatus::Pending, TaskStatus::InProgress] {
            let event = TaskEvent::for_transition(TaskId::new(7), status);
            assert_eq!(event, TaskEvent::Updated {
                task_id: TaskId::new(7),
                new_status: status,
            });
        }
    }
}
