//! EventBus - pub/sub with two named channels.
//!
//! No delivery guarantees beyond: all currently-registered subscribers are
//! invoked synchronously, in registration order, at the publish call. No
//! buffering, no replay for late subscribers.

use std::sync::Arc;

use crate::domain::TaskEvent;
use crate::ports::EventSink;

/// A channel subscriber.
///
/// Implemented for plain closures via the blanket impl below, so callers can
/// subscribe with `Arc::new(|event: &TaskEvent| { ... })`.
pub trait Subscriber: Send + Sync {
    fn notify(&self, event: &TaskEvent);
}

impl<F> Subscriber for F
where
    F: Fn(&TaskEvent) + Send + Sync,
{
    fn notify(&self, event: &TaskEvent) {
        self(event)
    }
}

/// Subscriber registry, one list per channel.
///
/// Design:
/// - Built during initialization (mutable), used during runtime (immutable).
///   Subscribers register before any publish, which keeps the bus lock-free.
/// - `publish` routes by event variant; `Updated` never reaches
///   `task-completed` subscribers and vice versa.
#[derive(Default)]
pub struct EventBus {
    task_updated: Vec<Arc<dyn Subscriber>>,
    task_completed: Vec<Arc<dyn Subscriber>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to transitions into `pending` / `inProgress`.
    pub fn subscribe_task_updated(&mut self, subscriber: Arc<dyn Subscriber>) {
        self.task_updated.push(subscriber);
    }

    /// Subscribe to transitions into `completed`.
    pub fn subscribe_task_completed(&mut self, subscriber: Arc<dyn Subscriber>) {
        self.task_completed.push(subscriber);
    }

    /// Invoke the matching channel's subscribers, in registration order.
    pub fn publish(&self, event: &TaskEvent) {
        let channel = match event {
            TaskEvent::Updated { .. } => &self.task_updated,
            TaskEvent::Completed { .. } => &self.task_completed,
        };
        tracing::debug!(?event, subscribers = channel.len(), "publishing event");
        for subscriber in channel {
            subscriber.notify(event);
        }
    }
}

impl EventSink for EventBus {
    fn emit(&self, event: &TaskEvent) {
        self.publish(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TaskId, TaskStatus};
    use std::sync::Mutex;

    /// Closure subscriber that appends a tag to a shared log on delivery.
    fn tagger(tag: &'static str, log: &Arc<Mutex<Vec<String>>>) -> Arc<dyn Subscriber> {
        let log = Arc::clone(log);
        Arc::new(move |event: &TaskEvent| {
            log.lock().unwrap().push(format!("{tag}:{}", event.task_id()));
        })
    }

    fn updated(id: u32) -> TaskEvent {
        TaskEvent::Updated {
            task_id: TaskId::new(id),
            new_status: TaskStatus::InProgress,
        }
    }

    fn completed(id: u32) -> TaskEvent {
        TaskEvent::Completed {
            task_id: TaskId::new(id),
        }
    }

    #[test]
    fn subscribers_run_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::new();
        for tag in ["first", "second", "third"] {
            bus.subscribe_task_updated(tagger(tag, &log));
        }

        bus.publish(&updated(5));

        let entries = log.lock().unwrap().clone();
        assert_eq!(entries, vec!["first:5", "second:5", "third:5"]);
    }

    #[test]
    fn events_route_by_channel() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::new();
        bus.subscribe_task_updated(tagger("updated", &log));
        bus.subscribe_task_completed(tagger("completed", &log));

        bus.publish(&updated(1));
        bus.publish(&completed(2));
        bus.publish(&updated(3));

        let entries = log.lock().unwrap().clone();
        assert_eq!(entries, vec!["updated:1", "completed:2", "updated:3"]);
    }

    #[test]
    fn late_subscribers_see_nothing() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::new();

        bus.publish(&completed(1));

        bus.subscribe_task_completed(tagger("late", &log));
        bus.publish(&completed(2));

        // Only the event published after registration was delivered.
        let entries = log.lock().unwrap().clone();
        assert_eq!(entries, vec!["late:2"]);
    }

    #[test]
    fn the_same_subscriber_can_watch_both_channels() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::new();
        let both = tagger("both", &log);
        bus.subscribe_task_updated(Arc::clone(&both));
        bus.subscribe_task_completed(both);

        bus.publish(&updated(1));
        bus.publish(&completed(2));

        let entries = log.lock().unwrap().clone();
        assert_eq!(entries, vec!["both:1", "both:2"]);
    }
}
