//! Synchronous, typed event bus.

use super::IdeEvent;
use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;
use tracing::trace;

/// Callback invoked when a subscribed event fires.
pub type EventHandler = Arc<dyn Fn(&IdeEvent) + Send + Sync>;

/// Result type for event bus operations.
pub type EventBusResult<T> = Result<T, EventBusError>;

/// Errors returned by the event bus.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventBusError {
    /// The handler table lock was poisoned by a panicking handler.
    #[error("event bus handler table is poisoned: {0}")]
    Poisoned(String),
}

/// Handle identifying one subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerRegistration {
    event: IdeEvent,
    id: u64,
}

impl HandlerRegistration {
    /// Returns the event kind this subscription listens to.
    #[must_use]
    pub const fn event(self) -> IdeEvent {
        self.event
    }

    /// Returns the bus-assigned subscription number.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.id
    }
}

/// Event bus dispatching [`IdeEvent`]s to subscribed handlers.
///
/// Dispatch runs to completion on the caller's thread. The handler list is
/// snapshotted before dispatch, so handlers may subscribe or unsubscribe
/// while an event is being delivered; such changes apply to the next
/// [`EventBus::fire`] call.
#[derive(Clone, Default)]
pub struct EventBus {
    state: Arc<RwLock<EventBusState>>,
}

#[derive(Default)]
struct EventBusState {
    next_id: u64,
    subscriptions: Vec<Subscription>,
}

struct Subscription {
    registration: HandlerRegistration,
    handler: EventHandler,
}

impl EventBus {
    /// Creates a bus with no subscriptions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read_state(&self) -> EventBusResult<RwLockReadGuard<'_, EventBusState>> {
        self.state
            .read()
            .map_err(|err| EventBusError::Poisoned(err.to_string()))
    }

    fn write_state(&self) -> EventBusResult<RwLockWriteGuard<'_, EventBusState>> {
        self.state
            .write()
            .map_err(|err| EventBusError::Poisoned(err.to_string()))
    }

    /// Subscribes `handler` to `event`.
    ///
    /// # Errors
    ///
    /// Returns [`EventBusError::Poisoned`] when the handler table lock is
    /// poisoned.
    pub fn subscribe<F>(&self, event: IdeEvent, handler: F) -> EventBusResult<HandlerRegistration>
    where
        F: Fn(&IdeEvent) + Send + Sync + 'static,
    {
        let mut state = self.write_state()?;
        let registration = HandlerRegistration {
            event,
            id: state.next_id,
        };
        state.next_id = state.next_id.wrapping_add(1);
        state.subscriptions.push(Subscription {
            registration,
            handler: Arc::new(handler),
        });
        Ok(registration)
    }

    /// Removes a subscription. Returns `false` when it was already removed.
    ///
    /// # Errors
    ///
    /// Returns [`EventBusError::Poisoned`] when the handler table lock is
    /// poisoned.
    pub fn unsubscribe(&self, registration: HandlerRegistration) -> EventBusResult<bool> {
        let mut state = self.write_state()?;
        let before = state.subscriptions.len();
        state
            .subscriptions
            .retain(|subscription| subscription.registration != registration);
        Ok(state.subscriptions.len() != before)
    }

    /// Delivers `event` to every handler subscribed to it and returns how
    /// many handlers ran.
    ///
    /// # Errors
    ///
    /// Returns [`EventBusError::Poisoned`] when the handler table lock is
    /// poisoned.
    pub fn fire(&self, event: IdeEvent) -> EventBusResult<usize> {
        let handlers: Vec<EventHandler> = self
            .read_state()?
            .subscriptions
            .iter()
            .filter(|subscription| subscription.registration.event == event)
            .map(|subscription| Arc::clone(&subscription.handler))
            .collect();

        trace!(%event, handlers = handlers.len(), "dispatching IDE event");
        for handler in &handlers {
            handler(&event);
        }
        Ok(handlers.len())
    }

    /// Returns the number of handlers subscribed to `event`.
    ///
    /// # Errors
    ///
    /// Returns [`EventBusError::Poisoned`] when the handler table lock is
    /// poisoned.
    pub fn handler_count(&self, event: IdeEvent) -> EventBusResult<usize> {
        Ok(self
            .read_state()?
            .subscriptions
            .iter()
            .filter(|subscription| subscription.registration.event == event)
            .count())
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let subscriptions = self
            .state
            .read()
            .map_or(0, |state| state.subscriptions.len());
        formatter
            .debug_struct("EventBus")
            .field("subscriptions", &subscriptions)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Mutex;

    fn recorder() -> (Arc<Mutex<Vec<String>>>, EventBus) {
        (Arc::new(Mutex::new(Vec::new())), EventBus::new())
    }

    fn push(log: &Arc<Mutex<Vec<String>>>, entry: &str) {
        log.lock().expect("log lock").push(entry.to_owned());
    }

    #[rstest]
    fn fire_only_reaches_matching_handlers() {
        let (log, bus) = recorder();
        let running_log = Arc::clone(&log);
        bus.subscribe(IdeEvent::WorkspaceRunning, move |_| {
            push(&running_log, "running");
        })
        .expect("subscribe");
        let stopped_log = Arc::clone(&log);
        bus.subscribe(IdeEvent::WorkspaceStopped, move |_| {
            push(&stopped_log, "stopped");
        })
        .expect("subscribe");

        let invoked = bus.fire(IdeEvent::WorkspaceRunning).expect("fire");

        assert_eq!(invoked, 1);
        assert_eq!(*log.lock().expect("log lock"), vec!["running".to_owned()]);
    }

    #[rstest]
    fn handlers_run_in_subscription_order() {
        let (log, bus) = recorder();
        for label in ["first", "second", "third"] {
            let handler_log = Arc::clone(&log);
            bus.subscribe(IdeEvent::BasicIdeInitialized, move |_| {
                push(&handler_log, label);
            })
            .expect("subscribe");
        }

        bus.fire(IdeEvent::BasicIdeInitialized).expect("fire");

        assert_eq!(
            *log.lock().expect("log lock"),
            vec!["first".to_owned(), "second".to_owned(), "third".to_owned()]
        );
    }

    #[rstest]
    fn unsubscribed_handler_is_not_invoked() {
        let (log, bus) = recorder();
        let handler_log = Arc::clone(&log);
        let registration = bus
            .subscribe(IdeEvent::WorkspaceStopped, move |_| {
                push(&handler_log, "stopped");
            })
            .expect("subscribe");

        assert!(bus.unsubscribe(registration).expect("unsubscribe"));
        assert!(!bus.unsubscribe(registration).expect("second unsubscribe"));
        assert_eq!(bus.fire(IdeEvent::WorkspaceStopped).expect("fire"), 0);
        assert!(log.lock().expect("log lock").is_empty());
    }

    #[rstest]
    fn handler_may_subscribe_during_dispatch() {
        let bus = EventBus::new();
        let inner_bus = bus.clone();
        bus.subscribe(IdeEvent::WorkspaceRunning, move |_| {
            inner_bus
                .subscribe(IdeEvent::WorkspaceStopped, |_| {})
                .expect("nested subscribe");
        })
        .expect("subscribe");

        bus.fire(IdeEvent::WorkspaceRunning).expect("fire");

        assert_eq!(
            bus.handler_count(IdeEvent::WorkspaceStopped)
                .expect("count"),
            1
        );
    }
}
