//! IDE lifecycle events and the bus that dispatches them.
//!
//! Handlers subscribe to a single [`IdeEvent`] kind and are invoked
//! synchronously, in subscription order, on the thread that fires the event.

mod bus;
mod event;

pub use bus::{EventBus, EventBusError, EventBusResult, EventHandler, HandlerRegistration};
pub use event::IdeEvent;
