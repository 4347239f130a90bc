//! Process-wide fan-out of terminal events.
//!
//! The terminal has exactly one input stream, but any number of listeners
//! (the application's key handler, each mounted widget's outside-click
//! listener, ...). The [`Program`](crate::Program) reads the stream once and
//! publishes every event here; each subscription holds its own receiver for
//! as long as it is active.

use crate::event::TerminalEvent;
use tokio::sync::broadcast;

/// Capacity of the bus before slow listeners start lagging.
pub const DEFAULT_CAPACITY: usize = 256;

/// A cloneable handle to the shared event bus.
#[derive(Clone, Debug)]
pub struct EventBus {
    tx: broadcast::Sender<TerminalEvent>,
}

impl EventBus {
    /// Create a bus with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a bus that buffers up to `capacity` events per listener.
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Publish an event to every current listener. Returns how many
    /// listeners received it; zero listeners is not an error.
    pub fn publish(&self, event: TerminalEvent) -> usize {
        self.tx.send(event).unwrap_or(0)
    }

    /// Register a new listener.
    pub fn subscribe(&self) -> broadcast::Receiver<TerminalEvent> {
        self.tx.subscribe()
    }

    /// Number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_without_listeners_is_fine() {
        let bus = EventBus::new();
        assert_eq!(bus.publish(TerminalEvent::FocusGained), 0);
    }

    #[test]
    fn every_listener_gets_a_copy() {
        let bus = EventBus::with_capacity(4);
        let mut a = bus.subscribe();
        let mut b = bus.subscribe();
        assert_eq!(bus.listener_count(), 2);

        assert_eq!(bus.publish(TerminalEvent::Resize(80, 24)), 2);
        assert_eq!(a.try_recv().ok(), Some(TerminalEvent::Resize(80, 24)));
        assert_eq!(b.try_recv().ok(), Some(TerminalEvent::Resize(80, 24)));
    }

    #[test]
    fn dropping_a_receiver_unregisters_it() {
        let bus = EventBus::new();
        let rx = bus.subscribe();
        assert_eq!(bus.listener_count(), 1);
        drop(rx);
        assert_eq!(bus.listener_count(), 0);
    }
}
