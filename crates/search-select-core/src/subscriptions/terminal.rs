use crate::bus::EventBus;
use crate::event::TerminalEvent;
use crate::subscription::{Subscription, SubscriptionId};
use crossterm::event::{EventStream, MouseEvent};
use futures::StreamExt;
use tokio::task::AbortHandle;

/// Marker type identifying the application-wide terminal event listener.
pub struct TerminalEvents;

/// Marker type identifying per-instance pointer listeners.
pub struct PointerEvents;

/// Create a terminal events subscription that maps each event through a
/// user-provided function.
///
/// The `map` closure receives every [`TerminalEvent`] and returns `Some(Msg)`
/// to forward it or `None` to discard it. There is one such subscription per
/// program; declaring it twice yields the same id.
///
/// # Example
///
/// ```rust,ignore
/// fn subscriptions(&self) -> Vec<Subscription<Msg>> {
///     vec![terminal_events(|event| event.key_press().map(Msg::Key))]
/// }
/// ```
pub fn terminal_events<Msg: Send + 'static>(
    map: impl Fn(TerminalEvent) -> Option<Msg> + Send + Sync + 'static,
) -> Subscription<Msg> {
    Subscription::from_events(SubscriptionId::of::<TerminalEvents>(), map)
}

/// Create a document-level pointer listener identified by `listener_id`.
///
/// Widgets that need to notice clicks anywhere on screen (for example to close
/// a popup when the user clicks elsewhere) return this from
/// [`Component::subscriptions`](crate::Component::subscriptions) with an id
/// unique to the widget instance. The listener lives exactly as long as the
/// widget keeps declaring it.
pub fn pointer_events<Msg: Send + 'static>(
    listener_id: u64,
    map: impl Fn(MouseEvent) -> Option<Msg> + Send + Sync + 'static,
) -> Subscription<Msg> {
    Subscription::from_events(SubscriptionId::new::<PointerEvents>(listener_id), move |ev| {
        ev.mouse().and_then(&map)
    })
}

/// Read the real terminal's input and publish it on `bus` until aborted.
///
/// Read errors are skipped rather than ending the stream.
pub(crate) fn pump_terminal_events(bus: EventBus) -> AbortHandle {
    let handle = tokio::spawn(async move {
        // Created inside the task: crossterm's event reader is global and
        // must only be polled from one place.
        let mut stream = EventStream::new();
        while let Some(result) = stream.next().await {
            match result {
                Ok(event) => {
                    bus.publish(TerminalEvent::from(event));
                }
                Err(err) => tracing::warn!(%err, "terminal event read failed"),
            }
        }
    });
    handle.abort_handle()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};
    use std::time::Duration;
    use tokio::sync::mpsc;

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn pointer_listeners_are_distinct_per_instance() {
        let a = pointer_events(1, |m: MouseEvent| Some(m.column));
        let b = pointer_events(2, |m: MouseEvent| Some(m.column));
        let t = terminal_events(|_| Some(0u16));
        assert_ne!(a.id(), b.id());
        assert_ne!(a.id(), t.id());
    }

    #[tokio::test]
    async fn pointer_events_ignore_keys() {
        let bus = EventBus::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let sub = pointer_events(9, |m: MouseEvent| Some((m.column, m.row)));
        let _abort = (sub.spawn)(crate::subscription::SubscriptionContext {
            tx,
            events: bus.clone(),
        });

        bus.publish(TerminalEvent::Key(KeyEvent::from(KeyCode::Char('x'))));
        bus.publish(TerminalEvent::Mouse(click(5, 6)));

        let got = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("timed out");
        assert_eq!(got, Some((5, 6)));
    }
}
