use crate::bus::EventBus;
use crate::event::TerminalEvent;
use futures::stream::BoxStream;
use futures::StreamExt;
use std::any::TypeId;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tokio_stream::wrappers::BroadcastStream;

/// A long-lived event source managed by the runtime.
///
/// Subscriptions are declared in
/// [`Model::subscriptions`](crate::Model::subscriptions) and started or
/// stopped through diffing: the runtime compares the ids returned on each
/// update cycle, starts new ones and aborts the ones that disappeared. A
/// component that is unmounted simply stops being asked for its
/// subscriptions, so its listeners are released on the next cycle.
pub struct Subscription<Msg: Send + 'static> {
    pub(crate) id: SubscriptionId,
    pub(crate) spawn: Box<dyn FnOnce(SubscriptionContext<Msg>) -> AbortHandle + Send>,
}

/// What a subscription gets when it is started: the program's message
/// channel and the shared terminal event bus.
pub struct SubscriptionContext<Msg: Send + 'static> {
    pub(crate) tx: mpsc::UnboundedSender<Msg>,
    pub(crate) events: EventBus,
}

/// Identity for diffing subscriptions between update cycles.
///
/// A Rust [`TypeId`] plus a numeric discriminant, so several instances of the
/// same kind of listener can coexist.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId {
    type_id: TypeId,
    discriminant: u64,
}

impl SubscriptionId {
    /// Create an ID from a type and a numeric discriminant.
    pub fn new<T: 'static>(discriminant: u64) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            discriminant,
        }
    }

    /// Create an ID from a type alone (for singletons).
    pub fn of<T: 'static>() -> Self {
        Self::new::<T>(0)
    }

    /// Create an ID from a type and a string discriminant.
    pub fn with_str<T: 'static>(s: &str) -> Self {
        let mut hasher = std::hash::DefaultHasher::new();
        s.hash(&mut hasher);
        Self::new::<T>(hasher.finish())
    }
}

impl<Msg: Send + 'static> Subscription<Msg> {
    /// Create from a raw stream and id.
    pub fn from_stream(id: SubscriptionId, stream: BoxStream<'static, Msg>) -> Self {
        Subscription {
            id,
            spawn: Box::new(move |ctx: SubscriptionContext<Msg>| {
                let tx = ctx.tx;
                let handle = tokio::spawn(async move {
                    let mut stream = stream;
                    while let Some(msg) = stream.next().await {
                        if tx.send(msg).is_err() {
                            break;
                        }
                    }
                });
                handle.abort_handle()
            }),
        }
    }

    /// Listen to the terminal event bus, forwarding whatever `map` keeps.
    ///
    /// The bus receiver is taken when the subscription starts, so no event
    /// published after reconciliation is missed. A lagging listener skips the
    /// events it fell behind on.
    pub fn from_events(
        id: SubscriptionId,
        map: impl Fn(TerminalEvent) -> Option<Msg> + Send + Sync + 'static,
    ) -> Self {
        Subscription {
            id,
            spawn: Box::new(move |ctx: SubscriptionContext<Msg>| {
                let mut events = BroadcastStream::new(ctx.events.subscribe());
                let tx = ctx.tx;
                let handle = tokio::spawn(async move {
                    while let Some(item) = events.next().await {
                        let Ok(event) = item else { continue };
                        if let Some(msg) = map(event) {
                            if tx.send(msg).is_err() {
                                break;
                            }
                        }
                    }
                });
                handle.abort_handle()
            }),
        }
    }

    /// The identity used for diffing.
    pub fn id(&self) -> &SubscriptionId {
        &self.id
    }

    /// Transform the message type (for component composition).
    pub fn map<NewMsg: Send + 'static>(
        self,
        f: impl Fn(Msg) -> NewMsg + Send + Sync + 'static,
    ) -> Subscription<NewMsg> {
        let Subscription { id, spawn } = self;
        Subscription {
            id,
            spawn: Box::new(move |ctx: SubscriptionContext<NewMsg>| {
                let (inner_tx, mut inner_rx) = mpsc::unbounded_channel::<Msg>();
                let abort = spawn(SubscriptionContext {
                    tx: inner_tx,
                    events: ctx.events,
                });
                let new_tx = ctx.tx;

                tokio::spawn(async move {
                    while let Some(msg) = inner_rx.recv().await {
                        if new_tx.send(f(msg)).is_err() {
                            break;
                        }
                    }
                });

                // Aborting the source drops inner_tx, which ends the mapper.
                abort
            }),
        }
    }
}

/// Manages active subscriptions, performing diffing between cycles.
pub(crate) struct SubscriptionManager<Msg: Send + 'static> {
    active: HashMap<SubscriptionId, AbortHandle>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    events: EventBus,
}

impl<Msg: Send + 'static> SubscriptionManager<Msg> {
    pub fn new(msg_tx: mpsc::UnboundedSender<Msg>, events: EventBus) -> Self {
        Self {
            active: HashMap::new(),
            msg_tx,
            events,
        }
    }

    /// Diff new subscriptions against active ones.
    /// Start new ones, stop removed ones, keep unchanged ones.
    pub fn reconcile(&mut self, new_subs: Vec<Subscription<Msg>>) {
        let mut new_ids: HashMap<SubscriptionId, Subscription<Msg>> = HashMap::new();
        for sub in new_subs {
            new_ids.insert(sub.id.clone(), sub);
        }

        self.active.retain(|id, handle| {
            let keep = new_ids.contains_key(id);
            if !keep {
                tracing::trace!(?id, "stopping subscription");
                handle.abort();
            }
            keep
        });

        for (id, sub) in new_ids {
            if !self.active.contains_key(&id) {
                tracing::trace!(?id, "starting subscription");
                let handle = (sub.spawn)(SubscriptionContext {
                    tx: self.msg_tx.clone(),
                    events: self.events.clone(),
                });
                self.active.insert(id, handle);
            }
        }
    }

    /// Abort all active subscriptions.
    pub fn shutdown(&mut self) {
        for (_, handle) in self.active.drain() {
            handle.abort();
        }
    }

    /// Number of active subscriptions (for testing).
    #[cfg(test)]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent};
    use std::time::Duration;

    fn manager<Msg: Send + 'static>() -> (
        SubscriptionManager<Msg>,
        mpsc::UnboundedReceiver<Msg>,
        EventBus,
    ) {
        let (tx, rx) = mpsc::unbounded_channel::<Msg>();
        let bus = EventBus::new();
        (SubscriptionManager::new(tx, bus.clone()), rx, bus)
    }

    async fn wait_for_listeners(bus: &EventBus, expected: usize) {
        for _ in 0..100 {
            if bus.listener_count() == expected {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!(
            "expected {expected} bus listeners, found {}",
            bus.listener_count()
        );
    }

    #[test]
    fn subscription_id_equality() {
        assert_eq!(SubscriptionId::of::<String>(), SubscriptionId::of::<String>());
        assert_ne!(SubscriptionId::of::<String>(), SubscriptionId::of::<i32>());
        assert_ne!(
            SubscriptionId::new::<String>(1),
            SubscriptionId::new::<String>(2)
        );
    }

    #[test]
    fn subscription_id_with_str() {
        let a = SubscriptionId::with_str::<String>("a");
        assert_ne!(a, SubscriptionId::with_str::<String>("b"));
        assert_eq!(a, SubscriptionId::with_str::<String>("a"));
    }

    #[tokio::test]
    async fn subscription_manager_starts_and_stops() {
        let (mut manager, _rx, _bus) = manager::<i32>();

        let stream: BoxStream<'static, i32> = Box::pin(futures::stream::pending());
        manager.reconcile(vec![Subscription::from_stream(
            SubscriptionId::of::<String>(),
            stream,
        )]);
        assert_eq!(manager.active_count(), 1);

        manager.reconcile(vec![]);
        assert_eq!(manager.active_count(), 0);
    }

    #[tokio::test]
    async fn subscription_manager_keeps_existing() {
        let (mut manager, _rx, _bus) = manager::<i32>();
        let id = SubscriptionId::of::<String>();

        let stream: BoxStream<'static, i32> = Box::pin(futures::stream::pending());
        manager.reconcile(vec![Subscription::from_stream(id.clone(), stream)]);
        let stream2: BoxStream<'static, i32> = Box::pin(futures::stream::pending());
        manager.reconcile(vec![Subscription::from_stream(id, stream2)]);
        assert_eq!(manager.active_count(), 1);
    }

    #[tokio::test]
    async fn event_subscription_forwards_mapped_events() {
        let (mut manager, mut rx, bus) = manager::<KeyCode>();
        manager.reconcile(vec![Subscription::from_events(
            SubscriptionId::of::<KeyCode>(),
            |ev| ev.key_press().map(|k| k.code),
        )]);
        assert_eq!(bus.listener_count(), 1);

        bus.publish(TerminalEvent::Resize(10, 10));
        bus.publish(TerminalEvent::Key(KeyEvent::from(KeyCode::Enter)));

        let got = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("timed out");
        assert_eq!(got, Some(KeyCode::Enter));
    }

    #[tokio::test]
    async fn removed_event_subscription_releases_bus_listener() {
        let (mut manager, _rx, bus) = manager::<()>();
        manager.reconcile(vec![Subscription::from_events(
            SubscriptionId::new::<()>(7),
            |_| Some(()),
        )]);
        wait_for_listeners(&bus, 1).await;

        manager.reconcile(vec![]);
        wait_for_listeners(&bus, 0).await;
    }

    #[tokio::test]
    async fn mapped_subscription_translates_messages() {
        let (mut manager, mut rx, bus) = manager::<String>();
        let sub = Subscription::from_events(SubscriptionId::of::<u8>(), |ev| match ev {
            TerminalEvent::Resize(w, _) => Some(w),
            _ => None,
        })
        .map(|w| format!("width={w}"));
        manager.reconcile(vec![sub]);

        bus.publish(TerminalEvent::Resize(42, 1));
        let got = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("timed out");
        assert_eq!(got.as_deref(), Some("width=42"));
    }

    #[tokio::test]
    async fn shutdown_aborts_everything() {
        let (mut manager, _rx, bus) = manager::<()>();
        manager.reconcile(vec![
            Subscription::from_events(SubscriptionId::new::<()>(1), |_| Some(())),
            Subscription::from_events(SubscriptionId::new::<()>(2), |_| Some(())),
        ]);
        assert_eq!(manager.active_count(), 2);

        manager.shutdown();
        assert_eq!(manager.active_count(), 0);
        wait_for_listeners(&bus, 0).await;
    }
}
