use crate::player::MediaEvent;
use crossbeam_channel::{Receiver, Sender, unbounded};
use log::debug;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU64, Ordering},
};

pub type SubscriptionId = u64;

/// Fan-out point for media notifications.
///
/// Backends own one and `emit` into it; controllers `subscribe` and get back a
/// [`Subscription`] that removes itself again when closed or dropped. Clones
/// share the same listener table.
#[derive(Clone, Default)]
pub struct Notifier {
    listeners: Arc<Mutex<Vec<(SubscriptionId, Sender<MediaEvent>)>>>,
    next_id: Arc<AtomicU64>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = unbounded();

        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push((id, tx));
        }
        debug!("subscription {id} opened");

        Subscription {
            id,
            events: Some(rx),
            notifier: self.clone(),
        }
    }

    pub fn emit(&self, event: MediaEvent) {
        if let Ok(listeners) = self.listeners.lock() {
            for (_, tx) in listeners.iter() {
                let _ = tx.send(event);
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().map(|l| l.len()).unwrap_or(0)
    }

    fn release(&self, id: SubscriptionId) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.retain(|(listener, _)| *listener != id);
        }
        debug!("subscription {id} released");
    }
}

/// An open registration on a [`Notifier`].
///
/// `close` is idempotent, and `Drop` closes, so the registration never
/// outlives its owner.
pub struct Subscription {
    id: SubscriptionId,
    events: Option<Receiver<MediaEvent>>,
    notifier: Notifier,
}

impl Subscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    pub fn is_open(&self) -> bool {
        self.events.is_some()
    }

    /// Events received so far, without blocking. Empty once closed.
    pub fn drain(&self) -> Vec<MediaEvent> {
        self.events
            .as_ref()
            .map(|rx| rx.try_iter().collect())
            .unwrap_or_default()
    }

    pub fn close(&mut self) {
        if self.events.take().is_some() {
            self.notifier.release(self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.close();
    }
}
