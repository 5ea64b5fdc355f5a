//! Turn notifications — announced before a body rotation is requested.
//!
//! Listeners run synchronously, in subscription order, on the caller's
//! thread.  They observe only: the event is immutable and the rotation goes
//! ahead regardless of what a listener does.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rb_core::Heading;
use tracing::trace;

/// The heading a robot is about to turn onto.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct TurnEvent {
    new_heading: Heading,
}

impl TurnEvent {
    pub fn new(new_heading: Heading) -> Self {
        Self { new_heading }
    }

    #[inline]
    pub fn new_heading(&self) -> Heading {
        self.new_heading
    }
}

/// Receives [`TurnEvent`]s.  Closures `FnMut(&TurnEvent) + Send` qualify.
pub trait TurnListener: Send {
    fn on_turn(&mut self, event: &TurnEvent);
}

impl<F> TurnListener for F
where
    F: FnMut(&TurnEvent) + Send,
{
    fn on_turn(&mut self, event: &TurnEvent) {
        self(event)
    }
}

/// Handle returned by [`TurnNotifier::subscribe`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct ListenerId(u32);

/// Ordered list of turn listeners.
#[derive(Default)]
pub struct TurnNotifier {
    listeners: Vec<(ListenerId, Box<dyn TurnListener>)>,
    next_id:   u32,
}

impl TurnNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `listener`; it runs after every listener already subscribed.
    pub fn subscribe<L: TurnListener + 'static>(&mut self, listener: L) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove the listener behind `id`.  Returns `false` if it was not found.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Deliver `event` to every listener, in subscription order.
    pub fn publish(&mut self, event: &TurnEvent) {
        trace!(heading = %event.new_heading(), listeners = self.listeners.len(), "turn announced");
        for (_, listener) in &mut self.listeners {
            listener.on_turn(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

// ── TurnLog ───────────────────────────────────────────────────────────────────

/// A listener that appends every event to a shared buffer.
///
/// Keep one clone, subscribe another; read or drain the buffer from the
/// kept clone.
#[derive(Clone, Default)]
pub struct TurnLog {
    events: Arc<Mutex<Vec<TurnEvent>>>,
}

impl TurnLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<TurnEvent> {
        self.lock().clone()
    }

    /// Take every buffered event, leaving the buffer empty.
    pub fn drain(&self) -> Vec<TurnEvent> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<TurnEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TurnListener for TurnLog {
    fn on_turn(&mut self, event: &TurnEvent) {
        self.lock().push(*event);
    }
}
