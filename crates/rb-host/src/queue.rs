//! `EventQueue` — host notifications waiting for their turn.
//!
//! Events are keyed by the tick at which the host delivers them.  Within a
//! tick they come out in the order they were pushed.

use std::collections::BTreeMap;

use rb_core::{RobotEvent, Tick};

#[derive(Default)]
pub struct EventQueue {
    inner: BTreeMap<Tick, Vec<RobotEvent>>,
    /// Cached total event count for O(1) `len()`.
    total: usize,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `event` for delivery at `tick`.
    pub fn push(&mut self, tick: Tick, event: RobotEvent) {
        self.inner.entry(tick).or_default().push(event);
        self.total += 1;
    }

    /// Remove and return every event due at exactly `tick`.
    ///
    /// Returns `None` if nothing is due (the common case).
    pub fn drain_tick(&mut self, tick: Tick) -> Option<Vec<RobotEvent>> {
        let events = self.inner.remove(&tick)?;
        self.total -= events.len();
        Some(events)
    }

    /// The earliest tick with at least one queued event.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

impl Extend<(Tick, RobotEvent)> for EventQueue {
    fn extend<I: IntoIterator<Item = (Tick, RobotEvent)>>(&mut self, iter: I) {
        for (tick, event) in iter {
            self.push(tick, event);
        }
    }
}
