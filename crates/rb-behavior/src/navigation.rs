//! Navigation state — believed heading and the heading to turn to next.

use rb_core::Heading;

/// Where the robot believes it faces, and where it wants to face next.
///
/// `next` changes only through [`react_to_hit`][Self::react_to_hit] and the
/// commit performed by
/// [`ReactiveEvasion::choose_direction`][crate::ReactiveEvasion::choose_direction].
/// `current` changes only on commit.  Both are canonical in `[0, 360)`.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct NavigationState {
    current: Heading,
    next:    Heading,
}

impl NavigationState {
    /// Start facing `current` with nothing pending.
    pub fn new(current: Heading) -> Self {
        Self { current, next: current }
    }

    #[inline]
    pub fn current(&self) -> Heading {
        self.current
    }

    #[inline]
    pub fn next(&self) -> Heading {
        self.next
    }

    /// Plan to face the opposite way from where we are now.
    ///
    /// Always relative to `current`: calling this twice before a commit
    /// leaves `next` where the first call put it.
    pub fn react_to_hit(&mut self) {
        self.next = self.current.opposite();
    }

    pub fn has_pending_turn(&self) -> bool {
        self.next != self.current
    }

    /// Signed rotation in `(-180, 180]` from `current` to `next`.
    pub fn pending_turn(&self) -> f64 {
        self.current.turn_to(self.next)
    }

    /// The heading to request this turn: a pending reaction if there is one,
    /// otherwise `current` rotated by `sweep` degrees.
    pub fn direction_event(&self, sweep: f64) -> ChooseDirectionEvent {
        let target = if self.has_pending_turn() {
            self.next
        } else {
            self.current.rotated(sweep)
        };
        ChooseDirectionEvent::new(target)
    }

    /// The turn to `heading` has completed: make it both current and next.
    pub fn commit_to(&mut self, heading: Heading) {
        self.current = heading;
        self.next = heading;
    }

    /// Align the belief with a heading the robot was explicitly turned to
    /// during setup.  Discards any pending reaction.
    pub fn reset(&mut self, heading: Heading) {
        self.commit_to(heading);
    }
}

/// Request to turn onto `next_heading` and commit it.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ChooseDirectionEvent {
    next_heading: Heading,
}

impl ChooseDirectionEvent {
    pub fn new(next_heading: Heading) -> Self {
        Self { next_heading }
    }

    /// The navigation state's pending heading, as of now.
    pub fn from_state(state: &NavigationState) -> Self {
        Self::new(state.next())
    }

    #[inline]
    pub fn next_heading(&self) -> Heading {
        self.next_heading
    }
}
