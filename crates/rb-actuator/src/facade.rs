//! `ActuatorSelector` — the testable facade.
//!
//! An agent holds one selector and talks only to it.  The selector is bound
//! at construction to exactly one of:
//!
//! - a default [`LiveActuator`], waiting for the host to attach its peer, or
//! - an injected substitute (a test double), which puts it in *test mode*.
//!
//! The binding never changes afterwards.  Every `Actuator` call is handed to
//! the bound implementation as-is: same arguments, same return value, same
//! error.  The selector keeps no shadow state, performs no validation, and
//! logs nothing on the forwarding path, so agent code behaves identically
//! under either binding.

use tracing::debug;

use crate::{Actuator, ActuatorError, ActuatorResult, LiveActuator};

enum Bound {
    Live(LiveActuator),
    Substitute(Box<dyn Actuator>),
}

/// Routes the capability contract to either the live host or a substitute.
///
/// # Example
///
/// ```rust,ignore
/// // Production: the host attaches its peer after construction.
/// let mut live = ActuatorSelector::new();
/// live.attach_peer(host_peer)?;
///
/// // Tests: script the robot without a host.
/// let recorder = RecordingActuator::new();
/// let mut robot = ActuatorSelector::with_substitute(recorder.clone());
/// robot.ahead(20.0)?;
/// assert_eq!(recorder.calls(), vec![Call::Ahead(20.0)]);
/// ```
pub struct ActuatorSelector {
    bound: Bound,
}

impl ActuatorSelector {
    /// Bind to a freshly constructed default live actuator.
    pub fn new() -> Self {
        debug!("actuator selector bound to live actuator");
        Self { bound: Bound::Live(LiveActuator::new()) }
    }

    /// Bind to `substitute` and enter test mode.
    pub fn with_substitute<A: Actuator + 'static>(substitute: A) -> Self {
        Self::from_boxed(Box::new(substitute))
    }

    /// Bind to an already boxed substitute and enter test mode.
    pub fn from_boxed(substitute: Box<dyn Actuator>) -> Self {
        debug!("actuator selector bound to substitute (test mode)");
        Self { bound: Bound::Substitute(substitute) }
    }

    /// `true` when bound to a substitute.
    pub fn is_test_mode(&self) -> bool {
        matches!(self.bound, Bound::Substitute(_))
    }

    /// Host wiring: hand the live actuator its peer.
    ///
    /// Fails with [`ActuatorError::PeerInTestMode`] when bound to a
    /// substitute, and with [`ActuatorError::PeerAlreadyAttached`] on a
    /// second call.
    pub fn attach_peer(&mut self, peer: Box<dyn Actuator>) -> ActuatorResult<()> {
        match &mut self.bound {
            Bound::Live(live)     => live.attach(peer),
            Bound::Substitute(_)  => Err(ActuatorError::PeerInTestMode),
        }
    }

    fn active(&self) -> &dyn Actuator {
        match &self.bound {
            Bound::Live(live)       => live,
            Bound::Substitute(sub)  => &**sub,
        }
    }

    fn active_mut(&mut self) -> &mut dyn Actuator {
        match &mut self.bound {
            Bound::Live(live)       => live,
            Bound::Substitute(sub)  => &mut **sub,
        }
    }
}

impl Default for ActuatorSelector {
    fn default() -> Self {
        Self::new()
    }
}

forward_actuator! {
    impl for ActuatorSelector;
    ref |s| s.active();
    mut |m| m.active_mut();
}
