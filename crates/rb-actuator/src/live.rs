//! The default actuator: a socket for the host's own peer object.

use tracing::debug;

use crate::{Actuator, ActuatorError, ActuatorResult};

/// Forwards to the peer the battle host attaches at startup.
///
/// A robot is constructed before the host has wired it into a battle, so the
/// live actuator starts out empty.  Until [`attach`][Self::attach] runs, every
/// action and sensor fails with [`ActuatorError::PeerNotAttached`].
#[derive(Default)]
pub struct LiveActuator {
    peer: Option<Box<dyn Actuator>>,
}

impl LiveActuator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wire in the host's peer.  A peer can be attached only once.
    pub fn attach(&mut self, peer: Box<dyn Actuator>) -> ActuatorResult<()> {
        if self.is_attached() {
            return Err(ActuatorError::PeerAlreadyAttached);
        }
        debug!("host peer attached to live actuator");
        self.peer = Some(peer);
        Ok(())
    }

    /// Whether the host has wired in its peer yet.
    pub fn is_attached(&self) -> bool {
        self.peer.is_some()
    }

    fn peer(&self) -> ActuatorResult<&dyn Actuator> {
        match self.peer.as_deref() {
            Some(peer) => Ok(peer),
            None       => Err(ActuatorError::PeerNotAttached),
        }
    }

    fn peer_mut(&mut self) -> ActuatorResult<&mut dyn Actuator> {
        match self.peer.as_deref_mut() {
            Some(peer) => Ok(peer),
            None       => Err(ActuatorError::PeerNotAttached),
        }
    }
}

forward_actuator! {
    impl for LiveActuator;
    ref |s| s.peer()?;
    mut |m| m.peer_mut()?;
}
