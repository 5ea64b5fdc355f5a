use thiserror::Error;

/// Failures raised by an actuator.
///
/// The selector never creates these on its own forwarding path; whatever the
/// bound actuator returns reaches the caller unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActuatorError {
    #[error("no host peer attached; the live actuator cannot act before the host wires it")]
    PeerNotAttached,

    #[error("a host peer is already attached")]
    PeerAlreadyAttached,

    #[error("cannot attach a host peer to a selector bound to a substitute")]
    PeerInTestMode,

    #[error("gun is still hot (heat {heat:.2}); wait until it cools to zero")]
    GunOverheated { heat: f64 },

    #[error("invalid {what}: {value}")]
    InvalidArgument { what: &'static str, value: f64 },

    #[error("host error: {0}")]
    Host(String),
}

pub type ActuatorResult<T> = Result<T, ActuatorError>;
