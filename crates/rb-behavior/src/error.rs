use rb_actuator::ActuatorError;
use rb_core::CoreError;
use thiserror::Error;

use crate::Lifecycle;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BehaviorError {
    #[error("behavior configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    /// Raised by the bound actuator and passed through untouched.
    #[error("actuator: {0}")]
    Actuator(#[from] ActuatorError),

    #[error("cannot {op} while the agent is {state}")]
    Lifecycle {
        op:    &'static str,
        state: Lifecycle,
    },
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
