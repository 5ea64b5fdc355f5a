use rb_behavior::BehaviorError;
use rb_core::Tick;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HostError {
    #[error("host configuration error: {0}")]
    Config(String),

    #[error("agent wiring failed: {0}")]
    Wiring(#[from] BehaviorError),

    /// A setup, tick, or event callback failed and the run was halted.
    #[error("agent failed at {tick}: {source}")]
    Agent {
        tick:   Tick,
        #[source]
        source: BehaviorError,
    },
}

pub type HostResult<T> = Result<T, HostError>;
