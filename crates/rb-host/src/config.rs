//! Run configuration.

use rb_core::Tick;

/// What the host does when an agent callback returns an error.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorPolicy {
    /// Terminate the agent and return the error from `run`.
    #[default]
    Halt,
    /// Log a warning, report it to the observer, and keep ticking.
    LogAndContinue,
}

/// Top-level settings for one round.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RunConfig {
    /// Turns in the round.  Must be positive.
    pub total_ticks: u64,

    /// Seed for scripted events.  The same seed always produces the same run.
    pub seed: u64,

    /// Report a status snapshot every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,

    pub error_policy: ErrorPolicy,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            total_ticks:             1_000,
            seed:                    42,
            snapshot_interval_ticks: 1,
            error_policy:            ErrorPolicy::Halt,
        }
    }
}

impl RunConfig {
    /// The tick at which the round ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }
}
