//! Run observer trait for progress reporting and data collection.

use rb_behavior::BehaviorError;
use rb_core::{RobotEvent, RobotStatus, Tick};

/// Callbacks invoked by [`BattleRunner::run`][crate::BattleRunner::run] at
/// key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl RunObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, delivered: usize) {
///         if tick.0 % self.interval == 0 {
///             tracing::info!(%tick, delivered, "progress");
///         }
///     }
/// }
/// ```
pub trait RunObserver {
    /// Called at the very start of each tick, before the agent acts.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called just before `event` is handed to the agent.
    fn on_event(&mut self, _tick: Tick, _event: &RobotEvent) {}

    /// Called when a setup, tick, or event callback fails, whatever the
    /// error policy.
    fn on_agent_error(&mut self, _tick: Tick, _error: &BehaviorError) {}

    /// Called at the end of each tick.  `delivered` counts events handed to
    /// the agent during the tick.
    fn on_tick_end(&mut self, _tick: Tick, _delivered: usize) {}

    /// Called every `snapshot_interval_ticks` ticks when the run has a
    /// sandbox to read status from.
    fn on_snapshot(&mut self, _tick: Tick, _status: &RobotStatus) {}

    /// Called once after the round ends.
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// A [`RunObserver`] that does nothing.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}
