//! The `BattleRunner` struct and its tick loop.

use rb_behavior::{Agent, BehaviorError, Lifecycle, RobotBehavior};
use rb_core::{RobotEvent, RoundEndedEvent, Tick};
use tracing::{debug, warn};

use crate::{ErrorPolicy, EventQueue, HostError, HostResult, RunConfig, RunObserver, SandboxHandle};

/// Drives one agent through one round.
///
/// Each tick runs in three steps:
///
/// 1. **Act**: call [`Agent::tick`] once.
/// 2. **Notify**: hand every event queued for this tick to
///    [`Agent::deliver`], in the order it was queued.  A terminal event
///    (death, round or battle end) terminates the agent; later events in
///    the tick are dropped.
/// 3. **End turn**: take a status snapshot when one is due, cool the
///    sandbox gun, and report the tick to the observer.
///
/// The agent is set up lazily before the first tick.  When the loop runs
/// out of ticks the runner delivers a final `RoundEnded` and terminates the
/// agent.  Under [`ErrorPolicy::Halt`] a failed callback ends the tick and
/// the run early; the observer still sees `on_tick_end` for the partial
/// tick and `on_run_end` before the error is returned.
///
/// Create via [`RunnerBuilder`][crate::RunnerBuilder].
pub struct BattleRunner<B: RobotBehavior> {
    pub config: RunConfig,

    pub agent: Agent<B>,

    /// Notifications waiting for their tick.
    pub events: EventQueue,

    /// Present when the agent runs live against a sandbox peer.
    pub arena: Option<SandboxHandle>,

    pub(crate) clock: Tick,

    /// Callback failures tolerated under [`ErrorPolicy::LogAndContinue`].
    pub(crate) errors: u64,
}

impl<B: RobotBehavior> BattleRunner<B> {
    // ── Public API ────────────────────────────────────────────────────────

    /// The next tick to run.
    pub fn now(&self) -> Tick {
        self.clock
    }

    /// Agent failures absorbed so far under `LogAndContinue`.
    pub fn error_count(&self) -> u64 {
        self.errors
    }

    /// Run the round from the current tick to `config.end_tick()`, then end
    /// it.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: RunObserver>(&mut self, observer: &mut O) -> HostResult<()> {
        self.ensure_setup(observer)?;
        while self.clock < self.config.end_tick() && self.is_running() {
            self.step(observer)?;
        }
        self.finish(observer)
    }

    /// Run up to `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Stops early if the agent is terminated.  Does not end the round;
    /// useful for tests and incremental stepping.
    pub fn run_ticks<O: RunObserver>(&mut self, n: u64, observer: &mut O) -> HostResult<()> {
        self.ensure_setup(observer)?;
        for _ in 0..n {
            if !self.is_running() {
                break;
            }
            self.step(observer)?;
        }
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn is_running(&self) -> bool {
        self.agent.lifecycle() != Lifecycle::Terminated
    }

    fn ensure_setup<O: RunObserver>(&mut self, observer: &mut O) -> HostResult<()> {
        if self.agent.lifecycle() != Lifecycle::Created {
            return Ok(());
        }
        self.agent.setup().map_err(|err| {
            observer.on_agent_error(self.clock, &err);
            warn!(tick = %self.clock, error = %err, "agent setup failed");
            observer.on_run_end(self.clock);
            HostError::Agent { tick: self.clock, source: err }
        })
    }

    /// One turn.  A halting failure still closes the tick and the run for
    /// the observer before the error is returned.
    fn step<O: RunObserver>(&mut self, observer: &mut O) -> HostResult<()> {
        let now = self.clock;
        observer.on_tick_start(now);

        let mut delivered = 0;
        let mut outcome = self.agent.tick().or_else(|err| self.agent_failed(now, err, observer));
        if outcome.is_ok() {
            outcome = self.deliver_due(now, &mut delivered, observer);
        }

        // Snapshot the turn before the arena cools the gun and advances time.
        let status = match &self.arena {
            Some(arena) if self.snapshot_due(now) => Some(arena.status()),
            _ => None,
        };
        if let Some(arena) = &self.arena {
            arena.end_turn();
        }
        observer.on_tick_end(now, delivered);
        if let Some(status) = status {
            observer.on_snapshot(now, &status);
        }

        self.clock = self.clock.next();
        if outcome.is_err() {
            observer.on_run_end(self.clock);
        }
        outcome
    }

    fn snapshot_due(&self, now: Tick) -> bool {
        let interval = self.config.snapshot_interval_ticks;
        interval > 0 && now.0.is_multiple_of(interval)
    }

    fn deliver_due<O: RunObserver>(
        &mut self,
        now:       Tick,
        delivered: &mut usize,
        observer:  &mut O,
    ) -> HostResult<()> {
        let Some(due) = self.events.drain_tick(now) else {
            return Ok(());
        };

        for event in due {
            if !self.is_running() {
                debug!(tick = %now, kind = event.kind(), "agent terminated; event dropped");
                continue;
            }
            observer.on_event(now, &event);
            *delivered += 1;
            if let Err(err) = self.agent.deliver(&event) {
                self.agent_failed(now, err, observer)?;
            }
            if event.is_terminal() {
                self.agent.terminate();
            }
        }
        Ok(())
    }

    /// Apply the error policy to a failed callback.
    fn agent_failed<O: RunObserver>(
        &mut self,
        now:      Tick,
        err:      BehaviorError,
        observer: &mut O,
    ) -> HostResult<()> {
        observer.on_agent_error(now, &err);
        match self.config.error_policy {
            ErrorPolicy::Halt => {
                warn!(tick = %now, error = %err, "agent callback failed; halting");
                self.agent.terminate();
                Err(HostError::Agent { tick: now, source: err })
            }
            ErrorPolicy::LogAndContinue => {
                warn!(tick = %now, error = %err, "agent callback failed; continuing");
                self.errors += 1;
                Ok(())
            }
        }
    }

    fn finish<O: RunObserver>(&mut self, observer: &mut O) -> HostResult<()> {
        if self.is_running() {
            let end = RobotEvent::RoundEnded(RoundEndedEvent {
                round:       self.arena.as_ref().map_or(0, |a| a.config().round_num),
                turns:       self.clock.0,
                total_turns: self.clock.0,
            });
            observer.on_event(self.clock, &end);
            let delivered = self.agent.deliver(&end);
            self.agent.terminate();
            if let Err(err) = delivered {
                observer.on_agent_error(self.clock, &err);
                if self.config.error_policy == ErrorPolicy::Halt {
                    warn!(tick = %self.clock, error = %err, "round-end callback failed; halting");
                    observer.on_run_end(self.clock);
                    return Err(HostError::Agent { tick: self.clock, source: err });
                }
                warn!(tick = %self.clock, error = %err, "round-end callback failed");
                self.errors += 1;
            }
        }
        debug!(ticks = self.agent.ticks(), errors = self.errors, "round finished");
        observer.on_run_end(self.clock);
        Ok(())
    }
}
