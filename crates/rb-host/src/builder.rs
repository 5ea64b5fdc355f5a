//! Fluent builder for constructing a [`BattleRunner`].

use rb_behavior::{Agent, RobotBehavior};
use rb_core::{BattleRng, RobotEvent, Tick};
use tracing::debug;

use crate::sandbox::{ArenaConfig, sandbox};
use crate::script::{EventRates, scripted_events};
use crate::{BattleRunner, EventQueue, HostError, HostResult, RunConfig};

/// Fluent builder for [`BattleRunner<B>`].
///
/// # Required inputs
///
/// - [`RunConfig`] — total ticks, seed, snapshot interval, error policy
/// - [`Agent<B>`] — live (a sandbox peer is attached at build) or in test
///   mode with its own substitute
///
/// # Optional inputs
///
/// | Method             | Default                                   |
/// |--------------------|-------------------------------------------|
/// | `.sandbox(cfg)`    | No sandbox; the agent's own binding is used |
/// | `.event(t, e)`     | No hand-placed events                     |
/// | `.scripted(rates)` | No scripted events                        |
///
/// # Example
///
/// ```rust,ignore
/// let agent = Agent::live(ReactiveEvasion::new(EvasionConfig::default())?);
/// let mut runner = RunnerBuilder::new(config, agent)
///     .sandbox(ArenaConfig::default())
///     .scripted(EventRates::default())
///     .build()?;
/// runner.run(&mut NoopObserver)?;
/// ```
pub struct RunnerBuilder<B: RobotBehavior> {
    config:  RunConfig,
    agent:   Agent<B>,
    arena:   Option<ArenaConfig>,
    events:  Vec<(Tick, RobotEvent)>,
    scripts: Option<EventRates>,
}

impl<B: RobotBehavior> RunnerBuilder<B> {
    pub fn new(config: RunConfig, agent: Agent<B>) -> Self {
        Self {
            config,
            agent,
            arena:   None,
            events:  Vec::new(),
            scripts: None,
        }
    }

    /// Attach a sandbox peer built from `arena` to the agent.
    ///
    /// The agent must be live; building a test-mode agent with a sandbox
    /// fails with a wiring error.
    pub fn sandbox(mut self, arena: ArenaConfig) -> Self {
        self.arena = Some(arena);
        self
    }

    /// Queue one event for delivery at `tick`.
    pub fn event(mut self, tick: Tick, event: RobotEvent) -> Self {
        self.events.push((tick, event));
        self
    }

    /// Roll a seeded event script over the whole round.
    pub fn scripted(mut self, rates: EventRates) -> Self {
        self.scripts = Some(rates);
        self
    }

    /// Validate inputs, wire the sandbox, fill the event queue, and return a
    /// ready-to-run [`BattleRunner`].
    pub fn build(self) -> HostResult<BattleRunner<B>> {
        if self.config.total_ticks == 0 {
            return Err(HostError::Config("total_ticks must be positive".into()));
        }

        let mut agent = self.agent;
        let arena = match self.arena {
            Some(cfg) => {
                let (peer, handle) = sandbox(cfg);
                agent.attach_peer(Box::new(peer))?;
                Some(handle)
            }
            None => None,
        };

        let mut events = EventQueue::new();
        // Hand-placed events go first so they precede scripted ones within a tick.
        events.extend(self.events);
        if let Some(rates) = self.scripts {
            rates.validate()?;
            let mut rng = BattleRng::new(self.config.seed);
            events.extend(scripted_events(&mut rng, self.config.total_ticks, &rates));
        }

        debug!(
            total_ticks = self.config.total_ticks,
            queued = events.len(),
            sandbox = arena.is_some(),
            "runner built"
        );

        Ok(BattleRunner {
            config: self.config,
            agent,
            events,
            arena,
            clock:  Tick::ZERO,
            errors: 0,
        })
    }
}
