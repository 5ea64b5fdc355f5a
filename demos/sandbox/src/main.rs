//! sandbox — run a reactive-evasion robot against the bookkeeping sandbox.
//!
//! Usage: `sandbox [config.json]`
//!
//! Every config field is optional; missing ones fall back to the defaults
//! below.  Example:
//!
//! ```json
//! { "run": { "total_ticks": 500, "seed": 9 },
//!   "evasion": { "sweep_degrees": 15 },
//!   "rates": { "hit_by_bullet": 0.1 } }
//! ```
//!
//! Logging follows `RUST_LOG` (default `info`).

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rb_behavior::{Agent, EvasionConfig, ReactiveEvasion, TurnLog};
use rb_core::{RobotEvent, RobotStatus, Tick};
use rb_host::{ArenaConfig, ErrorPolicy, EventRates, RunConfig, RunObserver, RunnerBuilder};
use rb_output::{CsvWriter, OutputWriter, RunOutputObserver};

// ── Config ────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(default)]
struct DemoConfig {
    run:        RunConfig,
    evasion:    EvasionConfig,
    arena:      ArenaConfig,
    rates:      EventRates,
    output_dir: PathBuf,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            // The sandbox rejects fire while the gun is hot; keep going.
            run: RunConfig {
                total_ticks:  200,
                error_policy: ErrorPolicy::LogAndContinue,
                ..RunConfig::default()
            },
            evasion:    EvasionConfig::default(),
            arena:      ArenaConfig::default(),
            rates:      EventRates::default(),
            output_dir: PathBuf::from("output/sandbox"),
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<DemoConfig> {
    let Some(path) = path else {
        return Ok(DemoConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:     RunOutputObserver<W>,
    events:    usize,
    errors:    usize,
    snapshots: usize,
    last:      Option<RobotStatus>,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: RunOutputObserver<W>) -> Self {
        Self { inner, events: 0, errors: 0, snapshots: 0, last: None }
    }
}

impl<W: OutputWriter> RunObserver for CountingObserver<W> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.inner.on_tick_start(tick);
    }

    fn on_event(&mut self, tick: Tick, event: &RobotEvent) {
        self.events += 1;
        self.inner.on_event(tick, event);
    }

    fn on_agent_error(&mut self, tick: Tick, error: &rb_behavior::BehaviorError) {
        self.errors += 1;
        self.inner.on_agent_error(tick, error);
    }

    fn on_tick_end(&mut self, tick: Tick, delivered: usize) {
        self.inner.on_tick_end(tick, delivered);
    }

    fn on_snapshot(&mut self, tick: Tick, status: &RobotStatus) {
        self.snapshots += 1;
        self.last = Some(*status);
        self.inner.on_snapshot(tick, status);
    }

    fn on_run_end(&mut self, final_tick: Tick) {
        self.inner.on_run_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;
    info!(
        ticks = config.run.total_ticks,
        seed = config.run.seed,
        policy = ?config.run.error_policy,
        "starting sandbox run"
    );

    // 1. Behavior, with a turn log for output.
    let turns = TurnLog::new();
    let mut behavior = ReactiveEvasion::new(config.evasion.clone())?;
    behavior.on_turn(turns.clone());

    // 2. Runner: live agent, sandbox peer, scripted events.
    let mut runner = RunnerBuilder::new(config.run.clone(), Agent::live(behavior))
        .sandbox(config.arena.clone())
        .scripted(config.rates.clone())
        .build()?;
    info!(queued = runner.events.len(), "event script rolled");

    // 3. Output.
    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("creating {}", config.output_dir.display()))?;
    let writer = CsvWriter::new(&config.output_dir)?;
    let mut obs = CountingObserver::new(RunOutputObserver::new(writer).with_turn_log(turns));

    // 4. Run.
    let t0 = Instant::now();
    runner.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    let nav = runner.agent.behavior().navigation();
    println!("Run complete in {:.3} s", elapsed.as_secs_f64());
    println!("  ticks             : {}", runner.agent.ticks());
    println!("  events delivered  : {}", obs.events);
    println!("  callback failures : {}", obs.errors);
    println!("  snapshots         : {}", obs.snapshots);
    println!("  believed heading  : {}", nav.current());
    if let Some(status) = obs.last {
        println!(
            "  last status       : energy {:.1}, pos ({:.1}, {:.1}), heading {}",
            status.energy, status.x, status.y, status.heading
        );
    }
    println!("  output            : {}", config.output_dir.display());

    Ok(())
}
