//! `RunOutputObserver<W>` — bridges `RunObserver` to an `OutputWriter`.

use rb_behavior::{BehaviorError, TurnLog};
use rb_core::{RobotStatus, Tick};
use rb_host::RunObserver;

use crate::row::{StatusRow, TickSummaryRow, TurnRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`RunObserver`] that writes tick summaries, status snapshots, and
/// announced turns to any [`OutputWriter`] backend.
///
/// Turns are read from a [`TurnLog`] subscribed to the behavior's turn
/// notifier; the log is drained at the end of every tick so each turn is
/// written once, tagged with the tick it happened in.  Turns announced
/// during setup land on the first tick.
///
/// Errors from the writer are stored internally because `RunObserver`
/// methods have no return value.  After `runner.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct RunOutputObserver<W: OutputWriter> {
    writer:      W,
    turns:       Option<TurnLog>,
    turn_seq:    u64,
    tick_errors: u64,
    last_error:  Option<OutputError>,
}

impl<W: OutputWriter> RunOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            turns:       None,
            turn_seq:    0,
            tick_errors: 0,
            last_error:  None,
        }
    }

    /// Also record the turns collected by `log`.
    pub fn with_turn_log(mut self, log: TurnLog) -> Self {
        self.turns = Some(log);
        self
    }

    /// Take the stored write error (if any) after `runner.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn flush_turns(&mut self, tick: Tick) {
        let Some(log) = &self.turns else { return };
        let rows: Vec<TurnRow> = log
            .drain()
            .into_iter()
            .enumerate()
            .map(|(i, event)| TurnRow {
                tick:        tick.0,
                seq:         self.turn_seq + i as u64,
                new_heading: event.new_heading().degrees(),
            })
            .collect();

        if !rows.is_empty() {
            self.turn_seq += rows.len() as u64;
            let result = self.writer.write_turns(&rows);
            self.store_err(result);
        }
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> RunObserver for RunOutputObserver<W> {
    fn on_tick_start(&mut self, _tick: Tick) {
        self.tick_errors = 0;
    }

    fn on_agent_error(&mut self, _tick: Tick, _error: &BehaviorError) {
        self.tick_errors += 1;
    }

    fn on_tick_end(&mut self, tick: Tick, delivered: usize) {
        let row = TickSummaryRow {
            tick:             tick.0,
            events_delivered: delivered as u64,
            agent_errors:     self.tick_errors,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
        self.flush_turns(tick);
    }

    fn on_snapshot(&mut self, tick: Tick, status: &RobotStatus) {
        let row = StatusRow {
            tick:        tick.0,
            energy:      status.energy,
            x:           status.x,
            y:           status.y,
            heading:     status.heading.degrees(),
            gun_heading: status.gun_heading.degrees(),
            gun_heat:    status.gun_heat,
        };
        let result = self.writer.write_status(&row);
        self.store_err(result);
    }

    fn on_run_end(&mut self, final_tick: Tick) {
        self.flush_turns(final_tick);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
