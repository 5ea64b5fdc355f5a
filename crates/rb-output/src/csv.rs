//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `tick_summaries.csv`
//! - `status_snapshots.csv`
//! - `turns.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, StatusRow, TickSummaryRow, TurnRow};

pub const TICK_SUMMARIES_FILE: &str = "tick_summaries.csv";
pub const STATUS_SNAPSHOTS_FILE: &str = "status_snapshots.csv";
pub const TURNS_FILE: &str = "turns.csv";

/// Writes run output to three CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    statuses:  Writer<File>,
    turns:     Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join(TICK_SUMMARIES_FILE))?;
        summaries.write_record(["tick", "events_delivered", "agent_errors"])?;

        let mut statuses = Writer::from_path(dir.join(STATUS_SNAPSHOTS_FILE))?;
        statuses.write_record(["tick", "energy", "x", "y", "heading", "gun_heading", "gun_heat"])?;

        let mut turns = Writer::from_path(dir.join(TURNS_FILE))?;
        turns.write_record(["tick", "seq", "new_heading"])?;

        Ok(Self {
            summaries,
            statuses,
            turns,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.events_delivered.to_string(),
            row.agent_errors.to_string(),
        ])?;
        Ok(())
    }

    fn write_status(&mut self, row: &StatusRow) -> OutputResult<()> {
        self.statuses.write_record(&[
            row.tick.to_string(),
            row.energy.to_string(),
            row.x.to_string(),
            row.y.to_string(),
            row.heading.to_string(),
            row.gun_heading.to_string(),
            row.gun_heat.to_string(),
        ])?;
        Ok(())
    }

    fn write_turns(&mut self, rows: &[TurnRow]) -> OutputResult<()> {
        for row in rows {
            self.turns.write_record(&[
                row.tick.to_string(),
                row.seq.to_string(),
                row.new_heading.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.statuses.flush()?;
        self.turns.flush()?;
        Ok(())
    }
}
