//! `rb-output` — run output writers for robot battle agents.
//!
//! | Backend | Files created                                                  |
//! |---------|----------------------------------------------------------------|
//! | CSV     | `tick_summaries.csv`, `status_snapshots.csv`, `turns.csv`       |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`RunOutputObserver`], which implements `rb_host::RunObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rb_output::{CsvWriter, RunOutputObserver};
//!
//! let log = TurnLog::new();
//! behavior.on_turn(log.clone());
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = RunOutputObserver::new(writer).with_turn_log(log);
//! runner.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::RunOutputObserver;
pub use row::{StatusRow, TickSummaryRow, TurnRow};
pub use writer::OutputWriter;
