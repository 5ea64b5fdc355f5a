//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, StatusRow, TickSummaryRow, TurnRow};

/// Trait implemented by output backends.
///
/// All methods are infallible from the observer's perspective; errors are
/// stored internally and retrieved with
/// [`RunOutputObserver::take_error`][crate::RunOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Write one status snapshot.
    fn write_status(&mut self, row: &StatusRow) -> OutputResult<()>;

    /// Write a batch of announced turns.
    fn write_turns(&mut self, rows: &[TurnRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
