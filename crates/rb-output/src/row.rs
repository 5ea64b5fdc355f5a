//! Plain data row types written by output backends.

/// Summary of one host tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:             u64,
    pub events_delivered: u64,
    /// Agent callbacks that failed during the tick.
    pub agent_errors:     u64,
}

/// The robot's status at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusRow {
    pub tick:        u64,
    pub energy:      f64,
    pub x:           f64,
    pub y:           f64,
    pub heading:     f64,
    pub gun_heading: f64,
    pub gun_heat:    f64,
}

/// One announced body turn, attributed to the tick in which it was drained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnRow {
    pub tick:        u64,
    /// Sequence number within the run, starting at 0.
    pub seq:         u64,
    pub new_heading: f64,
}
