//! Scheduling context for dispatching rule evaluation.

/// Runtime scheduling state passed to dispatching rules.
///
/// Times are abstract units relative to the simulation epoch (t=0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulingContext {
    /// Current simulation time.
    pub current_time: i64,
}

impl SchedulingContext {
    /// Creates a context at the given time.
    pub fn at_time(current_time: i64) -> Self {
        Self { current_time }
    }

    /// Time a process arriving at `arrival` has spent waiting so far.
    pub fn waited_since(&self, arrival: i64) -> i64 {
        (self.current_time - arrival).max(0)
    }
}
