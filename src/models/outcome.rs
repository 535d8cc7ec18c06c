//! Per-process results and the combined outcome of a scheduling run.

use serde::{Deserialize, Serialize};

use super::{Process, Timeline};

/// Outcome of one process after a scheduling run.
///
/// `turnaround = finish - arrival` and `waiting = turnaround - burst`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Process ID.
    pub id: String,
    /// Arrival time (copied from the descriptor).
    pub arrival: i64,
    /// Burst time (copied from the descriptor).
    pub burst: i64,
    /// Priority (copied from the descriptor, when present).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    /// First time the process received the CPU.
    pub start: i64,
    /// Time of final completion.
    pub finish: i64,
    /// Time spent ready but not running.
    pub waiting: i64,
    /// Total time in the system.
    pub turnaround: i64,
}

impl ProcessResult {
    /// Builds the result for `process` given its first dispatch and completion.
    pub fn new(process: &Process, start: i64, finish: i64) -> Self {
        let turnaround = finish - process.arrival;
        Self {
            id: process.id.clone(),
            arrival: process.arrival,
            burst: process.burst,
            priority: process.priority,
            start,
            finish,
            waiting: turnaround - process.burst,
            turnaround,
        }
    }
}

/// Timeline and per-process results produced by one algorithm run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulingOutcome {
    /// Execution spans in time order.
    pub timeline: Timeline,
    /// One result per process.
    pub results: Vec<ProcessResult>,
}

impl SchedulingOutcome {
    /// Finds the result for a process.
    pub fn result_for(&self, process_id: &str) -> Option<&ProcessResult> {
        self.results.iter().find(|r| r.id == process_id)
    }

    /// Process IDs in result order.
    pub fn result_ids(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.id.as_str()).collect()
    }
}
