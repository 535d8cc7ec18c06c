//! Process (descriptor) model.
//!
//! A process is a unit of CPU work submitted to a scheduling algorithm.
//! Descriptors are created by the caller and never mutated by an algorithm.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process to be scheduled on a single CPU.
///
/// # Time Representation
/// All times are abstract integer time units relative to t=0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier within a run.
    pub id: String,
    /// Time unit at which the process becomes schedulable (>= 0).
    pub arrival: i64,
    /// Total CPU time required (>= 1).
    pub burst: i64,
    /// Scheduling priority (lower = more important). Only used by
    /// priority scheduling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl Process {
    /// Creates a process arriving at `arrival` that needs `burst` units of CPU.
    pub fn new(id: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Whether the process has arrived by time `t`.
    #[inline]
    pub fn has_arrived(&self, t: i64) -> bool {
        self.arrival <= t
    }
}

/// Returns indices of `processes` sorted by arrival time.
///
/// The sort is stable: equal arrivals keep submission order.
pub(crate) fn arrival_order(processes: &[Process]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&i| processes[i].arrival);
    order
}
