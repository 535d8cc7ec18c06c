//! CPU scheduling algorithms and summary metrics.
//!
//! Every algorithm is a pure function of its input: it validates the
//! process set, simulates a single CPU with an integer clock, and returns
//! a [`SchedulingOutcome`] (timeline + per-process results).
//!
//! | Algorithm | Preemptive | Selection |
//! |-----------|-----------|-----------|
//! | FCFS | no | earliest arrival |
//! | SJF | no | smallest burst, then earliest arrival |
//! | Round Robin | yes (quantum) | FIFO ready queue |
//! | Priority | no | lowest priority value, then earliest arrival |
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod kpi;
mod non_preemptive;
mod request;
mod round_robin;

pub use fcfs::{fcfs, Fcfs};
pub use kpi::{calculate_metrics, SummaryMetrics};
pub use non_preemptive::{priority_scheduling, sjf, PriorityScheduler, Sjf};
pub use request::{Algorithm, SimulationReport, SimulationRequest};
pub use round_robin::{round_robin, RoundRobin};

use crate::models::{Process, SchedulingOutcome};
use crate::validation::InvalidInputError;

/// A single-CPU scheduling algorithm.
///
/// Implementors hold only configuration (e.g. a quantum); each call to
/// [`schedule`](CpuScheduler::schedule) is independent.
pub trait CpuScheduler: Send + Sync {
    /// Algorithm name (e.g., "FCFS").
    fn name(&self) -> &'static str;

    /// Schedules every process or fails validation without output.
    fn schedule(&self, processes: &[Process]) -> Result<SchedulingOutcome, InvalidInputError>;
}

fn log_completion(name: &str, outcome: &SchedulingOutcome) {
    log::info!(
        "{name}: scheduled {} processes in {} slices, makespan {}",
        outcome.results.len(),
        outcome.timeline.len(),
        outcome.timeline.makespan()
    );
}
