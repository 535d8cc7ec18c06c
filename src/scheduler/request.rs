//! Simulation request and report.
//!
//! A request bundles the process set with the selected algorithm. It is
//! the configuration surface handed over by a presentation layer, either
//! built in code or deserialized from JSON:
//!
//! ```json
//! {
//!   "algorithm": { "kind": "round_robin", "quantum": 2 },
//!   "processes": [
//!     { "id": "P1", "arrival": 0, "burst": 5 },
//!     { "id": "P2", "arrival": 1, "burst": 3 }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::{CpuScheduler, Fcfs, PriorityScheduler, RoundRobin, Sjf, SummaryMetrics};
use crate::models::{Process, SchedulingOutcome};
use crate::validation::InvalidInputError;

/// Scheduling algorithm selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First (non-preemptive).
    Sjf,
    /// Round-Robin with a fixed quantum.
    RoundRobin {
        /// Maximum CPU time per dispatch.
        quantum: i64,
    },
    /// Priority scheduling (non-preemptive).
    Priority,
}

impl Algorithm {
    /// Display name.
    pub fn name(&self) -> &'static str {
        self.scheduler().name()
    }

    /// Returns the scheduler implementing this algorithm.
    pub fn scheduler(&self) -> Box<dyn CpuScheduler> {
        match *self {
            Algorithm::Fcfs => Box::new(Fcfs),
            Algorithm::Sjf => Box::new(Sjf),
            Algorithm::RoundRobin { quantum } => Box::new(RoundRobin::new(quantum)),
            Algorithm::Priority => Box::new(PriorityScheduler),
        }
    }
}

/// Input container for one simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Selected algorithm.
    pub algorithm: Algorithm,
    /// Processes to schedule, in submission order.
    pub processes: Vec<Process>,
}

/// Everything produced by one simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Algorithm that produced this report.
    pub algorithm: Algorithm,
    /// Timeline and per-process results.
    pub outcome: SchedulingOutcome,
    /// Aggregate metrics. `None` when there are no results.
    pub metrics: Option<SummaryMetrics>,
}

impl SimulationRequest {
    /// Creates an empty request for the given algorithm.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            processes: Vec::new(),
        }
    }

    /// Adds a process.
    pub fn with_process(mut self, process: Process) -> Self {
        self.processes.push(process);
        self
    }

    /// Replaces the process set.
    pub fn with_processes(mut self, processes: Vec<Process>) -> Self {
        self.processes = processes;
        self
    }

    /// Validates the input, runs the selected algorithm, and aggregates metrics.
    ///
    /// # Example
    /// ```
    /// use cpu_sched_sim::models::Process;
    /// use cpu_sched_sim::scheduler::{Algorithm, SimulationRequest};
    ///
    /// let report = SimulationRequest::new(Algorithm::Sjf)
    ///     .with_process(Process::new("P1", 0, 5))
    ///     .with_process(Process::new("P2", 1, 3))
    ///     .run()
    ///     .unwrap();
    /// assert_eq!(report.metrics.unwrap().total_processes, 2);
    /// ```
    pub fn run(&self) -> Result<SimulationReport, InvalidInputError> {
        let outcome = self.algorithm.scheduler().schedule(&self.processes)?;
        let metrics = SummaryMetrics::calculate(&outcome.results);
        Ok(SimulationReport {
            algorithm: self.algorithm,
            outcome,
            metrics,
        })
    }
}
