//! First-Come-First-Served scheduling.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival (equal arrivals keep submission order).
//! 2. Walk the sorted list with a single clock; jump the clock forward
//!    when the CPU would otherwise idle before the next arrival.
//! 3. Run each process to completion.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the walk.

use super::{log_completion, CpuScheduler};
use crate::models::{arrival_order, Process, ProcessResult, SchedulingOutcome, TimelineEntry};
use crate::validation::{self, InvalidInputError, ValidationOptions};

/// First-Come-First-Served scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl CpuScheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, processes: &[Process]) -> Result<SchedulingOutcome, InvalidInputError> {
        fcfs(processes)
    }
}

/// Schedules processes in arrival order without preemption.
///
/// # Example
/// ```
/// use cpu_sched_sim::models::Process;
/// use cpu_sched_sim::scheduler::fcfs;
///
/// let procs = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
/// let outcome = fcfs(&procs).unwrap();
/// assert_eq!(outcome.timeline.makespan(), 8);
/// assert_eq!(outcome.result_for("P2").unwrap().waiting, 4);
/// ```
pub fn fcfs(processes: &[Process]) -> Result<SchedulingOutcome, InvalidInputError> {
    validation::check("FCFS", processes, &ValidationOptions::default())?;

    let mut outcome = SchedulingOutcome::default();
    let mut current_time = 0;

    for i in arrival_order(processes) {
        let p = &processes[i];
        if current_time < p.arrival {
            log::debug!("FCFS: idle {current_time}..{}", p.arrival);
            current_time = p.arrival;
        }

        let start = current_time;
        let finish = start + p.burst;
        log::debug!("FCFS: t={start} dispatch {}", p.id);

        outcome.timeline.push(TimelineEntry::new(&p.id, start, finish));
        outcome.results.push(ProcessResult::new(p, start, finish));
        current_time = finish;
    }

    log_completion("FCFS", &outcome);
    Ok(outcome)
}
