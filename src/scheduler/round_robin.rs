//! Round-Robin scheduling (preemptive, fixed quantum).
//!
//! # Algorithm
//!
//! 1. Admit every process with `arrival <= current_time` to the tail of a
//!    FIFO ready queue, in arrival-then-submission order.
//! 2. If the queue is empty, jump to the next arrival (or stop when every
//!    process has been admitted).
//! 3. Pop the head, run it for `min(quantum, remaining)`.
//! 4. Admit arrivals that happened during the slice, **then** re-queue the
//!    preempted process if it still has work left.
//!
//! Step 4's ordering means a process arriving exactly at a preemption
//! point is queued ahead of the preempted one.
//!
//! # Complexity
//! O(n log n + sum(ceil(burst / quantum))).

use std::collections::VecDeque;

use super::{log_completion, CpuScheduler};
use crate::models::{arrival_order, Process, ProcessResult, SchedulingOutcome, TimelineEntry};
use crate::validation::{self, InvalidInputError, ValidationOptions};

/// Round-Robin scheduler with a fixed time quantum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    /// Maximum CPU time per dispatch.
    pub quantum: i64,
}

impl RoundRobin {
    /// Creates a Round-Robin scheduler.
    pub fn new(quantum: i64) -> Self {
        Self { quantum }
    }
}

impl CpuScheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "Round Robin"
    }

    fn schedule(&self, processes: &[Process]) -> Result<SchedulingOutcome, InvalidInputError> {
        round_robin(processes, self.quantum)
    }
}

/// Per-process bookkeeping during a run.
#[derive(Debug, Clone, Copy)]
struct SliceState {
    remaining: i64,
    start: Option<i64>,
}

/// Admission cursor over the arrival-sorted process indices.
struct Admission {
    order: Vec<usize>,
    next: usize,
}

impl Admission {
    fn new(processes: &[Process]) -> Self {
        Self {
            order: arrival_order(processes),
            next: 0,
        }
    }

    /// Moves every process that has arrived by `t` into `queue`.
    fn admit(&mut self, processes: &[Process], t: i64, queue: &mut VecDeque<usize>) {
        while let Some(&i) = self.order.get(self.next) {
            if !processes[i].has_arrived(t) {
                break;
            }
            queue.push_back(i);
            self.next += 1;
        }
    }

    /// Arrival time of the next process not yet admitted.
    fn next_arrival(&self, processes: &[Process]) -> Option<i64> {
        self.order.get(self.next).map(|&i| processes[i].arrival)
    }
}

/// Schedules processes with Round-Robin time slicing.
///
/// Results are reported in arrival order.
///
/// # Example
/// ```
/// use cpu_sched_sim::models::Process;
/// use cpu_sched_sim::scheduler::round_robin;
///
/// let procs = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
/// let outcome = round_robin(&procs, 2).unwrap();
/// assert_eq!(outcome.timeline.slice_count("P1"), 3);
/// assert_eq!(outcome.result_for("P1").unwrap().waiting, 3);
/// ```
pub fn round_robin(processes: &[Process], quantum: i64) -> Result<SchedulingOutcome, InvalidInputError> {
    validation::check("Round Robin", processes, &ValidationOptions::round_robin(quantum))?;

    let mut state: Vec<SliceState> = processes
        .iter()
        .map(|p| SliceState {
            remaining: p.burst,
            start: None,
        })
        .collect();
    let mut completed: Vec<Option<ProcessResult>> = vec![None; processes.len()];
    let mut admission = Admission::new(processes);
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(processes.len());
    let mut outcome = SchedulingOutcome::default();
    let mut current_time = 0;

    loop {
        admission.admit(processes, current_time, &mut queue);

        let Some(i) = queue.pop_front() else {
            match admission.next_arrival(processes) {
                Some(next_arrival) => {
                    log::debug!("Round Robin: idle {current_time}..{next_arrival}");
                    current_time = next_arrival;
                    continue;
                }
                None => break,
            }
        };

        let p = &processes[i];
        let s = &mut state[i];
        let start = *s.start.get_or_insert(current_time);
        let slice = quantum.min(s.remaining);
        log::debug!(
            "Round Robin: t={current_time} dispatch {} for {slice} ({} left)",
            p.id,
            s.remaining - slice
        );

        outcome
            .timeline
            .push(TimelineEntry::new(&p.id, current_time, current_time + slice));
        current_time += slice;
        s.remaining -= slice;

        admission.admit(processes, current_time, &mut queue);

        if s.remaining > 0 {
            queue.push_back(i);
        } else {
            completed[i] = Some(ProcessResult::new(p, start, current_time));
        }
    }

    outcome.results = admission
        .order
        .iter()
        .filter_map(|&i| completed[i].take())
        .collect();
    debug_assert_eq!(outcome.results.len(), processes.len());

    log_completion("Round Robin", &outcome);
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn spans(outcome: &SchedulingOutcome) -> Vec<(&str, i64, i64)> {
        outcome
            .timeline
            .iter()
            .map(|e| (e.process.as_str(), e.start, e.finish))
            .collect()
    }

    #[test]
    fn test_rr_basic_scenario() {
        let procs = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
        let outcome = round_robin(&procs, 2).unwrap();

        assert_eq!(
            spans(&outcome),
            vec![("P1", 0, 2), ("P2", 2, 4), ("P1", 4, 6), ("P2", 6, 7), ("P1", 7, 8)]
        );
        let p1 = outcome.result_for("P1").unwrap();
        let p2 = outcome.result_for("P2").unwrap();
        assert_eq!((p1.start, p1.finish, p1.waiting), (0, 8, 3));
        assert_eq!((p2.start, p2.finish, p2.waiting), (2, 7, 3));
    }

    #[test]
    fn test_rr_arrival_at_preemption_queues_first() {
        // P2 arrives exactly when P1's first slice ends; it must run before P1 resumes.
        let procs = vec![
            Process::new("P1", 0, 4),
            Process::new("P3", 0, 2),
            Process::new("P2", 2, 2),
        ];
        let outcome = round_robin(&procs, 2).unwrap();
        // t=2: queue [P3], P2 admitted -> [P3, P2], then P1 -> [P3, P2, P1]
        assert_eq!(
            spans(&outcome),
            vec![("P1", 0, 2), ("P3", 2, 4), ("P2", 4, 6), ("P1", 6, 8)]
        );
    }

    #[test]
    fn test_rr_single_process_is_sliced() {
        let procs = vec![Process::new("P1", 0, 5)];
        let outcome = round_robin(&procs, 2).unwrap();
        assert_eq!(spans(&outcome), vec![("P1", 0, 2), ("P1", 2, 4), ("P1", 4, 5)]);
        assert_eq!(outcome.results[0].waiting, 0);
    }

    #[test]
    fn test_rr_idle_gap() {
        let procs = vec![Process::new("P1", 0, 1), Process::new("P2", 6, 3)];
        let outcome = round_robin(&procs, 4).unwrap();
        assert_eq!(spans(&outcome), vec![("P1", 0, 1), ("P2", 6, 9)]);
        assert_eq!(outcome.result_for("P2").unwrap().start, 6);
    }

    #[test]
    fn test_rr_large_quantum_matches_fcfs() {
        let procs = vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 8),
        ];
        let rr = round_robin(&procs, 100).unwrap();
        let fcfs = crate::scheduler::fcfs(&procs).unwrap();
        assert_eq!(rr, fcfs);
    }

    #[test]
    fn test_rr_results_in_arrival_order() {
        let procs = vec![Process::new("long", 0, 9), Process::new("short", 1, 1)];
        let outcome = round_robin(&procs, 3).unwrap();
        // "short" completes first, but results follow arrival order.
        assert_eq!(outcome.result_ids(), vec!["long", "short"]);
    }

    #[test]
    fn test_rr_slice_count() {
        let procs = vec![
            Process::new("A", 0, 7),
            Process::new("B", 0, 3),
            Process::new("C", 2, 6),
        ];
        let outcome = round_robin(&procs, 3).unwrap();
        assert_eq!(outcome.timeline.slice_count("A"), 3);
        assert_eq!(outcome.timeline.slice_count("B"), 1);
        assert_eq!(outcome.timeline.slice_count("C"), 2);
    }

    #[test]
    fn test_rr_rejects_bad_quantum() {
        let procs = vec![Process::new("P1", 0, 5)];
        let err = round_robin(&procs, 0).unwrap_err();
        assert!(err.has_kind(ValidationErrorKind::InvalidQuantum));
        assert!(RoundRobin::new(-1).schedule(&procs).is_err());
    }
}
