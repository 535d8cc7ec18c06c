//! Non-preemptive rule-driven scheduling (SJF, Priority).
//!
//! # Algorithm
//!
//! 1. Keep the unscheduled processes in arrival-then-submission order.
//! 2. At each decision point the ready set is every pending process with
//!    `arrival <= current_time` (a prefix of the pending list).
//! 3. If the ready set is empty, jump the clock to the earliest pending
//!    arrival and re-evaluate.
//! 4. Otherwise pick the best ready process with the rule engine and run
//!    it to completion. A later, better arrival never interrupts it.
//!
//! Full ties fall back to the pending-list order, so equal candidates
//! are served by earliest arrival, then submission order.
//!
//! # Complexity
//! O(n^2) rule evaluations for n processes.

use super::{log_completion, CpuScheduler};
use crate::dispatching::{rules, RuleEngine, SchedulingContext};
use crate::models::{arrival_order, Process, ProcessResult, SchedulingOutcome, TimelineEntry};
use crate::validation::{self, InvalidInputError, ValidationOptions};

/// Shortest-Job-First scheduler (non-preemptive).
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl CpuScheduler for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn schedule(&self, processes: &[Process]) -> Result<SchedulingOutcome, InvalidInputError> {
        sjf(processes)
    }
}

/// Priority scheduler (non-preemptive, lower value = higher priority).
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityScheduler;

impl CpuScheduler for PriorityScheduler {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn schedule(&self, processes: &[Process]) -> Result<SchedulingOutcome, InvalidInputError> {
        priority_scheduling(processes)
    }
}

/// Shortest-Job-First: among ready processes, run the smallest burst.
///
/// Equal bursts go to the earliest arrival, then to submission order.
pub fn sjf(processes: &[Process]) -> Result<SchedulingOutcome, InvalidInputError> {
    validation::check("SJF", processes, &ValidationOptions::default())?;

    let engine = RuleEngine::new()
        .with_rule(rules::Spt)
        .with_tie_breaker(rules::Fifo);
    Ok(dispatch("SJF", processes, &engine))
}

/// Priority scheduling: among ready processes, run the lowest priority value.
///
/// Equal priorities go to the earliest arrival, then to submission order.
/// Every process must carry a priority.
///
/// # Example
/// ```
/// use cpu_sched_sim::models::Process;
/// use cpu_sched_sim::scheduler::priority_scheduling;
///
/// let procs = vec![
///     Process::new("P1", 0, 5).with_priority(2),
///     Process::new("P2", 0, 3).with_priority(1),
/// ];
/// let outcome = priority_scheduling(&procs).unwrap();
/// assert_eq!(outcome.timeline.entries()[0].process, "P2");
/// ```
pub fn priority_scheduling(processes: &[Process]) -> Result<SchedulingOutcome, InvalidInputError> {
    validation::check("Priority", processes, &ValidationOptions::priority())?;

    let engine = RuleEngine::new()
        .with_rule(rules::Priority)
        .with_tie_breaker(rules::Fifo);
    Ok(dispatch("Priority", processes, &engine))
}

/// Runs the non-preemptive dispatch loop with the given selection rules.
///
/// Input must already be validated.
pub(crate) fn dispatch(name: &str, processes: &[Process], engine: &RuleEngine) -> SchedulingOutcome {
    let mut pending: Vec<&Process> = arrival_order(processes)
        .into_iter()
        .map(|i| &processes[i])
        .collect();
    let mut outcome = SchedulingOutcome::default();
    let mut current_time = 0;
    log::debug!("{name}: selection rules {:?}", engine.rule_names());

    while !pending.is_empty() {
        let ready = pending.partition_point(|p| p.has_arrived(current_time));
        let context = SchedulingContext::at_time(current_time);

        let Some(best) = engine.select_best(&pending[..ready], &context) else {
            let next_arrival = pending[0].arrival;
            log::debug!("{name}: idle {current_time}..{next_arrival}");
            current_time = next_arrival;
            continue;
        };

        let p = pending.remove(best);
        let start = current_time;
        let finish = start + p.burst;
        log::debug!(
            "{name}: t={start} dispatch {} (waited {}, {} ready)",
            p.id,
            context.waited_since(p.arrival),
            ready
        );

        outcome.timeline.push(TimelineEntry::new(&p.id, start, finish));
        outcome.results.push(ProcessResult::new(p, start, finish));
        current_time = finish;
    }

    log_completion(name, &outcome);
    outcome
}
