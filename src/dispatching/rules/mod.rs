//! Built-in dispatching rules.
//!
//! # Categories
//!
//! - **Arrival-based**: FIFO
//! - **Time-based**: SPT
//! - **Priority**: PRIORITY
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::Process;

/// First In First Out.
///
/// Prioritizes processes by arrival time.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.arrival
    }
}

/// Shortest Processing Time.
///
/// Prioritizes processes with the smallest burst. Non-preemptive SJF
/// minimizes average waiting time among the processes available at
/// each decision point.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.burst
    }
}

/// Static priority rule.
///
/// Lower `priority` values run first. Processes without a priority
/// sort after every prioritized process.
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl DispatchingRule for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.priority.map(i64::from).unwrap_or(RuleScore::MAX)
    }
}
