//! Dispatching rules and rule engine for process selection.
//!
//! Non-preemptive algorithms pick the next process from the ready set by
//! evaluating a chain of dispatching rules. SJF is `Spt` then `Fifo`;
//! priority scheduling is `Priority` then `Fifo`.
//!
//! # Usage
//!
//! ```
//! use cpu_sched_sim::dispatching::{RuleEngine, SchedulingContext};
//! use cpu_sched_sim::dispatching::rules;
//! use cpu_sched_sim::models::Process;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Spt)
//!     .with_tie_breaker(rules::Fifo);
//!
//! let a = Process::new("A", 0, 8);
//! let b = Process::new("B", 1, 3);
//! let ready = vec![&a, &b];
//! let context = SchedulingContext::at_time(2);
//! assert_eq!(engine.select_best(&ready, &context), Some(1));
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod context;
mod engine;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::RuleEngine;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first). Scores are integral
/// because every input time unit is integral.
pub type RuleScore = i64;

/// A dispatching rule that evaluates process priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for processes that should be dispatched first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT", "FIFO").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a process given the current scheduling context.
    ///
    /// Returns a score where lower = higher priority.
    fn evaluate(&self, process: &Process, context: &SchedulingContext) -> RuleScore;
}
