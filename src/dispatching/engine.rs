//! Rule engine for multi-criteria dispatching.
//!
//! Composes dispatching rules in sequence: the next rule is consulted
//! only when every earlier rule ties. A full tie keeps the candidates'
//! given order, which callers supply as arrival-then-submission order.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchingRule, SchedulingContext};
use crate::models::Process;

/// A composable rule engine for process selection.
///
/// # Example
/// ```
/// use cpu_sched_sim::dispatching::RuleEngine;
/// use cpu_sched_sim::dispatching::rules;
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::Priority)
///     .with_tie_breaker(rules::Fifo);
/// assert_eq!(engine.rule_names(), vec!["PRIORITY", "FIFO"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted only when earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns the index of the highest-priority candidate.
    ///
    /// On a full tie the earliest candidate in `candidates` wins.
    pub fn select_best(&self, candidates: &[&Process], context: &SchedulingContext) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, &p) in candidates.iter().enumerate() {
            match best {
                Some(b) if self.compare(p, candidates[b], context) != Ordering::Less => {}
                _ => best = Some(i),
            }
        }
        best
    }

    fn compare(&self, a: &Process, b: &Process, context: &SchedulingContext) -> Ordering {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(a, context).cmp(&rule.evaluate(b, context)))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;

    fn refs(procs: &[Process]) -> Vec<&Process> {
        procs.iter().collect()
    }

    #[test]
    fn test_spt_selection() {
        let procs = vec![
            Process::new("long", 0, 8),
            Process::new("short", 0, 2),
            Process::new("medium", 0, 5),
        ];
        let ready = refs(&procs);
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::Spt);

        assert_eq!(engine.select_best(&ready, &ctx), Some(1));
    }

    #[test]
    fn test_sequential_with_tie_breaker() {
        let procs = vec![
            Process::new("late", 3, 4).with_priority(1),
            Process::new("early", 1, 4).with_priority(1),
        ];
        let ready = refs(&procs);
        let ctx = SchedulingContext::at_time(5);
        let engine = RuleEngine::new()
            .with_rule(rules::Priority)
            .with_tie_breaker(rules::Fifo);

        // Priority ties → FIFO breaks it → earlier arrival first
        assert_eq!(engine.select_best(&ready, &ctx), Some(1));
    }

    #[test]
    fn test_full_tie_keeps_first_candidate() {
        let procs = vec![
            Process::new("B", 0, 3),
            Process::new("A", 0, 3),
            Process::new("C", 0, 3),
        ];
        let ready = refs(&procs);
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new()
            .with_rule(rules::Spt)
            .with_tie_breaker(rules::Fifo);

        assert_eq!(engine.select_best(&ready, &ctx), Some(0));
        assert_eq!(engine.select_best(&ready[1..], &ctx), Some(0));
    }

    #[test]
    fn test_empty_candidates() {
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::Spt);
        assert!(engine.select_best(&[], &ctx).is_none());
    }

    #[test]
    fn test_debug_lists_rules() {
        let engine = RuleEngine::new()
            .with_rule(rules::Spt)
            .with_tie_breaker(rules::Fifo);
        assert_eq!(engine.rule_names(), vec!["SPT", "FIFO"]);
        let dbg = format!("{engine:?}");
        assert!(dbg.contains("SPT"));
    }
}
