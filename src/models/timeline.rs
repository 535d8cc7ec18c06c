//! Execution timeline (Gantt chart) model.
//!
//! A timeline is the ordered list of contiguous execution spans produced
//! by a scheduling run. Under non-preemptive algorithms each process owns
//! exactly one span; under Round-Robin a process may own several.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

/// One contiguous execution span `[start, finish)` of a process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Process ID running during this span.
    pub process: String,
    /// Span start (inclusive).
    pub start: i64,
    /// Span end (exclusive). Always greater than `start`.
    pub finish: i64,
}

/// A period during which the CPU had nothing to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdlePeriod {
    /// Idle start (inclusive).
    pub start: i64,
    /// Idle end (exclusive).
    pub finish: i64,
}

/// Ordered execution spans, non-decreasing by `start`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl TimelineEntry {
    /// Creates a new span.
    pub fn new(process: impl Into<String>, start: i64, finish: i64) -> Self {
        Self {
            process: process.into(),
            start,
            finish,
        }
    }

    /// Span length.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.finish - self.start
    }
}

impl IdlePeriod {
    /// Idle length.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.finish - self.start
    }
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a span. Spans must be pushed in execution order.
    pub(crate) fn push(&mut self, entry: TimelineEntry) {
        debug_assert!(entry.finish > entry.start);
        debug_assert!(self
            .entries
            .last()
            .map_or(true, |last| last.finish <= entry.start));
        self.entries.push(entry);
    }

    /// All spans in execution order.
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// Number of spans.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the timeline has no spans.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over spans in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, TimelineEntry> {
        self.entries.iter()
    }

    /// Latest finish time, or 0 for an empty timeline.
    pub fn makespan(&self) -> i64 {
        self.entries.last().map(|e| e.finish).unwrap_or(0)
    }

    /// Total time the CPU was executing something.
    pub fn busy_time(&self) -> i64 {
        self.entries.iter().map(TimelineEntry::duration).sum()
    }

    /// Fraction of `[0, makespan)` spent executing (0.0..=1.0).
    ///
    /// Returns `None` for an empty timeline.
    pub fn cpu_utilization(&self) -> Option<f64> {
        let horizon = self.makespan();
        if horizon <= 0 {
            return None;
        }
        Some(self.busy_time() as f64 / horizon as f64)
    }

    /// Gaps where the CPU idled waiting for the next arrival,
    /// including a leading gap before the first span.
    pub fn idle_periods(&self) -> Vec<IdlePeriod> {
        let mut gaps = Vec::new();
        let mut cursor = 0;
        for e in &self.entries {
            if e.start > cursor {
                gaps.push(IdlePeriod {
                    start: cursor,
                    finish: e.start,
                });
            }
            cursor = e.finish;
        }
        gaps
    }

    /// Spans belonging to one process, in execution order.
    pub fn entries_for<'a>(&'a self, process_id: &'a str) -> impl Iterator<Item = &'a TimelineEntry> + 'a {
        self.entries.iter().filter(move |e| e.process == process_id)
    }

    /// Number of dispatches a process received.
    pub fn slice_count(&self, process_id: &str) -> usize {
        self.entries_for(process_id).count()
    }

    /// Total CPU time granted to a process.
    pub fn cpu_time_for(&self, process_id: &str) -> i64 {
        self.entries_for(process_id).map(TimelineEntry::duration).sum()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimelineEntry;
    type IntoIter = std::slice::Iter<'a, TimelineEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.push(TimelineEntry::new("P1", 2, 4));
        t.push(TimelineEntry::new("P2", 4, 7));
        t.push(TimelineEntry::new("P1", 10, 12));
        t
    }

    #[test]
    fn test_timeline_makespan_and_busy() {
        let t = sample_timeline();
        assert_eq!(t.makespan(), 12);
        assert_eq!(t.busy_time(), 7);
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_cpu_utilization() {
        let t = sample_timeline();
        let util = t.cpu_utilization().unwrap();
        assert!((util - 7.0 / 12.0).abs() < 1e-10);
        assert!(Timeline::new().cpu_utilization().is_none());
    }

    #[test]
    fn test_idle_periods() {
        let t = sample_timeline();
        assert_eq!(
            t.idle_periods(),
            vec![
                IdlePeriod { start: 0, finish: 2 },
                IdlePeriod { start: 7, finish: 10 },
            ]
        );
        assert_eq!(t.idle_periods()[1].duration(), 3);
    }

    #[test]
    fn test_entries_for_process() {
        let t = sample_timeline();
        assert_eq!(t.slice_count("P1"), 2);
        assert_eq!(t.cpu_time_for("P1"), 4);
        assert_eq!(t.slice_count("P9"), 0);
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert!(t.is_empty());
        assert_eq!(t.makespan(), 0);
        assert!(t.idle_periods().is_empty());
    }

    #[test]
    fn test_timeline_serializes_as_list() {
        let json = serde_json::to_value(sample_timeline()).unwrap();
        assert_eq!(json[0]["process"], "P1");
        assert_eq!(json[2]["finish"], 12);
    }
}
