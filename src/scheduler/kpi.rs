//! Summary metrics over a set of process results.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | mean(turnaround - burst) |
//! | Avg Turnaround | mean(finish - arrival) |
//! | Total Processes | number of results |
//!
//! Averages are rounded to two decimal places, exact halves to even
//! (0.125 -> 0.12, 0.375 -> 0.38).

use serde::{Deserialize, Serialize};

use crate::models::ProcessResult;

/// Aggregate performance indicators for one scheduling run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    /// Mean waiting time, rounded to 2 decimals.
    pub avg_waiting: f64,
    /// Mean turnaround time, rounded to 2 decimals.
    pub avg_turnaround: f64,
    /// Number of processes measured.
    pub total_processes: usize,
}

impl SummaryMetrics {
    /// Computes summary metrics from per-process results.
    ///
    /// Returns `None` for an empty result set: "no data" is not the
    /// same as an average of zero.
    pub fn calculate(results: &[ProcessResult]) -> Option<Self> {
        if results.is_empty() {
            return None;
        }

        let n = results.len() as f64;
        let total_waiting: i64 = results.iter().map(|r| r.waiting).sum();
        let total_turnaround: i64 = results.iter().map(|r| r.turnaround).sum();

        Some(Self {
            avg_waiting: round2(total_waiting as f64 / n),
            avg_turnaround: round2(total_turnaround as f64 / n),
            total_processes: results.len(),
        })
    }
}

/// Computes summary metrics; see [`SummaryMetrics::calculate`].
pub fn calculate_metrics(results: &[ProcessResult]) -> Option<SummaryMetrics> {
    SummaryMetrics::calculate(results)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
