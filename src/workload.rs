//! Random workload generation.
//!
//! Produces process sets for simulations and randomized testing. With a
//! seeded RNG the same generator yields the same workload every time.

use rand::Rng;

use crate::models::Process;

/// Generator for random process sets.
///
/// Processes are named `P1..Pn` in submission order.
///
/// # Example
/// ```
/// use cpu_sched_sim::workload::WorkloadGenerator;
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let procs = WorkloadGenerator::new().with_max_burst(4).generate(5, &mut rng);
/// assert_eq!(procs.len(), 5);
/// assert!(procs.iter().all(|p| (1..=4).contains(&p.burst)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadGenerator {
    max_arrival: i64,
    max_burst: i64,
    max_priority: i32,
}

impl WorkloadGenerator {
    /// Creates a generator with arrivals in `0..=10`, bursts in `1..=10`
    /// and priorities in `1..=5`.
    pub fn new() -> Self {
        Self {
            max_arrival: 10,
            max_burst: 10,
            max_priority: 5,
        }
    }

    /// Sets the latest possible arrival (clamped to >= 0).
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the longest possible burst (clamped to >= 1).
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst.max(1);
        self
    }

    /// Sets the largest priority value (clamped to >= 1).
    pub fn with_max_priority(mut self, max_priority: i32) -> Self {
        self.max_priority = max_priority.max(1);
        self
    }

    /// Generates `count` valid processes, each carrying a priority.
    pub fn generate<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<Process> {
        (1..=count)
            .map(|i| {
                Process::new(
                    format!("P{i}"),
                    rng.random_range(0..=self.max_arrival),
                    rng.random_range(1..=self.max_burst),
                )
                .with_priority(rng.random_range(1..=self.max_priority))
            })
            .collect()
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new()
    }
}
