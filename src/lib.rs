//! Deterministic CPU scheduling simulator.
//!
//! Simulates classic single-CPU scheduling algorithms over a set of
//! process descriptors and reports an execution timeline plus
//! per-process waiting and turnaround times.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Timeline`, `TimelineEntry`,
//!   `ProcessResult`, `SchedulingOutcome`
//! - **`validation`**: Input integrity checks (empty sets, duplicate IDs,
//!   burst/quantum/priority bounds)
//! - **`dispatching`**: Selection rules (FIFO, SPT, PRIORITY) and a
//!   sequential rule engine
//! - **`scheduler`**: FCFS, SJF, Round-Robin and Priority scheduling,
//!   summary metrics, and the `SimulationRequest` entry point
//! - **`workload`**: Seeded random workload generation
//!
//! # Example
//!
//! ```
//! use cpu_sched_sim::models::Process;
//! use cpu_sched_sim::scheduler::{Algorithm, SimulationRequest};
//!
//! let report = SimulationRequest::new(Algorithm::RoundRobin { quantum: 2 })
//!     .with_process(Process::new("P1", 0, 5))
//!     .with_process(Process::new("P2", 1, 3))
//!     .run()
//!     .unwrap();
//!
//! let spans: Vec<_> = report
//!     .outcome
//!     .timeline
//!     .iter()
//!     .map(|e| (e.process.as_str(), e.start, e.finish))
//!     .collect();
//! assert_eq!(spans, vec![("P1", 0, 2), ("P2", 2, 4), ("P1", 4, 6), ("P2", 6, 7), ("P1", 7, 8)]);
//! ```
//!
//! # Logging
//!
//! Uses the `log` facade: `debug` per dispatch, `info` per completed run,
//! `warn` on rejected input. No logger is installed by this crate.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod dispatching;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;
