//! Scheduling domain models.
//!
//! Core data types for a single-CPU scheduling run: the input process
//! descriptors and the produced timeline and per-process results.
//!
//! # Domain Mappings
//!
//! | cpu-sched-sim | Textbook term | Job-shop term |
//! |---------------|---------------|---------------|
//! | Process | PCB / job | Task |
//! | TimelineEntry | Gantt bar | Assignment |
//! | ProcessResult | Process statistics | Completion record |

mod outcome;
mod process;
mod timeline;

pub use outcome::{ProcessResult, SchedulingOutcome};
pub(crate) use process::arrival_order;
pub use process::Process;
pub use timeline::{IdlePeriod, Timeline, TimelineEntry};
