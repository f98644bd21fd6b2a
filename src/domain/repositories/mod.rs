//! Repository traits (interfaces)
//!
//! Contracts for the collaborators the domain depends on: a clock and a
//! sink for exported reports.

mod clock;
mod report_writer;

pub use clock::Clock;
pub use report_writer::{ReportWriter, ReportWriterError, WriteOptions, WriteResult};
