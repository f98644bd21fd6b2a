//! Report persistence

mod local_report_writer;

pub use local_report_writer::LocalReportWriter;
