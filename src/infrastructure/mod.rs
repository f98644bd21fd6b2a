//! Infrastructure layer
//!
//! Concrete implementations of the domain ports and the local file probe.

pub mod clock;
pub mod file_probe;
pub mod persistence;

pub use clock::{FixedClock, SystemClock};
pub use file_probe::{digest_file, inspect_file, probe_file, sha256_hex};
pub use persistence::LocalReportWriter;
