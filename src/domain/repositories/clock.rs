//! Clock trait
//!
//! Source of "now" for receipt and report timestamps, so tests can freeze time.

use chrono::{DateTime, Local};

/// Wall-clock source
pub trait Clock: Send + Sync {
    /// Returns the current local time
    fn now(&self) -> DateTime<Local>;
}
