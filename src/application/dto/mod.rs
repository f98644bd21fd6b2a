//! Data Transfer Objects

mod intake_event;
mod intake_options;

pub use intake_event::{IntakeEvent, IntakePhase, IntakeSnapshot};
pub use intake_options::IntakeOptions;
