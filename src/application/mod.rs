//! Application layer
//!
//! The intake controller and the DTOs it exchanges with hosts.

pub mod dto;
mod intake;
pub mod notifications;

pub use intake::{IntakeController, IntakeEvents, IntakeHandle};
pub use notifications::{Notification, NotificationCenter, NotificationKind};
