//! Intake events and snapshots
//!
//! What the controller tells its host. Every event is serializable so a
//! web shell can paint it as-is.

use crate::application::notifications::{Notification, NotificationKind};
use crate::domain::entities::{ProgressStep, UploadedFile};
use crate::presentation::report::{DetailItem, ScreenReport};
use serde::Serialize;
use std::fmt;

/// Visible stage of the intake flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IntakePhase {
    Idle,
    Validating,
    Analyzing,
    Presenting,
}

impl fmt::Display for IntakePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IntakePhase::Idle => "idle",
            IntakePhase::Validating => "validating",
            IntakePhase::Analyzing => "analyzing",
            IntakePhase::Presenting => "presenting",
        };
        f.write_str(name)
    }
}

/// Updates emitted by the intake controller
///
/// Session-scoped events carry the id of the session they belong to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IntakeEvent {
    PhaseChanged { phase: IntakePhase },
    FileAccepted { session: u64, info: Vec<DetailItem> },
    Progress { session: u64, step: ProgressStep },
    Results { session: u64, screen: ScreenReport },
    Notified { notification: Notification },
    NotificationCleared { kind: NotificationKind },
    Reset,
}

/// Point-in-time view of the controller
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntakeSnapshot {
    pub phase: IntakePhase,
    /// Id of the active session, if one exists
    pub session: Option<u64>,
    pub file: Option<UploadedFile>,
    pub progress: Option<ProgressStep>,
    pub screen: Option<ScreenReport>,
    pub notifications: Vec<Notification>,
}
