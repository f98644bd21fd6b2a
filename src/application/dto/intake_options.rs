//! Intake options DTO

use crate::application::notifications::DEFAULT_NOTIFICATION_TTL;
use crate::domain::services::catalog::MOCK_SECURITY_SCORE;
use crate::domain::services::{DEFAULT_STEP_DELAY, ScorePolicy};
use std::time::Duration;

/// Options for an intake controller
#[derive(Debug, Clone)]
pub struct IntakeOptions {
    /// Pause after each progress step
    pub step_delay: Duration,
    /// How long a notification stays visible
    pub notification_ttl: Duration,
    /// Thresholds for the score tier
    pub score_policy: ScorePolicy,
    /// Raw score fed to the policy
    pub score: u8,
    /// Capacity of the command queue
    pub command_capacity: usize,
}

impl Default for IntakeOptions {
    fn default() -> Self {
        Self {
            step_delay: DEFAULT_STEP_DELAY,
            notification_ttl: DEFAULT_NOTIFICATION_TTL,
            score_policy: ScorePolicy::default(),
            score: MOCK_SECURITY_SCORE,
            command_capacity: 32,
        }
    }
}

impl IntakeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pause after each progress step
    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    pub fn with_notification_ttl(mut self, ttl: Duration) -> Self {
        self.notification_ttl = ttl;
        self
    }

    pub fn with_score_policy(mut self, policy: ScorePolicy) -> Self {
        self.score_policy = policy;
        self
    }

    /// Overrides the raw security score
    pub fn with_score(mut self, score: u8) -> Self {
        self.score = score;
        self
    }

    /// Skips the progress pauses entirely
    pub fn instant(mut self) -> Self {
        self.step_delay = Duration::ZERO;
        self
    }
}
