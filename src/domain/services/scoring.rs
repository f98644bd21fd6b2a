//! Security score tiering

use crate::domain::entities::{SecurityScore, SecurityTier};
use serde::{Deserialize, Serialize};

/// Thresholds that bucket a numeric score into a tier
///
/// A score at or above `high_threshold` is high, one below `low_threshold`
/// is low, anything between is medium. The catalog score (75) always lands
/// in medium with the default thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorePolicy {
    pub high_threshold: u8,
    pub low_threshold: u8,
}

impl Default for ScorePolicy {
    fn default() -> Self {
        Self {
            high_threshold: 80,
            low_threshold: 60,
        }
    }
}

impl ScorePolicy {
    pub fn tier(&self, score: u8) -> SecurityTier {
        if score >= self.high_threshold {
            SecurityTier::High
        } else if score < self.low_threshold {
            SecurityTier::Low
        } else {
            SecurityTier::Medium
        }
    }

    /// Builds a score, clamping values above 100
    pub fn assess(&self, score: u8) -> SecurityScore {
        let value = score.min(100);
        SecurityScore {
            value,
            tier: self.tier(value),
        }
    }
}
