//! Score tiers — maps a percentage score to a coarse High / Moderate / Low band.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    High,
    Moderate,
    Low,
}

impl Tier {
    /// User-facing message shown next to the score.
    pub fn message(&self) -> &'static str {
        match self {
            Tier::High => {
                "Excellent match. Your resume is well aligned with this job description."
            }
            Tier::Moderate => {
                "Good match, but there is room for improvement. Add more of the job's keywords."
            }
            Tier::Low => "Low match. Tailor your resume to the job description before applying.",
        }
    }
}

/// Tier boundaries in percent. `score > high` is High, `score > moderate` is
/// Moderate, anything else Low.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierThresholds {
    pub high: f64,
    pub moderate: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            high: 70.0,
            moderate: 40.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Invalid tier thresholds: require 0 <= moderate ({moderate}) < high ({high}) <= 100")]
pub struct InvalidThresholds {
    pub high: f64,
    pub moderate: f64,
}

impl TierThresholds {
    pub fn new(high: f64, moderate: f64) -> Result<Self, InvalidThresholds> {
        let valid = high.is_finite()
            && moderate.is_finite()
            && (0.0..=100.0).contains(&moderate)
            && (0.0..=100.0).contains(&high)
            && moderate < high;
        if !valid {
            return Err(InvalidThresholds { high, moderate });
        }
        Ok(Self { high, moderate })
    }
}

/// Classifies a percentage score. Pure; no side effects.
pub fn classify(score_percent: f64, thresholds: &TierThresholds) -> Tier {
    if score_percent > thresholds.high {
        Tier::High
    } else if score_percent > thresholds.moderate {
        Tier::Moderate
    } else {
        Tier::Low
    }
}
