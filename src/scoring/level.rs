//! Risk level classification: fixed severity bands over the numeric score.

use serde::{Deserialize, Serialize};

/// Band cuts, inclusive on the lower bound, applied in descending order.
pub const CRITICAL_THRESHOLD: f64 = 20.0;
pub const HIGH_THRESHOLD: f64 = 15.0;
pub const MEDIUM_THRESHOLD: f64 = 10.0;
pub const LOW_THRESHOLD: f64 = 5.0;

/// Risk appetite cut for the "above tolerance" headline metric.
/// Strictly greater-than, and deliberately a separate constant from the
/// level bands: it is not the Medium/High boundary and must not be unified
/// with one.
pub const ABOVE_TOLERANCE_THRESHOLD: f64 = 8.0;

/// Discrete severity tier derived from the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Critical,
    High,
    Medium,
    Low,
    #[serde(rename = "Very Low")]
    VeryLow,
}

impl RiskLevel {
    /// All levels, most severe first. Distribution output follows this
    /// order so repeated runs are byte-for-byte identical.
    pub const ALL_DESCENDING: [RiskLevel; 5] = [
        RiskLevel::Critical,
        RiskLevel::High,
        RiskLevel::Medium,
        RiskLevel::Low,
        RiskLevel::VeryLow,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            RiskLevel::Critical => "Critical",
            RiskLevel::High => "High",
            RiskLevel::Medium => "Medium",
            RiskLevel::Low => "Low",
            RiskLevel::VeryLow => "Very Low",
        }
    }
}

/// Map a risk score to its severity tier. Band lower bounds are inclusive:
/// a score of exactly 20 is Critical, not High.
pub fn classify_risk_level(score: f64) -> RiskLevel {
    if score >= CRITICAL_THRESHOLD {
        RiskLevel::Critical
    } else if score >= HIGH_THRESHOLD {
        RiskLevel::High
    } else if score >= MEDIUM_THRESHOLD {
        RiskLevel::Medium
    } else if score >= LOW_THRESHOLD {
        RiskLevel::Low
    } else {
        RiskLevel::VeryLow
    }
}

/// Whether a score sits above the organization's risk tolerance.
pub fn is_above_tolerance(score: f64) -> bool {
    score > ABOVE_TOLERANCE_THRESHOLD
}
