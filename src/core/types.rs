//! Entity definitions for the risk register and gap-assessment checklists.
//!
//! These are the wire shapes shared with the upstream store and the
//! dashboard API, hence the camelCase serde renames on the structs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of register entry. Historical records may omit the field entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskType {
    #[default]
    Asset,
    Scenario,
}

/// Risk lifecycle status.
///
/// `Pending`, `Published` and `Archived` are legacy values still present in
/// historical registers. They are accepted on read and treated as
/// non-terminal by every lifecycle predicate; `Closed` is the only terminal
/// status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskStatus {
    Draft,
    Identified,
    InAssessment,
    PendingTreatment,
    InProgress,
    Remediated,
    Monitoring,
    Closed,
    Pending,
    Published,
    Archived,
}

/// How the organization chose to respond to a risk.
///
/// The register field is historically free-form; anything outside the known
/// strategies deserializes to `Other` and counts as neither mitigated nor
/// accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResponseStrategy {
    Mitigate,
    Accept,
    Transfer,
    Avoid,
    Other,
}

impl From<String> for ResponseStrategy {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Mitigate" => ResponseStrategy::Mitigate,
            "Accept" => ResponseStrategy::Accept,
            "Transfer" => ResponseStrategy::Transfer,
            "Avoid" => ResponseStrategy::Avoid,
            _ => ResponseStrategy::Other,
        }
    }
}

impl From<ResponseStrategy> for String {
    fn from(strategy: ResponseStrategy) -> Self {
        match strategy {
            ResponseStrategy::Mitigate => "Mitigate",
            ResponseStrategy::Accept => "Accept",
            ResponseStrategy::Transfer => "Transfer",
            ResponseStrategy::Avoid => "Avoid",
            ResponseStrategy::Other => "Other",
        }
        .to_string()
    }
}

/// A single risk register entry as persisted upstream.
///
/// Invariants maintained by the scoring helpers:
/// `impact == round(mean(C, I, A))` whenever the CIA sub-scores are the
/// authoritative input, and `risk_score == impact * likelihood` after every
/// create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskRecord {
    pub id: String,
    #[serde(default)]
    pub risk_type: RiskType,
    pub confidentiality_impact: u8,
    pub integrity_impact: u8,
    pub availability_impact: u8,
    pub impact: u8,
    pub likelihood: u8,
    pub risk_score: f64,
    pub status: RiskStatus,
    #[serde(default)]
    pub risk_response_strategy: Option<ResponseStrategy>,
    /// Free-text overdue marker; non-empty after trimming means the risk
    /// carries overdue information.
    #[serde(default)]
    pub overdue: Option<String>,
    #[serde(default)]
    pub asset_category: Option<String>,
    /// Meaningful for `RiskType::Asset` entries only.
    #[serde(default)]
    pub asset_description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RiskRecord {
    /// A freshly identified risk with mid-scale ratings; callers adjust
    /// fields and rescore as needed.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            risk_type: RiskType::Asset,
            confidentiality_impact: 3,
            integrity_impact: 3,
            availability_impact: 3,
            impact: 3,
            likelihood: 3,
            risk_score: 9.0,
            status: RiskStatus::Identified,
            risk_response_strategy: None,
            overdue: None,
            asset_category: None,
            asset_description: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn has_overdue_marker(&self) -> bool {
        self.overdue
            .as_deref()
            .is_some_and(|marker| !marker.trim().is_empty())
    }
}

/// Field-level patch applied to a risk on update.
///
/// `None` means "leave the stored value alone". Setting `overdue` to an
/// empty string clears the overdue marker, since only non-blank markers are
/// truthy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskUpdate {
    #[serde(default)]
    pub confidentiality_impact: Option<u8>,
    #[serde(default)]
    pub integrity_impact: Option<u8>,
    #[serde(default)]
    pub availability_impact: Option<u8>,
    #[serde(default)]
    pub impact: Option<u8>,
    #[serde(default)]
    pub likelihood: Option<u8>,
    #[serde(default)]
    pub status: Option<RiskStatus>,
    #[serde(default)]
    pub risk_response_strategy: Option<ResponseStrategy>,
    #[serde(default)]
    pub overdue: Option<String>,
    #[serde(default)]
    pub asset_category: Option<String>,
    #[serde(default)]
    pub asset_description: Option<String>,
}

impl RiskUpdate {
    /// True when the patch touches any CIA sub-score. CIA-derived impact
    /// takes precedence over an explicitly supplied `impact` in that case.
    pub fn touches_cia(&self) -> bool {
        self.confidentiality_impact.is_some()
            || self.integrity_impact.is_some()
            || self.availability_impact.is_some()
    }
}

/// Completion status of one checklist requirement. Header rows carry no
/// meaningful status, so absence defaults to `NotApplied`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssessmentStatus {
    Completed,
    InProgress,
    #[default]
    NotApplied,
}

/// Maturity ladder for maturity-style gap assessments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MaturityLevel {
    Initial,
    Developing,
    Defined,
    Managed,
    Optimizing,
}

/// One row of a framework gap-assessment checklist.
///
/// Section headers carry no status of their own and are excluded from all
/// statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentItem {
    pub id: String,
    /// Requirement code within the framework, e.g. "A.5.1".
    pub standard_ref: String,
    pub description: String,
    #[serde(default)]
    pub is_header: bool,
    #[serde(default)]
    pub status: AssessmentStatus,
    #[serde(default)]
    pub maturity_current: Option<MaturityLevel>,
    #[serde(default)]
    pub maturity_target: Option<MaturityLevel>,
}
