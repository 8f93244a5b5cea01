//! Lifecycle status predicates.
//!
//! Statuses form a loose progression (identified through closed) but no
//! transition legality is enforced here; authorization lives with the
//! caller. Every match below is exhaustive on purpose: adding a status
//! variant must force a decision in each predicate instead of silently
//! falling into a default arm.

use crate::core::{ResponseStrategy, RiskRecord, RiskStatus};

/// Treatment is considered complete once a risk reaches remediated,
/// monitoring, or closed. Treated risks no longer count toward mitigation
/// percentages or overdue follow-up.
pub fn is_treated(status: RiskStatus) -> bool {
    match status {
        RiskStatus::Remediated | RiskStatus::Monitoring | RiskStatus::Closed => true,
        RiskStatus::Draft
        | RiskStatus::Identified
        | RiskStatus::InAssessment
        | RiskStatus::PendingTreatment
        | RiskStatus::InProgress
        | RiskStatus::Pending
        | RiskStatus::Published
        | RiskStatus::Archived => false,
    }
}

/// `Closed` is the only terminal status; everything else, legacy values
/// included, counts as active.
pub fn is_active(risk: &RiskRecord) -> bool {
    match risk.status {
        RiskStatus::Closed => false,
        RiskStatus::Draft
        | RiskStatus::Identified
        | RiskStatus::InAssessment
        | RiskStatus::PendingTreatment
        | RiskStatus::InProgress
        | RiskStatus::Remediated
        | RiskStatus::Monitoring
        | RiskStatus::Pending
        | RiskStatus::Published
        | RiskStatus::Archived => true,
    }
}

pub fn is_mitigated(risk: &RiskRecord) -> bool {
    risk.risk_response_strategy == Some(ResponseStrategy::Mitigate) && is_treated(risk.status)
}

pub fn is_accepted(risk: &RiskRecord) -> bool {
    risk.risk_response_strategy == Some(ResponseStrategy::Accept) && is_treated(risk.status)
}

/// A risk is overdue while it carries a non-blank overdue marker and
/// treatment has not completed.
pub fn is_overdue(risk: &RiskRecord) -> bool {
    risk.has_overdue_marker() && !is_treated(risk.status)
}
