//! Risk scoring: CIA impact aggregation, score computation, and the
//! create/update helpers that keep stored `impact` and `risk_score`
//! consistent with their inputs.

pub mod level;

use crate::core::{Error, Result, RiskRecord, RiskUpdate};
use crate::metrics::rounding::round_half_up;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Valid rating domain for CIA sub-scores, impact, and likelihood.
pub const RATING_MIN: u8 = 1;
pub const RATING_MAX: u8 = 5;

/// The three CIA sub-impact ratings supplied on risk creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CiaRatings {
    pub confidentiality: u8,
    pub integrity: u8,
    pub availability: u8,
}

/// Derived fields written back to storage by the caller after scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredFields {
    pub impact: u8,
    pub risk_score: f64,
}

fn validate_rating(field: &str, value: u8) -> Result<()> {
    if !(RATING_MIN..=RATING_MAX).contains(&value) {
        return Err(Error::validation(format!(
            "{field} must be between {RATING_MIN} and {RATING_MAX}, got {value}"
        )));
    }
    Ok(())
}

/// Combine the three CIA sub-impact ratings into the overall impact rating.
///
/// Rounded arithmetic mean, half-up. Out-of-range inputs are rejected
/// rather than clamped so a bad rating can never corrupt downstream
/// scores.
pub fn aggregate_impact(confidentiality: u8, integrity: u8, availability: u8) -> Result<u8> {
    validate_rating("confidentialityImpact", confidentiality)?;
    validate_rating("integrityImpact", integrity)?;
    validate_rating("availabilityImpact", availability)?;

    let sum = u32::from(confidentiality) + u32::from(integrity) + u32::from(availability);
    let impact = round_half_up(f64::from(sum) / 3.0) as u8;
    debug_assert!((RATING_MIN..=RATING_MAX).contains(&impact));
    Ok(impact)
}

/// Risk score: impact times likelihood, always in [1, 25].
pub fn compute_risk_score(impact: u8, likelihood: u8) -> Result<f64> {
    validate_rating("impact", impact)?;
    validate_rating("likelihood", likelihood)?;
    Ok(f64::from(impact) * f64::from(likelihood))
}

/// Score a freshly created risk from its CIA ratings and likelihood.
pub fn score_new_risk(cia: CiaRatings, likelihood: u8) -> Result<ScoredFields> {
    let impact = aggregate_impact(cia.confidentiality, cia.integrity, cia.availability)?;
    let risk_score = compute_risk_score(impact, likelihood)?;
    Ok(ScoredFields { impact, risk_score })
}

/// Apply an update patch to a risk and recompute its derived fields.
///
/// Effective impact is resolved in three mutually exclusive branches:
/// 1. the patch touches any CIA sub-score: impact is recomputed from the
///    merged CIA triple, and any explicit `impact` in the patch is ignored;
/// 2. the patch carries an explicit `impact`: it is honored verbatim;
/// 3. otherwise the stored impact is retained.
///
/// `risk_score` is then recomputed from the effective impact and
/// likelihood, and `updated_at` is stamped. On validation failure the
/// record is left untouched.
pub fn apply_risk_update(risk: &mut RiskRecord, update: &RiskUpdate) -> Result<()> {
    let confidentiality = update
        .confidentiality_impact
        .unwrap_or(risk.confidentiality_impact);
    let integrity = update.integrity_impact.unwrap_or(risk.integrity_impact);
    let availability = update.availability_impact.unwrap_or(risk.availability_impact);

    let impact = if update.touches_cia() {
        aggregate_impact(confidentiality, integrity, availability)?
    } else if let Some(explicit) = update.impact {
        validate_rating("impact", explicit)?;
        explicit
    } else {
        risk.impact
    };

    let likelihood = update.likelihood.unwrap_or(risk.likelihood);
    let risk_score = compute_risk_score(impact, likelihood)?;

    // All inputs validated; safe to mutate.
    risk.confidentiality_impact = confidentiality;
    risk.integrity_impact = integrity;
    risk.availability_impact = availability;
    risk.impact = impact;
    risk.likelihood = likelihood;
    risk.risk_score = risk_score;

    if let Some(status) = update.status {
        risk.status = status;
    }
    if let Some(strategy) = update.risk_response_strategy {
        risk.risk_response_strategy = Some(strategy);
    }
    if let Some(overdue) = &update.overdue {
        risk.overdue = Some(overdue.clone());
    }
    if let Some(category) = &update.asset_category {
        risk.asset_category = Some(category.clone());
    }
    if let Some(description) = &update.asset_description {
        risk.asset_description = Some(description.clone());
    }
    risk.updated_at = Some(Utc::now());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_impact_exact_mean() {
        assert_eq!(aggregate_impact(4, 4, 4).unwrap(), 4);
        assert_eq!(aggregate_impact(1, 1, 1).unwrap(), 1);
        assert_eq!(aggregate_impact(5, 5, 5).unwrap(), 5);
    }

    #[test]
    fn test_aggregate_impact_rounds_thirds() {
        // 13 / 3 = 4.33 rounds down
        assert_eq!(aggregate_impact(4, 4, 5).unwrap(), 4);
        // 14 / 3 = 4.67 rounds up
        assert_eq!(aggregate_impact(4, 5, 5).unwrap(), 5);
        // 7 / 3 = 2.33 rounds down
        assert_eq!(aggregate_impact(1, 2, 4).unwrap(), 2);
    }

    #[test]
    fn test_aggregate_impact_rejects_out_of_range() {
        assert!(aggregate_impact(0, 3, 3).is_err());
        assert!(aggregate_impact(3, 6, 3).is_err());
        assert!(aggregate_impact(3, 3, 255).is_err());
    }

    #[test]
    fn test_compute_risk_score_bounds() {
        assert_eq!(compute_risk_score(1, 1).unwrap(), 1.0);
        assert_eq!(compute_risk_score(5, 5).unwrap(), 25.0);
        assert_eq!(compute_risk_score(4, 5).unwrap(), 20.0);
    }

    #[test]
    fn test_compute_risk_score_rejects_out_of_range() {
        assert!(compute_risk_score(0, 3).is_err());
        assert!(compute_risk_score(3, 9).is_err());
    }

    #[test]
    fn test_score_new_risk() {
        let scored = score_new_risk(
            CiaRatings {
                confidentiality: 4,
                integrity: 4,
                availability: 4,
            },
            5,
        )
        .unwrap();
        assert_eq!(scored.impact, 4);
        assert_eq!(scored.risk_score, 20.0);
    }
}
