//! Organization-level risk metric rollups for dashboards.
//!
//! Everything here is a pure fold over the caller-supplied register; no
//! aggregate state is maintained between calls. Correctness over
//! performance: registers are headcount-scale, so each dashboard read just
//! recomputes from scratch.

pub mod categories;
pub mod rounding;

use crate::core::RiskRecord;
use crate::lifecycle::{is_accepted, is_active, is_mitigated, is_overdue};
use crate::scoring::level::{classify_risk_level, is_above_tolerance, RiskLevel};
use crate::metrics::categories::canonical_category;
use crate::metrics::rounding::{percentage, round_to_tenth};
use chrono::{Datelike, NaiveDate, Utc};
use im::Vector;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of calendar months covered by the score trend, current month
/// inclusive.
pub const TREND_MONTHS: usize = 12;

/// Dashboard rollup for one organization's risk register.
///
/// Field names are the dashboard API response body shape and must stay
/// stable. Note the deliberate asymmetry: `mitigated`, `accepted` and
/// `above_tolerance` are percentages over the full register, while the two
/// distributions cover active (non-closed) risks only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskMetrics {
    /// Count of risks not in closed status.
    pub active: usize,
    /// Percentage of all risks mitigated and treatment-complete.
    pub mitigated: u32,
    /// Percentage of all risks accepted and treatment-complete.
    pub accepted: u32,
    /// Percentage of all risks scoring above the tolerance cut.
    pub above_tolerance: u32,
    /// Raw count of overdue risks.
    pub overdue: usize,
    pub average_risk_score_trend: Vector<TrendPoint>,
    pub risk_level_distribution: Vector<LevelSlice>,
    pub risk_category_distribution: Vector<CategorySlice>,
}

/// Mean risk score of one calendar month's created risks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    /// Normalized month key, `YYYY-MM-01`.
    pub month: String,
    pub score: f64,
}

/// One severity tier's share of the active register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelSlice {
    pub level: RiskLevel,
    pub count: usize,
    pub percentage: u32,
}

/// One canonical category bucket's count over the active register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySlice {
    pub category: String,
    pub count: usize,
}

/// Compute the dashboard rollup, anchoring the trend at today's date.
pub fn compute_risk_metrics(risks: &[RiskRecord]) -> RiskMetrics {
    compute_risk_metrics_at(risks, Utc::now().date_naive())
}

/// Compute the dashboard rollup with an explicit trend anchor date.
/// Deterministic: the same register and anchor always produce identical
/// output, including ordering.
pub fn compute_risk_metrics_at(risks: &[RiskRecord], today: NaiveDate) -> RiskMetrics {
    debug!(
        "computing risk metrics over {} register entries (anchor {today})",
        risks.len()
    );
    let total = risks.len();
    let active: Vec<&RiskRecord> = risks.iter().filter(|r| is_active(r)).collect();

    RiskMetrics {
        active: active.len(),
        mitigated: percentage(risks.iter().filter(|r| is_mitigated(r)).count(), total),
        accepted: percentage(risks.iter().filter(|r| is_accepted(r)).count(), total),
        above_tolerance: percentage(
            risks
                .iter()
                .filter(|r| is_above_tolerance(r.risk_score))
                .count(),
            total,
        ),
        overdue: risks.iter().filter(|r| is_overdue(r)).count(),
        average_risk_score_trend: score_trend(risks, today),
        risk_level_distribution: level_distribution(&active),
        risk_category_distribution: category_distribution(&active),
    }
}

/// The trailing `TREND_MONTHS` calendar months ending at `today`'s month,
/// oldest first.
fn trailing_months(today: NaiveDate) -> Vec<(i32, u32)> {
    let mut months = Vec::with_capacity(TREND_MONTHS);
    let mut year = today.year();
    let mut month = today.month();
    for _ in 0..TREND_MONTHS {
        months.push((year, month));
        if month == 1 {
            month = 12;
            year -= 1;
        } else {
            month -= 1;
        }
    }
    months.reverse();
    months
}

fn score_trend(risks: &[RiskRecord], today: NaiveDate) -> Vector<TrendPoint> {
    trailing_months(today)
        .into_iter()
        .map(|(year, month)| {
            let bucket: Vec<f64> = risks
                .iter()
                .filter(|r| {
                    r.created_at
                        .is_some_and(|ts| ts.year() == year && ts.month() == month)
                })
                .map(|r| r.risk_score)
                .collect();
            let mean = if bucket.is_empty() {
                0.0
            } else {
                bucket.iter().sum::<f64>() / bucket.len() as f64
            };
            TrendPoint {
                month: format!("{year:04}-{month:02}-01"),
                score: round_to_tenth(mean),
            }
        })
        .collect()
}

/// Sparse severity distribution over active risks, most severe tier first.
/// Tiers with no active risks are omitted.
fn level_distribution(active: &[&RiskRecord]) -> Vector<LevelSlice> {
    let mut counts: HashMap<RiskLevel, usize> = HashMap::new();
    for risk in active {
        *counts
            .entry(classify_risk_level(risk.risk_score))
            .or_default() += 1;
    }

    RiskLevel::ALL_DESCENDING
        .iter()
        .filter_map(|level| {
            let count = counts.get(level).copied().unwrap_or(0);
            (count > 0).then(|| LevelSlice {
                level: *level,
                count,
                percentage: percentage(count, active.len()),
            })
        })
        .collect()
}

/// Category distribution over active risks through the canonical remap
/// table, sorted count-descending with a name-ascending tie-break.
fn category_distribution(active: &[&RiskRecord]) -> Vector<CategorySlice> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for risk in active {
        let bucket = canonical_category(risk.asset_category.as_deref());
        *counts.entry(bucket).or_default() += 1;
    }

    let mut slices: Vec<CategorySlice> = counts
        .into_iter()
        .map(|(category, count)| CategorySlice { category, count })
        .collect();
    slices.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.category.cmp(&b.category))
    });
    slices.into_iter().collect()
}

/// Plain-text dashboard summary for terminal output.
pub fn format_metrics_summary(metrics: &RiskMetrics) -> String {
    let mut output = String::new();

    output.push_str("RISK REGISTER SUMMARY\n");
    output.push_str("─────────────────────\n");
    output.push_str(&format!("Active risks:     {}\n", metrics.active));
    output.push_str(&format!("Mitigated:        {}%\n", metrics.mitigated));
    output.push_str(&format!("Accepted:         {}%\n", metrics.accepted));
    output.push_str(&format!("Above tolerance:  {}%\n", metrics.above_tolerance));
    output.push_str(&format!("Overdue:          {}\n", metrics.overdue));

    if !metrics.risk_level_distribution.is_empty() {
        output.push('\n');
        output.push_str("Severity distribution (active risks)\n");
        for slice in &metrics.risk_level_distribution {
            output.push_str(&format!(
                "  {:<9} {:>4}  ({}%)\n",
                slice.level.display_name(),
                slice.count,
                slice.percentage
            ));
        }
    }

    if !metrics.risk_category_distribution.is_empty() {
        output.push('\n');
        output.push_str("Category distribution (active risks)\n");
        for slice in &metrics.risk_category_distribution {
            output.push_str(&format!("  {:<28} {:>4}\n", slice.category, slice.count));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_months_within_year() {
        let months = trailing_months(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert_eq!(months.len(), 12);
        assert_eq!(months[0], (2024, 1));
        assert_eq!(months[11], (2024, 12));
    }

    #[test]
    fn test_trailing_months_crosses_year_boundary() {
        let months = trailing_months(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(months[0], (2023, 4));
        assert_eq!(months[8], (2023, 12));
        assert_eq!(months[9], (2024, 1));
        assert_eq!(months[11], (2024, 3));
    }
}
