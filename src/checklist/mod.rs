//! Gap-assessment checklist aggregation: completion statistics and the
//! maturity score ladder. Structurally the risk-metrics pattern in
//! miniature, sharing the same rounding helpers.

use crate::core::{AssessmentItem, AssessmentStatus, MaturityLevel};
use crate::metrics::rounding::{percentage, round_to_tenth};
use serde::{Deserialize, Serialize};

/// Completion rollup for one framework checklist. Field names are the
/// dashboard API response shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionStats {
    /// Count of non-header items.
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub not_applied: usize,
    pub completion_percentage: u32,
    /// Completed plus in-progress, as a percentage of total.
    pub progress_percentage: u32,
}

/// Compute completion statistics over a checklist. Section headers are
/// excluded from every count.
pub fn compute_completion_stats(items: &[AssessmentItem]) -> CompletionStats {
    let mut completed = 0;
    let mut in_progress = 0;
    let mut not_applied = 0;

    for item in items.iter().filter(|i| !i.is_header) {
        match item.status {
            AssessmentStatus::Completed => completed += 1,
            AssessmentStatus::InProgress => in_progress += 1,
            AssessmentStatus::NotApplied => not_applied += 1,
        }
    }

    let total = completed + in_progress + not_applied;
    CompletionStats {
        total,
        completed,
        in_progress,
        not_applied,
        completion_percentage: percentage(completed, total),
        progress_percentage: percentage(completed + in_progress, total),
    }
}

/// Fixed numeric score for each maturity level.
pub fn maturity_score(level: MaturityLevel) -> u8 {
    match level {
        MaturityLevel::Initial => 1,
        MaturityLevel::Developing => 2,
        MaturityLevel::Defined => 3,
        MaturityLevel::Managed => 4,
        MaturityLevel::Optimizing => 5,
    }
}

/// Maturity rollup for maturity-style assessments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaturityStats {
    pub average_current: f64,
    pub average_target: f64,
    /// Mean of (target - current) over items rated on both sides.
    pub average_gap: f64,
}

/// Mean current/target maturity scores and the mean gap, headers excluded,
/// each rounded to one decimal. Items missing a rating on one side simply
/// drop out of that side's mean.
pub fn compute_maturity_stats(items: &[AssessmentItem]) -> MaturityStats {
    let rated: Vec<&AssessmentItem> = items.iter().filter(|i| !i.is_header).collect();

    let mean = |scores: Vec<u8>| -> f64 {
        if scores.is_empty() {
            0.0
        } else {
            round_to_tenth(scores.iter().map(|s| f64::from(*s)).sum::<f64>() / scores.len() as f64)
        }
    };

    let current: Vec<u8> = rated
        .iter()
        .filter_map(|i| i.maturity_current.map(maturity_score))
        .collect();
    let target: Vec<u8> = rated
        .iter()
        .filter_map(|i| i.maturity_target.map(maturity_score))
        .collect();

    let gaps: Vec<f64> = rated
        .iter()
        .filter_map(|i| match (i.maturity_current, i.maturity_target) {
            (Some(current), Some(target)) => {
                Some(f64::from(maturity_score(target)) - f64::from(maturity_score(current)))
            }
            _ => None,
        })
        .collect();
    let average_gap = if gaps.is_empty() {
        0.0
    } else {
        round_to_tenth(gaps.iter().sum::<f64>() / gaps.len() as f64)
    };

    MaturityStats {
        average_current: mean(current),
        average_target: mean(target),
        average_gap,
    }
}

/// Plain-text checklist summary for terminal output.
pub fn format_completion_summary(stats: &CompletionStats) -> String {
    let mut output = String::new();
    output.push_str("CHECKLIST SUMMARY\n");
    output.push_str("─────────────────\n");
    output.push_str(&format!("Requirements:  {}\n", stats.total));
    output.push_str(&format!("Completed:     {}\n", stats.completed));
    output.push_str(&format!("In progress:   {}\n", stats.in_progress));
    output.push_str(&format!("Not applied:   {}\n", stats.not_applied));
    output.push_str(&format!("Completion:    {}%\n", stats.completion_percentage));
    output.push_str(&format!("Progress:      {}%\n", stats.progress_percentage));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, is_header: bool, status: AssessmentStatus) -> AssessmentItem {
        AssessmentItem {
            id: id.to_string(),
            standard_ref: format!("A.{id}"),
            description: "requirement".to_string(),
            is_header,
            status,
            maturity_current: None,
            maturity_target: None,
        }
    }

    #[test]
    fn test_headers_excluded_from_counts() {
        let items = vec![
            item("1", true, AssessmentStatus::NotApplied),
            item("2", true, AssessmentStatus::NotApplied),
            item("3", false, AssessmentStatus::Completed),
            item("4", false, AssessmentStatus::Completed),
            item("5", false, AssessmentStatus::NotApplied),
        ];
        let stats = compute_completion_stats(&items);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.not_applied, 1);
        assert_eq!(stats.completion_percentage, 67);
        assert_eq!(stats.progress_percentage, 67);
    }

    #[test]
    fn test_empty_checklist() {
        let stats = compute_completion_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.completion_percentage, 0);
        assert_eq!(stats.progress_percentage, 0);
    }

    #[test]
    fn test_in_progress_counts_toward_progress_only() {
        let items = vec![
            item("1", false, AssessmentStatus::Completed),
            item("2", false, AssessmentStatus::InProgress),
            item("3", false, AssessmentStatus::InProgress),
            item("4", false, AssessmentStatus::NotApplied),
        ];
        let stats = compute_completion_stats(&items);
        assert_eq!(stats.completion_percentage, 25);
        assert_eq!(stats.progress_percentage, 75);
    }

    #[test]
    fn test_maturity_ladder_scores() {
        assert_eq!(maturity_score(MaturityLevel::Initial), 1);
        assert_eq!(maturity_score(MaturityLevel::Optimizing), 5);
    }

    #[test]
    fn test_maturity_stats_gap() {
        let mut a = item("1", false, AssessmentStatus::InProgress);
        a.maturity_current = Some(MaturityLevel::Defined);
        a.maturity_target = Some(MaturityLevel::Optimizing);
        let mut b = item("2", false, AssessmentStatus::InProgress);
        b.maturity_current = Some(MaturityLevel::Developing);
        b.maturity_target = Some(MaturityLevel::Managed);

        let stats = compute_maturity_stats(&[a, b]);
        assert_eq!(stats.average_current, 2.5);
        assert_eq!(stats.average_target, 4.5);
        assert_eq!(stats.average_gap, 2.0);
    }

    #[test]
    fn test_maturity_stats_empty() {
        let stats = compute_maturity_stats(&[]);
        assert_eq!(stats.average_current, 0.0);
        assert_eq!(stats.average_target, 0.0);
        assert_eq!(stats.average_gap, 0.0);
    }
}
