// Export modules for library usage
pub mod checklist;
pub mod cli;
pub mod core;
pub mod lifecycle;
pub mod metrics;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    AssessmentItem, AssessmentStatus, Error, MaturityLevel, ResponseStrategy, Result, RiskRecord,
    RiskStatus, RiskType, RiskUpdate,
};

pub use crate::scoring::{
    aggregate_impact, apply_risk_update, compute_risk_score,
    level::{classify_risk_level, is_above_tolerance, RiskLevel},
    score_new_risk, CiaRatings, ScoredFields,
};

pub use crate::lifecycle::{is_accepted, is_active, is_mitigated, is_overdue, is_treated};

pub use crate::metrics::{
    compute_risk_metrics, compute_risk_metrics_at, format_metrics_summary, CategorySlice,
    LevelSlice, RiskMetrics, TrendPoint,
};

pub use crate::checklist::{
    compute_completion_stats, compute_maturity_stats, format_completion_summary, maturity_score,
    CompletionStats, MaturityStats,
};
