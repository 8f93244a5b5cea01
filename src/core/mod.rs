pub mod errors;
pub mod types;

pub use errors::{Error, Result};
pub use types::{
    AssessmentItem, AssessmentStatus, MaturityLevel, ResponseStrategy, RiskRecord, RiskStatus,
    RiskType, RiskUpdate,
};
