//! Scheme evaluators
//!
//! Each scheme module exposes one `check_*` function taking the shared
//! [`Assessment`](crate::assessment::Assessment) and returning that scheme's
//! result type. Schemes never share state; the engine runs all six on the
//! same inputs.

pub mod climate_active;
pub mod en15978;
pub mod gbca;
pub mod is_rating;
pub mod nabers;
pub mod ncc;

use shared_types::{met_count, ComplianceRequirement, ComplianceStatus};

/// Share of met requirements on a 0-100 scale
pub(crate) fn percent_score(requirements: &[ComplianceRequirement]) -> u32 {
    if requirements.is_empty() {
        return 0;
    }
    let share = met_count(requirements) as f64 / requirements.len() as f64;
    (share * 100.0).round() as u32
}

/// Compliant when every requirement is met, partial from `partial_from` met
pub(crate) fn status_by_count(
    requirements: &[ComplianceRequirement],
    partial_from: usize,
) -> ComplianceStatus {
    let met = met_count(requirements);
    if met == requirements.len() {
        ComplianceStatus::Compliant
    } else if met >= partial_from {
        ComplianceStatus::Partial
    } else {
        ComplianceStatus::NonCompliant
    }
}
