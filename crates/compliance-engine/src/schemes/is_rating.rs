//! Infrastructure Sustainability (IS) rating
//!
//! Scored for every project; `is_infrastructure` tells consumers whether the
//! rating actually applies.

use shared_types::{ComplianceRequirement, ComplianceStatus, IsRatingLevel, IsRatingResult};

use super::percent_score;
use crate::assessment::Assessment;
use crate::benchmarks::INTENSITY_UNIT;

pub fn check_is_rating_compliance(assessment: &Assessment) -> IsRatingResult {
    let upfront = assessment.upfront_intensity();
    let benchmark = assessment.benchmark().upfront;
    let lca = assessment.has_whole_life();
    let recovery_strategy = assessment.has_recycling_or_reuse();
    let end_of_life_quantified = assessment.end_of_life_intensity() > 0.0;
    let scope3_measured = assessment.totals.scope3 > 0.0;

    let requirements = vec![
        ComplianceRequirement::check("Life cycle assessment completed", lca)
            .with_stage("A-D")
            .with_recommendation("Complete a life cycle assessment across all stages"),
        ComplianceRequirement::check("Recycling/reuse strategy in place", recovery_strategy)
            .with_stage("Module D")
            .with_recommendation("Set recycling and reuse targets for demolition materials"),
        ComplianceRequirement::measured(
            "Upfront carbon below benchmark",
            upfront < benchmark,
            upfront,
            benchmark,
            INTENSITY_UNIT,
        )
        .with_stage("A1-A5")
        .with_recommendation(
            "Optimise structural design and specify supplementary cementitious materials",
        ),
        ComplianceRequirement::check("End-of-life impacts quantified", end_of_life_quantified)
            .with_stage("C1-C4")
            .with_recommendation("Model demolition, transport and disposal of the asset"),
        ComplianceRequirement::check("Scope 3 supply chain emissions measured", scope3_measured)
            .with_recommendation("Collect supplier EPDs for major materials"),
    ];

    let score = percent_score(&requirements);
    let level = IsRatingLevel::from_score(score);
    let status = match level {
        IsRatingLevel::Leading | IsRatingLevel::Excellent => ComplianceStatus::Compliant,
        IsRatingLevel::Commended => ComplianceStatus::Partial,
        IsRatingLevel::NotRated => ComplianceStatus::NonCompliant,
    };

    IsRatingResult {
        compliant: status.is_compliant(),
        status,
        score,
        level,
        is_infrastructure: assessment.profile.project_type.is_infrastructure(),
        requirements,
    }
}
