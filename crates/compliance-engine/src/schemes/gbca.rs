//! GBCA Green Star Buildings: upfront and operational carbon credits

use shared_types::{ComplianceRequirement, ComplianceStatus, GbcaResult};

use super::percent_score;
use crate::assessment::Assessment;
use crate::benchmarks::{GBCA_MAX_SCORE, GBCA_OPERATIONAL_TARGET, INTENSITY_UNIT};

const COMPLIANT_SCORE: u32 = 75;
const PARTIAL_SCORE: u32 = 45;

pub fn check_gbca_compliance(assessment: &Assessment) -> GbcaResult {
    let upfront = assessment.upfront_intensity();
    let benchmark = assessment.benchmark().upfront;
    let operational = assessment.scope2_intensity();
    let renewable = assessment.totals.scope2 > 0.0;
    let circular = assessment.applies_circular_economy();
    let whole_life = assessment.has_whole_life();

    let requirements = vec![
        ComplianceRequirement::measured(
            "Embodied carbon below benchmark",
            upfront < benchmark,
            upfront,
            benchmark,
            INTENSITY_UNIT,
        )
        .with_stage("A1-A5")
        .with_recommendation(
            "Target a 20% upfront carbon reduction against the reference building",
        ),
        ComplianceRequirement::measured(
            "Operational carbon below benchmark",
            operational < GBCA_OPERATIONAL_TARGET,
            operational,
            GBCA_OPERATIONAL_TARGET,
            INTENSITY_UNIT,
        )
        .with_stage("B6")
        .with_recommendation("Move to all-electric services supplied by renewable energy"),
        ComplianceRequirement::check("Renewable energy usage documented", renewable)
            .with_recommendation("Record metered energy use and renewable supply contracts"),
        ComplianceRequirement::check("Circular economy principles applied", circular)
            .with_stage("Module D")
            .with_recommendation("Plan for material recovery and claim Module D credits"),
        ComplianceRequirement::check("Whole life carbon assessment completed", whole_life)
            .with_stage("A-C")
            .with_recommendation("Complete a whole life carbon assessment covering stages A to C"),
    ];

    let score = percent_score(&requirements);
    let status = if score >= COMPLIANT_SCORE {
        ComplianceStatus::Compliant
    } else if score >= PARTIAL_SCORE {
        ComplianceStatus::Partial
    } else {
        ComplianceStatus::NonCompliant
    };

    GbcaResult {
        compliant: status.is_compliant(),
        status,
        score,
        max_score: GBCA_MAX_SCORE,
        requirements,
    }
}
