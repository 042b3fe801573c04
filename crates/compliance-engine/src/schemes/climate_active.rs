//! Climate Active carbon neutral certification readiness

use shared_types::{ClimateActiveResult, ComplianceRequirement};

use super::status_by_count;
use crate::assessment::Assessment;

const PARTIAL_FROM: usize = 3;

fn is_measured(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

pub fn check_climate_active_compliance(assessment: &Assessment) -> ClimateActiveResult {
    let totals = assessment.totals;
    let pathway = assessment.has_whole_life();
    let circular = assessment.applies_circular_economy();

    let requirements = vec![
        ComplianceRequirement::check("Scope 1 emissions measured", is_measured(totals.scope1))
            .with_recommendation("Inventory direct emissions from on-site fuel combustion"),
        ComplianceRequirement::check("Scope 2 emissions measured", is_measured(totals.scope2))
            .with_recommendation("Inventory purchased electricity using current grid factors"),
        ComplianceRequirement::check("Scope 3 emissions measured", is_measured(totals.scope3))
            .with_recommendation("Inventory supply chain emissions including embodied materials"),
        ComplianceRequirement::check("Carbon neutral pathway documented", pathway)
            .with_recommendation(
                "Publish a reduction pathway backed by a whole life carbon assessment",
            ),
        ComplianceRequirement::check("Circular economy principles applied", circular)
            .with_stage("Module D")
            .with_recommendation("Recover materials at end of life to offset residual emissions"),
    ];

    let status = status_by_count(&requirements, PARTIAL_FROM);

    ClimateActiveResult {
        compliant: status.is_compliant(),
        status,
        requirements,
    }
}
