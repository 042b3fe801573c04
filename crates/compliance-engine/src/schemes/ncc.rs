//! NCC 2024 Section J
//!
//! Upfront embodied carbon limit by building class, plus the energy and
//! Scope 2 intensity targets.

use shared_types::{ComplianceRequirement, ComplianceStatus, NccResult};

use crate::assessment::Assessment;
use crate::benchmarks::{INTENSITY_UNIT, NCC_ENERGY_TARGET, NCC_SCOPE2_LIMIT};

pub fn check_ncc_compliance(assessment: &Assessment) -> NccResult {
    let upfront = assessment.upfront_intensity();
    let limit = assessment.ncc_limit();
    let total = assessment.total_intensity();
    let scope2 = assessment.scope2_intensity();

    let intensity_checks = vec![
        ComplianceRequirement::measured(
            "Upfront embodied carbon below NCC 2024 limit",
            upfront < limit,
            upfront,
            limit,
            INTENSITY_UNIT,
        )
        .with_stage("A1-A5")
        .with_recommendation(
            "Specify low-carbon concrete and recycled steel to cut product stage emissions",
        ),
        ComplianceRequirement::measured(
            "Total emissions intensity below target",
            total < NCC_ENERGY_TARGET,
            total,
            NCC_ENERGY_TARGET,
            INTENSITY_UNIT,
        )
        .with_recommendation(
            "Improve building fabric and services efficiency to reduce total emissions",
        ),
        ComplianceRequirement::measured(
            "Scope 2 (Energy) emissions within limit",
            scope2 < NCC_SCOPE2_LIMIT,
            scope2,
            NCC_SCOPE2_LIMIT,
            INTENSITY_UNIT,
        )
        .with_stage("B6")
        .with_recommendation("Add on-site renewables or procure certified green power"),
    ];
    let any_intensity_met = intensity_checks.iter().any(|r| r.met);

    let documented = assessment.totals.total > 0.0;
    let mut requirements = intensity_checks;
    requirements.push(
        ComplianceRequirement::check("Building envelope performance documented", documented)
            .with_recommendation("Document envelope performance with the emissions inventory"),
    );

    // Documentation alone never lifts a failing building to partial
    let status = if requirements.iter().all(|r| r.met) {
        ComplianceStatus::Compliant
    } else if any_intensity_met {
        ComplianceStatus::Partial
    } else {
        ComplianceStatus::NonCompliant
    };

    NccResult {
        compliant: status.is_compliant(),
        status,
        requirements,
    }
}
