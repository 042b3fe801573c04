//! NABERS Energy star rating from purchased-energy intensity

use shared_types::{ComplianceRequirement, ComplianceStatus, NabersResult};

use crate::assessment::Assessment;
use crate::benchmarks::{NABERS_BASE_ENERGY, NABERS_MAX_RATING, NABERS_MIN_STARS, STARS_UNIT};

/// Stars for a Scope 2 intensity, 0 when there is no measured energy use
pub fn star_rating(energy_intensity: f64) -> u32 {
    if !(energy_intensity.is_finite() && energy_intensity > 0.0) {
        return 0;
    }
    let stars = (NABERS_BASE_ENERGY / energy_intensity * 3.0).round();
    stars.clamp(0.0, NABERS_MAX_RATING as f64) as u32
}

pub fn check_nabers_compliance(assessment: &Assessment) -> NabersResult {
    let rating = star_rating(assessment.scope2_intensity());
    let has_energy_data = assessment.totals.scope2 > 0.0;

    let requirements = vec![
        ComplianceRequirement::check("Minimum 12 months operational data", has_energy_data)
            .with_recommendation("Collect at least 12 months of metered energy data"),
        ComplianceRequirement::check("Energy consumption measured and verified", has_energy_data)
            .with_recommendation("Have energy consumption verified by an accredited assessor"),
        ComplianceRequirement::check("Base building performance assessed", true),
        ComplianceRequirement::measured(
            "Rating of 4 stars or higher achieved",
            rating >= NABERS_MIN_STARS,
            rating as f64,
            NABERS_MIN_STARS as f64,
            STARS_UNIT,
        )
        .with_recommendation("Upgrade HVAC controls and lighting to lift the star rating"),
    ];

    let status = if rating >= 5 {
        ComplianceStatus::Compliant
    } else if rating >= 3 {
        ComplianceStatus::Partial
    } else {
        ComplianceStatus::NonCompliant
    };

    NabersResult {
        compliant: status.is_compliant(),
        status,
        rating,
        max_rating: NABERS_MAX_RATING,
        requirements,
    }
}
