//! EN 15978 life cycle stage assessment
//!
//! Each reported stage is compared with a fixed share of the building type's
//! benchmark. Module D is checked for presence only, since the standard
//! requires it to be reported outside the A-C total.

use shared_types::{ComplianceRequirement, En15978Result, En15978Stages, StageCheck};

use super::status_by_count;
use crate::assessment::Assessment;
use crate::benchmarks::{EN15978_END_OF_LIFE_SHARE, EN15978_USE_STAGE_SHARE, INTENSITY_UNIT};

const PARTIAL_FROM: usize = 3;

/// Stage intensities against their thresholds
pub fn stage_checks(assessment: &Assessment) -> En15978Stages {
    let benchmark = assessment.benchmark();
    En15978Stages {
        a1a5: StageCheck::below(assessment.upfront_intensity(), benchmark.upfront),
        b1b7: StageCheck::below(
            assessment.use_stage_intensity(),
            benchmark.whole_life * EN15978_USE_STAGE_SHARE,
        ),
        c1c4: StageCheck::below(
            assessment.end_of_life_intensity(),
            benchmark.whole_life * EN15978_END_OF_LIFE_SHARE,
        ),
        whole_life: StageCheck::below(assessment.whole_life_intensity(), benchmark.whole_life),
    }
}

fn stage_requirement(name: &str, stage: &str, check: &StageCheck) -> ComplianceRequirement {
    ComplianceRequirement::measured(name, check.met, check.value, check.threshold, INTENSITY_UNIT)
        .with_stage(stage)
}

pub fn check_en15978_compliance(assessment: &Assessment) -> En15978Result {
    let stages = stage_checks(assessment);
    let reports_module_d = assessment.has_whole_life();

    let requirements = vec![
        stage_requirement("Product and construction stage within benchmark", "A1-A5", &stages.a1a5)
            .with_recommendation("Substitute high-carbon materials in the structure and envelope"),
        stage_requirement("Use stage within benchmark", "B1-B7", &stages.b1b7)
            .with_recommendation("Extend component service lives and reduce operational energy"),
        stage_requirement("End of life stage within benchmark", "C1-C4", &stages.c1c4)
            .with_recommendation("Design for disassembly to lower demolition and disposal impacts"),
        stage_requirement("Whole life carbon within benchmark", "A-C", &stages.whole_life)
            .with_recommendation("Address the largest contributing stage first"),
        ComplianceRequirement::check("Module D benefits reported separately", reports_module_d)
            .with_stage("D")
            .with_recommendation(
                "Report recycling, reuse and energy recovery credits outside the A-C total",
            ),
    ];

    let status = status_by_count(&requirements, PARTIAL_FROM);

    En15978Result {
        compliant: status.is_compliant(),
        status,
        stages,
        requirements,
    }
}
