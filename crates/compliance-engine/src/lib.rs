//! Multi-scheme carbon compliance evaluation
//!
//! Evaluates a building's emissions against six Australian and European
//! schemes: NCC 2024, GBCA Green Star, NABERS Energy, EN 15978, Climate Active
//! and IS Rating. Every evaluator is a pure function of the same inputs, so a
//! recomputation with identical inputs always yields an identical result.

pub mod assessment;
pub mod benchmarks;
pub mod schemes;

use shared_types::{BuildingProfile, ComplianceResult, EmissionTotals, WholeLifeCarbonTotals};
use tracing::debug;

pub use assessment::Assessment;
pub use benchmarks::{
    en15978_benchmark, ncc_upfront_limit, Benchmark, EN15978_BENCHMARKS, NCC_2024_LIMITS,
};

/// ComplianceEngine entry point
pub struct ComplianceEngine;

impl ComplianceEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run all six schemes
    ///
    /// Without whole-life totals the evaluators fall back to the scope
    /// totals and mark their assessment-completed requirements as unmet.
    pub fn evaluate(
        &self,
        totals: &EmissionTotals,
        whole_life: Option<&WholeLifeCarbonTotals>,
        profile: &BuildingProfile,
    ) -> ComplianceResult {
        let assessment = Assessment::new(totals, whole_life, profile);
        let result = self.evaluate_assessment(&assessment);
        debug!(
            project_type = %profile.project_type,
            size_sqm = assessment.size_sqm(),
            has_whole_life = assessment.has_whole_life(),
            ncc = %result.ncc.status,
            gbca = %result.gbca.status,
            nabers = %result.nabers.status,
            en15978 = %result.en15978.status,
            climate_active = %result.climate_active.status,
            is_rating = %result.is_rating.status,
            "Evaluated compliance"
        );
        result
    }

    pub fn evaluate_assessment(&self, assessment: &Assessment) -> ComplianceResult {
        ComplianceResult {
            ncc: schemes::ncc::check_ncc_compliance(assessment),
            gbca: schemes::gbca::check_gbca_compliance(assessment),
            nabers: schemes::nabers::check_nabers_compliance(assessment),
            en15978: schemes::en15978::check_en15978_compliance(assessment),
            climate_active: schemes::climate_active::check_climate_active_compliance(assessment),
            is_rating: schemes::is_rating::check_is_rating_compliance(assessment),
        }
    }
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{BuildingClass, ComplianceStatus, IsRatingLevel, ProjectType};

    fn mock_project() -> BuildingProfile {
        BuildingProfile::new(ProjectType::Commercial, 1000.0, BuildingClass::Class5)
    }

    fn mock_whole_life() -> WholeLifeCarbonTotals {
        WholeLifeCarbonTotals {
            a1a3_product: 350_000.0,
            a4_transport: 20_000.0,
            a5_construction: 30_000.0,
            b6_operational_energy: 40_000.0,
            c1_deconstruction: 35_000.0,
            c4_disposal: 5_000.0,
            d_recycling: -30_000.0,
            d_reuse: -5_000.0,
            total_upfront: 400_000.0,
            total_embodied: 440_000.0,
            total_operational: 40_000.0,
            total_whole_life: 480_000.0,
            total_with_benefits: 445_000.0,
            intensity_upfront: Some(400.0),
            intensity_whole_life: Some(480.0),
            intensity_with_benefits: Some(445.0),
            ..WholeLifeCarbonTotals::default()
        }
    }

    #[test]
    fn test_engine_evaluates_all_schemes() {
        let engine = ComplianceEngine::new();
        let totals = EmissionTotals::new(10_000.0, 40_000.0, 400_000.0);
        let wl = mock_whole_life();
        let result = engine.evaluate(&totals, Some(&wl), &mock_project());

        assert_eq!(result.gbca.score, 100);
        assert_eq!(result.nabers.rating, 6);
        assert_eq!(result.en15978.status, ComplianceStatus::Compliant);
        assert_eq!(result.climate_active.status, ComplianceStatus::Compliant);
        assert_eq!(result.is_rating.level, IsRatingLevel::Leading);
        assert!(!result.is_rating.is_infrastructure);
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let engine = ComplianceEngine::default();
        let totals = EmissionTotals::new(12_345.6, 78_901.2, 345_678.9);
        let wl = mock_whole_life();
        let profile = mock_project();

        let first = engine.evaluate(&totals, Some(&wl), &profile);
        let second = engine.evaluate(&totals, Some(&wl), &profile);
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_size_uses_default_area() {
        let engine = ComplianceEngine::new();
        let totals = EmissionTotals::new(0.0, 0.0, 500_000.0);
        let profile = BuildingProfile {
            size_sqm: 0.0,
            ..mock_project()
        };
        let result = engine.evaluate(&totals, None, &profile);
        assert_eq!(result.en15978.stages.a1a5.value, 500.0);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let engine = ComplianceEngine::new();
        let result = engine.evaluate(&EmissionTotals::default(), None, &mock_project());
        let json = serde_json::to_value(&result).unwrap();

        assert!(json.get("climateActive").is_some());
        assert!(json.get("isRating").is_some());
        assert_eq!(json["gbca"]["maxScore"], 100);
        assert_eq!(json["nabers"]["maxRating"], 6);
        assert_eq!(json["isRating"]["isInfrastructure"], false);
        assert_eq!(json["nabers"]["status"], "non-compliant");
        assert!(json["en15978"]["stages"]["wholeLife"]["threshold"].is_number());
    }
}
