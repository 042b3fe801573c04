//! Inputs shared by every scheme check, with the documented fallbacks
//! applied when no whole-life totals are available.

use shared_types::{BuildingProfile, EmissionTotals, WholeLifeCarbonTotals};

use crate::benchmarks::{en15978_benchmark, ncc_upfront_limit, Benchmark};

/// One evaluation's read-only inputs
#[derive(Debug, Clone, Copy)]
pub struct Assessment<'a> {
    pub totals: &'a EmissionTotals,
    pub whole_life: Option<&'a WholeLifeCarbonTotals>,
    pub profile: &'a BuildingProfile,
}

impl<'a> Assessment<'a> {
    pub fn new(
        totals: &'a EmissionTotals,
        whole_life: Option<&'a WholeLifeCarbonTotals>,
        profile: &'a BuildingProfile,
    ) -> Self {
        Self {
            totals,
            whole_life,
            profile,
        }
    }

    /// Floor area for intensities (1000 m² when unknown)
    pub fn size_sqm(&self) -> f64 {
        self.profile.effective_size_sqm()
    }

    fn per_sqm(&self, value: f64) -> f64 {
        value / self.size_sqm()
    }

    pub fn has_whole_life(&self) -> bool {
        self.whole_life.is_some()
    }

    pub fn benchmark(&self) -> Benchmark {
        en15978_benchmark(self.profile.project_type)
    }

    pub fn ncc_limit(&self) -> f64 {
        ncc_upfront_limit(self.profile.ncc_compliance_level)
    }

    /// A1-A5 intensity; Scope 3 stands in without whole-life totals
    pub fn upfront_intensity(&self) -> f64 {
        let upfront = self.whole_life.map_or(self.totals.scope3, |w| w.total_upfront);
        self.per_sqm(upfront)
    }

    /// B1-B7 intensity; Scope 1 + 2 stand in without whole-life totals
    pub fn use_stage_intensity(&self) -> f64 {
        let use_stage = self
            .whole_life
            .map_or(self.totals.scope1 + self.totals.scope2, |w| w.use_phase_total());
        self.per_sqm(use_stage)
    }

    /// C1-C4 intensity; zero without whole-life totals
    pub fn end_of_life_intensity(&self) -> f64 {
        self.per_sqm(self.whole_life.map_or(0.0, |w| w.end_of_life_total()))
    }

    /// A-C intensity; the scope total stands in without whole-life totals
    pub fn whole_life_intensity(&self) -> f64 {
        let whole_life = self.whole_life.map_or(self.totals.total, |w| w.total_whole_life);
        self.per_sqm(whole_life)
    }

    pub fn total_intensity(&self) -> f64 {
        self.per_sqm(self.totals.total)
    }

    pub fn scope2_intensity(&self) -> f64 {
        self.per_sqm(self.totals.scope2)
    }

    /// Sum of Module D credits, zero without whole-life totals
    pub fn module_d_total(&self) -> f64 {
        self.whole_life.map_or(0.0, |w| w.module_d_total())
    }

    /// Module D shows recovered value
    pub fn applies_circular_economy(&self) -> bool {
        self.module_d_total() < 0.0
    }

    /// Recycling and reuse credits only, excluding energy recovery
    pub fn has_recycling_or_reuse(&self) -> bool {
        self.whole_life.map_or(false, |w| w.d_recycling + w.d_reuse < 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ProjectType;

    #[test]
    fn test_fallbacks_without_whole_life() {
        let totals = EmissionTotals::new(10_000.0, 20_000.0, 300_000.0);
        let profile = BuildingProfile::default();
        let a = Assessment::new(&totals, None, &profile);

        assert_eq!(a.upfront_intensity(), 300.0);
        assert_eq!(a.use_stage_intensity(), 30.0);
        assert_eq!(a.end_of_life_intensity(), 0.0);
        assert_eq!(a.whole_life_intensity(), 330.0);
        assert!(!a.applies_circular_economy());
        assert!(!a.has_recycling_or_reuse());
    }

    #[test]
    fn test_whole_life_values_take_precedence() {
        let totals = EmissionTotals::new(0.0, 0.0, 999_999.0);
        let whole_life = WholeLifeCarbonTotals {
            total_upfront: 450_000.0,
            c4_disposal: 20_000.0,
            d_energy_recovery: -10.0,
            ..WholeLifeCarbonTotals::default()
        };
        let profile = BuildingProfile {
            project_type: ProjectType::Healthcare,
            size_sqm: 1000.0,
            ..BuildingProfile::default()
        };
        let a = Assessment::new(&totals, Some(&whole_life), &profile);

        assert_eq!(a.upfront_intensity(), 450.0);
        assert_eq!(a.end_of_life_intensity(), 20.0);
        assert_eq!(a.benchmark().upfront, 800.0);
        assert!(a.applies_circular_economy());
        assert!(!a.has_recycling_or_reuse());
    }
}
