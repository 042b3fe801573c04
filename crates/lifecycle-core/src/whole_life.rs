//! Whole-life carbon aggregation (EN 15978 A1-D)
//!
//! Merges the upfront, use-phase, end-of-life and Module D records into one
//! [`WholeLifeCarbonTotals`] snapshot. Missing stage records count as zero.

use shared_types::{
    EndOfLifeEmissions, ModuleDEmissions, UpfrontEmissions, UsePhaseEmissions,
    WholeLifeCarbonTotals,
};

use crate::store::{load_json, KeyValueStore};

/// Non-finite values carry no information and are treated as zero
fn finite(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Everything the aggregator reads
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WholeLifeInputs {
    pub upfront: UpfrontEmissions,
    pub use_phase: Option<UsePhaseEmissions>,
    pub end_of_life: Option<EndOfLifeEmissions>,
    pub module_d: Option<ModuleDEmissions>,
    pub building_area_sqm: Option<f64>,
}

impl WholeLifeInputs {
    pub fn new(upfront: UpfrontEmissions) -> Self {
        Self {
            upfront,
            ..Self::default()
        }
    }

    pub fn with_use_phase(mut self, use_phase: UsePhaseEmissions) -> Self {
        self.use_phase = Some(use_phase);
        self
    }

    pub fn with_end_of_life(mut self, end_of_life: EndOfLifeEmissions) -> Self {
        self.end_of_life = Some(end_of_life);
        self
    }

    pub fn with_module_d(mut self, module_d: ModuleDEmissions) -> Self {
        self.module_d = Some(module_d);
        self
    }

    pub fn with_building_area(mut self, sqm: f64) -> Self {
        self.building_area_sqm = Some(sqm);
        self
    }
}

/// Build the canonical totals snapshot.
///
/// Intensities are set only for a positive building area; otherwise they
/// stay `None` and callers treat them as not computable.
pub fn aggregate_whole_life(inputs: &WholeLifeInputs) -> WholeLifeCarbonTotals {
    let use_phase = inputs.use_phase.unwrap_or_default();
    let end_of_life = inputs.end_of_life.unwrap_or_default();
    let module_d = inputs.module_d.unwrap_or_default();

    let a1a3 = finite(inputs.upfront.a1a3);
    let a4 = finite(inputs.upfront.a4);
    let a5 = finite(inputs.upfront.a5);

    let b1 = finite(use_phase.b1_use);
    let b2 = finite(use_phase.b2_maintenance);
    let b3 = finite(use_phase.b3_repair);
    let b4 = finite(use_phase.b4_replacement);
    let b5 = finite(use_phase.b5_refurbishment);
    let b6 = finite(use_phase.b6_operational_energy);
    let b7 = finite(use_phase.b7_operational_water);

    let c1 = finite(end_of_life.c1_deconstruction);
    let c2 = finite(end_of_life.c2_transport);
    let c3 = finite(end_of_life.c3_waste_processing);
    let c4 = finite(end_of_life.c4_disposal);

    let d_recycling = finite(module_d.recycling_credits);
    let d_reuse = finite(module_d.reuse_credits);
    let d_energy_recovery = finite(module_d.energy_recovery_credits);

    let total_upfront = a1a3 + a4 + a5;
    let use_embodied = b1 + b2 + b3 + b4 + b5;
    let total_operational = b6 + b7;
    let end_of_life_total = c1 + c2 + c3 + c4;
    let module_d_total = d_recycling + d_reuse + d_energy_recovery;

    let total_embodied = total_upfront + use_embodied + end_of_life_total;
    let total_whole_life = total_embodied + total_operational;
    let total_with_benefits = total_whole_life + module_d_total;

    let area = inputs
        .building_area_sqm
        .filter(|sqm| sqm.is_finite() && *sqm > 0.0);

    WholeLifeCarbonTotals {
        a1a3_product: a1a3,
        a4_transport: a4,
        a5_construction: a5,

        b1_use: b1,
        b2_maintenance: b2,
        b3_repair: b3,
        b4_replacement: b4,
        b5_refurbishment: b5,
        b6_operational_energy: b6,
        b7_operational_water: b7,

        c1_deconstruction: c1,
        c2_transport: c2,
        c3_waste_processing: c3,
        c4_disposal: c4,

        d_recycling,
        d_reuse,
        d_energy_recovery,

        total_upfront,
        total_embodied,
        total_operational,
        total_whole_life,
        total_with_benefits,

        intensity_upfront: area.map(|sqm| total_upfront / sqm),
        intensity_whole_life: area.map(|sqm| total_whole_life / sqm),
        intensity_with_benefits: area.map(|sqm| total_with_benefits / sqm),
    }
}

/// Totals last persisted under `key`, for report consumers. Missing and
/// malformed data both read as `None`.
pub fn load_stored_whole_life_totals<S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
) -> Option<WholeLifeCarbonTotals> {
    load_json(store, key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn upfront(a1a3: f64, a4: f64, a5: f64) -> UpfrontEmissions {
        UpfrontEmissions::new(a1a3, a4, a5)
    }

    #[test]
    fn test_total_upfront() {
        let totals = aggregate_whole_life(&WholeLifeInputs::new(upfront(1000.0, 200.0, 100.0)));
        assert_eq!(totals.a1a3_product, 1000.0);
        assert_eq!(totals.a4_transport, 200.0);
        assert_eq!(totals.a5_construction, 100.0);
        assert_eq!(totals.total_upfront, 1300.0);
    }

    #[test]
    fn test_operational_from_use_phase() {
        let use_phase = UsePhaseEmissions {
            b6_operational_energy: 500.0,
            b7_operational_water: 100.0,
            ..UsePhaseEmissions::default()
        };
        let inputs = WholeLifeInputs::new(upfront(1000.0, 0.0, 0.0)).with_use_phase(use_phase);
        let totals = aggregate_whole_life(&inputs);
        assert_eq!(totals.total_operational, 600.0);
        assert_eq!(totals.total_embodied, 1000.0);
        assert_eq!(totals.total_whole_life, 1600.0);
    }

    #[test]
    fn test_module_d_reduces_total_with_benefits_only() {
        let inputs = WholeLifeInputs::new(upfront(1000.0, 0.0, 0.0))
            .with_module_d(ModuleDEmissions::new(-200.0, -50.0, -50.0));
        let totals = aggregate_whole_life(&inputs);
        assert_eq!(totals.total_whole_life, 1000.0);
        assert_eq!(totals.total_with_benefits, 700.0);
        assert_eq!(totals.module_d_total(), -300.0);
    }

    #[test]
    fn test_end_of_life_counts_as_embodied() {
        let inputs = WholeLifeInputs::new(upfront(1000.0, 0.0, 0.0))
            .with_end_of_life(EndOfLifeEmissions::new(100.0, 20.0, 30.0, 50.0));
        let totals = aggregate_whole_life(&inputs);
        assert_eq!(totals.total_embodied, 1200.0);
        assert_eq!(totals.end_of_life_total(), 200.0);
        assert_eq!(totals.total_operational, 0.0);
    }

    #[test]
    fn test_intensity_per_square_metre() {
        let inputs = WholeLifeInputs::new(upfront(10_000.0, 0.0, 0.0)).with_building_area(100.0);
        let totals = aggregate_whole_life(&inputs);
        assert_eq!(totals.intensity_upfront, Some(100.0));
        assert_eq!(totals.intensity_whole_life, Some(100.0));
        assert_eq!(totals.intensity_with_benefits, Some(100.0));
    }

    #[test]
    fn test_intensity_absent_without_area() {
        for inputs in [
            WholeLifeInputs::new(upfront(10_000.0, 0.0, 0.0)),
            WholeLifeInputs::new(upfront(10_000.0, 0.0, 0.0)).with_building_area(0.0),
            WholeLifeInputs::new(upfront(10_000.0, 0.0, 0.0)).with_building_area(-10.0),
        ] {
            let totals = aggregate_whole_life(&inputs);
            assert_eq!(totals.intensity_upfront, None);
            assert_eq!(totals.intensity_whole_life, None);
            assert_eq!(totals.intensity_with_benefits, None);
        }
    }

    #[test]
    fn test_non_finite_inputs_count_as_zero() {
        let inputs = WholeLifeInputs::new(upfront(f64::NAN, 100.0, f64::INFINITY));
        let totals = aggregate_whole_life(&inputs);
        assert_eq!(totals.a1a3_product, 0.0);
        assert_eq!(totals.total_upfront, 100.0);
    }

    #[test]
    fn test_missing_stage_records_equal_zero_records() {
        let base = WholeLifeInputs::new(upfront(500.0, 50.0, 25.0));
        let explicit = base
            .clone()
            .with_use_phase(UsePhaseEmissions::default())
            .with_end_of_life(EndOfLifeEmissions::default())
            .with_module_d(ModuleDEmissions::default());
        assert_eq!(aggregate_whole_life(&base), aggregate_whole_life(&explicit));
    }

    fn amount() -> impl Strategy<Value = f64> {
        0.0f64..1_000_000.0
    }

    fn credit() -> impl Strategy<Value = f64> {
        -1_000_000.0f64..=0.0
    }

    fn inputs_strategy() -> impl Strategy<Value = WholeLifeInputs> {
        (
            (amount(), amount(), amount()),
            prop::option::of(prop::array::uniform7(amount())),
            prop::option::of(prop::array::uniform4(amount())),
            prop::option::of((credit(), credit(), credit())),
            prop::option::of(-100.0f64..100_000.0),
        )
            .prop_map(|((a1a3, a4, a5), b, c, d, area)| WholeLifeInputs {
                upfront: UpfrontEmissions::new(a1a3, a4, a5),
                use_phase: b.map(|b| UsePhaseEmissions {
                    b1_use: b[0],
                    b2_maintenance: b[1],
                    b3_repair: b[2],
                    b4_replacement: b[3],
                    b5_refurbishment: b[4],
                    b6_operational_energy: b[5],
                    b7_operational_water: b[6],
                }),
                end_of_life: c.map(|c| EndOfLifeEmissions::new(c[0], c[1], c[2], c[3])),
                module_d: d.map(|(r, u, e)| ModuleDEmissions::new(r, u, e)),
                building_area_sqm: area,
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn aggregates_are_additive(inputs in inputs_strategy()) {
            let t = aggregate_whole_life(&inputs);
            prop_assert_eq!(t.total_upfront, t.a1a3_product + t.a4_transport + t.a5_construction);
            prop_assert_eq!(
                t.total_embodied,
                t.total_upfront + t.use_embodied() + t.end_of_life_total()
            );
            prop_assert_eq!(t.total_operational, t.b6_operational_energy + t.b7_operational_water);
            prop_assert_eq!(t.total_whole_life, t.total_embodied + t.total_operational);
            prop_assert_eq!(t.total_with_benefits, t.total_whole_life + t.module_d_total());
        }

        #[test]
        fn intensities_present_only_for_positive_area(inputs in inputs_strategy()) {
            let t = aggregate_whole_life(&inputs);
            let positive = inputs.building_area_sqm.map_or(false, |a| a > 0.0);
            prop_assert_eq!(t.intensity_upfront.is_some(), positive);
            prop_assert_eq!(t.intensity_whole_life.is_some(), positive);
            prop_assert_eq!(t.intensity_with_benefits.is_some(), positive);
            if let Some(i) = t.intensity_whole_life {
                prop_assert!(i.is_finite());
            }
        }

        #[test]
        fn aggregation_is_idempotent(inputs in inputs_strategy()) {
            prop_assert_eq!(aggregate_whole_life(&inputs), aggregate_whole_life(&inputs));
        }
    }
}
