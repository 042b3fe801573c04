//! Emission records exchanged between the lifecycle calculators, the
//! whole-life aggregator and the compliance engine.
//!
//! All values are kgCO2e. Records are plain values: every recomputation
//! builds a new one.

use serde::{Deserialize, Serialize};

/// Coarse scope-based totals supplied by the upstream material calculator
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmissionTotals {
    pub scope1: f64,
    pub scope2: f64,
    pub scope3: f64,
    pub total: f64,
}

impl EmissionTotals {
    pub fn new(scope1: f64, scope2: f64, scope3: f64) -> Self {
        Self {
            scope1,
            scope2,
            scope3,
            total: scope1 + scope2 + scope3,
        }
    }
}

/// A1-A5: product, transport to site, construction
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UpfrontEmissions {
    pub a1a3: f64,
    pub a4: f64,
    pub a5: f64,
}

impl UpfrontEmissions {
    pub fn new(a1a3: f64, a4: f64, a5: f64) -> Self {
        Self { a1a3, a4, a5 }
    }
}

/// B1-B7 use stage modules
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UsePhaseEmissions {
    pub b1_use: f64,
    pub b2_maintenance: f64,
    pub b3_repair: f64,
    pub b4_replacement: f64,
    pub b5_refurbishment: f64,
    pub b6_operational_energy: f64,
    pub b7_operational_water: f64,
}

impl UsePhaseEmissions {
    /// B1-B5, the embodied part of the use stage
    pub fn embodied(&self) -> f64 {
        self.b1_use
            + self.b2_maintenance
            + self.b3_repair
            + self.b4_replacement
            + self.b5_refurbishment
    }

    /// B6-B7
    pub fn operational(&self) -> f64 {
        self.b6_operational_energy + self.b7_operational_water
    }

    pub fn total(&self) -> f64 {
        self.embodied() + self.operational()
    }
}

/// C1-C4 end-of-life modules
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EndOfLifeEmissions {
    pub c1_deconstruction: f64,
    pub c2_transport: f64,
    pub c3_waste_processing: f64,
    pub c4_disposal: f64,
    /// Always `c1 + c2 + c3 + c4`
    pub total: f64,
}

impl EndOfLifeEmissions {
    pub fn new(c1: f64, c2: f64, c3: f64, c4: f64) -> Self {
        Self {
            c1_deconstruction: c1,
            c2_transport: c2,
            c3_waste_processing: c3,
            c4_disposal: c4,
            total: c1 + c2 + c3 + c4,
        }
    }
}

/// Module D credits beyond the system boundary. Every field is <= 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleDEmissions {
    pub recycling_credits: f64,
    pub reuse_credits: f64,
    pub energy_recovery_credits: f64,
    /// Always the sum of the three credits
    pub total: f64,
}

impl ModuleDEmissions {
    pub fn new(recycling: f64, reuse: f64, energy_recovery: f64) -> Self {
        Self {
            recycling_credits: recycling,
            reuse_credits: reuse,
            energy_recovery_credits: energy_recovery,
            total: recycling + reuse + energy_recovery,
        }
    }
}

/// Canonical whole-life snapshot (A1-D) produced by the aggregator.
///
/// The intensity fields are only present when a positive building area was
/// supplied; they are omitted from JSON otherwise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WholeLifeCarbonTotals {
    // Upfront
    pub a1a3_product: f64,
    pub a4_transport: f64,
    pub a5_construction: f64,

    // Use phase
    pub b1_use: f64,
    pub b2_maintenance: f64,
    pub b3_repair: f64,
    pub b4_replacement: f64,
    pub b5_refurbishment: f64,
    pub b6_operational_energy: f64,
    pub b7_operational_water: f64,

    // End of life
    pub c1_deconstruction: f64,
    pub c2_transport: f64,
    pub c3_waste_processing: f64,
    pub c4_disposal: f64,

    // Beyond lifecycle (negative)
    pub d_recycling: f64,
    pub d_reuse: f64,
    pub d_energy_recovery: f64,

    // Aggregates
    pub total_upfront: f64,
    pub total_embodied: f64,
    pub total_operational: f64,
    pub total_whole_life: f64,
    pub total_with_benefits: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity_upfront: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity_whole_life: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity_with_benefits: Option<f64>,
}

impl WholeLifeCarbonTotals {
    /// B1-B5
    pub fn use_embodied(&self) -> f64 {
        self.b1_use
            + self.b2_maintenance
            + self.b3_repair
            + self.b4_replacement
            + self.b5_refurbishment
    }

    /// B1-B7
    pub fn use_phase_total(&self) -> f64 {
        self.use_embodied() + self.total_operational
    }

    /// C1-C4
    pub fn end_of_life_total(&self) -> f64 {
        self.c1_deconstruction + self.c2_transport + self.c3_waste_processing + self.c4_disposal
    }

    /// Sum of the Module D credits (<= 0)
    pub fn module_d_total(&self) -> f64 {
        self.d_recycling + self.d_reuse + self.d_energy_recovery
    }

    pub fn has_intensities(&self) -> bool {
        self.intensity_upfront.is_some()
    }
}
