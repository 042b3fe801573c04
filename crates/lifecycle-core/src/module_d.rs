//! Module D: benefits beyond the system boundary
//!
//! Credits are avoided emissions and therefore negative. Direct reuse earns
//! the recycling credit of the material plus a 20% bonus, scaled by the share
//! of the material actually reused.

use serde::{Deserialize, Serialize};
use shared_types::ModuleDEmissions;

use crate::materials::{energy_recovery_credit_per_tonne, recycling_credit_per_tonne};

/// Reuse credit relative to recycling the same material
pub const REUSE_CREDIT_MULTIPLIER: f64 = 1.2;

fn non_negative(value: f64) -> f64 {
    value.max(0.0)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecyclingItem {
    pub material: String,
    pub tonnes: f64,
}

impl RecyclingItem {
    pub fn new(material: &str, tonnes: f64) -> Self {
        Self {
            material: material.to_string(),
            tonnes,
        }
    }

    pub fn credit(&self) -> f64 {
        non_negative(self.tonnes) * recycling_credit_per_tonne(&self.material)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReuseItem {
    pub material: String,
    pub tonnes: f64,
    /// 100 = the whole tonnage is reused
    pub reuse_percent: f64,
}

impl ReuseItem {
    pub fn new(material: &str, tonnes: f64, reuse_percent: f64) -> Self {
        Self {
            material: material.to_string(),
            tonnes,
            reuse_percent,
        }
    }

    fn reuse_share(&self) -> f64 {
        if self.reuse_percent.is_nan() {
            0.0
        } else {
            self.reuse_percent.clamp(0.0, 100.0) / 100.0
        }
    }

    pub fn credit(&self) -> f64 {
        non_negative(self.tonnes)
            * recycling_credit_per_tonne(&self.material)
            * REUSE_CREDIT_MULTIPLIER
            * self.reuse_share()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyRecoveryItem {
    pub material: String,
    pub tonnes: f64,
}

impl EnergyRecoveryItem {
    pub fn new(material: &str, tonnes: f64) -> Self {
        Self {
            material: material.to_string(),
            tonnes,
        }
    }

    pub fn credit(&self) -> f64 {
        non_negative(self.tonnes) * energy_recovery_credit_per_tonne(&self.material)
    }
}

/// The three independent Module D item lists.
///
/// A list missing from stored JSON falls back to its default rows; a list
/// stored empty stays empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModuleDInputs {
    pub recycling_items: Vec<RecyclingItem>,
    pub reuse_items: Vec<ReuseItem>,
    pub energy_recovery_items: Vec<EnergyRecoveryItem>,
}

impl Default for ModuleDInputs {
    fn default() -> Self {
        Self {
            recycling_items: vec![
                RecyclingItem::new("steel", 0.0),
                RecyclingItem::new("aluminium", 0.0),
                RecyclingItem::new("concrete", 0.0),
                RecyclingItem::new("timber", 0.0),
                RecyclingItem::new("glass", 0.0),
            ],
            reuse_items: vec![
                ReuseItem::new("steel", 0.0, 100.0),
                ReuseItem::new("timber", 0.0, 100.0),
                ReuseItem::new("brick", 0.0, 100.0),
            ],
            energy_recovery_items: vec![
                EnergyRecoveryItem::new("timber", 0.0),
                EnergyRecoveryItem::new("plastics", 0.0),
            ],
        }
    }
}

impl ModuleDInputs {
    pub fn has_any_input(&self) -> bool {
        self.recycling_items.iter().any(|i| i.tonnes > 0.0)
            || self.reuse_items.iter().any(|i| i.tonnes > 0.0)
            || self.energy_recovery_items.iter().any(|i| i.tonnes > 0.0)
    }
}

/// Persisted Module D document: the inputs plus the credits they produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDRecord {
    #[serde(flatten)]
    pub inputs: ModuleDInputs,
    #[serde(default)]
    pub emissions: ModuleDEmissions,
}

pub fn calculate_module_d(inputs: &ModuleDInputs) -> ModuleDEmissions {
    let recycling = inputs.recycling_items.iter().map(RecyclingItem::credit).sum();
    let reuse = inputs.reuse_items.iter().map(ReuseItem::credit).sum();
    let energy_recovery = inputs.energy_recovery_items.iter().map(EnergyRecoveryItem::credit).sum();

    ModuleDEmissions::new(recycling, reuse, energy_recovery)
}

/// Size of the benefit as a positive number, for display
pub fn total_credit_magnitude(emissions: &ModuleDEmissions) -> f64 {
    emissions.total.abs()
}
