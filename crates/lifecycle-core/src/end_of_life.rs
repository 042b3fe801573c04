//! End-of-life stage (EN 15978 C1-C4)
//!
//! - C1: demolition, area × method factor
//! - C2: transport of all waste to processing/disposal
//! - C3: recycling and incineration of each waste stream
//! - C4: landfill of each waste stream

use serde::{Deserialize, Deserializer, Serialize};
use shared_types::EndOfLifeEmissions;

use crate::materials::{waste_factors, DISPOSAL_TRANSPORT_FACTOR};

/// Area assumed when the building has no recorded size
pub const DEFAULT_AREA_SQM: f64 = 1000.0;

/// Haul distance assumed when the entered distance is unusable
pub const DEFAULT_TRANSPORT_KM: f64 = 50.0;

/// Method assumed for ids outside the fixed set
pub const FALLBACK_DEMOLITION_METHOD: DemolitionMethod = DemolitionMethod::Conventional;

/// Demolition approach with its C1 factor (kgCO2e per m²)
///
/// Deserializing an unknown id yields [`FALLBACK_DEMOLITION_METHOD`], so a
/// stored record with a retired method id still restores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DemolitionMethod {
    Conventional,
    #[default]
    Selective,
    Deconstruction,
    Implosion,
}

impl DemolitionMethod {
    pub fn all() -> [DemolitionMethod; 4] {
        [
            DemolitionMethod::Conventional,
            DemolitionMethod::Selective,
            DemolitionMethod::Deconstruction,
            DemolitionMethod::Implosion,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            DemolitionMethod::Conventional => "conventional",
            DemolitionMethod::Selective => "selective",
            DemolitionMethod::Deconstruction => "deconstruction",
            DemolitionMethod::Implosion => "implosion",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DemolitionMethod::Conventional => "Conventional Demolition",
            DemolitionMethod::Selective => "Selective Demolition",
            DemolitionMethod::Deconstruction => "Deconstruction",
            DemolitionMethod::Implosion => "Controlled Implosion",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DemolitionMethod::Conventional => "Standard mechanical demolition",
            DemolitionMethod::Selective => "Careful material separation for recycling",
            DemolitionMethod::Deconstruction => "Manual dismantling for maximum reuse",
            DemolitionMethod::Implosion => "Explosive demolition (large structures)",
        }
    }

    /// kgCO2e per m² of floor area
    pub fn factor(&self) -> f64 {
        match self {
            DemolitionMethod::Conventional => 25.0,
            DemolitionMethod::Selective => 35.0,
            DemolitionMethod::Deconstruction => 45.0,
            DemolitionMethod::Implosion => 15.0,
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|m| m.id().eq_ignore_ascii_case(id.trim()))
    }

    /// Method for a raw id, the conventional method when the id is unknown
    pub fn from_id_or_fallback(id: &str) -> Self {
        Self::from_id(id).unwrap_or(FALLBACK_DEMOLITION_METHOD)
    }

    /// Factor for a raw method id; unknown ids get the conventional factor
    pub fn factor_for_id(id: &str) -> f64 {
        Self::from_id_or_fallback(id).factor()
    }
}

impl<'de> Deserialize<'de> for DemolitionMethod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        Ok(Self::from_id_or_fallback(&id))
    }
}

/// One of the three disposal route percentages of a waste fraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercentField {
    Recycle,
    Landfill,
    Incineration,
}

/// Tonnage of one material and how it is split between disposal routes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteFraction {
    pub material: String,
    #[serde(default)]
    pub tonnes: f64,
    #[serde(default)]
    pub recycle_percent: f64,
    #[serde(default)]
    pub landfill_percent: f64,
    #[serde(default)]
    pub incineration_percent: f64,
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

impl WasteFraction {
    pub fn new(
        material: &str,
        tonnes: f64,
        recycle: f64,
        landfill: f64,
        incineration: f64,
    ) -> Self {
        Self {
            material: material.to_string(),
            tonnes,
            recycle_percent: recycle,
            landfill_percent: landfill,
            incineration_percent: incineration,
        }
    }

    pub fn percent(&self, field: PercentField) -> f64 {
        match field {
            PercentField::Recycle => self.recycle_percent,
            PercentField::Landfill => self.landfill_percent,
            PercentField::Incineration => self.incineration_percent,
        }
    }

    pub fn percent_sum(&self) -> f64 {
        self.recycle_percent + self.landfill_percent + self.incineration_percent
    }

    /// Copy with a new tonnage (negative tonnage becomes zero)
    pub fn with_tonnes(&self, tonnes: f64) -> Self {
        Self {
            tonnes: tonnes.max(0.0),
            ..self.clone()
        }
    }

    /// Copy with one percentage edited and the other two rebalanced.
    ///
    /// The edited value is clamped to [0, 100] and never changed afterwards.
    /// When the three percentages then exceed 100 the excess is removed in a
    /// fixed precedence order:
    ///
    /// - recycle edited: half the excess from landfill and half from
    ///   incineration
    /// - landfill edited: the whole excess from recycle
    /// - incineration edited: the whole excess from landfill
    ///
    /// Each reduction floors at 0. Whatever a floor left over is taken from
    /// the remaining field so the sum never exceeds 100.
    pub fn with_percent(&self, field: PercentField, value: f64) -> Self {
        let mut next = self.clone();
        let value = clamp_percent(value);
        match field {
            PercentField::Recycle => next.recycle_percent = value,
            PercentField::Landfill => next.landfill_percent = value,
            PercentField::Incineration => next.incineration_percent = value,
        }

        let excess = next.percent_sum() - 100.0;
        if excess <= 0.0 {
            return next;
        }

        match field {
            PercentField::Recycle => {
                next.landfill_percent = (next.landfill_percent - excess / 2.0).max(0.0);
                next.incineration_percent = (next.incineration_percent - excess / 2.0).max(0.0);
            }
            PercentField::Landfill => {
                next.recycle_percent = (next.recycle_percent - excess).max(0.0);
            }
            PercentField::Incineration => {
                next.landfill_percent = (next.landfill_percent - excess).max(0.0);
            }
        }

        let residual = next.percent_sum() - 100.0;
        if residual > 0.0 {
            match field {
                PercentField::Recycle => {
                    if next.landfill_percent > 0.0 {
                        next.landfill_percent = (next.landfill_percent - residual).max(0.0);
                    } else {
                        next.incineration_percent = (next.incineration_percent - residual).max(0.0);
                    }
                }
                PercentField::Landfill => {
                    next.incineration_percent = (next.incineration_percent - residual).max(0.0);
                }
                PercentField::Incineration => {
                    next.recycle_percent = (next.recycle_percent - residual).max(0.0);
                }
            }
        }

        next
    }

    /// Copy that satisfies the fraction invariants: tonnes >= 0, each
    /// percentage in [0, 100] and a sum of at most 100.
    ///
    /// An over-full split is trimmed as if recycle had just been entered, so
    /// recycle keeps its value and landfill and incineration give way.
    pub fn normalized(&self) -> Self {
        let tonnes = if self.tonnes.is_finite() { self.tonnes.max(0.0) } else { 0.0 };
        let clamped = Self {
            material: self.material.clone(),
            tonnes,
            recycle_percent: clamp_percent(self.recycle_percent),
            landfill_percent: clamp_percent(self.landfill_percent),
            incineration_percent: clamp_percent(self.incineration_percent),
        };
        clamped.with_percent(PercentField::Recycle, clamped.recycle_percent)
    }

    fn routed_tonnes(&self, percent: f64) -> f64 {
        self.tonnes * (percent / 100.0)
    }

    /// C3 share of this fraction: recycling plus incineration
    pub fn processing_emissions(&self) -> f64 {
        let factors = waste_factors(&self.material);
        self.routed_tonnes(self.recycle_percent) * factors.recycling
            + self.routed_tonnes(self.incineration_percent) * factors.incineration
    }

    /// C4 share of this fraction: landfill
    pub fn disposal_emissions(&self) -> f64 {
        self.routed_tonnes(self.landfill_percent) * waste_factors(&self.material).landfill
    }
}

/// Typical building composition, all tonnages zero
pub fn default_waste_fractions() -> Vec<WasteFraction> {
    vec![
        WasteFraction::new("concrete", 0.0, 80.0, 20.0, 0.0),
        WasteFraction::new("steel", 0.0, 95.0, 5.0, 0.0),
        WasteFraction::new("timber", 0.0, 40.0, 40.0, 20.0),
        WasteFraction::new("brick", 0.0, 70.0, 30.0, 0.0),
        WasteFraction::new("glass", 0.0, 60.0, 40.0, 0.0),
        WasteFraction::new("plasterboard", 0.0, 50.0, 50.0, 0.0),
        WasteFraction::new("mixed_waste", 0.0, 20.0, 70.0, 10.0),
    ]
}

pub fn total_waste_tonnes(fractions: &[WasteFraction]) -> f64 {
    fractions.iter().map(|w| w.tonnes).sum()
}

/// Tonnage-weighted recycling rate in percent, 0 without waste
pub fn average_recycle_rate(fractions: &[WasteFraction]) -> f64 {
    let total = total_waste_tonnes(fractions);
    if total > 0.0 {
        fractions.iter().map(|w| w.tonnes * w.recycle_percent).sum::<f64>() / total
    } else {
        0.0
    }
}

/// User-editable end-of-life inputs, persisted between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndOfLifeInputs {
    #[serde(default)]
    pub demolition_method: DemolitionMethod,
    /// Raw distance as entered; parsed on every calculation
    #[serde(default = "default_transport_distance")]
    pub transport_distance: String,
    #[serde(default = "default_waste_fractions")]
    pub waste_fractions: Vec<WasteFraction>,
}

fn default_transport_distance() -> String {
    "50".to_string()
}

impl Default for EndOfLifeInputs {
    fn default() -> Self {
        Self {
            demolition_method: DemolitionMethod::default(),
            transport_distance: default_transport_distance(),
            waste_fractions: default_waste_fractions(),
        }
    }
}

impl EndOfLifeInputs {
    /// Copy with one fraction's percentage edited (see [`WasteFraction::with_percent`]).
    /// Out-of-range indices return an unchanged copy.
    pub fn with_fraction_percent(&self, index: usize, field: PercentField, value: f64) -> Self {
        let mut next = self.clone();
        if let Some(fraction) = next.waste_fractions.get_mut(index) {
            *fraction = fraction.with_percent(field, value);
        }
        next
    }

    pub fn with_fraction_tonnes(&self, index: usize, tonnes: f64) -> Self {
        let mut next = self.clone();
        if let Some(fraction) = next.waste_fractions.get_mut(index) {
            *fraction = fraction.with_tonnes(tonnes);
        }
        next
    }

    /// Copy with every waste fraction normalized (see [`WasteFraction::normalized`])
    pub fn normalized(&self) -> Self {
        Self {
            waste_fractions: self.waste_fractions.iter().map(WasteFraction::normalized).collect(),
            ..self.clone()
        }
    }
}

/// Persisted end-of-life document: the inputs plus the emissions they produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndOfLifeRecord {
    #[serde(flatten)]
    pub inputs: EndOfLifeInputs,
    #[serde(default)]
    pub emissions: EndOfLifeEmissions,
}

/// Longest numeric prefix of `raw` after leading whitespace
fn leading_number(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let end = s
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .unwrap_or(s.len());
    let candidate = &s[..end];
    (1..=candidate.len()).rev().find_map(|n| candidate[..n].parse::<f64>().ok())
}

/// C1-C4 calculator carrying the defaults for missing area and distance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndOfLifeCalculator {
    default_area_sqm: f64,
    default_transport_km: f64,
}

impl EndOfLifeCalculator {
    pub fn new() -> Self {
        Self {
            default_area_sqm: DEFAULT_AREA_SQM,
            default_transport_km: DEFAULT_TRANSPORT_KM,
        }
    }

    pub fn with_defaults(default_area_sqm: f64, default_transport_km: f64) -> Self {
        Self {
            default_area_sqm,
            default_transport_km,
        }
    }

    /// Area used for C1: the building area, or the default when zero/unset
    pub fn effective_area(&self, building_area_sqm: f64) -> f64 {
        if building_area_sqm.is_finite() && building_area_sqm > 0.0 {
            building_area_sqm
        } else {
            self.default_area_sqm
        }
    }

    /// Parse an entered distance from its leading number, so "12km" reads
    /// as 12. Input without a leading number, zero or negative gives the
    /// default distance.
    pub fn parse_transport_distance(&self, raw: &str) -> f64 {
        match leading_number(raw) {
            Some(km) if km.is_finite() && km > 0.0 => km,
            _ => self.default_transport_km,
        }
    }

    pub fn calculate(
        &self,
        building_area_sqm: f64,
        inputs: &EndOfLifeInputs,
    ) -> EndOfLifeEmissions {
        let area = self.effective_area(building_area_sqm);
        let distance = self.parse_transport_distance(&inputs.transport_distance);
        let normalized = inputs.normalized();
        let fractions = &normalized.waste_fractions;

        let c1 = area * inputs.demolition_method.factor();
        let c2 = total_waste_tonnes(fractions) * distance * DISPOSAL_TRANSPORT_FACTOR;
        let c3 = fractions.iter().map(WasteFraction::processing_emissions).sum();
        let c4 = fractions.iter().map(WasteFraction::disposal_emissions).sum();

        EndOfLifeEmissions::new(c1, c2, c3, c4)
    }
}

impl Default for EndOfLifeCalculator {
    fn default() -> Self {
        Self::new()
    }
}
