//! Material factor tables for end-of-life processing and Module D credits
//!
//! Materials are identified by lowercase ids ("steel", "mixed_waste", ...).
//! Unknown ids never fail: waste processing falls back to the mixed waste
//! row, recycling credits to zero and energy recovery to the generic
//! waste-to-energy credit.

/// Transport to disposal, articulated truck (kgCO2e per tonne-km)
pub const DISPOSAL_TRANSPORT_FACTOR: f64 = 0.089;

/// Fallback row for unknown waste streams
pub const MIXED_WASTE: &str = "mixed_waste";

/// Energy recovery credit for materials without a dedicated row (kgCO2e/t)
pub const DEFAULT_ENERGY_RECOVERY_CREDIT: f64 = -200.0;

/// Waste processing factors (kgCO2e per tonne)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WasteFactors {
    pub landfill: f64,
    pub recycling: f64,
    pub incineration: f64,
}

impl WasteFactors {
    const fn new(landfill: f64, recycling: f64, incineration: f64) -> Self {
        Self {
            landfill,
            recycling,
            incineration,
        }
    }
}

/// Avoided emissions per tonne (negative) with a short explanation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialCredit {
    pub credit: f64,
    pub description: &'static str,
}

impl MaterialCredit {
    const fn new(credit: f64, description: &'static str) -> Self {
        Self {
            credit,
            description,
        }
    }
}

// ============================================================================
// C3/C4 - Waste processing and disposal
// ============================================================================

fn known_waste_factors(material: &str) -> Option<WasteFactors> {
    let factors = match material {
        "concrete" => WasteFactors::new(5.0, 15.0, 0.0),
        "steel" => WasteFactors::new(10.0, 450.0, 0.0),
        "timber" => WasteFactors::new(50.0, 20.0, 80.0),
        "brick" => WasteFactors::new(5.0, 12.0, 0.0),
        "glass" => WasteFactors::new(8.0, 25.0, 0.0),
        "plasterboard" => WasteFactors::new(15.0, 30.0, 0.0),
        "mixed_waste" => WasteFactors::new(50.0, 100.0, 150.0),
        "plastics" => WasteFactors::new(20.0, 80.0, 200.0),
        "insulation" => WasteFactors::new(25.0, 40.0, 100.0),
        "aluminium" => WasteFactors::new(15.0, 850.0, 0.0),
        _ => return None,
    };
    Some(factors)
}

/// Processing factors for a waste stream, mixed waste for unknown materials
pub fn waste_factors(material: &str) -> WasteFactors {
    known_waste_factors(material)
        .or_else(|| known_waste_factors(MIXED_WASTE))
        .unwrap_or(WasteFactors::new(50.0, 100.0, 150.0))
}

pub fn has_waste_factors(material: &str) -> bool {
    known_waste_factors(material).is_some()
}

/// Display label for an end-of-life waste stream
pub fn waste_stream_label(material: &str) -> &str {
    match material {
        "concrete" => "Concrete & Masonry",
        "steel" => "Steel & Metal",
        "timber" => "Timber",
        "brick" => "Brick",
        "glass" => "Glass",
        "plasterboard" => "Plasterboard",
        "mixed_waste" => "Mixed C&D Waste",
        "plastics" => "Plastics",
        "insulation" => "Insulation",
        "aluminium" => "Aluminium",
        other => other,
    }
}

// ============================================================================
// Module D - Credits beyond the system boundary
// ============================================================================

pub fn recycling_credit(material: &str) -> Option<MaterialCredit> {
    let credit = match material {
        "steel" => {
            MaterialCredit::new(-1850.0, "Recycled steel displaces virgin steel production")
        }
        "aluminium" => {
            MaterialCredit::new(-8700.0, "Recycled aluminium displaces virgin aluminium")
        }
        "concrete" => MaterialCredit::new(-15.0, "Crushed concrete as aggregate"),
        "timber" => MaterialCredit::new(-1200.0, "Timber reuse or biomass energy recovery"),
        "glass" => MaterialCredit::new(-280.0, "Recycled glass displaces virgin glass"),
        "copper" => MaterialCredit::new(-2800.0, "Recycled copper displaces virgin copper"),
        "plastics" => MaterialCredit::new(-1500.0, "Recycled plastics displace virgin polymers"),
        "brick" => MaterialCredit::new(-50.0, "Brick reuse or crushed as fill"),
        "plasterboard" => MaterialCredit::new(-100.0, "Recycled gypsum"),
        _ => return None,
    };
    Some(credit)
}

/// Recycling credit per tonne, zero for materials without a credit
pub fn recycling_credit_per_tonne(material: &str) -> f64 {
    recycling_credit(material).map_or(0.0, |c| c.credit)
}

pub fn energy_recovery_credit(material: &str) -> Option<MaterialCredit> {
    let credit = match material {
        "timber" => MaterialCredit::new(-400.0, "Biomass energy recovery displaces fossil fuels"),
        "plastics" => MaterialCredit::new(-800.0, "Energy from waste displaces grid electricity"),
        "mixed_waste" => MaterialCredit::new(-200.0, "General waste-to-energy"),
        _ => return None,
    };
    Some(credit)
}

/// Energy recovery credit per tonne, generic waste-to-energy when unknown
pub fn energy_recovery_credit_per_tonne(material: &str) -> f64 {
    energy_recovery_credit(material).map_or(DEFAULT_ENERGY_RECOVERY_CREDIT, |c| c.credit)
}

/// Display label for a Module D material
pub fn material_label(material: &str) -> &str {
    match material {
        "steel" => "Steel",
        "aluminium" => "Aluminium",
        "concrete" => "Concrete",
        "timber" => "Timber",
        "glass" => "Glass",
        "copper" => "Copper",
        "plastics" => "Plastics",
        "brick" => "Brick",
        "plasterboard" => "Plasterboard",
        "mixed_waste" => "Mixed Waste",
        other => other,
    }
}
