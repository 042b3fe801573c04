//! Fixed benchmark tables and scheme thresholds
//!
//! All intensities are kgCO2e per m² of floor area.

use std::collections::HashMap;

use lazy_static::lazy_static;
use shared_types::{BuildingClass, ProjectType};

pub const INTENSITY_UNIT: &str = "kgCO₂e/m²";
pub const STARS_UNIT: &str = "stars";

/// NCC Section J total emissions intensity target
pub const NCC_ENERGY_TARGET: f64 = 120.0;
/// NCC limit for purchased energy (Scope 2) intensity
pub const NCC_SCOPE2_LIMIT: f64 = 80.0;

/// Green Star operational carbon benchmark
pub const GBCA_OPERATIONAL_TARGET: f64 = 60.0;
pub const GBCA_MAX_SCORE: u32 = 100;

/// NABERS baseline energy intensity
pub const NABERS_BASE_ENERGY: f64 = 100.0;
pub const NABERS_MAX_RATING: u32 = 6;
pub const NABERS_MIN_STARS: u32 = 4;

/// Share of the whole-life benchmark allowed for the use stage (B1-B7)
pub const EN15978_USE_STAGE_SHARE: f64 = 0.4;
/// Share of the whole-life benchmark allowed for end of life (C1-C4)
pub const EN15978_END_OF_LIFE_SHARE: f64 = 0.1;

/// EN 15978 reference values for one building type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Benchmark {
    /// A1-A5
    pub upfront: f64,
    /// A-C
    pub whole_life: f64,
}

lazy_static! {
    /// EN 15978 benchmarks by building type
    pub static ref EN15978_BENCHMARKS: HashMap<ProjectType, Benchmark> = {
        let mut m = HashMap::new();
        m.insert(ProjectType::Residential, Benchmark { upfront: 500.0, whole_life: 1200.0 });
        m.insert(ProjectType::Commercial, Benchmark { upfront: 600.0, whole_life: 1500.0 });
        m.insert(ProjectType::Industrial, Benchmark { upfront: 700.0, whole_life: 1800.0 });
        m.insert(ProjectType::Retail, Benchmark { upfront: 650.0, whole_life: 1600.0 });
        m.insert(ProjectType::Education, Benchmark { upfront: 550.0, whole_life: 1300.0 });
        m.insert(ProjectType::Healthcare, Benchmark { upfront: 800.0, whole_life: 2000.0 });
        m
    };

    /// NCC 2024 upfront embodied carbon limits by building class
    pub static ref NCC_2024_LIMITS: HashMap<BuildingClass, f64> = {
        let mut m = HashMap::new();
        m.insert(BuildingClass::Class2, 500.0);
        m.insert(BuildingClass::Class3, 550.0);
        m.insert(BuildingClass::Class5, 600.0);
        m.insert(BuildingClass::Class6, 650.0);
        m.insert(BuildingClass::Class9a, 700.0);
        m.insert(BuildingClass::Class9b, 650.0);
        m.insert(BuildingClass::Default, 600.0);
        m
    };
}

/// Benchmark row for a project type, commercial when the type has no row
pub fn en15978_benchmark(project_type: ProjectType) -> Benchmark {
    EN15978_BENCHMARKS
        .get(&project_type)
        .or_else(|| EN15978_BENCHMARKS.get(&ProjectType::Commercial))
        .copied()
        .unwrap_or(Benchmark {
            upfront: 600.0,
            whole_life: 1500.0,
        })
}

pub fn ncc_upfront_limit(class: BuildingClass) -> f64 {
    NCC_2024_LIMITS
        .get(&class)
        .or_else(|| NCC_2024_LIMITS.get(&BuildingClass::Default))
        .copied()
        .unwrap_or(600.0)
}
