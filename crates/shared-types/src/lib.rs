pub mod building;
pub mod compliance;
pub mod types;

pub use building::{BuildingClass, BuildingProfile, ParseError, ProjectType, DEFAULT_SIZE_SQM};
pub use compliance::{
    met_count, ClimateActiveResult, ComplianceRequirement, ComplianceResult, ComplianceStatus,
    En15978Result, En15978Stages, GbcaResult, IsRatingLevel, IsRatingResult, NabersResult,
    NccResult, StageCheck,
};
pub use types::{
    EmissionTotals, EndOfLifeEmissions, ModuleDEmissions, UpfrontEmissions, UsePhaseEmissions,
    WholeLifeCarbonTotals,
};
