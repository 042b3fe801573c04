//! Whole-life carbon stage calculators
//!
//! - [`end_of_life`]: C1-C4 from demolition method, haul distance and waste fractions
//! - [`module_d`]: recycling, reuse and energy recovery credits
//! - [`whole_life`]: merges A1-A5, B1-B7, C1-C4 and D into one snapshot
//! - [`session`]: persists and publishes each recomputed snapshot

pub mod config;
pub mod end_of_life;
pub mod error;
pub mod events;
pub mod materials;
pub mod module_d;
pub mod session;
pub mod store;
pub mod whole_life;

pub use config::CarbonConfig;
pub use end_of_life::{
    DemolitionMethod, EndOfLifeCalculator, EndOfLifeInputs, EndOfLifeRecord, PercentField,
    WasteFraction,
};
pub use error::{CarbonError, Result};
pub use events::{CallbackSink, NoopSink, RecordingSink, SnapshotEvent, SnapshotSink};
pub use module_d::{
    calculate_module_d, EnergyRecoveryItem, ModuleDInputs, ModuleDRecord, RecyclingItem,
    ReuseItem,
};
pub use session::RecomputeSession;
pub use store::{load_json, save_json, try_load_json, JsonFileStore, KeyValueStore, MemoryStore};
pub use whole_life::{aggregate_whole_life, load_stored_whole_life_totals, WholeLifeInputs};
