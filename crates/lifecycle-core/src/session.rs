//! Recomputation host
//!
//! The calculators are pure functions. A [`RecomputeSession`] is the publish
//! step around them: the host calls `publish_*` whenever a declared input
//! changes, the session computes the full snapshot, writes it through the
//! store and hands the same snapshot to every subscribed sink.

use serde::Serialize;
use shared_types::{EndOfLifeEmissions, ModuleDEmissions, WholeLifeCarbonTotals};
use tracing::{debug, instrument, warn};

use crate::config::{CarbonConfig, StorageKeys};
use crate::end_of_life::{EndOfLifeCalculator, EndOfLifeInputs, EndOfLifeRecord};
use crate::events::{SnapshotEvent, SnapshotSink};
use crate::module_d::{calculate_module_d, ModuleDInputs, ModuleDRecord};
use crate::store::{load_json, save_json, KeyValueStore};
use crate::whole_life::{aggregate_whole_life, WholeLifeInputs};

pub struct RecomputeSession<S: KeyValueStore> {
    store: S,
    keys: StorageKeys,
    end_of_life: EndOfLifeCalculator,
    sinks: Vec<Box<dyn SnapshotSink>>,
}

impl<S: KeyValueStore> RecomputeSession<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            keys: StorageKeys::default(),
            end_of_life: EndOfLifeCalculator::new(),
            sinks: Vec::new(),
        }
    }

    pub fn from_config(store: S, config: &CarbonConfig) -> Self {
        Self {
            store,
            keys: config.storage.clone(),
            end_of_life: config.end_of_life.calculator(),
            sinks: Vec::new(),
        }
    }

    pub fn subscribe<K: SnapshotSink + 'static>(&mut self, sink: K) {
        self.sinks.push(Box::new(sink));
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    pub fn end_of_life_calculator(&self) -> &EndOfLifeCalculator {
        &self.end_of_life
    }

    // ========================================================================
    // Restoring state
    // ========================================================================

    /// Stored end-of-life inputs with every waste fraction normalized, or
    /// the defaults when nothing usable is stored
    pub fn load_end_of_life_inputs(&self) -> EndOfLifeInputs {
        load_json::<EndOfLifeRecord, _>(&self.store, &self.keys.end_of_life_key)
            .map(|record| record.inputs.normalized())
            .unwrap_or_default()
    }

    pub fn load_module_d_inputs(&self) -> ModuleDInputs {
        load_json::<ModuleDRecord, _>(&self.store, &self.keys.module_d_key)
            .map(|record| record.inputs)
            .unwrap_or_default()
    }

    pub fn load_whole_life_totals(&self) -> Option<WholeLifeCarbonTotals> {
        load_json(&self.store, &self.keys.whole_life_key)
    }

    // ========================================================================
    // Publishing
    // ========================================================================

    #[instrument(skip_all)]
    pub fn publish_end_of_life(
        &self,
        building_area_sqm: f64,
        inputs: &EndOfLifeInputs,
    ) -> EndOfLifeEmissions {
        let emissions = self.end_of_life.calculate(building_area_sqm, inputs);
        debug!(
            c1 = emissions.c1_deconstruction,
            c2 = emissions.c2_transport,
            c3 = emissions.c3_waste_processing,
            c4 = emissions.c4_disposal,
            total = emissions.total,
            "Computed end-of-life emissions"
        );

        let record = EndOfLifeRecord {
            inputs: inputs.clone(),
            emissions,
        };
        self.persist(&self.keys.end_of_life_key, &record);
        self.notify(&SnapshotEvent::EndOfLife(emissions));
        emissions
    }

    #[instrument(skip_all)]
    pub fn publish_module_d(&self, inputs: &ModuleDInputs) -> ModuleDEmissions {
        let emissions = calculate_module_d(inputs);
        debug!(
            recycling = emissions.recycling_credits,
            reuse = emissions.reuse_credits,
            energy_recovery = emissions.energy_recovery_credits,
            total = emissions.total,
            "Computed Module D credits"
        );

        let record = ModuleDRecord {
            inputs: inputs.clone(),
            emissions,
        };
        self.persist(&self.keys.module_d_key, &record);
        self.notify(&SnapshotEvent::ModuleD(emissions));
        emissions
    }

    #[instrument(skip_all)]
    pub fn publish_whole_life(&self, inputs: &WholeLifeInputs) -> WholeLifeCarbonTotals {
        let totals = aggregate_whole_life(inputs);
        debug!(
            upfront = totals.total_upfront,
            whole_life = totals.total_whole_life,
            with_benefits = totals.total_with_benefits,
            has_intensities = totals.has_intensities(),
            "Computed whole-life totals"
        );

        self.persist(&self.keys.whole_life_key, &totals);
        self.notify(&SnapshotEvent::WholeLife(totals.clone()));
        totals
    }

    /// A failed write never discards the computed snapshot
    fn persist<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(e) = save_json(&self.store, key, value) {
            warn!(key, error = %e, "Failed to persist snapshot");
        }
    }

    fn notify(&self, event: &SnapshotEvent) {
        for sink in &self.sinks {
            sink.on_event(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::end_of_life::{DemolitionMethod, WasteFraction};
    use crate::error::{CarbonError, Result};
    use crate::events::RecordingSink;
    use crate::module_d::RecyclingItem;
    use crate::store::MemoryStore;
    use pretty_assertions::assert_eq;
    use shared_types::UpfrontEmissions;
    use std::sync::Arc;

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(CarbonError::Storage("read-only".to_string()))
        }
    }

    #[test]
    fn test_publish_persists_and_notifies_same_snapshot() {
        let recorder = Arc::new(RecordingSink::new());
        let mut session = RecomputeSession::new(MemoryStore::new());
        session.subscribe(Arc::clone(&recorder));

        let inputs = WholeLifeInputs::new(UpfrontEmissions::new(1000.0, 200.0, 100.0))
            .with_building_area(10.0);
        let totals = session.publish_whole_life(&inputs);

        assert_eq!(session.load_whole_life_totals(), Some(totals.clone()));
        assert_eq!(recorder.latest_whole_life(), Some(totals));
    }

    #[test]
    fn test_end_of_life_inputs_restore_after_publish() {
        let session = RecomputeSession::new(MemoryStore::new());
        let inputs = EndOfLifeInputs {
            demolition_method: DemolitionMethod::Implosion,
            transport_distance: "75".to_string(),
            waste_fractions: vec![WasteFraction::new("steel", 12.0, 95.0, 5.0, 0.0)],
        };
        let emissions = session.publish_end_of_life(400.0, &inputs);
        assert_eq!(emissions.c1_deconstruction, 400.0 * 15.0);
        assert_eq!(session.load_end_of_life_inputs(), inputs);
    }

    #[test]
    fn test_corrupt_state_loads_defaults() {
        let store = MemoryStore::new();
        store.set("endOfLifeCalculatorData", "not json").unwrap();
        store.set("moduleDCalculatorData", "{\"recyclingItems\": 5}").unwrap();
        store.set("wholeLifeCarbonTotals", "[]").unwrap();

        let session = RecomputeSession::new(store);
        assert_eq!(session.load_end_of_life_inputs(), EndOfLifeInputs::default());
        assert_eq!(session.load_module_d_inputs(), ModuleDInputs::default());
        assert_eq!(session.load_whole_life_totals(), None);
    }

    #[test]
    fn test_overfull_stored_fraction_is_normalized_on_load() {
        let store = MemoryStore::new();
        let stored = r#"{
            "demolitionMethod": "selective",
            "transportDistance": "50",
            "wasteFractions": [
                {
                    "material": "concrete", "tonnes": 10,
                    "recyclePercent": 90, "landfillPercent": 90, "incinerationPercent": 0
                },
                {
                    "material": "steel", "tonnes": -4,
                    "recyclePercent": 100, "landfillPercent": 0, "incinerationPercent": 0
                }
            ]
        }"#;
        store.set("endOfLifeCalculatorData", stored).unwrap();

        let inputs = RecomputeSession::new(store).load_end_of_life_inputs();
        let concrete = &inputs.waste_fractions[0];
        assert_eq!(concrete.recycle_percent, 90.0);
        assert_eq!(concrete.landfill_percent, 10.0);
        assert_eq!(concrete.incineration_percent, 0.0);
        assert_eq!(inputs.waste_fractions[1].tonnes, 0.0);
    }

    #[test]
    fn test_unknown_demolition_method_keeps_stored_inputs() {
        let store = MemoryStore::new();
        let stored = r#"{
            "demolitionMethod": "mechanical",
            "transportDistance": "120",
            "wasteFractions": [{"material": "steel", "tonnes": 500}]
        }"#;
        store.set("endOfLifeCalculatorData", stored).unwrap();

        let session = RecomputeSession::new(store);
        let inputs = session.load_end_of_life_inputs();
        assert_eq!(inputs.demolition_method, DemolitionMethod::Conventional);
        assert_eq!(inputs.transport_distance, "120");
        assert_eq!(inputs.waste_fractions.len(), 1);
        assert_eq!(inputs.waste_fractions[0].tonnes, 500.0);

        let emissions = session.publish_end_of_life(100.0, &inputs);
        assert_eq!(emissions.c1_deconstruction, 100.0 * 25.0);
    }

    #[test]
    fn test_store_failure_still_returns_snapshot() {
        let recorder = Arc::new(RecordingSink::new());
        let mut session = RecomputeSession::new(FailingStore);
        session.subscribe(Arc::clone(&recorder));

        let inputs = ModuleDInputs {
            recycling_items: vec![RecyclingItem::new("steel", 1.0)],
            reuse_items: vec![],
            energy_recovery_items: vec![],
        };
        let credits = session.publish_module_d(&inputs);
        assert_eq!(credits.total, -1850.0);
        assert_eq!(recorder.events(), vec![SnapshotEvent::ModuleD(credits)]);
    }

    #[test]
    fn test_config_keys_are_used() {
        let mut config = CarbonConfig::default();
        config.storage.whole_life_key = "project-42/totals".to_string();
        let session = RecomputeSession::from_config(MemoryStore::new(), &config);
        session.publish_whole_life(&WholeLifeInputs::default());
        assert!(session.store().get("project-42/totals").is_some());
        assert!(session.store().get("wholeLifeCarbonTotals").is_none());
    }
}
