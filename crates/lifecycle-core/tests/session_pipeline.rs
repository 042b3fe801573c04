//! Session round trips through the on-disk store

use std::sync::{Arc, Mutex};

use lifecycle_core::{
    CallbackSink, CarbonConfig, DemolitionMethod, EndOfLifeInputs, JsonFileStore, KeyValueStore,
    ModuleDInputs, PercentField, RecomputeSession, SnapshotEvent, WholeLifeInputs,
};
use pretty_assertions::assert_eq;
use shared_types::{UpfrontEmissions, UsePhaseEmissions};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[test]
fn test_inputs_survive_a_new_session() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();

    let inputs = EndOfLifeInputs {
        demolition_method: DemolitionMethod::Deconstruction,
        transport_distance: "120".to_string(),
        ..EndOfLifeInputs::default()
    }
    .with_fraction_tonnes(2, 30.0)
    .with_fraction_percent(2, PercentField::Recycle, 90.0);

    {
        let session = RecomputeSession::new(JsonFileStore::new(dir.path()));
        session.publish_end_of_life(2000.0, &inputs);
        session.publish_module_d(&ModuleDInputs::default());
    }

    let reopened = RecomputeSession::new(JsonFileStore::new(dir.path()));
    assert_eq!(reopened.load_end_of_life_inputs(), inputs);
    assert_eq!(reopened.load_module_d_inputs(), ModuleDInputs::default());
    assert!(reopened.load_whole_life_totals().is_none());

    let timber = &reopened.load_end_of_life_inputs().waste_fractions[2];
    assert!(timber.percent_sum() <= 100.0);
}

#[test]
fn test_callback_sink_feeds_aggregator() {
    let end_of_life = Arc::new(Mutex::new(None));
    let captured = Arc::clone(&end_of_life);

    let mut session = RecomputeSession::new(lifecycle_core::MemoryStore::new());
    session.subscribe(CallbackSink(move |event: &SnapshotEvent| {
        if let SnapshotEvent::EndOfLife(emissions) = event {
            if let Ok(mut slot) = captured.lock() {
                *slot = Some(*emissions);
            }
        }
    }));

    let published = session.publish_end_of_life(100.0, &EndOfLifeInputs::default());
    let received = end_of_life.lock().unwrap().unwrap();
    assert_eq!(received, published);

    let totals = session.publish_whole_life(
        &WholeLifeInputs::new(UpfrontEmissions::new(1000.0, 0.0, 0.0))
            .with_use_phase(UsePhaseEmissions {
                b6_operational_energy: 500.0,
                b7_operational_water: 100.0,
                ..UsePhaseEmissions::default()
            })
            .with_end_of_life(received),
    );
    assert_eq!(totals.total_operational, 600.0);
    assert_eq!(totals.c1_deconstruction, received.c1_deconstruction);
    assert_eq!(totals.intensity_upfront, None);
}

#[test]
fn test_configured_keys_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let config = CarbonConfig::from_str("[storage]\nwhole_life_key = \"tower-a\"").unwrap();
    let session = RecomputeSession::from_config(JsonFileStore::new(dir.path()), &config);

    session.publish_whole_life(&WholeLifeInputs::default());
    assert!(dir.path().join("tower-a.json").exists());
    assert!(session.store().get("tower-a").is_some());
}

#[test]
fn test_sessions_with_similar_keys_stay_separate() {
    let dir = tempfile::tempdir().unwrap();
    let slash = CarbonConfig::from_str("[storage]\nwhole_life_key = \"tower/a\"").unwrap();
    let underscore = CarbonConfig::from_str("[storage]\nwhole_life_key = \"tower_a\"").unwrap();
    let first = RecomputeSession::from_config(JsonFileStore::new(dir.path()), &slash);
    let second = RecomputeSession::from_config(JsonFileStore::new(dir.path()), &underscore);

    let small = WholeLifeInputs::new(UpfrontEmissions::new(1.0, 0.0, 0.0));
    let large = WholeLifeInputs::new(UpfrontEmissions::new(9.0, 0.0, 0.0));
    let small = first.publish_whole_life(&small);
    let large = second.publish_whole_life(&large);

    assert_eq!(first.load_whole_life_totals(), Some(small));
    assert_eq!(second.load_whole_life_totals(), Some(large));
}
