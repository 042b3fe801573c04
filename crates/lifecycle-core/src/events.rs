//! Snapshot notifications
//!
//! Hosts subscribe sinks to a [`RecomputeSession`](crate::session::RecomputeSession)
//! to receive every freshly computed record, e.g. to feed the end-of-life
//! and Module D results into the whole-life aggregator.

use std::sync::{Arc, Mutex};

use shared_types::{EndOfLifeEmissions, ModuleDEmissions, WholeLifeCarbonTotals};

/// A complete, freshly computed record
#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotEvent {
    EndOfLife(EndOfLifeEmissions),
    ModuleD(ModuleDEmissions),
    WholeLife(WholeLifeCarbonTotals),
}

impl SnapshotEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            SnapshotEvent::EndOfLife(_) => "end_of_life",
            SnapshotEvent::ModuleD(_) => "module_d",
            SnapshotEvent::WholeLife(_) => "whole_life",
        }
    }
}

/// Receiver for computed snapshots
pub trait SnapshotSink: Send + Sync {
    fn on_event(&self, event: &SnapshotEvent);
}

impl<T: SnapshotSink + ?Sized> SnapshotSink for Arc<T> {
    fn on_event(&self, event: &SnapshotEvent) {
        (**self).on_event(event)
    }
}

/// Sink that ignores everything
pub struct NoopSink;

impl SnapshotSink for NoopSink {
    fn on_event(&self, _event: &SnapshotEvent) {}
}

/// Adapts a closure into a sink
pub struct CallbackSink<F>(pub F);

impl<F> SnapshotSink for CallbackSink<F>
where
    F: Fn(&SnapshotEvent) + Send + Sync,
{
    fn on_event(&self, event: &SnapshotEvent) {
        (self.0)(event)
    }
}

/// Keeps every event it receives, in order
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SnapshotEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SnapshotEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Most recent whole-life snapshot, if any was published
    pub fn latest_whole_life(&self) -> Option<WholeLifeCarbonTotals> {
        self.events().into_iter().rev().find_map(|e| match e {
            SnapshotEvent::WholeLife(totals) => Some(totals),
            _ => None,
        })
    }
}

impl SnapshotSink for RecordingSink {
    fn on_event(&self, event: &SnapshotEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.on_event(&SnapshotEvent::ModuleD(ModuleDEmissions::default()));
        sink.on_event(&SnapshotEvent::WholeLife(WholeLifeCarbonTotals::default()));

        let kinds: Vec<_> = sink.events().iter().map(SnapshotEvent::kind).collect();
        assert_eq!(kinds, vec!["module_d", "whole_life"]);
        assert!(sink.latest_whole_life().is_some());
    }

    #[test]
    fn test_callback_sink_invokes_closure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let sink = CallbackSink(move |_: &SnapshotEvent| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        sink.on_event(&SnapshotEvent::EndOfLife(EndOfLifeEmissions::default()));
        NoopSink.on_event(&SnapshotEvent::EndOfLife(EndOfLifeEmissions::default()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
