//! Observers that plug into the clustering engine.

use std::sync::Mutex;

use cardmap_core::traits::{ClusteringEvent, IClusteringObserver};

use crate::metrics::ClusteringMetricsCollector;
use crate::tracing_setup::events;

/// Emits every clustering event as a structured log line.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl IClusteringObserver for TracingObserver {
    fn observe(&self, event: &ClusteringEvent) {
        events::emit(event);
    }
}

/// Aggregates clustering events into a [`ClusteringMetricsCollector`].
#[derive(Debug, Default)]
pub struct MetricsObserver {
    collector: Mutex<ClusteringMetricsCollector>,
    /// Also log each event through [`TracingObserver`].
    log_events: bool,
}

impl MetricsObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// A metrics observer that also logs every event.
    pub fn with_logging() -> Self {
        Self {
            collector: Mutex::default(),
            log_events: true,
        }
    }

    /// A copy of the current metrics.
    pub fn snapshot(&self) -> ClusteringMetricsCollector {
        match self.collector.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn reset(&self) {
        match self.collector.lock() {
            Ok(mut guard) => guard.reset(),
            Err(poisoned) => poisoned.into_inner().reset(),
        }
    }
}

impl IClusteringObserver for MetricsObserver {
    fn observe(&self, event: &ClusteringEvent) {
        if self.log_events {
            events::emit(event);
        }
        match self.collector.lock() {
            Ok(mut guard) => guard.record(event),
            Err(poisoned) => poisoned.into_inner().record(event),
        }
    }
}
