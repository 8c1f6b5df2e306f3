//! # cardmap-observability
//!
//! Tracing subscriber setup, structured clustering events, and observers that turn
//! [`ClusteringEvent`](cardmap_core::traits::ClusteringEvent)s into log lines or
//! aggregated run metrics.

pub mod metrics;
pub mod observers;
pub mod tracing_setup;

pub use metrics::ClusteringMetricsCollector;
pub use observers::{MetricsObserver, TracingObserver};
pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};
