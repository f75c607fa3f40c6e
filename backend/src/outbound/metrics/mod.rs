//! Prometheus exporters for domain metrics ports. Enabled by the `metrics`
//! feature.

mod prometheus_allocation;

pub use prometheus_allocation::PrometheusAllocationMetrics;
