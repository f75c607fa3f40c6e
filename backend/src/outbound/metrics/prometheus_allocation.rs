//! Prometheus adapter for tenant key allocation metrics.

use async_trait::async_trait;
use prometheus::{IntCounterVec, Opts, Registry};

use crate::domain::ports::{AllocationMetrics, AllocationMetricsError};

/// Counter `menu_tenant_allocations_total`, labelled by `outcome`
/// (`allocated`, `collision` or `exhausted`).
pub struct PrometheusAllocationMetrics {
    allocations_total: IntCounterVec,
}

impl PrometheusAllocationMetrics {
    /// Create the counter and register it with `registry`.
    ///
    /// # Errors
    ///
    /// Fails when a metric with the same name is already registered.
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let allocations_total = IntCounterVec::new(
            Opts::new(
                "menu_tenant_allocations_total",
                "Tenant key allocation attempts by outcome",
            ),
            &["outcome"],
        )?;
        registry.register(Box::new(allocations_total.clone()))?;
        Ok(Self { allocations_total })
    }

    fn inc(&self, outcome: &str) {
        self.allocations_total.with_label_values(&[outcome]).inc();
    }
}

#[async_trait]
impl AllocationMetrics for PrometheusAllocationMetrics {
    async fn record_allocation(&self) -> Result<(), AllocationMetricsError> {
        self.inc("allocated");
        Ok(())
    }

    async fn record_collision(&self) -> Result<(), AllocationMetricsError> {
        self.inc("collision");
        Ok(())
    }

    async fn record_exhaustion(&self) -> Result<(), AllocationMetricsError> {
        self.inc("exhausted");
        Ok(())
    }
}
