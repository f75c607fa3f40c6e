//! Domain port for recording tenant key allocation outcomes.
//!
//! Collisions are expected under load and are the main signal that the
//! namespace for a popular candidate is getting crowded.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors exposed when recording allocation metrics.
    pub enum AllocationMetricsError {
        /// Metric exporter rejected the write.
        Export { message: String } => "allocation metrics exporter failed: {message}",
    }
}

#[async_trait]
pub trait AllocationMetrics: Send + Sync {
    /// A key was reserved.
    async fn record_allocation(&self) -> Result<(), AllocationMetricsError>;

    /// An insert hit an existing key and will be retried.
    async fn record_collision(&self) -> Result<(), AllocationMetricsError>;

    /// Every attempt collided.
    async fn record_exhaustion(&self) -> Result<(), AllocationMetricsError>;
}

/// Discards all measurements.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpAllocationMetrics;

#[async_trait]
impl AllocationMetrics for NoOpAllocationMetrics {
    async fn record_allocation(&self) -> Result<(), AllocationMetricsError> {
        Ok(())
    }

    async fn record_collision(&self) -> Result<(), AllocationMetricsError> {
        Ok(())
    }

    async fn record_exhaustion(&self) -> Result<(), AllocationMetricsError> {
        Ok(())
    }
}
