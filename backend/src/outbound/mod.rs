//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: PostgreSQL through Diesel, with embedded migrations.
//! - **memory**: in-process store for development and tests.
//! - **metrics**: Prometheus exporters (feature-gated).
//!
//! Adapters only translate between domain types and infrastructure
//! representations.

pub mod memory;
#[cfg(feature = "metrics")]
pub mod metrics;
pub mod persistence;
