//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod allocation_metrics;
mod key_suffix_source;
mod tenant_command;
mod tenant_query;
mod tenant_repository;

pub use allocation_metrics::{AllocationMetrics, AllocationMetricsError, NoOpAllocationMetrics};
#[cfg(test)]
pub use key_suffix_source::MockKeySuffixSource;
pub use key_suffix_source::{KeySuffixSource, RandomKeySuffixSource};
#[cfg(test)]
pub use tenant_command::MockTenantCommand;
pub use tenant_command::{RegisterTenantRequest, TenantCommand};
#[cfg(test)]
pub use tenant_query::MockTenantQuery;
pub use tenant_query::TenantQuery;
#[cfg(test)]
pub use tenant_repository::MockTenantRepository;
pub use tenant_repository::{TenantRepository, TenantRepositoryError};
