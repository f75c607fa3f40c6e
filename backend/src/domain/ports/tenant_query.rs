//! Driving port for read-only tenant lookups.
//!
//! Inbound adapters use this port for the availability pre-check and for the
//! public, unauthenticated resolution of a tenant key.

use async_trait::async_trait;

use crate::domain::{Availability, Error, Tenant};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TenantQuery: Send + Sync {
    /// Advisory check whether `candidate` is free. Reserves nothing.
    async fn check_availability(&self, candidate: &str) -> Result<Availability, Error>;

    /// Resolve a public key. A miss is `Ok(None)`.
    async fn resolve(&self, tenant_key: &str) -> Result<Option<Tenant>, Error>;

    /// The tenant belonging to `owner_ref`, if any.
    async fn owned_by(&self, owner_ref: &str) -> Result<Option<Tenant>, Error>;
}
