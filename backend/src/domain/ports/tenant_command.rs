//! Driving port for tenant creation.

use async_trait::async_trait;

use crate::domain::{Error, Tenant};

/// Unvalidated registration input as received from a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterTenantRequest {
    pub display_name: String,
    pub candidate_key: String,
    pub owner_ref: String,
}

/// Use-case port for registering a tenant and allocating its key.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TenantCommand: Send + Sync {
    /// Validate the request, allocate a unique key and persist the tenant.
    ///
    /// Fails with `invalid_request` before storage is touched when any field
    /// is invalid, `conflict` when the owner already has a tenant and
    /// `namespace_exhausted` when every allocation attempt collided.
    async fn register(&self, request: RegisterTenantRequest) -> Result<Tenant, Error>;
}
