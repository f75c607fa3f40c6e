//! Port abstraction for tenant persistence.
//!
//! Storage is the only place the tenant namespace lives. Adapters must make
//! `insert` atomic with respect to both the key and the owner uniqueness
//! constraints and report a violation through the dedicated variants so the
//! allocator can tell a key collision from a duplicate owner.

use async_trait::async_trait;

use crate::domain::{OwnerRef, Tenant, TenantKey};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by tenant repository adapters.
    pub enum TenantRepositoryError {
        /// Storage could not be reached or a connection could not be checked out.
        Connection { message: String } => "tenant repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "tenant repository query failed: {message}",
        /// Another tenant already holds the key.
        KeyTaken { key: String } => "tenant key already taken: {key}",
        /// The owner already has a tenant.
        OwnerTaken { owner: String } => "owner already has a tenant: {owner}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TenantRepository: Send + Sync {
    /// Exact-match point lookup by key.
    async fn find_by_key(&self, key: &TenantKey) -> Result<Option<Tenant>, TenantRepositoryError>;

    /// Lookup of the tenant owned by `owner`.
    async fn find_by_owner(&self, owner: &OwnerRef)
    -> Result<Option<Tenant>, TenantRepositoryError>;

    /// Create the record in a single write.
    async fn insert(&self, tenant: &Tenant) -> Result<(), TenantRepositoryError>;
}
