//! In-process tenant store.
//!
//! Used when no database URL is configured and by tests. It enforces the same
//! two uniqueness constraints as the PostgreSQL table, atomically under one
//! lock, so allocator behaviour is identical across adapters. Contents are
//! lost on restart.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{TenantRepository, TenantRepositoryError};
use crate::domain::{OwnerRef, Tenant, TenantKey};

#[derive(Debug, Default)]
struct Namespace {
    by_key: HashMap<TenantKey, Tenant>,
    key_by_owner: HashMap<OwnerRef, TenantKey>,
}

/// Memory-backed implementation of the [`TenantRepository`] port.
#[derive(Debug, Default)]
pub struct InMemoryTenantRepository {
    namespace: Mutex<Namespace>,
}

impl InMemoryTenantRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored tenants.
    ///
    /// # Errors
    ///
    /// Returns [`TenantRepositoryError::Connection`] when the store lock is
    /// poisoned.
    pub fn len(&self) -> Result<usize, TenantRepositoryError> {
        Ok(self.lock()?.by_key.len())
    }

    /// # Errors
    ///
    /// Fails like [`Self::len`].
    pub fn is_empty(&self) -> Result<bool, TenantRepositoryError> {
        self.len().map(|len| len == 0)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Namespace>, TenantRepositoryError> {
        self.namespace
            .lock()
            .map_err(|_| TenantRepositoryError::connection("tenant store lock poisoned"))
    }
}

#[async_trait]
impl TenantRepository for InMemoryTenantRepository {
    async fn find_by_key(&self, key: &TenantKey) -> Result<Option<Tenant>, TenantRepositoryError> {
        Ok(self.lock()?.by_key.get(key).cloned())
    }

    async fn find_by_owner(
        &self,
        owner: &OwnerRef,
    ) -> Result<Option<Tenant>, TenantRepositoryError> {
        let ns = self.lock()?;
        Ok(ns
            .key_by_owner
            .get(owner)
            .and_then(|key| ns.by_key.get(key))
            .cloned())
    }

    async fn insert(&self, tenant: &Tenant) -> Result<(), TenantRepositoryError> {
        let mut ns = self.lock()?;
        if ns.by_key.contains_key(tenant.key()) {
            return Err(TenantRepositoryError::key_taken(tenant.key().as_ref()));
        }
        if ns.key_by_owner.contains_key(tenant.owner()) {
            return Err(TenantRepositoryError::owner_taken(tenant.owner().as_ref()));
        }
        ns.key_by_owner
            .insert(tenant.owner().clone(), tenant.key().clone());
        ns.by_key.insert(tenant.key().clone(), tenant.clone());
        Ok(())
    }
}
