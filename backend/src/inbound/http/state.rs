//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on the tenant
//! driving ports, so they can be tested against mocks without any I/O.

use std::sync::Arc;

use crate::domain::ports::{TenantCommand, TenantQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub tenants: Arc<dyn TenantCommand>,
    pub tenant_queries: Arc<dyn TenantQuery>,
}

impl HttpState {
    pub fn new(tenants: Arc<dyn TenantCommand>, tenant_queries: Arc<dyn TenantQuery>) -> Self {
        Self {
            tenants,
            tenant_queries,
        }
    }

    /// Build state from one service implementing both ports.
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: TenantCommand + TenantQuery + 'static,
    {
        Self {
            tenants: service.clone(),
            tenant_queries: service,
        }
    }
}
