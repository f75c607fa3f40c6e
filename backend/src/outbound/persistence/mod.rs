//! PostgreSQL persistence through Diesel.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! private to this module.
//!
//! ```ignore
//! use menu_backend::outbound::persistence::{DbPool, DieselTenantRepository, PoolConfig};
//!
//! run_pending_migrations(url).await?;
//! let pool = DbPool::new(PoolConfig::new(url)).await?;
//! let repo = DieselTenantRepository::new(pool);
//! ```

mod diesel_tenant_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_tenant_repository::DieselTenantRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
