//! Internal Diesel row structs. Never exposed outside the persistence module.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::tenants;

/// Row read from the `tenants` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tenants)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TenantRow {
    pub tenant_key: String,
    pub display_name: String,
    pub owner_ref: String,
    pub plan: String,
    pub created_at: DateTime<Utc>,
}

/// Row written when a tenant is created.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tenants)]
pub(crate) struct NewTenantRow<'a> {
    pub tenant_key: &'a str,
    pub display_name: &'a str,
    pub owner_ref: &'a str,
    pub plan: &'a str,
    pub created_at: DateTime<Utc>,
}
