//! PostgreSQL-backed `TenantRepository` implementation using Diesel.
//!
//! The table's primary key and the unique constraint on `owner_ref` are the
//! namespace's only guard. A unique violation is mapped by constraint name so
//! that the allocator can retry key collisions and reject duplicate owners.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{TenantRepository, TenantRepositoryError};
use crate::domain::{
    OwnerRef, Tenant, TenantDisplayName, TenantKey, TenantPlan, TenantValidationError,
};

use super::models::{NewTenantRow, TenantRow};
use super::pool::{DbPool, PoolError};
use super::schema::tenants;

const KEY_CONSTRAINT: &str = "tenants_pkey";
const OWNER_CONSTRAINT: &str = "tenants_owner_ref_key";

/// Diesel implementation of the [`TenantRepository`] port.
#[derive(Clone)]
pub struct DieselTenantRepository {
    pool: DbPool,
}

impl DieselTenantRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> TenantRepositoryError {
    TenantRepositoryError::connection(error.into_message())
}

fn map_diesel_error(error: DieselError) -> TenantRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                constraint = info.constraint_name(),
                "diesel operation failed"
            );
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            TenantRepositoryError::connection("database connection error")
        }
        DieselError::QueryBuilderError(_) => TenantRepositoryError::query("database query error"),
        _ => TenantRepositoryError::query("database error"),
    }
}

/// Like [`map_diesel_error`] but resolves unique violations against the row
/// being inserted.
fn map_insert_error(error: DieselError, tenant: &Tenant) -> TenantRepositoryError {
    if let DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) = &error {
        match info.constraint_name() {
            Some(KEY_CONSTRAINT) => {
                return TenantRepositoryError::key_taken(tenant.key().as_ref());
            }
            Some(OWNER_CONSTRAINT) => {
                return TenantRepositoryError::owner_taken(tenant.owner().as_ref());
            }
            _ => {}
        }
    }
    map_diesel_error(error)
}

fn corrupted(field: &str, err: &TenantValidationError) -> TenantRepositoryError {
    TenantRepositoryError::query(format!("invalid {field} in database: {err}"))
}

fn row_to_tenant(row: TenantRow) -> Result<Tenant, TenantRepositoryError> {
    let display_name =
        TenantDisplayName::new(&row.display_name).map_err(|err| corrupted("display name", &err))?;
    let owner = OwnerRef::new(&row.owner_ref).map_err(|err| corrupted("owner ref", &err))?;
    let plan = row
        .plan
        .parse::<TenantPlan>()
        .map_err(|err| corrupted("plan", &err))?;
    Ok(Tenant::new(
        TenantKey::from_stored(row.tenant_key),
        display_name,
        owner,
        plan,
        row.created_at,
    ))
}

#[async_trait]
impl TenantRepository for DieselTenantRepository {
    async fn find_by_key(&self, key: &TenantKey) -> Result<Option<Tenant>, TenantRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<TenantRow> = tenants::table
            .find(key.as_ref())
            .select(TenantRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_tenant).transpose()
    }

    async fn find_by_owner(
        &self,
        owner: &OwnerRef,
    ) -> Result<Option<Tenant>, TenantRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<TenantRow> = tenants::table
            .filter(tenants::owner_ref.eq(owner.as_ref()))
            .select(TenantRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_tenant).transpose()
    }

    async fn insert(&self, tenant: &Tenant) -> Result<(), TenantRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewTenantRow {
            tenant_key: tenant.key().as_ref(),
            display_name: tenant.display_name().as_ref(),
            owner_ref: tenant.owner().as_ref(),
            plan: tenant.plan().as_str(),
            created_at: tenant.created_at(),
        };
        diesel::insert_into(tenants::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_insert_error(err, tenant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use diesel::result::DatabaseErrorInformation;
    use rstest::{fixture, rstest};

    struct ConstraintViolation(Option<&'static str>);

    impl DatabaseErrorInformation for ConstraintViolation {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint"
        }
        fn details(&self) -> Option<&str> {
            None
        }
        fn hint(&self) -> Option<&str> {
            None
        }
        fn table_name(&self) -> Option<&str> {
            Some("tenants")
        }
        fn column_name(&self) -> Option<&str> {
            None
        }
        fn constraint_name(&self) -> Option<&str> {
            self.0
        }
        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn unique_violation(constraint: Option<&'static str>) -> DieselError {
        DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new(ConstraintViolation(constraint)),
        )
    }

    #[fixture]
    fn tenant() -> Tenant {
        Tenant::new(
            TenantKey::parse("my-cafe_482193").expect("key"),
            TenantDisplayName::new("My Cafe").expect("name"),
            OwnerRef::new("owner-1").expect("owner"),
            TenantPlan::Free,
            Utc.with_ymd_and_hms(2026, 1, 12, 9, 0, 0)
                .single()
                .expect("timestamp"),
        )
    }

    #[rstest]
    fn key_constraint_maps_to_key_taken(tenant: Tenant) {
        let err = map_insert_error(unique_violation(Some(KEY_CONSTRAINT)), &tenant);
        assert_eq!(err, TenantRepositoryError::key_taken("my-cafe_482193"));
    }

    #[rstest]
    fn owner_constraint_maps_to_owner_taken(tenant: Tenant) {
        let err = map_insert_error(unique_violation(Some(OWNER_CONSTRAINT)), &tenant);
        assert_eq!(err, TenantRepositoryError::owner_taken("owner-1"));
    }

    #[rstest]
    fn unnamed_unique_violation_is_a_query_error(tenant: Tenant) {
        let err = map_insert_error(unique_violation(None), &tenant);
        assert!(matches!(err, TenantRepositoryError::Query { .. }));
    }

    #[rstest]
    fn closed_connection_maps_to_connection_error() {
        let err = map_diesel_error(DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection".to_owned()),
        ));
        assert!(matches!(err, TenantRepositoryError::Connection { .. }));
    }

    #[rstest]
    fn pool_checkout_failure_maps_to_connection_error() {
        let err = map_pool_error(PoolError::checkout("timed out waiting for connection"));
        assert_eq!(
            err,
            TenantRepositoryError::connection("timed out waiting for connection")
        );
    }

    #[rstest]
    fn rows_round_trip_into_tenants(tenant: Tenant) {
        let row = TenantRow {
            tenant_key: "my-cafe_482193".to_owned(),
            display_name: "My Cafe".to_owned(),
            owner_ref: "owner-1".to_owned(),
            plan: "free".to_owned(),
            created_at: tenant.created_at(),
        };
        assert_eq!(row_to_tenant(row).expect("valid row"), tenant);
    }

    #[rstest]
    fn unknown_plan_in_row_is_reported(tenant: Tenant) {
        let row = TenantRow {
            tenant_key: tenant.key().to_string(),
            display_name: "My Cafe".to_owned(),
            owner_ref: "owner-1".to_owned(),
            plan: "platinum".to_owned(),
            created_at: tenant.created_at(),
        };
        let err = row_to_tenant(row).expect_err("unknown plan");
        assert!(err.to_string().contains("invalid plan"));
    }
}
