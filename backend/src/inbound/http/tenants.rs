//! Tenant API handlers.
//!
//! ```text
//! GET  /api/v1/tenants/availability?candidate=my-cafe
//! GET  /api/v1/tenants/suggestion?displayName=My%20Cafe
//! POST /api/v1/tenants {"displayName":"My Cafe","candidateKey":"my-cafe","ownerRef":"owner-1"}
//! GET  /api/v1/tenants/my-cafe_482193
//! GET  /api/v1/owners/owner-1/tenant
//! ```

use actix_web::{HttpResponse, get, http::header, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::RegisterTenantRequest;
use crate::domain::slug::slugify;
use crate::domain::{Availability, Error, Tenant};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Query for `GET /api/v1/tenants/availability`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AvailabilityQuery {
    /// Free-text candidate. Missing is treated as empty.
    pub candidate: Option<String>,
}

/// Advisory availability answer. Reserves nothing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AvailabilityResponse {
    pub available: bool,
    /// `Too short`, `Already taken` or `Available`.
    #[schema(example = "Available")]
    pub reason: String,
}

impl From<Availability> for AvailabilityResponse {
    fn from(value: Availability) -> Self {
        Self {
            available: value.is_available(),
            reason: value.reason().message().to_owned(),
        }
    }
}

/// Query for `GET /api/v1/tenants/suggestion`.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct SuggestionQuery {
    pub display_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuggestionResponse {
    #[schema(example = "my-cafe")]
    pub candidate: String,
}

/// Request body for `POST /api/v1/tenants`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTenantBody {
    #[schema(example = "My Cafe")]
    pub display_name: String,
    #[schema(example = "my-cafe")]
    pub candidate_key: String,
    #[schema(example = "auth0|5f7c8ec7c33c6c004bbafe82")]
    pub owner_ref: String,
}

impl From<RegisterTenantBody> for RegisterTenantRequest {
    fn from(value: RegisterTenantBody) -> Self {
        Self {
            display_name: value.display_name,
            candidate_key: value.candidate_key,
            owner_ref: value.owner_ref,
        }
    }
}

/// Public tenant record.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TenantResponse {
    #[schema(example = "my-cafe_482193")]
    pub tenant_key: String,
    pub display_name: String,
    pub owner_ref: String,
    #[schema(example = "free")]
    pub plan: String,
    pub created_at: DateTime<Utc>,
}

impl From<Tenant> for TenantResponse {
    fn from(value: Tenant) -> Self {
        Self {
            tenant_key: value.key().to_string(),
            display_name: value.display_name().to_string(),
            owner_ref: value.owner().to_string(),
            plan: value.plan().as_str().to_owned(),
            created_at: value.created_at(),
        }
    }
}

/// Mount the tenant routes. Literal segments are registered before
/// `/tenants/{tenant_key}` so they are not captured as keys.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(check_availability)
        .service(suggest_candidate)
        .service(register_tenant)
        .service(resolve_tenant)
        .service(owner_tenant);
}

/// Check whether a candidate is free.
#[utoipa::path(
    get,
    path = "/api/v1/tenants/availability",
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "Availability answer", body = AvailabilityResponse),
        (status = 503, description = "Storage unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["tenants"],
    operation_id = "checkTenantAvailability"
)]
#[get("/tenants/availability")]
pub async fn check_availability(
    state: web::Data<HttpState>,
    query: web::Query<AvailabilityQuery>,
) -> ApiResult<web::Json<AvailabilityResponse>> {
    let candidate = query.into_inner().candidate.unwrap_or_default();
    let availability = state.tenant_queries.check_availability(&candidate).await?;
    Ok(web::Json(availability.into()))
}

/// Derive a candidate from a display name. Reserves nothing.
#[utoipa::path(
    get,
    path = "/api/v1/tenants/suggestion",
    params(SuggestionQuery),
    responses(
        (status = 200, description = "Suggested candidate", body = SuggestionResponse)
    ),
    tags = ["tenants"],
    operation_id = "suggestTenantCandidate"
)]
#[get("/tenants/suggestion")]
pub async fn suggest_candidate(query: web::Query<SuggestionQuery>) -> web::Json<SuggestionResponse> {
    let display_name = query.into_inner().display_name.unwrap_or_default();
    web::Json(SuggestionResponse {
        candidate: slugify(&display_name),
    })
}

/// Register a tenant and allocate its permanent key.
#[utoipa::path(
    post,
    path = "/api/v1/tenants",
    request_body = RegisterTenantBody,
    responses(
        (status = 201, description = "Tenant created", body = TenantResponse,
            headers(("Location" = String, description = "Public URL of the tenant"))),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Owner already has a tenant, or namespace exhausted", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["tenants"],
    operation_id = "registerTenant"
)]
#[post("/tenants")]
pub async fn register_tenant(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterTenantBody>,
) -> ApiResult<HttpResponse> {
    let tenant = state
        .tenants
        .register(payload.into_inner().into())
        .await?;
    let location = format!("/api/v1/tenants/{}", tenant.key());
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(TenantResponse::from(tenant)))
}

/// Resolve a tenant by its public key. Unauthenticated.
#[utoipa::path(
    get,
    path = "/api/v1/tenants/{tenant_key}",
    params(("tenant_key" = String, Path, description = "Public tenant key")),
    responses(
        (status = 200, description = "Tenant", body = TenantResponse),
        (status = 404, description = "Unknown key", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["tenants"],
    operation_id = "resolveTenant"
)]
#[get("/tenants/{tenant_key}")]
pub async fn resolve_tenant(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<TenantResponse>> {
    let tenant_key = path.into_inner();
    state
        .tenant_queries
        .resolve(&tenant_key)
        .await?
        .map(|tenant| web::Json(tenant.into()))
        .ok_or_else(|| Error::not_found(format!("tenant {tenant_key} not found")))
}

/// Tenant owned by an account.
#[utoipa::path(
    get,
    path = "/api/v1/owners/{owner_ref}/tenant",
    params(("owner_ref" = String, Path, description = "Owning account reference")),
    responses(
        (status = 200, description = "Tenant", body = TenantResponse),
        (status = 400, description = "Invalid owner reference", body = ErrorSchema),
        (status = 404, description = "Owner has no tenant", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["tenants"],
    operation_id = "ownerTenant"
)]
#[get("/owners/{owner_ref}/tenant")]
pub async fn owner_tenant(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<TenantResponse>> {
    let owner_ref = path.into_inner();
    state
        .tenant_queries
        .owned_by(&owner_ref)
        .await?
        .map(|tenant| web::Json(tenant.into()))
        .ok_or_else(|| Error::not_found("owner has no tenant"))
}

#[cfg(test)]
#[path = "tenants_tests.rs"]
mod tests;
