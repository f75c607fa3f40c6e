//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the tenant endpoints, the health probes and the
//! error envelope schema. The document backs Swagger UI in debug builds and
//! is exported by `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::tenants::{
    AvailabilityResponse, RegisterTenantBody, SuggestionResponse, TenantResponse,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Menu tenant API",
        description = "Tenant key allocation and public tenant resolution."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::tenants::check_availability,
        crate::inbound::http::tenants::suggest_candidate,
        crate::inbound::http::tenants::register_tenant,
        crate::inbound::http::tenants::resolve_tenant,
        crate::inbound::http::tenants::owner_tenant,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        AvailabilityResponse,
        SuggestionResponse,
        RegisterTenantBody,
        TenantResponse
    )),
    tags(
        (name = "tenants", description = "Tenant registration and resolution"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
