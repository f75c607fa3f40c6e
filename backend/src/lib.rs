//! Tenant key allocation for the digital menu service.
//!
//! Restaurants register a tenant and receive a permanent public key of the
//! form `{slug}_{six digits}`. Public menu pages resolve tenants by that key.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
