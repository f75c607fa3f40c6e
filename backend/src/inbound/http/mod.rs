//! HTTP inbound adapter exposing the tenant REST endpoints.

pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod tenants;

use actix_web::web;

use crate::domain::Error;

pub use error::ApiResult;

/// JSON extractor settings: malformed bodies become `invalid_request`
/// errors in the standard envelope instead of actix's plain-text reply.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(16 * 1024)
        .error_handler(|err, _req| Error::invalid_request(format!("invalid JSON body: {err}")).into())
}

/// Query extractor settings mirroring [`json_config`].
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("invalid query string: {err}")).into()
    })
}
