//! OpenAPI schemas for domain types.
//!
//! Domain types do not derive `ToSchema`; these mirrors register their shape
//! with utoipa from the adapter layer.

use utoipa::ToSchema;

/// Stable machine-readable error codes.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    #[schema(rename = "not_found")]
    NotFound,
    #[schema(rename = "conflict")]
    Conflict,
    /// Every allocation attempt collided with an existing key.
    #[schema(rename = "namespace_exhausted")]
    NamespaceExhausted,
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    #[schema(rename = "internal_error")]
    InternalError,
}

/// Error response payload.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    #[schema(example = "conflict")]
    code: ErrorCodeSchema,
    #[schema(example = "owner already has a tenant")]
    message: String,
    #[schema(example = "6f1c2b9e-0d3a-4b8e-9a51-2f0c3e7d1a44")]
    trace_id: Option<String>,
    /// For validation failures: `{ "field": ..., "code": ... }`.
    details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    #[test]
    fn error_schema_uses_camel_case_trace_id() {
        let schema = serde_json::to_value(ErrorSchema::schema()).expect("schema serialises");
        let properties = schema
            .get("properties")
            .and_then(|value| value.as_object())
            .expect("object schema");
        assert!(properties.contains_key("traceId"));
        assert!(properties.contains_key("code"));
    }
}
