//! Domain primitives, the tenant aggregate and the allocator service.
//!
//! Purpose: own the tenant namespace rules without depending on HTTP or
//! database crates. Adapters talk to the domain through [`ports`].
//!
//! Public surface:
//! - [`Error`] and [`ErrorCode`]: transport agnostic failure payload.
//! - [`TenantKey`], [`SlugCandidate`], [`KeySuffix`]: key building blocks.
//! - [`Tenant`] and its attribute types.
//! - [`TenantService`]: implementation of the tenant driving ports.
//! - [`TraceId`]: request correlation identifier.

pub mod error;
pub mod ports;
pub mod slug;
pub mod tenant;
pub mod tenant_service;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::tenant::{
    Availability, AvailabilityReason, DISPLAY_NAME_MAX, DISPLAY_NAME_MIN, KeySuffix,
    OWNER_REF_MAX, OwnerRef, SUFFIX_SPACE, SlugCandidate, Tenant, TenantDisplayName, TenantKey,
    TenantPlan, TenantValidationError,
};
pub use self::tenant_service::{DEFAULT_ALLOCATION_ATTEMPTS, TenantService};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
