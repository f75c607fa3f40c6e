//! Tenant aggregate.
//!
//! - [`SlugCandidate`], [`KeySuffix`], [`TenantKey`]: the parts of a public
//!   routing key.
//! - [`Tenant`] with its [`TenantDisplayName`], [`OwnerRef`] and
//!   [`TenantPlan`].
//! - [`Availability`]: advisory answer to "is this candidate free?".

mod availability;
mod key;
mod record;

pub use availability::{Availability, AvailabilityReason};
pub use key::{KeySuffix, SUFFIX_SPACE, SlugCandidate, TenantKey};
pub use record::{
    DISPLAY_NAME_MAX, DISPLAY_NAME_MIN, OWNER_REF_MAX, OwnerRef, Tenant, TenantDisplayName,
    TenantPlan,
};

/// Validation failures for tenant attributes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TenantValidationError {
    #[error("candidate key must not be empty")]
    EmptyCandidate,
    #[error("candidate key must be at least {min} characters")]
    CandidateTooShort { min: usize },
    #[error("candidate key must be at most {max} characters")]
    CandidateTooLong { max: usize },
    #[error("candidate key may only contain lowercase letters, digits, or hyphens")]
    CandidateInvalidCharacters,
    #[error("tenant key must not be empty")]
    EmptyKey,
    #[error("display name must not be empty")]
    EmptyDisplayName,
    #[error("display name must be at least {min} characters")]
    DisplayNameTooShort { min: usize },
    #[error("display name must be at most {max} characters")]
    DisplayNameTooLong { max: usize },
    #[error("owner reference must not be empty")]
    EmptyOwnerRef,
    #[error("owner reference must be at most {max} characters")]
    OwnerRefTooLong { max: usize },
    #[error("unknown plan `{plan}`")]
    UnknownPlan { plan: String },
}

impl TenantValidationError {
    /// Stable machine-readable code carried in error details.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyCandidate | Self::EmptyKey | Self::EmptyDisplayName | Self::EmptyOwnerRef => {
                "empty"
            }
            Self::CandidateTooShort { .. } | Self::DisplayNameTooShort { .. } => "too_short",
            Self::CandidateTooLong { .. }
            | Self::DisplayNameTooLong { .. }
            | Self::OwnerRefTooLong { .. } => "too_long",
            Self::CandidateInvalidCharacters => "invalid_characters",
            Self::UnknownPlan { .. } => "unknown_plan",
        }
    }
}
