//! Tenant record and its attribute types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use super::{TenantKey, TenantValidationError};

/// Minimum display name length after trimming.
pub const DISPLAY_NAME_MIN: usize = 2;
/// Maximum display name length after trimming.
pub const DISPLAY_NAME_MAX: usize = 50;
/// Maximum owner reference length.
pub const OWNER_REF_MAX: usize = 128;

/// Human-provided restaurant name. Not unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantDisplayName(String);

impl TenantDisplayName {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, TenantValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TenantValidationError::EmptyDisplayName);
        }
        let len = trimmed.chars().count();
        if len < DISPLAY_NAME_MIN {
            return Err(TenantValidationError::DisplayNameTooShort {
                min: DISPLAY_NAME_MIN,
            });
        }
        if len > DISPLAY_NAME_MAX {
            return Err(TenantValidationError::DisplayNameTooLong {
                max: DISPLAY_NAME_MAX,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for TenantDisplayName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for TenantDisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque reference to the owning account, issued by the identity provider.
///
/// The value is trimmed but otherwise kept verbatim; at most one tenant may
/// reference a given owner.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnerRef(String);

impl OwnerRef {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, TenantValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TenantValidationError::EmptyOwnerRef);
        }
        if trimmed.chars().count() > OWNER_REF_MAX {
            return Err(TenantValidationError::OwnerRefTooLong { max: OWNER_REF_MAX });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for OwnerRef {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for OwnerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Subscription plan of a tenant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TenantPlan {
    #[default]
    Free,
    Pro,
}

impl TenantPlan {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pro => "pro",
        }
    }
}

impl fmt::Display for TenantPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TenantPlan {
    type Err = TenantValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(Self::Free),
            "pro" => Ok(Self::Pro),
            other => Err(TenantValidationError::UnknownPlan {
                plan: other.to_owned(),
            }),
        }
    }
}

/// A restaurant tenant.
///
/// ## Invariants
/// - `key` never changes once the record exists.
/// - `owner` is unique across all tenants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tenant {
    key: TenantKey,
    display_name: TenantDisplayName,
    owner: OwnerRef,
    plan: TenantPlan,
    created_at: DateTime<Utc>,
}

impl Tenant {
    #[must_use]
    pub fn new(
        key: TenantKey,
        display_name: TenantDisplayName,
        owner: OwnerRef,
        plan: TenantPlan,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            key,
            display_name,
            owner,
            plan,
            created_at,
        }
    }

    pub fn key(&self) -> &TenantKey {
        &self.key
    }

    pub fn display_name(&self) -> &TenantDisplayName {
        &self.display_name
    }

    pub fn owner(&self) -> &OwnerRef {
        &self.owner
    }

    pub fn plan(&self) -> TenantPlan {
        self.plan
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("  Le Bistro ", Ok("Le Bistro"))]
    #[case("Al", Ok("Al"))]
    #[case(" A ", Err(TenantValidationError::DisplayNameTooShort { min: DISPLAY_NAME_MIN }))]
    #[case("\t", Err(TenantValidationError::EmptyDisplayName))]
    fn display_name_rules(
        #[case] raw: &str,
        #[case] expected: Result<&str, TenantValidationError>,
    ) {
        let result = TenantDisplayName::new(raw).map(|name| name.as_ref().to_owned());
        assert_eq!(result, expected.map(str::to_owned));
    }

    #[rstest]
    fn display_name_rejects_overlong_input() {
        let raw = "n".repeat(DISPLAY_NAME_MAX + 1);
        assert_eq!(
            TenantDisplayName::new(raw),
            Err(TenantValidationError::DisplayNameTooLong {
                max: DISPLAY_NAME_MAX
            })
        );
    }

    #[rstest]
    fn owner_ref_is_trimmed_but_case_preserved() {
        let owner = OwnerRef::new(" Auth0|AbC ").expect("valid owner");
        assert_eq!(owner.as_ref(), "Auth0|AbC");
    }

    #[rstest]
    #[case("", TenantValidationError::EmptyOwnerRef)]
    #[case("   ", TenantValidationError::EmptyOwnerRef)]
    fn owner_ref_rejects_blank(#[case] raw: &str, #[case] expected: TenantValidationError) {
        assert_eq!(OwnerRef::new(raw), Err(expected));
    }

    #[rstest]
    fn owner_ref_rejects_overlong() {
        let raw = "o".repeat(OWNER_REF_MAX + 1);
        assert_eq!(
            OwnerRef::new(raw),
            Err(TenantValidationError::OwnerRefTooLong { max: OWNER_REF_MAX })
        );
    }

    #[rstest]
    #[case("free", TenantPlan::Free)]
    #[case("pro", TenantPlan::Pro)]
    fn plan_parses_storage_values(#[case] raw: &str, #[case] expected: TenantPlan) {
        assert_eq!(raw.parse::<TenantPlan>(), Ok(expected));
        assert_eq!(expected.as_str(), raw);
    }

    #[rstest]
    fn plan_defaults_to_free_and_rejects_unknown() {
        assert_eq!(TenantPlan::default(), TenantPlan::Free);
        assert!("enterprise".parse::<TenantPlan>().is_err());
    }
}
