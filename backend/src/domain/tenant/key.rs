//! Tenant key primitives.
//!
//! A tenant key is a validated slug candidate joined to a six digit random
//! suffix, for example `my-cafe_482193`. Keys are minted only through
//! [`TenantKey::compose`]; [`TenantKey::parse`] exists for the lookup path and
//! performs normalisation without asserting the key was ever allocated.

use std::fmt;

use super::TenantValidationError;
use crate::domain::slug::{
    MAX_SLUG_LEN, MIN_SLUG_LEN, has_allowed_slug_chars, is_valid_slug, normalize_candidate,
    slug_len,
};

/// Exclusive upper bound of the random suffix.
pub const SUFFIX_SPACE: u32 = 1_000_000;

/// Normalised and validated base of a tenant key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlugCandidate(String);

impl SlugCandidate {
    /// Normalise `raw` and check it against the slug rules.
    ///
    /// # Examples
    /// ```
    /// use menu_backend::domain::SlugCandidate;
    ///
    /// let candidate = SlugCandidate::parse("  My-Cafe ").unwrap();
    /// assert_eq!(candidate.as_ref(), "my-cafe");
    /// assert!(SlugCandidate::parse("my cafe").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, TenantValidationError> {
        let normalized = normalize_candidate(raw);
        if normalized.is_empty() {
            return Err(TenantValidationError::EmptyCandidate);
        }
        let len = slug_len(&normalized);
        if len < MIN_SLUG_LEN {
            return Err(TenantValidationError::CandidateTooShort { min: MIN_SLUG_LEN });
        }
        if len > MAX_SLUG_LEN {
            return Err(TenantValidationError::CandidateTooLong { max: MAX_SLUG_LEN });
        }
        if !has_allowed_slug_chars(&normalized) {
            return Err(TenantValidationError::CandidateInvalidCharacters);
        }
        debug_assert!(is_valid_slug(&normalized));
        Ok(Self(normalized))
    }
}

impl AsRef<str> for SlugCandidate {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for SlugCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Disambiguating suffix in `0..1_000_000`, rendered zero-padded to six
/// digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySuffix(u32);

impl KeySuffix {
    /// Returns `None` when `value` falls outside the suffix space.
    #[must_use]
    pub fn new(value: u32) -> Option<Self> {
        (value < SUFFIX_SPACE).then_some(Self(value))
    }

    /// Fold any `u32` into the suffix space.
    #[must_use]
    pub const fn wrapping(value: u32) -> Self {
        Self(value % SUFFIX_SPACE)
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for KeySuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06}", self.0)
    }
}

/// Globally unique, immutable public routing key of a tenant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TenantKey(String);

impl TenantKey {
    /// Join a candidate and a suffix into a key.
    ///
    /// # Examples
    /// ```
    /// use menu_backend::domain::{KeySuffix, SlugCandidate, TenantKey};
    ///
    /// let base = SlugCandidate::parse("my-cafe").unwrap();
    /// let key = TenantKey::compose(&base, KeySuffix::new(4_821).unwrap());
    /// assert_eq!(key.as_ref(), "my-cafe_004821");
    /// ```
    #[must_use]
    pub fn compose(candidate: &SlugCandidate, suffix: KeySuffix) -> Self {
        Self(format!("{candidate}_{suffix}").to_lowercase())
    }

    /// Normalise a key received from a caller for lookup.
    ///
    /// Only emptiness is rejected. A well-formed but never allocated key is
    /// a miss at the storage layer, not a validation failure.
    pub fn parse(raw: &str) -> Result<Self, TenantValidationError> {
        let normalized = normalize_candidate(raw);
        if normalized.is_empty() {
            return Err(TenantValidationError::EmptyKey);
        }
        Ok(Self(normalized))
    }

    /// Rebuild a key read back from storage.
    pub(crate) fn from_stored(raw: String) -> Self {
        Self(raw)
    }
}

impl AsRef<str> for TenantKey {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for TenantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TenantKey> for String {
    fn from(value: TenantKey) -> Self {
        value.0
    }
}
