//! Source of disambiguating key suffixes.

use rand::Rng;

use crate::domain::{KeySuffix, SUFFIX_SPACE};

/// Draws suffixes for new tenant keys.
///
/// Each draw must be independent of earlier ones; the allocator relies on
/// the storage constraint, not on the source, for uniqueness.
#[cfg_attr(test, mockall::automock)]
pub trait KeySuffixSource: Send + Sync {
    fn draw(&self) -> KeySuffix;
}

/// Uniform draws from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomKeySuffixSource;

impl KeySuffixSource for RandomKeySuffixSource {
    fn draw(&self) -> KeySuffix {
        KeySuffix::wrapping(rand::thread_rng().gen_range(0..SUFFIX_SPACE))
    }
}
