//! Slug normalisation and validation.
//!
//! Candidates arrive as free text. Normalisation trims surrounding
//! whitespace and lowercases; validation then restricts the result to
//! lowercase ASCII letters, digits and hyphens within [`MIN_SLUG_LEN`] and
//! [`MAX_SLUG_LEN`] characters.

/// Shortest candidate the allocator accepts.
pub const MIN_SLUG_LEN: usize = 3;
/// Longest candidate the allocator accepts.
pub const MAX_SLUG_LEN: usize = 50;

/// Trim and lowercase a candidate.
///
/// Applying it twice yields the same result as applying it once.
///
/// # Examples
/// ```
/// use menu_backend::domain::slug::normalize_candidate;
///
/// assert_eq!(normalize_candidate("  My Cafe "), "my cafe");
/// ```
#[must_use]
pub fn normalize_candidate(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Number of characters in an already normalised candidate.
pub(crate) fn slug_len(value: &str) -> usize {
    value.chars().count()
}

/// Return `true` when `value` is usable as the base of a tenant key.
pub(crate) fn is_valid_slug(value: &str) -> bool {
    is_trimmed_non_empty(value)
        && (MIN_SLUG_LEN..=MAX_SLUG_LEN).contains(&slug_len(value))
        && has_allowed_slug_chars(value)
}

fn is_trimmed_non_empty(value: &str) -> bool {
    !value.is_empty() && value.trim() == value
}

pub(crate) fn has_allowed_slug_chars(value: &str) -> bool {
    value.chars().all(is_slug_char)
}

fn is_slug_char(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-'
}

/// Derive a candidate from a display name.
///
/// Lowercases, collapses every run of characters outside `[a-z0-9]` into a
/// single hyphen and strips leading and trailing hyphens. The output is a
/// suggestion only; it may still be too short to allocate.
///
/// # Examples
/// ```
/// use menu_backend::domain::slug::slugify;
///
/// assert_eq!(slugify("Chez Ana & Co."), "chez-ana-co");
/// ```
#[must_use]
pub fn slugify(display_name: &str) -> String {
    let mut out = String::with_capacity(display_name.len());
    let mut pending_hyphen = false;
    for ch in display_name.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(ch);
        } else {
            pending_hyphen = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("My Cafe", "my cafe")]
    #[case("  Bistro-9\t", "bistro-9")]
    #[case("ÉCLAIR", "éclair")]
    #[case("", "")]
    fn normalisation_trims_and_lowercases(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_candidate(raw), expected);
    }

    #[rstest]
    #[case("  Mixed CASE  ")]
    #[case("\u{130}stanbul")]
    #[case("already-normal")]
    fn normalisation_is_idempotent(#[case] raw: &str) {
        let once = normalize_candidate(raw);
        assert_eq!(normalize_candidate(&once), once);
    }

    #[rstest]
    #[case("abc", true)]
    #[case("my-cafe", true)]
    #[case("cafe42", true)]
    #[case("ab", false)]
    #[case("my cafe", false)]
    #[case("my_cafe", false)]
    #[case("Cafe", false)]
    #[case(" cafe", false)]
    fn validation_restricts_charset_and_length(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_valid_slug(value), expected);
    }

    #[rstest]
    fn validation_enforces_upper_bound() {
        assert!(is_valid_slug(&"a".repeat(MAX_SLUG_LEN)));
        assert!(!is_valid_slug(&"a".repeat(MAX_SLUG_LEN + 1)));
    }

    #[rstest]
    #[case("My Cafe", "my-cafe")]
    #[case("  --Le  Petit   Bistro!! ", "le-petit-bistro")]
    #[case("Caf\u{e9} 24/7", "caf-24-7")]
    #[case("!!!", "")]
    fn slugify_collapses_separators(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(slugify(name), expected);
    }
}
