// crates/isocodes-core/src/text.rs

//! Text folding used for every comparison in the crate.
//!
//! Three levels, from weakest to strongest:
//! - [`normalize`]: strip combining marks after compatibility decomposition
//!   (case untouched)
//! - [`fold_case`]: trim + lowercase
//! - [`fold_key`]: trim + [`normalize`] + lowercase

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Removes diacritics: NFKD decomposition, then every combining mark is
/// dropped. Case is left unchanged.
///
/// The function is idempotent.
///
/// # Examples
///
/// ```rust
/// use isocodes_core::text::normalize;
///
/// assert_eq!(normalize("Réunion"), "Reunion");
/// assert_eq!(normalize("Åland"), "Aland");
/// assert_eq!(normalize(&normalize("Côte d'Ivoire")), normalize("Côte d'Ivoire"));
/// ```
pub fn normalize(s: &str) -> String {
    s.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Trims surrounding whitespace and lowercases.
pub fn fold_case(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Accent-insensitive and case-insensitive comparison key.
///
/// ```rust
/// use isocodes_core::text::fold_key;
///
/// assert_eq!(fold_key("  Île-de-France "), "ile-de-france");
/// ```
pub fn fold_key(s: &str) -> String {
    normalize(s.trim()).to_lowercase()
}
