// crates/portnav-core/src/text.rs

//! Text normalization and the one fuzzy-matching predicate.
//!
//! Every matcher in this crate funnels through [`match_key`] and
//! [`contains_either`]; changing how queries are compared against catalog
//! tokens means changing this module, not each resolver.

/// Convert a string into a folded key suitable for comparison.
///
/// 1\) Transliterate Unicode → ASCII (e.g. `Łódź` -> `Lodz`, `하네다` -> `haneda`)
/// 2\) Normalize to lowercase
///
/// The transliteration uses the `deunicode` crate, which also romanizes
/// Hangul syllable-by-syllable. Because both sides of every comparison are
/// folded with the same function, mixed-script queries ("하네다" against
/// "Haneda Airport") still land on a common key.
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after folding.
///
/// # Examples
///
/// ```
/// use portnav_core::text::equals_folded;
///
/// assert!(equals_folded("Łódź", "lodz"));
/// assert!(equals_folded("MÜNCHEN", "munchen"));
/// assert!(!equals_folded("Naples", "Nagasaki"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Folded key with all whitespace removed.
///
/// Whitespace is dropped so that spacing variants ("크루즈터미널" vs
/// "크루즈 터미널", "kai tak" vs "kaitak") compare equal, and so that the
/// syllable separators `deunicode` may emit for CJK text cannot break
/// containment checks.
pub fn match_key(s: &str) -> String {
    fold_key(s).split_whitespace().collect()
}

/// Bidirectional containment: true when either string contains the other.
///
/// This is the crate's sole fuzzy-matching strategy. It tolerates both
/// truncated queries ("하네다" against "하네다국제공항") and over-specified
/// ones ("하네다국제공항 도쿄" against "하네다공항") at the cost of the odd
/// false positive on very short tokens; downstream ranking absorbs those.
/// Empty strings never match.
pub fn contains_either(a: &str, b: &str) -> bool {
    !a.is_empty() && !b.is_empty() && (a.contains(b) || b.contains(a))
}

/// True when any token in `tokens` passes the bidirectional containment
/// test against `query_key`. `query_key` must already be a [`match_key`];
/// tokens are folded here.
pub fn tokens_match<'a, I>(tokens: I, query_key: &str) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    tokens
        .into_iter()
        .any(|tok| contains_either(&match_key(tok), query_key))
}
