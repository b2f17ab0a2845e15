// crates/portnav-core/src/nearby.rs

//! Category vocabulary for "find something near me" queries.
//!
//! These queries name a kind of place ("카페", "편의점", "starbucks"), not a
//! catalog entry; the resolver maps them to a canonical map-search phrase.

use serde::Deserialize;

use crate::error::{CatalogError, Result};
use crate::text::match_key;

/// Fallback phrase when nothing in the vocabulary matches. The nearby flow
/// backs a button that must always produce something, so the resolver never
/// returns an empty phrase.
pub const DEFAULT_CATEGORY: &str = "tourist attraction";

/// Leading markers stripped before matching: "근처 식당" → "식당".
const NEAR_MARKERS: &[&str] = &["근처", "주변", "가까운", "nearby", "near"];

/// One vocabulary entry. `keywords` is ordered; the first keyword is the
/// outbound search phrase.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryEntry {
    pub label: String,
    pub keywords: Vec<String>,
}

/// Immutable, ordered category vocabulary. Order matters: the first entry
/// whose label is contained in the query wins.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    entries: Vec<CategoryEntry>,
}

impl CategoryTable {
    /// Build and validate: every entry needs at least one keyword, and no
    /// two entries may share a folded label.
    pub fn from_entries(entries: Vec<CategoryEntry>) -> Result<Self> {
        let mut seen = std::collections::HashSet::new();
        for entry in &entries {
            if entry.keywords.is_empty() {
                return Err(CatalogError::Invalid(format!(
                    "category {:?} has no keywords",
                    entry.label
                )));
            }
            let key = match_key(&entry.label);
            if key.is_empty() {
                return Err(CatalogError::Invalid("category with empty label".into()));
            }
            if !seen.insert(key) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate category label {:?}",
                    entry.label
                )));
            }
        }
        Ok(CategoryTable { entries })
    }

    /// Map free text to a canonical search phrase.
    ///
    /// Strips a leading near-marker, then returns the first keyword of the
    /// first category whose label is contained in the folded text. Falls
    /// back to [`DEFAULT_CATEGORY`]; never returns an empty string.
    pub fn resolve<'a>(&'a self, text: &str) -> &'a str {
        let mut t = text.trim();
        for marker in NEAR_MARKERS {
            if let Some(rest) = t.strip_prefix(marker) {
                t = rest.trim_start();
                break;
            }
        }

        let key = match_key(t);
        if key.is_empty() {
            return DEFAULT_CATEGORY;
        }

        self.entries
            .iter()
            .find(|e| key.contains(&match_key(&e.label)))
            .map(|e| e.keywords[0].as_str())
            .unwrap_or(DEFAULT_CATEGORY)
    }

    pub fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CategoryTable {
        let entries: Vec<CategoryEntry> = serde_json::from_str(
            r#"[
                {"label":"스타벅스","keywords":["Starbucks"]},
                {"label":"편의점","keywords":["convenience store","편의점"]},
                {"label":"카페","keywords":["cafe"]},
                {"label":"맛집","keywords":["restaurants"]},
                {"label":"관광지","keywords":["tourist attraction"]}
            ]"#,
        )
        .unwrap();
        CategoryTable::from_entries(entries).unwrap()
    }

    #[test]
    fn first_keyword_wins() {
        let t = table();
        assert_eq!(t.resolve("편의점"), "convenience store");
        assert_eq!(t.resolve("스타벅스"), "Starbucks");
    }

    #[test]
    fn near_prefix_is_stripped() {
        let t = table();
        assert_eq!(t.resolve("근처 맛집"), "restaurants");
        assert_eq!(t.resolve("주변 카페"), "cafe");
        assert_eq!(t.resolve("nearby cafe"), "cafe");
    }

    #[test]
    fn unknown_text_falls_back_to_default() {
        let t = table();
        assert_eq!(t.resolve("completely unknown gibberish"), DEFAULT_CATEGORY);
        assert_eq!(t.resolve(""), DEFAULT_CATEGORY);
        assert_eq!(t.resolve("   "), DEFAULT_CATEGORY);
        assert!(!t.resolve("whatever").is_empty());
    }

    #[test]
    fn label_matches_inside_longer_text() {
        let t = table();
        assert_eq!(t.resolve("괜찮은 카페 있어?"), "cafe");
    }

    #[test]
    fn validation_rejects_bad_entries() {
        assert!(CategoryTable::from_entries(vec![CategoryEntry {
            label: "카페".into(),
            keywords: vec![],
        }])
        .is_err());

        assert!(CategoryTable::from_entries(vec![
            CategoryEntry { label: "카페".into(), keywords: vec!["cafe".into()] },
            CategoryEntry { label: "카페".into(), keywords: vec!["coffee".into()] },
        ])
        .is_err());
    }
}
