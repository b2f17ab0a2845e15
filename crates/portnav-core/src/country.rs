// crates/portnav-core/src/country.rs

//! Country alias table: free text (native name, English name, code or a
//! listed alias) → canonical ISO2-style code.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{CatalogError, Result};
use crate::text::match_key;

/// One country in the bundled table.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryEntry {
    /// Canonical code, e.g. "US", "JP", "HK".
    pub code: String,
    /// English name.
    pub name: String,
    /// Localized (Korean) name.
    pub name_ko: String,
    /// Additional aliases: older spellings, short forms, slang.
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Immutable lookup table from folded alias keys to country codes.
///
/// Built once at load time; lookups are case-insensitive,
/// whitespace-normalized and accent-folded (see [`crate::text::match_key`]).
#[derive(Debug, Clone)]
pub struct CountryTable {
    entries: Vec<CountryEntry>,
    index: HashMap<String, usize>,
}

impl CountryTable {
    /// Build and validate the table. Rejects duplicate codes and any alias
    /// key that would resolve to two different countries.
    pub fn from_entries(entries: Vec<CountryEntry>) -> Result<Self> {
        let mut index: HashMap<String, usize> = HashMap::new();

        for (i, entry) in entries.iter().enumerate() {
            if entry.code.trim().is_empty() {
                return Err(CatalogError::Invalid(format!(
                    "country entry {i} has an empty code"
                )));
            }

            let keys = std::iter::once(entry.code.as_str())
                .chain([entry.name.as_str(), entry.name_ko.as_str()])
                .chain(entry.aliases.iter().map(String::as_str));

            for key in keys {
                let folded = match_key(key);
                if folded.is_empty() {
                    return Err(CatalogError::Invalid(format!(
                        "country {} has an empty alias", entry.code
                    )));
                }
                if let Some(&prev) = index.get(&folded) {
                    if entries[prev].code != entry.code {
                        return Err(CatalogError::Invalid(format!(
                            "alias {key:?} maps to both {} and {}",
                            entries[prev].code, entry.code
                        )));
                    }
                    continue;
                }
                index.insert(folded, i);
            }
        }

        Ok(CountryTable { entries, index })
    }

    /// Map free text to a canonical country code.
    ///
    /// Trims, folds and looks the text up against every code, name and
    /// alias. Returns `None` on no match — never errors.
    pub fn normalize(&self, text: &str) -> Option<&str> {
        let key = match_key(text.trim());
        if key.is_empty() {
            return None;
        }
        self.index.get(&key).map(|&i| self.entries[i].code.as_str())
    }

    /// True when `code` is a canonical code in this table.
    pub fn contains_code(&self, code: &str) -> bool {
        self.entries.iter().any(|e| e.code.eq_ignore_ascii_case(code))
    }

    /// Localized display name for a canonical code, if known.
    pub fn display_name(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.code.eq_ignore_ascii_case(code))
            .map(|e| e.name_ko.as_str())
    }

    pub fn entries(&self) -> &[CountryEntry] {
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

    fn table() -> CountryTable {
        let entries: Vec<CountryEntry> = serde_json::from_str(
            r#"[
                {"code":"US","name":"United States","name_ko":"미국","aliases":["usa","america"]},
                {"code":"JP","name":"Japan","name_ko":"일본","aliases":[]},
                {"code":"HK","name":"Hong Kong","name_ko":"홍콩","aliases":["hongkong"]}
            ]"#,
        )
        .unwrap();
        CountryTable::from_entries(entries).unwrap()
    }

    #[test]
    fn normalizes_code_name_and_alias() {
        let t = table();
        assert_eq!(t.normalize("US"), Some("US"));
        assert_eq!(t.normalize("united states"), Some("US"));
        assert_eq!(t.normalize("미국"), Some("US"));
        assert_eq!(t.normalize("America"), Some("US"));
        assert_eq!(t.normalize("홍콩"), Some("HK"));
        assert_eq!(t.normalize("Hong Kong"), Some("HK"));
    }

    #[test]
    fn trims_and_ignores_case_and_spacing() {
        let t = table();
        assert_eq!(t.normalize("  UNITED   STATES "), Some("US"));
        assert_eq!(t.normalize("hong  kong"), Some("HK"));
    }

    #[test]
    fn unknown_and_empty_return_none() {
        let t = table();
        assert_eq!(t.normalize("atlantis"), None);
        assert_eq!(t.normalize(""), None);
        assert_eq!(t.normalize("   "), None);
    }

    #[test]
    fn rejects_conflicting_alias() {
        let entries = vec![
            CountryEntry {
                code: "US".into(),
                name: "United States".into(),
                name_ko: "미국".into(),
                aliases: vec!["states".into()],
            },
            CountryEntry {
                code: "MX".into(),
                name: "Mexico".into(),
                name_ko: "멕시코".into(),
                aliases: vec!["states".into()],
            },
        ];
        assert!(CountryTable::from_entries(entries).is_err());
    }

    #[test]
    fn rejects_empty_code() {
        let entries = vec![CountryEntry {
            code: "  ".into(),
            name: "Nowhere".into(),
            name_ko: "어디에도".into(),
            aliases: vec![],
        }];
        assert!(CountryTable::from_entries(entries).is_err());
    }
}
