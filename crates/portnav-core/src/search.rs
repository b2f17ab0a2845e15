// crates/portnav-core/src/search.rs

//! Origin and destination resolvers.
//!
//! Both are deterministic functions of (query text, optional hint, the
//! immutable catalog) — a linear scan with cheap per-item substring tests,
//! no I/O, no mutation.

use log::debug;

use crate::catalog::Catalog;
use crate::model::{Candidate, Place};
use crate::text::{match_key, tokens_match};

/// Cap for origin (airport) candidate lists.
pub const MAX_ORIGINS: usize = 8;
/// Cap for destination (port/terminal) candidate lists.
pub const MAX_DESTINATIONS: usize = 12;

/// Terms that make a destination query "generic": the user named a kind of
/// place, not a place. Configuration data, not a closed set — extend here
/// rather than in the resolvers.
pub const GENERIC_PORT_TERMS: &[&str] = &[
    "cruise", "terminal", "port", "pier",
    "크루즈", "터미널", "항구", "포트", "항만", "부두",
];

/// Strong terminal/port markers in romanized names.
const TERMINAL_NAME_MARKERS: &[&str] = &["cruise", "terminal", "port", "pier"];
/// Localized equivalents, checked against the localized name and keywords.
const TERMINAL_NAME_KO_MARKERS: &[&str] = &["크루즈", "터미널", "항구", "부두", "여객"];

fn is_generic_query(query_key: &str) -> bool {
    if query_key.is_empty() {
        return true;
    }
    GENERIC_PORT_TERMS.iter().any(|term| {
        let term_key = match_key(term);
        query_key == term_key || query_key.contains(&term_key)
    })
}

/// Specificity score used to break ties among country-filtered candidates:
/// places that are unambiguously terminal-type outrank places that merely
/// share a city or country.
fn specificity(place: &Place) -> i32 {
    let mut score = 0;

    let name = match_key(&place.name);
    if TERMINAL_NAME_MARKERS.iter().any(|m| name.contains(m)) {
        score += 2;
    }

    let localized_hit = place
        .name_ko
        .as_deref()
        .into_iter()
        .chain(place.keywords_ko.iter().map(String::as_str))
        .any(|s| TERMINAL_NAME_KO_MARKERS.iter().any(|m| s.contains(m)));
    if localized_hit {
        score += 2;
    }

    score
}

/// Display label for an airport candidate; appends " 공항" when the name
/// does not already say it is one.
fn airport_label(place: &Place) -> String {
    let label = place.display_name();
    if label.contains("공항") || match_key(label).contains("airport") {
        label.to_string()
    } else {
        format!("{label} 공항")
    }
}

/// Display label for a cruise-terminal candidate; appends " 크루즈 터미널"
/// when the name carries no terminal marker of its own.
fn terminal_label(place: &Place) -> String {
    let label = place.display_name();
    let key = match_key(label);
    if label.contains("크루즈")
        || label.contains("터미널")
        || key.contains("cruise")
        || key.contains("terminal")
    {
        label.to_string()
    } else {
        format!("{label} 크루즈 터미널")
    }
}

impl Catalog {
    /// Infer a country from free text that may not be a country name at all.
    ///
    /// Tries the alias table first; failing that, scans the catalog in order
    /// and returns the country of the first place whose token set passes the
    /// bidirectional containment test. Tolerates both truncated queries
    /// ("하네다") and verbose ones ("하네다국제공항 도쿄").
    pub fn country_from_text(&self, text: &str) -> Option<&str> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Some(code) = self.normalize_country(trimmed) {
            return Some(code);
        }

        let key = match_key(trimmed);
        self.places()
            .iter()
            .find(|p| tokens_match(p.tokens(), &key))
            .map(|p| p.country.as_str())
    }

    /// Ranked airport candidates for an origin query, capped at
    /// [`MAX_ORIGINS`].
    ///
    /// A query that is itself a country name means "show me all this
    /// country's airports" and bypasses text matching entirely. Otherwise
    /// airports are kept on a bidirectional token match, in catalog order —
    /// the per-country airport list is small enough that no further
    /// disambiguation is needed.
    pub fn find_origins(&self, query: &str) -> Vec<Candidate> {
        let trimmed = query.trim();

        if let Some(code) = self.normalize_country(trimmed) {
            debug!("origin query {trimmed:?} resolved to country {code}");
            return self
                .places()
                .iter()
                .filter(|p| p.is_airport() && !p.is_military() && p.country == code)
                .take(MAX_ORIGINS)
                .map(|p| Candidate::new(p, airport_label(p)))
                .collect();
        }

        let key = match_key(trimmed);
        if key.is_empty() {
            return Vec::new();
        }

        self.places()
            .iter()
            .filter(|p| p.is_airport() && !p.is_military() && tokens_match(p.tokens(), &key))
            .take(MAX_ORIGINS)
            .map(|p| Candidate::new(p, airport_label(p)))
            .collect()
    }

    /// Ranked port/terminal candidates for a destination query, capped at
    /// [`MAX_DESTINATIONS`].
    ///
    /// Country inference, in priority order: the origin hint as a country
    /// name, the origin hint as a place name, then the query itself both
    /// ways. An inferred country is a hard filter, not a soft boost — the
    /// already-chosen origin is the strongest signal for which country's
    /// ports are relevant.
    pub fn find_destinations(&self, query: &str, origin_hint: Option<&str>) -> Vec<Candidate> {
        let trimmed = query.trim();

        let country = origin_hint
            .and_then(|hint| self.country_from_text(hint))
            .or_else(|| self.country_from_text(trimmed));

        let query_key = match_key(trimmed);
        let query_country = self.normalize_country(trimmed);

        // A query that only names a country (or a generic kind of place)
        // wants the whole in-country list, not a text-filtered one.
        let generic =
            is_generic_query(&query_key) || (query_country.is_some() && query_country == country);
        if generic {
            debug!("destination query {trimmed:?} takes the generic bypass (country {country:?})");
        }

        let mut hits: Vec<(&Place, i32)> = self
            .places()
            .iter()
            .filter(|p| p.is_cruise_terminal() && !p.is_military())
            .filter(|p| country.is_none_or(|code| p.country == code))
            .filter(|p| generic || tokens_match(p.tokens(), &query_key))
            .map(|p| (p, specificity(p)))
            .collect();

        // Stable sort: ties keep catalog order.
        hits.sort_by_key(|(_, score)| std::cmp::Reverse(*score));
        hits.truncate(MAX_DESTINATIONS);

        hits.into_iter()
            .map(|(p, _)| Candidate::new(p, terminal_label(p)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_terms_cover_both_scripts() {
        assert!(is_generic_query(&match_key("크루즈 터미널")));
        assert!(is_generic_query(&match_key("cruise")));
        assert!(is_generic_query(&match_key("항구")));
        assert!(is_generic_query(&match_key("")));
        assert!(!is_generic_query(&match_key("카이탁")));
    }

    #[test]
    fn specificity_rewards_both_marker_kinds() {
        let marked = Place {
            id: "kai_tak_cruise_terminal".into(),
            name: "Kai Tak Cruise Terminal".into(),
            name_ko: Some("카이탁 크루즈 터미널".into()),
            keywords_ko: vec![],
            city: Some("Hong Kong".into()),
            country: "HK".into(),
        };
        let bare = Place {
            id: "some_quay".into(),
            name: "Some Quay".into(),
            name_ko: Some("어느 선착장".into()),
            keywords_ko: vec![],
            city: Some("Hong Kong".into()),
            country: "HK".into(),
        };
        assert_eq!(specificity(&marked), 4);
        assert_eq!(specificity(&bare), 0);
    }

    #[test]
    fn labels_get_kind_suffix_only_when_missing() {
        let airport = Place {
            id: "hnd_airport".into(),
            name: "Haneda Airport".into(),
            name_ko: Some("하네다 공항".into()),
            keywords_ko: vec![],
            city: None,
            country: "JP".into(),
        };
        assert_eq!(airport_label(&airport), "하네다 공항");

        let bare = Place {
            id: "portmiami".into(),
            name: "PortMiami".into(),
            name_ko: Some("포트마이애미".into()),
            keywords_ko: vec![],
            city: Some("Miami".into()),
            country: "US".into(),
        };
        assert_eq!(terminal_label(&bare), "포트마이애미 크루즈 터미널");

        let marked = Place {
            id: "manhattan_cruise_terminal".into(),
            name: "Manhattan Cruise Terminal".into(),
            name_ko: Some("맨해튼 크루즈 터미널".into()),
            keywords_ko: vec![],
            city: Some("New York".into()),
            country: "US".into(),
        };
        assert_eq!(terminal_label(&marked), "맨해튼 크루즈 터미널");
    }
}
