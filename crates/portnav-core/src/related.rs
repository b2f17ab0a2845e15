// crates/portnav-core/src/related.rs

//! Related-places filter: a looser, supplementary resolver used to surface
//! "you might also mean" suggestions next to the primary results.
//!
//! Unlike the destination resolver it narrows progressively instead of
//! scoring, and sorts by display label so the list reads as an
//! alphabetically sensible menu rather than a best-match ranking.

use std::collections::HashSet;

use log::debug;

use crate::catalog::Catalog;
use crate::model::{Candidate, Place};
use crate::text::{match_key, tokens_match};

/// Default cap for related-place lists.
pub const DEFAULT_RELATED_LIMIT: usize = 12;

/// When fewer than `min(BACKFILL_FLOOR, limit)` places survive filtering
/// and a country is known, the static country→ports table tops the list up.
const BACKFILL_FLOOR: usize = 6;

/// Inputs for [`Catalog::related_places`]. All filters are optional; an
/// absent filter narrows nothing.
#[derive(Debug, Clone, Default)]
pub struct RelatedQuery<'a> {
    /// Free text implying a country: a country name, alias, or a place name
    /// the country can be inferred from.
    pub country_hint: Option<&'a str>,
    /// Narrows to places whose city or names contain this hint.
    pub city_hint: Option<&'a str>,
    /// Free-text query matched against the token substrate.
    pub text: Option<&'a str>,
    /// Result cap; `None` means [`DEFAULT_RELATED_LIMIT`].
    pub limit: Option<usize>,
}

fn city_matches(place: &Place, hint_key: &str) -> bool {
    place
        .city
        .as_deref()
        .into_iter()
        .chain(place.name_ko.as_deref())
        .chain(std::iter::once(place.name.as_str()))
        .any(|s| match_key(s).contains(hint_key))
}

/// Label with the city tail the suggestion menu uses: "카이탁 크루즈 터미널 · Hong Kong".
fn related_label(place: &Place) -> String {
    match place.city.as_deref() {
        Some(city) => format!("{} · {}", place.display_name(), city),
        None => place.display_name().to_string(),
    }
}

impl Catalog {
    /// Supplementary suggestions: country → city hint → free text, each
    /// filter applied only when present. Results are deduplicated by id,
    /// sorted by label, capped at the caller's limit, and backfilled from
    /// the static country→ports table when too few survive.
    pub fn related_places(&self, query: &RelatedQuery<'_>) -> Vec<Candidate> {
        let limit = query.limit.unwrap_or(DEFAULT_RELATED_LIMIT);
        if limit == 0 {
            return Vec::new();
        }

        let country = query
            .country_hint
            .and_then(|hint| self.country_from_text(hint));

        let city_key = query
            .city_hint
            .map(|h| match_key(h.trim()))
            .filter(|k| !k.is_empty());
        let text_key = query
            .text
            .map(|t| match_key(t.trim()))
            .filter(|k| !k.is_empty());

        let mut base: Vec<&Place> = self
            .places()
            .iter()
            .filter(|p| !p.is_military())
            .filter(|p| country.is_none_or(|code| p.country == code))
            .filter(|p| {
                city_key
                    .as_deref()
                    .is_none_or(|key| city_matches(p, key))
            })
            .filter(|p| {
                text_key
                    .as_deref()
                    .is_none_or(|key| tokens_match(p.tokens(), key))
            })
            .collect();

        // Labels sort by code point, which is correct 가나다 order for
        // precomposed Hangul.
        base.sort_by_cached_key(|p| related_label(p));

        let mut seen = HashSet::new();
        let mut out: Vec<Candidate> = Vec::new();
        for place in base {
            if !seen.insert(place.id.as_str()) {
                continue;
            }
            out.push(Candidate::new(place, related_label(place)));
            if out.len() >= limit {
                break;
            }
        }

        if out.len() < BACKFILL_FLOOR.min(limit) {
            if let Some(code) = country {
                debug!(
                    "related places for {code}: {} primary hits, backfilling",
                    out.len()
                );
                for port in self.fallback_ports_for(code) {
                    if out.len() >= limit {
                        break;
                    }
                    if out.iter().any(|c| c.label.contains(&port.label)) {
                        continue;
                    }
                    out.push(Candidate {
                        id: format!("fallback-{}", port.value),
                        label: port.label.clone(),
                        query: port.value.clone(),
                        country: Some(code.to_string()),
                    });
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn related_label_appends_city() {
        let place = Place {
            id: "kai_tak_cruise_terminal".into(),
            name: "Kai Tak Cruise Terminal".into(),
            name_ko: Some("카이탁 크루즈 터미널".into()),
            keywords_ko: vec![],
            city: Some("Hong Kong".into()),
            country: "HK".into(),
        };
        assert_eq!(related_label(&place), "카이탁 크루즈 터미널 · Hong Kong");
    }

    #[test]
    fn city_hint_matches_across_scripts() {
        let place = Place {
            id: "ocean_terminal".into(),
            name: "Ocean Terminal, Tsim Sha Tsui".into(),
            name_ko: Some("오션 터미널".into()),
            keywords_ko: vec![],
            city: Some("Hong Kong".into()),
            country: "HK".into(),
        };
        // "홍콩" folds onto the romanized city name.
        assert!(city_matches(&place, &match_key("홍콩")));
        assert!(!city_matches(&place, &match_key("도쿄")));
    }
}
