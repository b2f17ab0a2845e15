// crates/portnav-core/src/model.rs

use serde::{Deserialize, Serialize};

use crate::text::match_key;

/// Markers that identify a place as an airport. Checked against the id and
/// the romanized name (folded) and the localized name (raw).
const AIRPORT_ID_MARKERS: &[&str] = &["airport"];
const AIRPORT_NAME_KO_MARKERS: &[&str] = &["공항"];

/// Markers that identify a place as a cruise port/terminal.
const CRUISE_ID_MARKERS: &[&str] = &["cruise", "port", "terminal", "pier"];
const CRUISE_NAME_KO_MARKERS: &[&str] = &["크루즈", "터미널", "부두", "여객"];

/// Military installations are catalogued (they share harbours with civilian
/// terminals in the source data) but must never surface in results.
const MILITARY_NAME_MARKERS: &[&str] = &[
    "naval", "navy", "military", "air base", "airbase", "army", "marine corps",
];
const MILITARY_NAME_KO_MARKERS: &[&str] = &["군항", "군사", "기지", "해군", "공군", "육군", "해병"];

/// One catalog entry: a real-world airport or cruise port/terminal.
///
/// The catalog is immutable after load; a `Place` is never created or
/// mutated at runtime. `kind` is not stored — it is derived from the id and
/// names via [`Place::is_airport`] / [`Place::is_cruise_terminal`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    /// Stable unique identifier, e.g. `kai_tak_cruise_terminal`.
    pub id: String,
    /// Canonical romanized/English name. Always non-empty.
    pub name: String,
    /// Localized (Korean) display name, when the dataset carries one.
    #[serde(default)]
    pub name_ko: Option<String>,
    /// Extra search strings: aliases, slang, IATA codes, abbreviations.
    #[serde(default)]
    pub keywords_ko: Vec<String>,
    #[serde(default)]
    pub city: Option<String>,
    /// ISO2-style country code; validated against the country table at load.
    pub country: String,
}

impl Place {
    /// The searchable string set for this place: name, localized name, city
    /// and every keyword, with absent fields omitted. This is the single
    /// substrate every resolver matches against.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str())
            .chain(self.name_ko.as_deref())
            .chain(self.city.as_deref())
            .chain(self.keywords_ko.iter().map(String::as_str))
    }

    /// Localized display name when present, else the romanized name.
    pub fn display_name(&self) -> &str {
        self.name_ko.as_deref().unwrap_or(&self.name)
    }

    pub fn is_airport(&self) -> bool {
        let id = match_key(&self.id);
        if AIRPORT_ID_MARKERS.iter().any(|m| id.contains(m)) {
            return true;
        }
        let name = match_key(&self.name);
        if AIRPORT_ID_MARKERS.iter().any(|m| name.contains(m)) {
            return true;
        }
        self.name_ko
            .as_deref()
            .is_some_and(|ko| AIRPORT_NAME_KO_MARKERS.iter().any(|m| ko.contains(m)))
    }

    /// Airports and cruise terminals are mutually exclusive: an id like
    /// `..._airport_pier` still counts as an airport.
    pub fn is_cruise_terminal(&self) -> bool {
        if self.is_airport() {
            return false;
        }
        let id = match_key(&self.id);
        if CRUISE_ID_MARKERS.iter().any(|m| id.contains(m)) {
            return true;
        }
        let name = match_key(&self.name);
        if CRUISE_ID_MARKERS.iter().any(|m| name.contains(m)) {
            return true;
        }
        self.name_ko
            .as_deref()
            .is_some_and(|ko| CRUISE_NAME_KO_MARKERS.iter().any(|m| ko.contains(m)))
    }

    pub fn is_military(&self) -> bool {
        let name = match_key(&self.name);
        if MILITARY_NAME_MARKERS
            .iter()
            .any(|m| name.contains(&match_key(m)))
        {
            return true;
        }
        self.name_ko
            .as_deref()
            .is_some_and(|ko| MILITARY_NAME_KO_MARKERS.iter().any(|m| ko.contains(m)))
    }
}

/// A display-ready resolver result. Transient — never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub id: String,
    /// Display string: localized name preferred, possibly decorated with a
    /// kind suffix or a `· city` tail depending on the producing resolver.
    pub label: String,
    /// The string handed to the link builder. Always the romanized `name`
    /// so generated URLs stay stable across display-locale changes.
    pub query: String,
    pub country: Option<String>,
}

impl Candidate {
    pub(crate) fn new(place: &Place, label: String) -> Self {
        Candidate {
            id: place.id.clone(),
            label,
            query: place.name.clone(),
            country: Some(place.country.clone()),
        }
    }
}
