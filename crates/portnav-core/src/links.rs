// crates/portnav-core/src/links.rs

//! Navigation URL formatting. Pure string building — the crate never
//! performs a network call; callers hand these URLs to the UI layer.

use serde::Serialize;
use urlencoding::encode;

const DIR_BASE: &str = "https://www.google.com/maps/dir/?api=1";
const SEARCH_BASE: &str = "https://www.google.com/maps/search/?api=1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelMode {
    Driving,
    Transit,
    Walking,
}

impl TravelMode {
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Transit => "transit",
            TravelMode::Walking => "walking",
        }
    }
}

/// The three link variants offered for a resolved origin/destination pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteLinks {
    pub transit: String,
    pub driving: String,
    pub mapview: String,
}

/// Directions URL for one travel mode. Both endpoints are free text and are
/// percent-encoded.
pub fn directions_url(origin: &str, destination: &str, mode: TravelMode) -> String {
    format!(
        "{DIR_BASE}&origin={}&destination={}&travelmode={}",
        encode(origin),
        encode(destination),
        mode.as_str()
    )
}

/// Plain map-view search URL for a place name or category phrase.
pub fn search_url(query: &str) -> String {
    format!("{SEARCH_BASE}&query={}", encode(query))
}

/// Build the full link set for an origin/destination pair: transit and
/// driving directions plus a map view of the destination.
pub fn route_links(origin: &str, destination: &str) -> RouteLinks {
    RouteLinks {
        transit: directions_url(origin, destination, TravelMode::Transit),
        driving: directions_url(origin, destination, TravelMode::Driving),
        mapview: search_url(destination),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_url_encodes_endpoints() {
        let url = directions_url(
            "Incheon International Airport",
            "Kai Tak Cruise Terminal",
            TravelMode::Transit,
        );
        assert!(url.starts_with("https://www.google.com/maps/dir/?api=1"));
        assert!(url.contains("origin=Incheon%20International%20Airport"));
        assert!(url.contains("destination=Kai%20Tak%20Cruise%20Terminal"));
        assert!(url.ends_with("travelmode=transit"));
    }

    #[test]
    fn search_url_encodes_query() {
        assert_eq!(
            search_url("tourist attraction"),
            "https://www.google.com/maps/search/?api=1&query=tourist%20attraction"
        );
    }

    #[test]
    fn non_ascii_is_percent_encoded() {
        let url = search_url("하네다 공항");
        assert!(!url.contains('하'));
        assert!(url.contains('%'));
    }

    #[test]
    fn route_links_cover_all_three_modes() {
        let links = route_links("하네다 공항", "Yokohama Osanbashi Pier");
        assert!(links.transit.contains("travelmode=transit"));
        assert!(links.driving.contains("travelmode=driving"));
        assert!(links.mapview.contains("query=Yokohama%20Osanbashi%20Pier"));
    }
}
