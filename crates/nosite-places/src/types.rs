//! Places API response types and the domain records derived from them.
//!
//! Every upstream response carries a top-level `"status"` string. Only
//! `"OK"` and `"ZERO_RESULTS"` are meaningful to the discovery engine;
//! every other value is a soft failure for that single call.

use nosite_core::{Category, Coordinate};
use serde::{Deserialize, Deserializer};

/// Classified value of the upstream `"status"` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiStatus {
    Ok,
    ZeroResults,
    /// `OVER_QUERY_LIMIT`, `REQUEST_DENIED`, `INVALID_REQUEST`, and so on.
    Other(String),
}

impl ApiStatus {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            ApiStatus::Ok => "OK",
            ApiStatus::ZeroResults => "ZERO_RESULTS",
            ApiStatus::Other(raw) => raw,
        }
    }
}

impl From<&str> for ApiStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "OK" => ApiStatus::Ok,
            "ZERO_RESULTS" => ApiStatus::ZeroResults,
            other => ApiStatus::Other(other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for ApiStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ApiStatus::from(raw.as_str()))
    }
}

impl std::fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Shared geometry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub location: Option<LatLng>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl From<LatLng> for Coordinate {
    fn from(value: LatLng) -> Self {
        Coordinate::new(value.lat, value.lng)
    }
}

fn location_of(geometry: Option<&Geometry>) -> Option<Coordinate> {
    geometry.and_then(|g| g.location).map(Coordinate::from)
}

// ---------------------------------------------------------------------------
// geocode/json
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    #[serde(default)]
    pub formatted_address: Option<String>,
    pub geometry: Geometry,
}

impl GeocodeResponse {
    /// The first result's coordinate when the lookup succeeded.
    #[must_use]
    pub fn first_coordinate(&self) -> Option<Coordinate> {
        if self.status != ApiStatus::Ok {
            return None;
        }
        self.results
            .first()
            .and_then(|r| location_of(Some(&r.geometry)))
    }
}

// ---------------------------------------------------------------------------
// place/nearbysearch/json
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct NearbySearchResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub results: Vec<NearbyPlace>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NearbyPlace {
    pub place_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub vicinity: Option<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

// ---------------------------------------------------------------------------
// place/details/json
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDetailsResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub result: Option<PlaceDetailsResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceDetailsResult {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

// ---------------------------------------------------------------------------
// Domain records
// ---------------------------------------------------------------------------

/// A place surfaced by one probe, before enrichment or qualification.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceCandidate {
    pub place_id: String,
    pub name: Option<String>,
    pub vicinity: Option<String>,
    pub approximate: Option<Coordinate>,
    pub category: Category,
}

impl PlaceCandidate {
    #[must_use]
    pub fn from_nearby(place: NearbyPlace, category: Category) -> Self {
        let approximate = location_of(place.geometry.as_ref());
        Self {
            place_id: place.place_id,
            name: place.name,
            vicinity: place.vicinity,
            approximate,
            category,
        }
    }
}

/// Full details for one place id.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceDetail {
    pub place_id: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub formatted_address: Option<String>,
    pub precise: Option<Coordinate>,
}

impl PlaceDetail {
    #[must_use]
    pub fn from_result(place_id: &str, result: PlaceDetailsResult) -> Self {
        let precise = location_of(result.geometry.as_ref());
        Self {
            place_id: place_id.to_string(),
            name: result.name,
            phone: result.formatted_phone_number,
            website: result.website,
            formatted_address: result.formatted_address,
            precise,
        }
    }

    /// `true` when a non-blank website is listed.
    #[must_use]
    pub fn has_website(&self) -> bool {
        self.website.as_deref().is_some_and(|w| !w.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classifies_known_and_unknown_values() {
        assert_eq!(ApiStatus::from("OK"), ApiStatus::Ok);
        assert_eq!(ApiStatus::from("ZERO_RESULTS"), ApiStatus::ZeroResults);
        assert_eq!(
            ApiStatus::from("OVER_QUERY_LIMIT"),
            ApiStatus::Other("OVER_QUERY_LIMIT".to_string())
        );
    }

    #[test]
    fn nearby_response_tolerates_missing_optional_fields() {
        let body = serde_json::json!({
            "status": "OK",
            "results": [
                { "place_id": "abc" },
                {
                    "place_id": "def",
                    "name": "Corner Cafe",
                    "vicinity": "1 Main St",
                    "geometry": { "location": { "lat": 1.5, "lng": -2.5 } }
                }
            ]
        });
        let parsed: NearbySearchResponse = serde_json::from_value(body).expect("parse");
        assert_eq!(parsed.status, ApiStatus::Ok);
        assert_eq!(parsed.results.len(), 2);

        let bare = PlaceCandidate::from_nearby(parsed.results[0].clone(), Category::Cafe);
        assert!(bare.approximate.is_none());
        assert!(bare.name.is_none());

        let full = PlaceCandidate::from_nearby(parsed.results[1].clone(), Category::Cafe);
        assert_eq!(full.approximate, Some(Coordinate::new(1.5, -2.5)));
        assert_eq!(full.vicinity.as_deref(), Some("1 Main St"));
    }

    #[test]
    fn zero_results_response_without_results_array_parses() {
        let parsed: NearbySearchResponse =
            serde_json::from_value(serde_json::json!({ "status": "ZERO_RESULTS" })).expect("parse");
        assert_eq!(parsed.status, ApiStatus::ZeroResults);
        assert!(parsed.results.is_empty());
    }

    #[test]
    fn geocode_first_coordinate_requires_ok_status() {
        let ok: GeocodeResponse = serde_json::from_value(serde_json::json!({
            "status": "OK",
            "results": [{ "geometry": { "location": { "lat": 44.98, "lng": -93.27 } } }]
        }))
        .expect("parse");
        assert_eq!(ok.first_coordinate(), Some(Coordinate::new(44.98, -93.27)));

        let denied: GeocodeResponse = serde_json::from_value(serde_json::json!({
            "status": "REQUEST_DENIED",
            "results": [{ "geometry": { "location": { "lat": 44.98, "lng": -93.27 } } }]
        }))
        .expect("parse");
        assert_eq!(denied.first_coordinate(), None);
    }

    #[test]
    fn blank_website_does_not_count() {
        let mut detail = PlaceDetail::from_result("p1", PlaceDetailsResult::default());
        assert!(!detail.has_website());
        detail.website = Some("   ".to_string());
        assert!(!detail.has_website());
        detail.website = Some("http://example.com".to_string());
        assert!(detail.has_website());
    }
}
