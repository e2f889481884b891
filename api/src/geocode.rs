//! Forward geocoding of restaurant locations.
//!
//! Uses the Nominatim search endpoint, which returns coordinates as decimal
//! strings. Only the first hit is used; no hit at all is a regular outcome
//! (`None`), not an error.

use serde::Deserialize;

use crate::client::ApiClient;
use crate::error::ApiError;

/// Raw Nominatim search hit. `lat`/`lon` arrive as strings.
#[derive(Clone, Debug, Deserialize)]
pub struct NominatimResult {
    pub lat: String,
    pub lon: String,
    pub display_name: String,
}

/// A resolved map point.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
    pub display_name: String,
}

impl GeoPoint {
    /// Parse a Nominatim hit, rejecting non-numeric coordinates.
    pub fn from_result(result: &NominatimResult) -> Option<GeoPoint> {
        let lat = result.lat.parse().ok()?;
        let lon = result.lon.parse().ok()?;
        Some(GeoPoint {
            lat,
            lon,
            display_name: result.display_name.clone(),
        })
    }

    /// Link to the point on openstreetmap.org.
    pub fn osm_url(&self) -> String {
        format!(
            "https://www.openstreetmap.org/?mlat={lat}&mlon={lon}#map=16/{lat}/{lon}",
            lat = self.lat,
            lon = self.lon
        )
    }

    /// Embeddable OSM frame centred on the point with a marker.
    pub fn embed_url(&self) -> String {
        let d = 0.005;
        format!(
            "https://www.openstreetmap.org/export/embed.html?bbox={w}%2C{s}%2C{e}%2C{n}&layer=mapnik&marker={lat}%2C{lon}",
            w = self.lon - d,
            s = self.lat - d,
            e = self.lon + d,
            n = self.lat + d,
            lat = self.lat,
            lon = self.lon
        )
    }
}

impl ApiClient {
    /// Resolve a free-form location string to coordinates.
    ///
    /// Returns `Ok(None)` when the geocoder has no usable hit for the query.
    pub async fn geocode(&self, query: &str) -> Result<Option<GeoPoint>, ApiError> {
        let url = format!("{}/search", self.config().geocode_base);
        // Public geocoder: no bearer token on this request.
        let results: Vec<NominatimResult> = Self::send(
            self.get_public(url)
                .query(&[("format", "json"), ("q", query)])
                .header("User-Agent", "food-admin-dashboard"),
        )
        .await?
        .json()
        .await?;

        let point = results.first().and_then(GeoPoint::from_result);
        if point.is_none() && !results.is_empty() {
            tracing::warn!("geocoder returned non-numeric coordinates for {query:?}");
        }
        Ok(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_point_parses_string_coordinates() {
        let result = NominatimResult {
            lat: "52.5170365".to_string(),
            lon: "13.3888599".to_string(),
            display_name: "Berlin, Deutschland".to_string(),
        };
        let point = GeoPoint::from_result(&result).unwrap();
        assert!((point.lat - 52.5170365).abs() < 1e-9);
        assert!((point.lon - 13.3888599).abs() < 1e-9);
        assert_eq!(point.display_name, "Berlin, Deutschland");
    }

    #[test]
    fn test_geo_point_rejects_non_numeric() {
        let result = NominatimResult {
            lat: "not-a-number".to_string(),
            lon: "13.0".to_string(),
            display_name: "?".to_string(),
        };
        assert!(GeoPoint::from_result(&result).is_none());
    }

    #[test]
    fn test_urls_embed_coordinates() {
        let point = GeoPoint {
            lat: 48.2,
            lon: 16.37,
            display_name: "Wien".to_string(),
        };
        assert!(point.osm_url().contains("mlat=48.2"));
        assert!(point.embed_url().contains("marker=48.2%2C16.37"));
    }
}
