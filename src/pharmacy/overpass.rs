//! Pharmacy point-of-interest queries against the Overpass API.

use crate::geo::distance::GeoPoint;
use crate::geo::rank::Locate;
use crate::medfinder::MedfinderConfig;
use crate::pharmacy::error::LocatePharmacyError;
use log::{debug, info, warn};
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
struct OverpassElement {
    lat: f64,
    lon: f64,
    #[serde(default)]
    tags: PharmacyTags,
}

/// The OSM tags we surface for a pharmacy node. Map data frequently omits
/// some or all of them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PharmacyTags {
    pub name: Option<String>,
    #[serde(rename = "addr:street")]
    pub street: Option<String>,
    #[serde(rename = "addr:housenumber")]
    pub house_number: Option<String>,
    #[serde(rename = "addr:city")]
    pub city: Option<String>,
    pub opening_hours: Option<String>,
}

/// A pharmacy returned by the map query.
#[derive(Debug, Clone, PartialEq)]
pub struct Pharmacy {
    pub location: GeoPoint,
    pub tags: PharmacyTags,
}

impl Pharmacy {
    /// Best-effort display name.
    pub fn display_name(&self) -> &str {
        self.tags.name.as_deref().unwrap_or("Unnamed pharmacy")
    }

    /// Street address assembled from the `addr:*` tags, if any are present.
    pub fn address(&self) -> Option<String> {
        let mut parts = Vec::new();
        match (&self.tags.street, &self.tags.house_number) {
            (Some(street), Some(number)) => parts.push(format!("{street} {number}")),
            (Some(street), None) => parts.push(street.clone()),
            _ => {}
        }
        if let Some(city) = &self.tags.city {
            parts.push(city.clone());
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

impl Locate for Pharmacy {
    fn location(&self) -> GeoPoint {
        self.location
    }
}

/// Builds the Overpass QL query for pharmacy nodes within `radius_km` of
/// `origin`.
pub(crate) fn build_query(origin: GeoPoint, radius_km: f64, timeout_secs: u64) -> String {
    let radius_m = (radius_km * 1000.0).round() as u64;
    format!(
        "[out:json][timeout:{timeout}];\n\
         node[\"amenity\"=\"pharmacy\"](around:{radius},{lat},{lon});\n\
         out body;",
        timeout = timeout_secs,
        radius = radius_m,
        lat = origin.latitude,
        lon = origin.longitude,
    )
}

/// Fetches all pharmacy nodes within `radius_km` of `origin`, in the order
/// the Overpass instance returns them.
pub(crate) async fn fetch_pharmacies(
    client: &Client,
    config: &MedfinderConfig,
    origin: GeoPoint,
    radius_km: f64,
) -> Result<Vec<Pharmacy>, LocatePharmacyError> {
    let url = format!("{}/api/interpreter", config.overpass_base_url);
    let query = build_query(origin, radius_km, config.request_timeout.as_secs());
    debug!("Overpass query:\n{}", query);

    info!(
        "Querying pharmacies within {} km of ({}, {})",
        radius_km, origin.latitude, origin.longitude
    );
    let response = client
        .post(&url)
        .body(query)
        .send()
        .await
        .map_err(|e| LocatePharmacyError::NetworkRequest(url.clone(), e))?;

    let response = match response.error_for_status() {
        Ok(resp) => resp,
        Err(e) => {
            warn!("HTTP error for {}: {:?}", url, e);
            return Err(if let Some(status) = e.status() {
                LocatePharmacyError::HttpStatus {
                    url,
                    status,
                    source: e,
                }
            } else {
                LocatePharmacyError::NetworkRequest(url, e)
            });
        }
    };

    let parsed: OverpassResponse = response
        .json()
        .await
        .map_err(|e| LocatePharmacyError::ResponseParse(url, e))?;

    Ok(parsed
        .elements
        .into_iter()
        .map(|element| Pharmacy {
            location: GeoPoint::new(element.lat, element.lon),
            tags: element.tags,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_targets_pharmacy_nodes_around_origin() {
        let query = build_query(GeoPoint::new(52.52, 13.405), 5.0, 15);
        assert_eq!(
            query,
            "[out:json][timeout:15];\n\
             node[\"amenity\"=\"pharmacy\"](around:5000,52.52,13.405);\n\
             out body;"
        );
    }

    #[test]
    fn fractional_radius_rounds_to_meters() {
        let query = build_query(GeoPoint::new(0.0, 0.0), 2.5, 15);
        assert!(query.contains("(around:2500,0,0)"));
    }

    #[test]
    fn deserializes_overpass_elements() {
        let json = r#"{
            "version": 0.6,
            "elements": [
                {
                    "type": "node",
                    "id": 429649794,
                    "lat": 52.5229,
                    "lon": 13.4105,
                    "tags": {
                        "amenity": "pharmacy",
                        "name": "Apotheke am Alex",
                        "addr:street": "Alexanderplatz",
                        "addr:housenumber": "9",
                        "addr:city": "Berlin",
                        "opening_hours": "Mo-Sa 08:00-20:00"
                    }
                },
                {
                    "type": "node",
                    "id": 429649795,
                    "lat": 52.5240,
                    "lon": 13.4000
                }
            ]
        }"#;

        let parsed: OverpassResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.elements.len(), 2);

        let named = Pharmacy {
            location: GeoPoint::new(parsed.elements[0].lat, parsed.elements[0].lon),
            tags: parsed.elements[0].tags.clone(),
        };
        assert_eq!(named.display_name(), "Apotheke am Alex");
        assert_eq!(named.address().as_deref(), Some("Alexanderplatz 9, Berlin"));

        let unnamed = Pharmacy {
            location: GeoPoint::new(parsed.elements[1].lat, parsed.elements[1].lon),
            tags: parsed.elements[1].tags.clone(),
        };
        assert_eq!(unnamed.display_name(), "Unnamed pharmacy");
        assert_eq!(unnamed.address(), None);
    }

    #[test]
    fn address_without_house_number() {
        let pharmacy = Pharmacy {
            location: GeoPoint::new(0.0, 0.0),
            tags: PharmacyTags {
                street: Some("Main Street".into()),
                city: Some("Springfield".into()),
                ..Default::default()
            },
        };
        assert_eq!(pharmacy.address().as_deref(), Some("Main Street, Springfield"));
    }
}
