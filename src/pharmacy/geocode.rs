//! Forward geocoding of free-text addresses through Nominatim.

use crate::geo::distance::GeoPoint;
use crate::medfinder::MedfinderConfig;
use crate::pharmacy::error::LocatePharmacyError;
use log::{info, warn};
use reqwest::Client;
use serde::Deserialize;

/// One search hit from Nominatim. Coordinates arrive as string-encoded
/// decimals, not numbers.
#[derive(Debug, Deserialize)]
struct GeocodeHit {
    lat: String,
    lon: String,
}

impl GeocodeHit {
    fn to_point(&self, address: &str) -> Result<GeoPoint, LocatePharmacyError> {
        let parse = |raw: &str| {
            raw.parse::<f64>()
                .map_err(|source| LocatePharmacyError::CoordinateParse {
                    address: address.to_string(),
                    source,
                })
        };
        Ok(GeoPoint::new(parse(&self.lat)?, parse(&self.lon)?))
    }
}

/// Resolves a free-text address to a coordinate using the configured
/// Nominatim instance. Only the best match is considered; no match at all is
/// [`LocatePharmacyError::AddressNotFound`].
pub(crate) async fn geocode_address(
    client: &Client,
    config: &MedfinderConfig,
    address: &str,
) -> Result<GeoPoint, LocatePharmacyError> {
    let url = format!("{}/search", config.nominatim_base_url);

    info!("Geocoding '{}' via {}", address, url);
    let response = client
        .get(&url)
        .query(&[("q", address), ("format", "json"), ("limit", "1")])
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

    let hits: Vec<GeocodeHit> = response
        .json()
        .await
        .map_err(|e| LocatePharmacyError::ResponseParse(url, e))?;

    match hits.first() {
        Some(hit) => hit.to_point(address),
        None => Err(LocatePharmacyError::AddressNotFound {
            address: address.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_nominatim_hit() {
        let json = r#"[{
            "place_id": 240109189,
            "lat": "52.5219184",
            "lon": "13.4132147",
            "display_name": "Alexanderplatz, Mitte, Berlin, Germany"
        }]"#;
        let hits: Vec<GeocodeHit> = serde_json::from_str(json).unwrap();
        let point = hits[0].to_point("Alexanderplatz").unwrap();
        assert!((point.latitude - 52.5219184).abs() < 1e-9);
        assert!((point.longitude - 13.4132147).abs() < 1e-9);
    }

    #[test]
    fn non_numeric_coordinates_are_an_error() {
        let hit = GeocodeHit {
            lat: "not-a-number".into(),
            lon: "13.4".into(),
        };
        let err = hit.to_point("somewhere").unwrap_err();
        assert!(matches!(
            err,
            LocatePharmacyError::CoordinateParse { ref address, .. } if address == "somewhere"
        ));
    }
}
