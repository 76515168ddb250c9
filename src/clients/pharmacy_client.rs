//! Provides the `PharmacyClient` for nearby-pharmacy searches.
//!
//! Obtained via [`Medfinder::pharmacies()`]. The search origin is either a
//! coordinate (`.near(...)`) or a free-text address (`.address(...)`, geocoded
//! first). Candidates come from an Overpass query bounded by the search
//! radius; each result is annotated with its haversine distance from the
//! origin. Results keep the order the map query returned them in; distance
//! is attached for display, not used for sorting.

use crate::geo::distance::GeoPoint;
use crate::geo::rank::{rank, Ranked, DEFAULT_RESULT_LIMIT};
use crate::pharmacy::geocode::geocode_address;
use crate::pharmacy::overpass::fetch_pharmacies;
use crate::pharmacy::DEFAULT_SEARCH_RADIUS_KM;
use crate::{Medfinder, MedfinderError, Pharmacy};
use bon::bon;

/// A client builder specifically for pharmacy searches.
///
/// Instances are created by calling [`Medfinder::pharmacies()`].
pub struct PharmacyClient<'a> {
    /// A reference to the main Medfinder client instance.
    client: &'a Medfinder,
}

#[bon]
impl<'a> PharmacyClient<'a> {
    pub(crate) fn new(client: &'a Medfinder) -> Self {
        Self { client }
    }

    /// Searches for pharmacies around a coordinate.
    ///
    /// Optional builder arguments:
    /// * `.radius_km(f64)`: search radius (default: 5.0 km).
    /// * `.limit(usize)`: maximum number of results (default: 8).
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use medfinder::{GeoPoint, Medfinder, MedfinderError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), MedfinderError> {
    /// let client = Medfinder::new()?;
    /// let results = client
    ///     .pharmacies()
    ///     .near(GeoPoint::new(52.52, 13.405))
    ///     .radius_km(2.0)
    ///     .call()
    ///     .await?;
    /// for ranked in &results {
    ///     println!("{:.1} km  {}", ranked.distance_km, ranked.poi.display_name());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = near)]
    #[doc(hidden)]
    pub async fn build_near(
        &self,
        #[builder(start_fn)] origin: GeoPoint,
        radius_km: Option<f64>,
        limit: Option<usize>,
    ) -> Result<Vec<Ranked<Pharmacy>>, MedfinderError> {
        let radius_km = radius_km.unwrap_or(DEFAULT_SEARCH_RADIUS_KM);
        let limit = limit.unwrap_or(DEFAULT_RESULT_LIMIT);

        let candidates =
            fetch_pharmacies(&self.client.http, &self.client.config, origin, radius_km).await?;
        Ok(rank(origin, candidates, Some(limit)))
    }

    /// Searches for pharmacies around a free-text address.
    ///
    /// The address is geocoded first; the best match becomes the search
    /// origin. Optional builder arguments are the same as for `.near(...)`.
    ///
    /// # Errors
    ///
    /// Returns [`LocatePharmacyError::AddressNotFound`] wrapped in
    /// [`MedfinderError::LocatePharmacy`] when the geocoder has no match for
    /// the address.
    ///
    /// [`LocatePharmacyError::AddressNotFound`]: crate::LocatePharmacyError::AddressNotFound
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use medfinder::{Medfinder, MedfinderError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), MedfinderError> {
    /// let client = Medfinder::new()?;
    /// let results = client
    ///     .pharmacies()
    ///     .address("Alexanderplatz, Berlin")
    ///     .limit(5)
    ///     .call()
    ///     .await?;
    /// println!("Found {} pharmacies", results.len());
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = address)]
    #[doc(hidden)]
    pub async fn build_address(
        &self,
        #[builder(start_fn)] address: &str,
        radius_km: Option<f64>,
        limit: Option<usize>,
    ) -> Result<Vec<Ranked<Pharmacy>>, MedfinderError> {
        let origin = geocode_address(&self.client.http, &self.client.config, address).await?;
        self.near(origin)
            .maybe_radius_km(radius_km)
            .maybe_limit(limit)
            .call()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // requires network access to overpass-api.de
    async fn near_berlin_finds_pharmacies() -> Result<(), MedfinderError> {
        let client = Medfinder::new()?;
        let results = client
            .pharmacies()
            .near(GeoPoint::new(52.52, 13.405))
            .call()
            .await?;
        assert!(!results.is_empty(), "expected pharmacies near Berlin Mitte");
        assert!(results.len() <= DEFAULT_RESULT_LIMIT);
        for ranked in &results {
            // 5 km radius plus slack for node positions at the boundary.
            assert!(ranked.distance_km <= 5.5);
        }
        Ok(())
    }

    #[tokio::test]
    #[ignore] // requires network access to nominatim.openstreetmap.org and overpass-api.de
    async fn address_search_geocodes_first() -> Result<(), MedfinderError> {
        let client = Medfinder::new()?;
        let results = client
            .pharmacies()
            .address("Alexanderplatz, Berlin")
            .limit(3)
            .call()
            .await?;
        assert!(results.len() <= 3);
        Ok(())
    }

    #[tokio::test]
    #[ignore] // requires network access to overpass-api.de
    async fn middle_of_ocean_is_empty_not_an_error() -> Result<(), MedfinderError> {
        let client = Medfinder::new()?;
        let results = client
            .pharmacies()
            .near(GeoPoint::new(0.0, 160.0))
            .call()
            .await?;
        assert!(results.is_empty());
        Ok(())
    }
}
