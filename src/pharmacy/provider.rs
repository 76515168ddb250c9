//! Device-location sources bounded by an explicit deadline.

use crate::geo::distance::GeoPoint;
use crate::pharmacy::error::LocatePharmacyError;
use log::warn;
use std::future::Future;
use std::time::Duration;

/// A source of the user's current position, such as a platform geolocation
/// service.
///
/// Implementations may take arbitrarily long or never resolve; callers bound
/// them with [`resolve_with_deadline`] and can feed the resulting point into
/// [`PharmacyClient::near`](crate::PharmacyClient::near).
pub trait LocationProvider {
    fn current_location(
        &self,
    ) -> impl Future<Output = Result<GeoPoint, LocatePharmacyError>> + Send;
}

/// Awaits `provider.current_location()` for at most `deadline`.
///
/// An elapsed deadline cancels the lookup (the future is dropped) and yields
/// [`LocatePharmacyError::LocationTimeout`].
pub async fn resolve_with_deadline<P: LocationProvider>(
    provider: &P,
    deadline: Duration,
) -> Result<GeoPoint, LocatePharmacyError> {
    match tokio::time::timeout(deadline, provider.current_location()).await {
        Ok(result) => result,
        Err(_) => {
            warn!("Location lookup timed out after {:?}", deadline);
            Err(LocatePharmacyError::LocationTimeout { timeout: deadline })
        }
    }
}
