use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocatePharmacyError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse response from {0}")]
    ResponseParse(String, #[source] reqwest::Error),

    #[error("No coordinates found for address '{address}'")]
    AddressNotFound { address: String },

    #[error("Geocoder returned non-numeric coordinates for '{address}'")]
    CoordinateParse {
        address: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("Location lookup did not complete within {timeout:?}")]
    LocationTimeout { timeout: Duration },
}
