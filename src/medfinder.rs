//! This module provides the main entry point for interacting with drug
//! information services: openFDA for labels and recalls, Nominatim for
//! geocoding and Overpass for pharmacy locations.

use crate::clients::label_client::LabelClient;
use crate::clients::pharmacy_client::PharmacyClient;
use crate::clients::recall_client::RecallClient;
use crate::error::MedfinderError;
use reqwest::Client;
use std::time::Duration;

/// Explicit configuration for a [`Medfinder`] client.
///
/// Every external collaborator is named here; nothing is read from ambient
/// globals or the environment. [`MedfinderConfig::default`] points at the
/// public instances of each service.
///
/// # Examples
///
/// ```
/// use medfinder::MedfinderConfig;
///
/// let config = MedfinderConfig {
///     api_key: Some("my-openfda-key".to_string()),
///     ..MedfinderConfig::default()
/// };
/// assert_eq!(config.openfda_base_url, "https://api.fda.gov");
/// ```
#[derive(Debug, Clone)]
pub struct MedfinderConfig {
    /// Optional openFDA API key, sent as the `api_key` query parameter with
    /// label and recall requests. Anonymous access works with lower rate
    /// limits.
    pub api_key: Option<String>,
    pub openfda_base_url: String,
    pub nominatim_base_url: String,
    pub overpass_base_url: String,
    /// User-Agent sent with every request. Nominatim's usage policy requires
    /// an identifying one.
    pub user_agent: String,
    /// Per-request timeout applied to the underlying HTTP client, and used as
    /// the server-side timeout hint in Overpass queries.
    pub request_timeout: Duration,
}

impl Default for MedfinderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            openfda_base_url: "https://api.fda.gov".to_string(),
            nominatim_base_url: "https://nominatim.openstreetmap.org".to_string(),
            overpass_base_url: "https://overpass-api.de".to_string(),
            user_agent: concat!("medfinder/", env!("CARGO_PKG_VERSION")).to_string(),
            request_timeout: Duration::from_secs(15),
        }
    }
}

/// The main client for drug information and pharmacy lookup.
///
/// Holds one [`reqwest::Client`] built from the configuration; all requests
/// share it. The struct is cheap to share by reference and holds no mutable
/// state.
///
/// # Examples
///
/// ```rust
/// # use medfinder::{Medfinder, MedfinderError};
/// # async fn run() -> Result<(), MedfinderError> {
/// let client = Medfinder::new()?;
/// let summary = client.drug().summary("Tylenol").call().await?;
/// println!("{}: {}", summary.brand_name, summary.purpose);
/// # Ok(())
/// # }
/// ```
pub struct Medfinder {
    pub(crate) http: Client,
    pub(crate) config: MedfinderConfig,
}

impl Medfinder {
    /// Creates a client with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MedfinderError::HttpClient`] if the HTTP client cannot be
    /// constructed.
    pub fn new() -> Result<Self, MedfinderError> {
        Self::with_config(MedfinderConfig::default())
    }

    /// Creates a client from an explicit configuration.
    ///
    /// Use this to supply an API key, point at self-hosted Nominatim or
    /// Overpass instances, or change the request timeout.
    pub fn with_config(config: MedfinderConfig) -> Result<Self, MedfinderError> {
        let http = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.request_timeout)
            .build()
            .map_err(MedfinderError::HttpClient)?;
        Ok(Self { http, config })
    }

    /// Entry point for drug label lookups.
    pub fn drug(&self) -> LabelClient<'_> {
        LabelClient::new(self)
    }

    /// Entry point for recall report lookups.
    pub fn recalls(&self) -> RecallClient<'_> {
        RecallClient::new(self)
    }

    /// Entry point for nearby-pharmacy searches.
    pub fn pharmacies(&self) -> PharmacyClient<'_> {
        PharmacyClient::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_public_instances() {
        let config = MedfinderConfig::default();
        assert_eq!(config.openfda_base_url, "https://api.fda.gov");
        assert_eq!(
            config.nominatim_base_url,
            "https://nominatim.openstreetmap.org"
        );
        assert_eq!(config.overpass_base_url, "https://overpass-api.de");
        assert!(config.api_key.is_none());
        assert_eq!(config.request_timeout, Duration::from_secs(15));
        assert!(config.user_agent.starts_with("medfinder/"));
    }

    #[test]
    fn client_builds_from_custom_config() {
        let config = MedfinderConfig {
            api_key: Some("test-key".to_string()),
            request_timeout: Duration::from_secs(3),
            ..MedfinderConfig::default()
        };
        let client = Medfinder::with_config(config).unwrap();
        assert_eq!(client.config.api_key.as_deref(), Some("test-key"));
    }
}
