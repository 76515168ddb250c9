//! Raw access to the openFDA drug label endpoint.

use crate::drug_data::error::DrugDataError;
use crate::medfinder::MedfinderConfig;
use log::{info, warn};
use reqwest::Client;
use serde::Deserialize;

/// Top-level envelope of a `/drug/label.json` response.
#[derive(Debug, Deserialize)]
pub struct LabelResponse {
    #[serde(default)]
    pub results: Vec<DrugLabel>,
}

/// One structured product label as returned by openFDA.
///
/// openFDA serves every label section as an array of strings, even where only
/// a single value makes sense, so each field here is an `Option<Vec<String>>`.
/// Use [`DrugSummary::from_label`](crate::DrugSummary::from_label) to collapse
/// a label to display-ready text with fallback defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DrugLabel {
    #[serde(default)]
    pub openfda: OpenFdaMeta,
    pub purpose: Option<Vec<String>>,
    pub indications_and_usage: Option<Vec<String>>,
    pub warnings: Option<Vec<String>>,
    pub boxed_warning: Option<Vec<String>>,
    pub adverse_reactions: Option<Vec<String>>,
    pub dosage_and_administration: Option<Vec<String>>,
}

/// The `openfda` harmonization block of a label.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenFdaMeta {
    pub brand_name: Option<Vec<String>>,
    pub generic_name: Option<Vec<String>>,
}

/// Fetches up to `limit` labels whose brand name matches `brand_name`.
///
/// An empty result set is returned as an empty `Vec`; the caller decides
/// whether that is an error.
pub(crate) async fn fetch_labels(
    client: &Client,
    config: &MedfinderConfig,
    brand_name: &str,
    limit: usize,
) -> Result<Vec<DrugLabel>, DrugDataError> {
    let url = format!("{}/drug/label.json", config.openfda_base_url);
    let search = format!("openfda.brand_name:\"{brand_name}\"");

    let mut request = client
        .get(&url)
        .query(&[("search", search.as_str())])
        .query(&[("limit", limit)]);
    if let Some(key) = &config.api_key {
        request = request.query(&[("api_key", key.as_str())]);
    }

    info!("Fetching drug labels for '{}' from {}", brand_name, url);
    let response = request
        .send()
        .await
        .map_err(|e| DrugDataError::NetworkRequest(url.clone(), e))?;

    let response = match response.error_for_status() {
        Ok(resp) => resp,
        Err(e) => {
            warn!("HTTP error for {}: {:?}", url, e);
            return Err(if let Some(status) = e.status() {
                DrugDataError::HttpStatus {
                    url,
                    status,
                    source: e,
                }
            } else {
                DrugDataError::NetworkRequest(url, e)
            });
        }
    };

    let parsed: LabelResponse = response
        .json()
        .await
        .map_err(|e| DrugDataError::ResponseParse(url, e))?;
    Ok(parsed.results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_openfda_label_response() {
        let json = r#"{
            "meta": { "disclaimer": "Do not rely on openFDA" },
            "results": [{
                "purpose": ["Pain reliever/fever reducer"],
                "warnings": ["Liver warning: This product contains acetaminophen."],
                "dosage_and_administration": ["take 2 tablets every 6 hours"],
                "openfda": {
                    "brand_name": ["TYLENOL"],
                    "generic_name": ["ACETAMINOPHEN"],
                    "manufacturer_name": ["Kenvue Brands LLC"]
                }
            }]
        }"#;

        let parsed: LabelResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.results.len(), 1);
        let label = &parsed.results[0];
        assert_eq!(label.openfda.brand_name.as_deref(), Some(&["TYLENOL".to_string()][..]));
        assert_eq!(
            label.purpose.as_ref().and_then(|p| p.first()).unwrap(),
            "Pain reliever/fever reducer"
        );
        assert!(label.adverse_reactions.is_none());
    }

    #[test]
    fn missing_results_field_yields_empty_vec() {
        let parsed: LabelResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.results.is_empty());
    }

    #[test]
    fn missing_openfda_block_defaults() {
        let json = r#"{ "results": [{ "purpose": ["x"] }] }"#;
        let parsed: LabelResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.results[0].openfda.brand_name.is_none());
    }
}
