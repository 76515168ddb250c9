//! Recent drug recall reports from the openFDA enforcement endpoint.

use crate::drug_data::error::DrugDataError;
use crate::medfinder::MedfinderConfig;
use chrono::NaiveDate;
use log::{debug, info, warn};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RecallResponse {
    #[serde(default)]
    results: Vec<RecallReport>,
}

/// One enforcement report from `/drug/enforcement.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecallReport {
    pub product_description: Option<String>,
    pub reason_for_recall: Option<String>,
    pub recalling_firm: Option<String>,
    /// FDA recall classification: "Class I" (most serious) through "Class III".
    pub classification: Option<String>,
    pub status: Option<String>,
    /// Raw `YYYYMMDD` string as served by openFDA; see [`Self::initiation_date`].
    pub recall_initiation_date: Option<String>,
}

impl RecallReport {
    /// Parses the `YYYYMMDD` initiation date, if present and well-formed.
    pub fn initiation_date(&self) -> Option<NaiveDate> {
        self.recall_initiation_date
            .as_deref()
            .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y%m%d").ok())
    }
}

/// Fetches up to `limit` recall reports, optionally narrowed by an openFDA
/// `search` expression (e.g. `classification:"Class I"`).
///
/// openFDA answers a search with no matches with HTTP 404; that is a normal
/// "no results" condition here and comes back as an empty `Vec`.
pub(crate) async fn fetch_recalls(
    client: &Client,
    config: &MedfinderConfig,
    search: Option<&str>,
    limit: usize,
) -> Result<Vec<RecallReport>, DrugDataError> {
    let url = format!("{}/drug/enforcement.json", config.openfda_base_url);

    let mut request = client.get(&url).query(&[("limit", limit)]);
    if let Some(search) = search {
        request = request.query(&[("search", search)]);
    }
    if let Some(key) = &config.api_key {
        request = request.query(&[("api_key", key.as_str())]);
    }

    info!("Fetching recall reports from {}", url);
    let response = request
        .send()
        .await
        .map_err(|e| DrugDataError::NetworkRequest(url.clone(), e))?;

    if response.status() == StatusCode::NOT_FOUND {
        debug!("No recall reports matched the query");
        return Ok(vec![]);
    }

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

    let parsed: RecallResponse = response
        .json()
        .await
        .map_err(|e| DrugDataError::ResponseParse(url, e))?;
    Ok(parsed.results)
}
