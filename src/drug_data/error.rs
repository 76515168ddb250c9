use thiserror::Error;

#[derive(Debug, Error)]
pub enum DrugDataError {
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

    #[error("No drug label found for brand name '{brand_name}'")]
    NoLabelFound { brand_name: String },
}
