//! Provides the `RecallClient` for listing recent drug recalls.
//!
//! Obtained via [`Medfinder::recalls()`]. Recalls come from the openFDA
//! enforcement endpoint; a query that matches nothing is a normal empty
//! result, not an error.

use crate::drug_data::recall::fetch_recalls;
use crate::{Medfinder, MedfinderError, RecallReport};
use bon::bon;

const DEFAULT_RECALL_LIMIT: usize = 5;

/// A client builder specifically for recall reports.
///
/// Instances are created by calling [`Medfinder::recalls()`].
pub struct RecallClient<'a> {
    /// A reference to the main Medfinder client instance.
    client: &'a Medfinder,
}

#[bon]
impl<'a> RecallClient<'a> {
    pub(crate) fn new(client: &'a Medfinder) -> Self {
        Self { client }
    }

    /// Fetches recent recall reports.
    ///
    /// Optional builder arguments:
    /// * `.search(&str)`: an openFDA search expression, e.g.
    ///   `classification:"Class I"` or `openfda.brand_name:"Losartan"`.
    /// * `.limit(usize)`: how many reports to request (default: 5).
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use medfinder::{Medfinder, MedfinderError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), MedfinderError> {
    /// let client = Medfinder::new()?;
    /// let recalls = client
    ///     .recalls()
    ///     .recent()
    ///     .search("classification:\"Class I\"")
    ///     .limit(10)
    ///     .call()
    ///     .await?;
    /// for recall in &recalls {
    ///     println!("{:?}: {:?}", recall.classification, recall.product_description);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = recent)]
    #[doc(hidden)]
    pub async fn build_recent(
        &self,
        search: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<RecallReport>, MedfinderError> {
        let limit = limit.unwrap_or(DEFAULT_RECALL_LIMIT);
        let reports = fetch_recalls(&self.client.http, &self.client.config, search, limit).await?;
        Ok(reports)
    }
}
