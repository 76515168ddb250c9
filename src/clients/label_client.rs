//! Provides the `LabelClient` for initiating openFDA drug label requests.
//!
//! This client acts as an intermediate builder, obtained via
//! [`Medfinder::drug()`], allowing the user to search labels by brand name
//! and either keep the raw labels or collapse the best match to a
//! [`DrugSummary`].

use crate::drug_data::label::fetch_labels;
use crate::{DrugDataError, DrugLabel, DrugSummary, Medfinder, MedfinderError};
use bon::bon;

/// A client builder specifically for drug label lookups.
///
/// Instances are created by calling [`Medfinder::drug()`].
pub struct LabelClient<'a> {
    /// A reference to the main Medfinder client instance.
    client: &'a Medfinder,
}

#[bon]
impl<'a> LabelClient<'a> {
    pub(crate) fn new(client: &'a Medfinder) -> Self {
        Self { client }
    }

    /// Fetches labels whose brand name matches `brand_name`.
    ///
    /// Optional builder arguments:
    /// * `.limit(usize)`: how many labels to request (default: 1).
    ///
    /// # Errors
    ///
    /// Returns [`MedfinderError::DrugData`] for transport or parse failures,
    /// and [`DrugDataError::NoLabelFound`] when the search matches nothing.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use medfinder::{Medfinder, MedfinderError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), MedfinderError> {
    /// let client = Medfinder::new()?;
    /// let labels = client.drug().brand_name("Advil").limit(3).call().await?;
    /// println!("Found {} labels", labels.len());
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = brand_name)]
    #[doc(hidden)]
    pub async fn build_brand_name(
        &self,
        #[builder(start_fn)] brand_name: &str,
        limit: Option<usize>,
    ) -> Result<Vec<DrugLabel>, MedfinderError> {
        let limit = limit.unwrap_or(1);
        let labels = fetch_labels(&self.client.http, &self.client.config, brand_name, limit).await?;
        if labels.is_empty() {
            return Err(DrugDataError::NoLabelFound {
                brand_name: brand_name.to_string(),
            }
            .into());
        }
        Ok(labels)
    }

    /// Fetches the best-matching label for `brand_name` and collapses it to a
    /// [`DrugSummary`] with fallback defaults.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use medfinder::{Medfinder, MedfinderError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), MedfinderError> {
    /// let client = Medfinder::new()?;
    /// let summary = client.drug().summary("Tylenol").call().await?;
    /// println!("{} ({})", summary.brand_name, summary.generic_name);
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = summary)]
    #[doc(hidden)]
    pub async fn build_summary(
        &self,
        #[builder(start_fn)] brand_name: &str,
    ) -> Result<DrugSummary, MedfinderError> {
        let labels = fetch_labels(&self.client.http, &self.client.config, brand_name, 1).await?;
        let label = labels.first().ok_or_else(|| DrugDataError::NoLabelFound {
            brand_name: brand_name.to_string(),
        })?;
        Ok(DrugSummary::from_label(label))
    }
}
