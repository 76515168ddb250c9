use crate::drug_data::error::DrugDataError;
use crate::pharmacy::error::LocatePharmacyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MedfinderError {
    #[error(transparent)]
    DrugData(#[from] DrugDataError),

    #[error(transparent)]
    LocatePharmacy(#[from] LocatePharmacyError),

    #[error("Failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
}
