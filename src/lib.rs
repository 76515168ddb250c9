mod clients;
mod drug_data;
mod error;
mod geo;
mod medfinder;
mod pharmacy;

pub use error::MedfinderError;
pub use medfinder::*;

pub use clients::label_client::*;
pub use clients::pharmacy_client::*;
pub use clients::recall_client::*;

pub use geo::distance::{distance, GeoPoint};
pub use geo::rank::{rank, Locate, Ranked, DEFAULT_RESULT_LIMIT};

pub use drug_data::error::DrugDataError;
pub use drug_data::label::{DrugLabel, LabelResponse, OpenFdaMeta};
pub use drug_data::recall::RecallReport;
pub use drug_data::summary::DrugSummary;

pub use pharmacy::error::LocatePharmacyError;
pub use pharmacy::overpass::{Pharmacy, PharmacyTags};
pub use pharmacy::provider::{resolve_with_deadline, LocationProvider};
pub use pharmacy::DEFAULT_SEARCH_RADIUS_KM;
