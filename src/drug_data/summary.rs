//! Display-ready reduction of a raw drug label.

use crate::drug_data::label::DrugLabel;

const NOT_AVAILABLE: &str = "Information not available";
const NO_WARNINGS: &str = "None listed";
const CONSULT_DOCTOR: &str = "Consult your doctor";

/// The subset of a [`DrugLabel`] worth showing to a user, with every field
/// guaranteed to carry text.
///
/// Labels are wildly inconsistent in which sections they fill in, so each
/// field falls back along a fixed chain and bottoms out at a stock phrase
/// rather than an empty string.
#[derive(Debug, Clone, PartialEq)]
pub struct DrugSummary {
    pub brand_name: String,
    pub generic_name: String,
    /// `purpose`, falling back to `indications_and_usage`.
    pub purpose: String,
    /// `warnings`, falling back to `boxed_warning`.
    pub warnings: String,
    pub side_effects: String,
    pub dosage: String,
}

fn first(field: &Option<Vec<String>>) -> Option<&str> {
    field.as_ref().and_then(|v| v.first()).map(String::as_str)
}

impl DrugSummary {
    pub fn from_label(label: &DrugLabel) -> Self {
        Self {
            brand_name: first(&label.openfda.brand_name)
                .unwrap_or(NOT_AVAILABLE)
                .to_string(),
            generic_name: first(&label.openfda.generic_name)
                .unwrap_or(NOT_AVAILABLE)
                .to_string(),
            purpose: first(&label.purpose)
                .or_else(|| first(&label.indications_and_usage))
                .unwrap_or(NOT_AVAILABLE)
                .to_string(),
            warnings: first(&label.warnings)
                .or_else(|| first(&label.boxed_warning))
                .unwrap_or(NO_WARNINGS)
                .to_string(),
            side_effects: first(&label.adverse_reactions)
                .unwrap_or(NOT_AVAILABLE)
                .to_string(),
            dosage: first(&label.dosage_and_administration)
                .unwrap_or(CONSULT_DOCTOR)
                .to_string(),
        }
    }
}
