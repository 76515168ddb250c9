//! Distance annotation and truncation of point-of-interest candidates.

use crate::geo::distance::{distance, GeoPoint};

/// Default number of results the pharmacy search keeps.
pub const DEFAULT_RESULT_LIMIT: usize = 8;

/// Anything with a geographical position.
///
/// The ranking logic only ever reads the position; whatever other attributes
/// the implementing type carries (name, address, opening hours) pass through
/// untouched.
pub trait Locate {
    fn location(&self) -> GeoPoint;
}

/// A candidate annotated with its distance from the query origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<P> {
    pub poi: P,
    pub distance_km: f64,
}

/// Annotates each candidate with its distance from `origin` and optionally
/// truncates to the first `limit` entries.
///
/// Candidates come back in the order they were supplied. The upstream data
/// source decides ordering; this function only measures and truncates.
/// An empty candidate list yields an empty result, never an error. A
/// non-finite origin propagates non-finite distances; no validation is
/// performed.
pub fn rank<P: Locate>(
    origin: GeoPoint,
    candidates: impl IntoIterator<Item = P>,
    limit: Option<usize>,
) -> Vec<Ranked<P>> {
    let annotated = candidates.into_iter().map(|poi| {
        let distance_km = distance(origin, poi.location());
        Ranked { poi, distance_km }
    });
    match limit {
        Some(n) => annotated.take(n).collect(),
        None => annotated.collect(),
    }
}
