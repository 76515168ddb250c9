pub mod error;
pub mod geocode;
pub mod overpass;
pub mod provider;

/// Default search radius around the origin, in kilometers.
pub const DEFAULT_SEARCH_RADIUS_KM: f64 = 5.0;
