//! Great-circle distance between geographical coordinates.

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographical coordinate in decimal degrees.
///
/// Latitude is positive north of the equator, longitude positive east of the
/// prime meridian. The type is a plain value: two `GeoPoint`s with equal
/// coordinates are interchangeable.
///
/// # Examples
///
/// ```
/// use medfinder::GeoPoint;
///
/// let berlin_center = GeoPoint::new(52.5200, 13.4050);
/// assert_eq!(berlin_center.latitude, 52.5200);
/// assert_eq!(berlin_center.longitude, 13.4050);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in decimal degrees, nominally in [-90, 90].
    pub latitude: f64,
    /// Longitude in decimal degrees, nominally in [-180, 180].
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Computes the haversine great-circle distance between two points, in
/// kilometers.
///
/// Inputs are decimal degrees. Coordinates outside the nominal ranges are not
/// clamped or rejected; the formula is defined for any finite input and the
/// caller is responsible for validity. The function is pure and never panics.
pub fn distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let a_term = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a_term.sqrt().atan2((1.0 - a_term).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_points_have_zero_distance() {
        let points = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(52.52, 13.405),
            GeoPoint::new(-33.8688, 151.2093),
        ];
        for p in points {
            assert_eq!(distance(p, p), 0.0, "expected zero distance for {:?}", p);
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let london = GeoPoint::new(51.5074, -0.1278);
        let sydney = GeoPoint::new(-33.8688, 151.2093);
        assert_eq!(distance(london, sydney), distance(sydney, london));
    }

    #[test]
    fn one_degree_of_longitude_at_equator() {
        let origin = GeoPoint::new(0.0, 0.0);
        let east = GeoPoint::new(0.0, 1.0);
        let d = distance(origin, east);
        assert!(
            (d - 111.19).abs() < 0.1,
            "expected ~111.19 km for 1 degree at the equator, got {}",
            d
        );
    }

    #[test]
    fn london_to_paris() {
        let london = GeoPoint::new(51.5074, -0.1278);
        let paris = GeoPoint::new(48.8566, 2.3522);
        let d = distance(london, paris);
        assert!(
            (343.0..344.5).contains(&d),
            "expected ~343-344 km London to Paris, got {}",
            d
        );
    }

    #[test]
    fn non_finite_input_does_not_panic() {
        let origin = GeoPoint::new(f64::NAN, f64::INFINITY);
        let berlin = GeoPoint::new(52.52, 13.405);
        let d = distance(origin, berlin);
        assert!(d.is_nan());
    }

    #[test]
    fn out_of_range_coordinates_still_produce_a_value() {
        // Out-of-range inputs are not clamped; they still produce a number.
        let d = distance(GeoPoint::new(120.0, 400.0), GeoPoint::new(0.0, 0.0));
        assert!(d.is_finite());
        assert!(d >= 0.0);
    }
}
