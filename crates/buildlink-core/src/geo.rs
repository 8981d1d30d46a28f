//! Great-circle distance on a spherical Earth.

use serde::{Deserialize, Serialize};

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns `true` when both parts are finite and inside
    /// `lat ∈ [-90, 90]`, `lng ∈ [-180, 180]`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Haversine distance to `other` in kilometers.
    #[must_use]
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        distance_km(*self, *other)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}

/// Haversine distance between `a` and `b` in kilometers.
///
/// Ignores the Earth's oblateness, which is fine at city and regional scale.
/// Symmetric in its arguments and zero when `a == b`.
#[must_use]
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_same_point_is_zero() {
        let p = Coordinate::new(6.5244, 3.3792);
        assert!(distance_km(p, p).abs() < 1e-9);
    }

    #[test]
    fn distance_is_symmetric() {
        let pairs = [
            (Coordinate::new(10.0, 10.0), Coordinate::new(10.5, 9.7)),
            (Coordinate::new(-33.8688, 151.2093), Coordinate::new(51.5074, -0.1278)),
            (Coordinate::new(89.9, 179.9), Coordinate::new(-89.9, -179.9)),
        ];
        for (a, b) in pairs {
            assert!(
                (distance_km(a, b) - distance_km(b, a)).abs() < 1e-9,
                "asymmetric for {a:?} / {b:?}"
            );
        }
    }

    #[test]
    fn distance_nyc_to_la() {
        let nyc = Coordinate::new(40.7128, -74.0060);
        let la = Coordinate::new(34.0522, -118.2437);
        // roughly 3936 km
        assert!((nyc.distance_km(&la) - 3936.0).abs() < 20.0);
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(1.0, 0.0);
        assert!((distance_km(a, b) - 111.19).abs() < 0.1);
    }

    #[test]
    fn antipodal_points_are_half_circumference() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 180.0);
        let half = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((distance_km(a, b) - half).abs() < 1e-6);
    }

    #[test]
    fn validity_bounds() {
        assert!(Coordinate::new(90.0, -180.0).is_valid());
        assert!(!Coordinate::new(90.1, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, 180.5).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn display_uses_four_decimals() {
        assert_eq!(Coordinate::new(6.524_379, 3.379_206).to_string(), "6.5244, 3.3792");
    }
}
