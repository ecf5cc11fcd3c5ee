//! Geographic coordinates and distance estimation.

use serde::{Deserialize, Serialize};

/// Metres per degree of latitude, and approximately of longitude at
/// mid-latitudes. Good enough at city scale; do not use across regions.
const METERS_PER_DEGREE: f64 = 111_000.0;

/// A point on the map in floating-point degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Approximate distance to `other` in metres.
    ///
    /// Planar equirectangular approximation: Euclidean distance in degree
    /// space scaled by a metres-per-degree constant. Finite, non-negative
    /// for finite inputs.
    pub fn distance_m(self, other: Coordinates) -> f64 {
        let dx = self.lat - other.lat;
        let dy = self.lon - other.lon;
        (dx * dx + dy * dy).sqrt() * METERS_PER_DEGREE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_self_is_zero() {
        let gangnam = Coordinates::new(37.4979, 127.0276);
        assert_eq!(gangnam.distance_m(gangnam), 0.0);
    }

    #[test]
    fn known_separation_is_plausible() {
        // Gangnam to Samseong is roughly 3 km as the crow flies.
        let gangnam = Coordinates::new(37.4981, 127.0278);
        let samseong = Coordinates::new(37.5088, 127.0631);
        let d = gangnam.distance_m(samseong);
        assert!(d > 2_000.0 && d < 6_000.0, "got {d}");
    }

    #[test]
    fn symmetric() {
        let a = Coordinates::new(37.557, 126.924);
        let b = Coordinates::new(37.5133, 127.1001);
        assert_eq!(a.distance_m(b), b.distance_m(a));
    }

    #[test]
    fn serde_shape() {
        let json = serde_json::to_value(Coordinates::new(37.5, 127.0)).unwrap();
        assert_eq!(json, serde_json::json!({"lat": 37.5, "lon": 127.0}));
    }
}
