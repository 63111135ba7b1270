//! Stops and their geographic position.

/// Mean Earth radius used for great-circle distances, in metres.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A point on the Earth's surface, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a point from latitude and longitude in degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in metres.
    ///
    /// Uses the spherical law of cosines. The cosine is clamped so that
    /// identical or antipodal points never produce NaN from rounding.
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        if self == other {
            return 0.0;
        }

        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lon = (self.longitude - other.longitude).abs().to_radians();

        let cos_angle = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * d_lon.cos();
        cos_angle.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_M
    }
}

/// A named bus stop.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    /// Unique stop name
    pub name: String,
    /// Location, used for curvature only
    pub point: GeoPoint,
}

impl Stop {
    /// Creates a stop at the given coordinates.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            point: GeoPoint::new(latitude, longitude),
        }
    }
}
