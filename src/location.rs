//! Location

/// The shopper's browse origin.
///
/// Real geolocation resolution lives outside this layer; consumers either
/// keep the default or set a place manually.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Latitude in degrees.
    pub latitude: f64,

    /// Longitude in degrees.
    pub longitude: f64,

    /// Human-readable place label, when known.
    pub city: Option<String>,
}

impl Location {
    /// Creates a location from a place label and coordinates.
    #[must_use]
    pub fn new(city: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Location {
            latitude,
            longitude,
            city: Some(city.into()),
        }
    }
}

/// Fallback origin used until the shopper picks a place.
impl Default for Location {
    fn default() -> Self {
        Location {
            latitude: 19.076,
            longitude: 72.8777,
            city: Some("Mumbai".to_string()),
        }
    }
}
