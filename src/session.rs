//! Session

use crate::{cart::Cart, location::Location};

/// Per-shopper session state.
///
/// Owns the cart and the browse location for one client session. The
/// top-level application creates one and threads it by reference to
/// whatever consumes it; nothing here is global, and nothing outlives the
/// session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// The shopper's cart.
    pub cart: Cart,

    /// The shopper's current browse origin.
    pub location: Location,
}

impl Session {
    /// Creates a session with an empty cart and the default location.
    #[must_use]
    pub fn new() -> Self {
        Session::default()
    }

    /// Replaces the browse origin with a manually chosen place.
    pub fn set_manual_location(&mut self, city: impl Into<String>, latitude: f64, longitude: f64) {
        self.location = Location::new(city, latitude, longitude);
    }

    /// The location hint passed alongside catalog queries.
    #[must_use]
    pub fn coords(&self) -> (f64, f64) {
        (self.location.latitude, self.location.longitude)
    }
}
