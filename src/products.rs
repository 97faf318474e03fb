//! Products

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product identifier, unique across the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Creates a new product id.
    #[must_use]
    pub fn new(value: u32) -> Self {
        ProductId(value)
    }

    /// Returns the raw id value.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product
///
/// One catalog listing. Records are immutable once loaded; the cart takes
/// snapshot copies rather than holding live references.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product id
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Price per unit, in rupees
    pub price: Decimal,

    /// Pricing unit label (e.g. "kg", "dozen")
    pub unit: String,

    /// Distance from the shopper's reference point, in kilometers
    pub distance_km: f64,

    /// Image URI, opaque to this layer
    pub image: String,

    /// Farmer display name
    pub farmer: String,

    /// Average rating, 0 to 5
    pub rating: f32,

    /// Product category
    pub category: String,

    /// Product description
    pub description: String,

    /// Units in stock
    pub stock: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_displays_raw_value() {
        let id = ProductId::new(42);

        assert_eq!(id.to_string(), "42");
        assert_eq!(id.value(), 42);
    }
}
