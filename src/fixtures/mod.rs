//! Catalog Fixtures

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::products::{Product, ProductId};

/// The built-in product dataset.
static CATALOG_YAML: &str = include_str!("../../fixtures/catalog.yaml");

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Price must be strictly positive
    #[error("Product {0}: invalid price {1}")]
    InvalidPrice(ProductId, Decimal),

    /// Rating must lie within 0 to 5
    #[error("Product {0}: invalid rating {1}")]
    InvalidRating(ProductId, f32),

    /// Distance must not be negative
    #[error("Product {0}: invalid distance {1}")]
    InvalidDistance(ProductId, f64),
}

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Product entries, in catalog order
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product id
    pub id: u32,

    /// Product name
    pub name: String,

    /// Price per unit (e.g., "45.00")
    pub price: Decimal,

    /// Pricing unit label
    pub unit: String,

    /// Distance from the reference point in kilometers
    pub distance_km: f64,

    /// Image URI
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

impl TryFrom<ProductFixture> for Product {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let id = ProductId::new(fixture.id);

        if fixture.price <= Decimal::ZERO {
            return Err(FixtureError::InvalidPrice(id, fixture.price));
        }

        if !(0.0..=5.0_f32).contains(&fixture.rating) {
            return Err(FixtureError::InvalidRating(id, fixture.rating));
        }

        if !(0.0..).contains(&fixture.distance_km) {
            return Err(FixtureError::InvalidDistance(id, fixture.distance_km));
        }

        Ok(Product {
            id,
            name: fixture.name,
            price: fixture.price,
            unit: fixture.unit,
            distance_km: fixture.distance_km,
            image: fixture.image,
            farmer: fixture.farmer,
            rating: fixture.rating,
            category: fixture.category,
            description: fixture.description,
            stock: fixture.stock,
        })
    }
}

/// Parse a catalog fixture document into validated products.
///
/// # Errors
///
/// Returns an error if the YAML cannot be parsed or any product violates
/// the field ranges (positive price, rating within 0 to 5, non-negative
/// distance).
pub fn parse_catalog(yaml: &str) -> Result<Vec<Product>, FixtureError> {
    let fixture: CatalogFixture = serde_norway::from_str(yaml)?;

    fixture.products.into_iter().map(Product::try_from).collect()
}

/// Load the built-in product dataset.
///
/// # Errors
///
/// Returns an error if the embedded fixture is malformed; see
/// [`parse_catalog`].
pub fn catalog_products() -> Result<Vec<Product>, FixtureError> {
    parse_catalog(CATALOG_YAML)
}
