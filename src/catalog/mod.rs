//! Catalog

use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tokio::time::sleep;
use tracing::debug;

use crate::{
    fixtures::{self, FixtureError},
    products::{Product, ProductId},
};

/// Radius filter presets offered to shoppers, in kilometers.
pub const RADIUS_PRESETS_KM: [f64; 4] = [5.0, 10.0, 20.0, 50.0];

/// Default radius filter, in kilometers.
pub const DEFAULT_RADIUS_KM: f64 = 10.0;

/// Number of catalog products returned by the farmer listings stub.
pub const FARMER_PREVIEW_LEN: usize = 4;

/// Catalog errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product with the requested id exists.
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// Two catalog entries share an id.
    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),

    /// The dataset itself was malformed.
    #[error(transparent)]
    Fixture(#[from] FixtureError),
}

/// Catalog
///
/// The product dataset with an id index. Read-only for the life of the
/// session; all queries are pure and answer from memory.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    by_id: FxHashMap<ProductId, usize>,
}

impl Catalog {
    /// Creates a catalog from an ordered product list.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] when two products share an id.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut by_id = FxHashMap::default();

        for (index, product) in products.iter().enumerate() {
            if by_id.insert(product.id, index).is_some() {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }

        Ok(Catalog { products, by_id })
    }

    /// Creates a catalog from the built-in dataset.
    ///
    /// # Errors
    ///
    /// Returns an error when the embedded fixture is malformed.
    pub fn from_fixture() -> Result<Self, CatalogError> {
        Self::new(fixtures::catalog_products()?)
    }

    /// Every product, in natural catalog order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Returns the product with the given id, if present.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.by_id
            .get(&id)
            .and_then(|&index| self.products.get(index))
    }

    /// Products whose precomputed distance is within `radius_km`, closest
    /// first.
    ///
    /// The filter key is the distance attribute carried by each record, not
    /// a distance computed from the shopper's coordinates.
    #[must_use]
    pub fn within_radius(&self, radius_km: f64) -> Vec<Product> {
        let mut matches: Vec<Product> = self
            .products
            .iter()
            .filter(|product| product.distance_km <= radius_km)
            .cloned()
            .collect();

        sort_by_distance(&mut matches);

        matches
    }

    /// The full catalog, closest first.
    #[must_use]
    pub fn sorted_by_distance(&self) -> Vec<Product> {
        let mut products = self.products.clone();

        sort_by_distance(&mut products);

        products
    }

    /// Case-insensitive substring search over name, category, and farmer.
    ///
    /// Matches are returned in natural catalog order.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<Product> {
        let needle = query.to_lowercase();

        self.products
            .iter()
            .filter(|product| {
                product.name.to_lowercase().contains(&needle)
                    || product.category.to_lowercase().contains(&needle)
                    || product.farmer.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Products whose category matches exactly (case-sensitive).
    #[must_use]
    pub fn in_category(&self, category: &str) -> Vec<Product> {
        self.products
            .iter()
            .filter(|product| product.category == category)
            .cloned()
            .collect()
    }

    /// The fixed-size catalog prefix served as a farmer's listings.
    #[must_use]
    pub fn farmer_preview(&self) -> Vec<Product> {
        self.products
            .iter()
            .take(FARMER_PREVIEW_LEN)
            .cloned()
            .collect()
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn sort_by_distance(products: &mut [Product]) {
    products.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
}

/// Simulated fetch latency per operation class.
///
/// The delay is cosmetic: it models the suspension point a real network
/// client would have, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogLatency {
    /// Delay applied to list-shaped queries.
    pub list: Duration,

    /// Delay applied to single-record and search queries.
    pub lookup: Duration,
}

impl CatalogLatency {
    /// No delay at all; queries answer immediately.
    #[must_use]
    pub fn zero() -> Self {
        CatalogLatency {
            list: Duration::ZERO,
            lookup: Duration::ZERO,
        }
    }
}

impl Default for CatalogLatency {
    fn default() -> Self {
        CatalogLatency {
            list: Duration::from_millis(300),
            lookup: Duration::from_millis(200),
        }
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Retrieves all products, optionally restricted to `radius_km`, closest
    /// first.
    ///
    /// `lat` and `lng` are the shopper's location hint, accepted for a future
    /// location-aware backend; the current contract filters on each product's
    /// precomputed distance and does not use them.
    async fn list_products(
        &self,
        radius_km: Option<f64>,
        lat: Option<f64>,
        lng: Option<f64>,
    ) -> Result<Vec<Product>, CatalogError>;

    /// Retrieve a single product.
    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError>;

    /// Retrieves a farmer's listings.
    ///
    /// Stub pending real per-farmer attribution: `farmer_id` is ignored and
    /// a fixed-size prefix of the catalog is returned.
    async fn farmer_products(
        &self,
        farmer_id: Option<String>,
    ) -> Result<Vec<Product>, CatalogError>;

    /// Searches products by name, category, or farmer.
    async fn search_products(&self, query: &str) -> Result<Vec<Product>, CatalogError>;

    /// Retrieves all products in a category.
    async fn products_by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError>;
}

/// Catalog service backed by the built-in fixture dataset.
///
/// Stands in for a real product API during development: every query is
/// answered from the in-memory catalog after a short simulated fetch delay.
#[derive(Debug, Clone)]
pub struct FixtureCatalogService {
    catalog: Catalog,
    latency: CatalogLatency,
}

impl FixtureCatalogService {
    /// Creates a service over the built-in dataset with the default latency.
    ///
    /// # Errors
    ///
    /// Returns an error when the embedded fixture is malformed.
    pub fn new() -> Result<Self, CatalogError> {
        Ok(Self::with_latency(
            Catalog::from_fixture()?,
            CatalogLatency::default(),
        ))
    }

    /// Creates a service over the given catalog and latency.
    #[must_use]
    pub fn with_latency(catalog: Catalog, latency: CatalogLatency) -> Self {
        FixtureCatalogService { catalog, latency }
    }

    /// Read access to the underlying catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[async_trait]
impl CatalogService for FixtureCatalogService {
    #[tracing::instrument(name = "catalog.list_products", skip(self), err)]
    async fn list_products(
        &self,
        radius_km: Option<f64>,
        lat: Option<f64>,
        lng: Option<f64>,
    ) -> Result<Vec<Product>, CatalogError> {
        sleep(self.latency.list).await;

        debug!(?radius_km, ?lat, ?lng, "fetching products");

        let products = match radius_km {
            Some(radius) => self.catalog.within_radius(radius),
            None => self.catalog.sorted_by_distance(),
        };

        Ok(products)
    }

    #[tracing::instrument(name = "catalog.get_product", skip(self), fields(id = %id), err)]
    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        sleep(self.latency.lookup).await;

        self.catalog
            .get(id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }

    #[tracing::instrument(name = "catalog.farmer_products", skip(self), err)]
    async fn farmer_products(
        &self,
        farmer_id: Option<String>,
    ) -> Result<Vec<Product>, CatalogError> {
        sleep(self.latency.list).await;

        drop(farmer_id);

        Ok(self.catalog.farmer_preview())
    }

    #[tracing::instrument(name = "catalog.search_products", skip(self), err)]
    async fn search_products(&self, query: &str) -> Result<Vec<Product>, CatalogError> {
        sleep(self.latency.lookup).await;

        Ok(self.catalog.search(query))
    }

    #[tracing::instrument(name = "catalog.products_by_category", skip(self), err)]
    async fn products_by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
        sleep(self.latency.lookup).await;

        Ok(self.catalog.in_category(category))
    }
}
