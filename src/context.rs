//! App Context

use std::sync::Arc;

use crate::{
    catalog::{CatalogError, CatalogService, FixtureCatalogService},
    orders::{OrdersService, StubOrdersService},
};

/// The service handles presentation code works against.
///
/// Both services sit behind trait objects so a real backend client can be
/// swapped in at this seam without touching consumers.
#[derive(Clone)]
pub struct Storefront {
    /// Product catalog queries.
    pub catalog: Arc<dyn CatalogService>,

    /// Order placement.
    pub orders: Arc<dyn OrdersService>,
}

impl Storefront {
    /// Builds a storefront backed by the built-in fixture dataset.
    ///
    /// # Errors
    ///
    /// Returns an error when the embedded catalog fixture is malformed.
    pub fn from_fixture() -> Result<Self, CatalogError> {
        Ok(Storefront {
            catalog: Arc::new(FixtureCatalogService::new()?),
            orders: Arc::new(StubOrdersService::new()),
        })
    }
}
