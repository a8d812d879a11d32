//! In-memory catalog store.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashSet};
use std::sync::RwLock;

use catalog_core::{DomainResult, Entity, ProductId};

use crate::config::{CatalogConfig, SelectionPolicy};
use crate::product::Product;
use crate::search;
use crate::shop::Shop;

#[derive(Debug, Clone)]
struct StoredProduct {
    product: Product,
    /// Position in insertion order; reassigned if the id is deleted and re-added.
    seq: u64,
}

#[derive(Debug, Default)]
struct CatalogState {
    products: BTreeMap<ProductId, StoredProduct>,
    next_seq: u64,
}

/// Catalog backed by a single map from id to product.
///
/// The map is the only state; both searches scan it on every call. A single
/// `RwLock` guards it, so the store can be shared behind an `Arc`.
#[derive(Debug)]
pub struct InMemoryCatalog {
    config: CatalogConfig,
    state: RwLock<CatalogState>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self {
            config: CatalogConfig::default(),
            state: RwLock::new(CatalogState::default()),
        }
    }

    pub fn with_config(config: CatalogConfig) -> DomainResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: RwLock::new(CatalogState::default()),
        })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn get(&self, id: &ProductId) -> Option<Product> {
        let state = self.state.read().ok()?;
        state.products.get(id).map(|stored| stored.product.clone())
    }

    /// Number of stored products. Reports 0 if the lock is poisoned, even
    /// when entries remain.
    pub fn len(&self) -> usize {
        match self.state.read() {
            Ok(state) => state.products.len(),
            Err(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Matching products in selection order, cut to `result_limit`.
    fn window<'a>(
        &self,
        state: &'a CatalogState,
        matches: impl Fn(&Product) -> bool,
    ) -> Vec<&'a Product> {
        let limit = self.config.result_limit;
        let candidates = state.products.values().filter(|stored| matches(&stored.product));

        match self.config.selection {
            // BTreeMap iteration is already id-ordered.
            SelectionPolicy::Id => candidates.take(limit).map(|stored| &stored.product).collect(),
            SelectionPolicy::Insertion => {
                let mut ordered: Vec<&StoredProduct> = candidates.collect();
                ordered.sort_by_key(|stored| stored.seq);
                ordered.truncate(limit);
                ordered.into_iter().map(|stored| &stored.product).collect()
            }
        }
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Shop for InMemoryCatalog {
    fn add_new_product(&self, product: Product) -> bool {
        let mut guard = match self.state.write() {
            Ok(guard) => guard,
            Err(_) => {
                tracing::warn!(product_id = %product.id(), "catalog lock poisoned; product not added");
                return false;
            }
        };
        let CatalogState { products, next_seq } = &mut *guard;

        match products.entry(product.id().clone()) {
            Entry::Occupied(_) => {
                tracing::debug!(product_id = %product.id(), "duplicate product id rejected");
                false
            }
            Entry::Vacant(slot) => {
                tracing::debug!(product_id = %product.id(), seq = *next_seq, "product added");
                slot.insert(StoredProduct { product, seq: *next_seq });
                *next_seq += 1;
                true
            }
        }
    }

    fn delete_product(&self, id: &ProductId) -> bool {
        let mut state = match self.state.write() {
            Ok(state) => state,
            Err(_) => {
                tracing::warn!(product_id = %id, "catalog lock poisoned; product not deleted");
                return false;
            }
        };

        let removed = state.products.remove(id).is_some();
        tracing::debug!(product_id = %id, removed, "delete product");
        removed
    }

    fn list_products_by_name(&self, search: &str) -> HashSet<String> {
        let state = match self.state.read() {
            Ok(state) => state,
            Err(_) => {
                tracing::warn!("catalog lock poisoned; name search returns nothing");
                return HashSet::new();
            }
        };

        let window = self.window(&state, |p| p.name().contains(search));
        let names = search::display_names(&window);
        tracing::debug!(search, window = window.len(), results = names.len(), "search by name");
        names
    }

    fn list_products_by_producer(&self, search: &str) -> Vec<String> {
        let state = match self.state.read() {
            Ok(state) => state,
            Err(_) => {
                tracing::warn!("catalog lock poisoned; producer search returns nothing");
                return Vec::new();
            }
        };

        let window = self.window(&state, |p| p.producer().contains(search));
        let names = search::names_by_producer(window);
        tracing::debug!(search, results = names.len(), "search by producer");
        names
    }
}
