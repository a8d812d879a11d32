//! The catalog capability set.

use std::collections::HashSet;
use std::sync::Arc;

use catalog_core::ProductId;

use crate::product::Product;

/// Add, delete and the two bounded searches.
///
/// Writes report their outcome as `bool`; reads return possibly-empty
/// collections. An empty result means "no matches", never an error.
pub trait Shop: Send + Sync {
    /// Store `product` unless its id is already taken. Returns `false` and
    /// leaves the existing entry untouched on a duplicate id.
    fn add_new_product(&self, product: Product) -> bool;

    /// Remove the product with `id`. Returns `false` if it was absent.
    fn delete_product(&self, id: &ProductId) -> bool;

    /// Display strings of up to `result_limit` products whose name contains
    /// `search`. Names shared within that window are shown as
    /// `"<producer> - <name>"`.
    fn list_products_by_name(&self, search: &str) -> HashSet<String>;

    /// Names of up to `result_limit` products whose producer contains
    /// `search`, ordered by producer.
    fn list_products_by_producer(&self, search: &str) -> Vec<String>;
}

impl<S> Shop for Arc<S>
where
    S: Shop + ?Sized,
{
    fn add_new_product(&self, product: Product) -> bool {
        (**self).add_new_product(product)
    }

    fn delete_product(&self, id: &ProductId) -> bool {
        (**self).delete_product(id)
    }

    fn list_products_by_name(&self, search: &str) -> HashSet<String> {
        (**self).list_products_by_name(search)
    }

    fn list_products_by_producer(&self, search: &str) -> Vec<String> {
        (**self).list_products_by_producer(search)
    }
}
