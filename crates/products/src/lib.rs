//! Product catalog.
//!
//! An in-process store of products keyed by id, answering two bounded
//! substring searches. Pure in-memory logic (no IO, no persistence).

pub mod catalog;
pub mod config;
pub mod product;
pub mod search;
pub mod shop;

pub use catalog::InMemoryCatalog;
pub use config::{CatalogConfig, SelectionPolicy, DEFAULT_RESULT_LIMIT};
pub use product::Product;
pub use shop::Shop;

pub use catalog_core::{DomainError, DomainResult, Entity, ProductId};
