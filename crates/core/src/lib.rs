//! `catalog-core` — domain building blocks shared by the catalog crates.
//!
//! Pure domain primitives only (no logging setup, no storage).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
