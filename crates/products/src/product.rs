use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use catalog_core::{Entity, ProductId};

/// A catalog product.
///
/// Immutable once built. Identity, equality and hashing are defined by `id`
/// alone: two products with the same id are the same product regardless of
/// name or producer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    producer: String,
}

impl Product {
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, producer: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            producer: producer.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn producer(&self) -> &str {
        &self.producer
    }

    /// `"<producer> - <name>"`, used when a name is ambiguous in a result window.
    pub fn qualified_name(&self) -> String {
        format!("{} - {}", self.producer, self.name)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
