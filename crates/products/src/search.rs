//! Result shaping for the two catalog searches.
//!
//! Both functions operate on an already-truncated window of candidates; the
//! store decides which products make the window.

use std::collections::{HashMap, HashSet};

use crate::product::Product;

/// Display strings for a name-search window.
///
/// A name shared by more than one product *within the window* is qualified
/// with its producer. Products outside the window never affect the result.
pub fn display_names(window: &[&Product]) -> HashSet<String> {
    let mut name_counts: HashMap<&str, usize> = HashMap::with_capacity(window.len());
    for product in window {
        *name_counts.entry(product.name()).or_insert(0) += 1;
    }

    window
        .iter()
        .map(|product| {
            if name_counts.get(product.name()).copied().unwrap_or(0) > 1 {
                product.qualified_name()
            } else {
                product.name().to_string()
            }
        })
        .collect()
}

/// Names of a producer-search window, ordered by producer.
///
/// The sort is stable, so products with equal producers keep window order.
pub fn names_by_producer(mut window: Vec<&Product>) -> Vec<String> {
    window.sort_by(|a, b| a.producer().cmp(b.producer()));
    window.into_iter().map(|p| p.name().to_string()).collect()
}
