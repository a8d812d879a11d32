//! Black-box scenarios against the public catalog surface.

use std::collections::HashSet;
use std::sync::Arc;

use catalog_products::{CatalogConfig, InMemoryCatalog, Product, ProductId, SelectionPolicy, Shop};

fn set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn shop() -> Arc<dyn Shop> {
    catalog_observability::init();
    Arc::new(InMemoryCatalog::new())
}

#[test]
fn grocery_session_through_trait_object() {
    let shop = shop();

    assert!(shop.add_new_product(Product::new("1", "Milk", "Dairy Farm")));
    assert!(shop.add_new_product(Product::new("2", "Milk", "Alpine")));
    assert!(shop.add_new_product(Product::new("3", "Bread", "Bakery")));
    assert!(!shop.add_new_product(Product::new("3", "Rye Bread", "Bakery")));

    assert_eq!(
        shop.list_products_by_name("Milk"),
        set(&["Dairy Farm - Milk", "Alpine - Milk"])
    );
    assert_eq!(shop.list_products_by_name("Bread"), set(&["Bread"]));
    assert_eq!(shop.list_products_by_producer("a"), vec!["Bread", "Milk"]);
    assert_eq!(shop.list_products_by_producer("A"), vec!["Milk"]);

    assert!(shop.delete_product(&ProductId::new("2")));
    assert_eq!(shop.list_products_by_name("Milk"), set(&["Milk"]));
    assert!(!shop.delete_product(&ProductId::new("2")));
}

#[test]
fn eleven_matches_yield_at_most_ten() {
    let shop = shop();
    for i in 0..11 {
        shop.add_new_product(Product::new(format!("id-{i:02}"), format!("box {i}"), "Crate Co"));
    }

    assert_eq!(shop.list_products_by_name("x").len(), 10);
    assert_eq!(shop.list_products_by_producer("Crate").len(), 10);
}

#[test]
fn configured_catalog_respects_limit_and_policy() {
    catalog_observability::init();
    let config = CatalogConfig::from_lookup(|key| match key {
        "CATALOG_RESULT_LIMIT" => Some("3".to_string()),
        "CATALOG_SELECTION_POLICY" => Some("insertion".to_string()),
        _ => None,
    });
    assert_eq!(config.selection, SelectionPolicy::Insertion);

    let catalog = InMemoryCatalog::with_config(config).unwrap();
    for id in ["d", "c", "b", "a"] {
        catalog.add_new_product(Product::new(id, format!("item {id}"), "Zeta"));
    }

    assert_eq!(catalog.config().result_limit, 3);
    assert_eq!(
        catalog.list_products_by_producer("Zeta"),
        vec!["item d", "item c", "item b"]
    );
}
