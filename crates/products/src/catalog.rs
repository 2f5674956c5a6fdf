use indexmap::IndexMap;

use stockroom_core::{Entity, InventoryError, InventoryResult, Sku};

use crate::product::Product;

/// SKU → product mapping, iterated in registration order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: IndexMap<Sku, Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a product.
    ///
    /// A SKU that is already registered is rejected and the existing product
    /// is left untouched.
    pub fn add_product(&mut self, name: impl Into<String>, sku: Sku) -> InventoryResult<&Product> {
        if self.products.contains_key(&sku) {
            tracing::warn!(sku = %sku, "duplicate sku rejected");
            return Err(InventoryError::DuplicateSku(sku));
        }

        let product = Product::new(name, sku);
        tracing::debug!(sku = %product.id(), name = product.name(), "product registered");
        let product: &Product = self.products.entry(product.id().clone()).or_insert(product);
        Ok(product)
    }

    pub fn lookup(&self, sku: &Sku) -> InventoryResult<&Product> {
        self.products
            .get(sku)
            .ok_or_else(|| InventoryError::UnknownSku(sku.clone()))
    }

    pub fn contains(&self, sku: &Sku) -> bool {
        self.products.contains_key(sku)
    }

    /// All products in registration order.
    pub fn list_all(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sku(raw: &str) -> Sku {
        raw.parse().unwrap()
    }

    #[test]
    fn registered_product_is_retrievable() {
        let mut catalog = Catalog::new();
        catalog.add_product("Widget", sku("W123")).unwrap();

        let product = catalog.lookup(&sku("W123")).unwrap();
        assert_eq!(product.name(), "Widget");
        assert_eq!(product.sku(), &sku("W123"));
    }

    #[test]
    fn duplicate_sku_keeps_original_name() {
        let mut catalog = Catalog::new();
        catalog.add_product("Widget", sku("W123")).unwrap();

        let err = catalog.add_product("Gadget", sku("W123")).unwrap_err();
        assert_eq!(err, InventoryError::DuplicateSku(sku("W123")));
        assert_eq!(catalog.lookup(&sku("W123")).unwrap().name(), "Widget");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn unknown_sku_lookup_fails() {
        let catalog = Catalog::new();
        match catalog.lookup(&sku("NOPE")) {
            Err(InventoryError::UnknownSku(s)) => assert_eq!(s, sku("NOPE")),
            other => panic!("Expected UnknownSku, got {other:?}"),
        }
    }

    #[test]
    fn list_all_preserves_registration_order() {
        let mut catalog = Catalog::new();
        for raw in ["Z9", "A1", "M5"] {
            catalog.add_product(format!("item {raw}"), sku(raw)).unwrap();
        }

        let order: Vec<&str> = catalog.list_all().map(|p| p.sku().as_str()).collect();
        assert_eq!(order, vec!["Z9", "A1", "M5"]);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: every first registration wins; re-registrations never
        /// change the stored name.
        #[test]
        fn first_registration_wins(
            entries in prop::collection::vec(("[A-C][0-9]", "[A-Za-z][A-Za-z ]{0,15}"), 1..40)
        ) {
            let mut catalog = Catalog::new();
            let mut expected: IndexMap<String, String> = IndexMap::new();

            for (raw_sku, name) in &entries {
                let result = catalog.add_product(name.clone(), sku(raw_sku));
                if expected.contains_key(raw_sku) {
                    prop_assert!(result.is_err());
                } else {
                    prop_assert!(result.is_ok());
                    expected.insert(raw_sku.clone(), name.clone());
                }
            }

            prop_assert_eq!(catalog.len(), expected.len());
            for (raw_sku, name) in &expected {
                prop_assert_eq!(catalog.lookup(&sku(raw_sku)).unwrap().name(), name.as_str());
            }
        }
    }
}
