use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, Sku};

/// A catalog entry. Identity is the SKU; immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    sku: Sku,
}

impl Product {
    pub fn new(name: impl Into<String>, sku: Sku) -> Self {
        Self {
            name: name.into(),
            sku,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }
}

impl Entity for Product {
    type Id = Sku;

    fn id(&self) -> &Self::Id {
        &self.sku
    }
}
