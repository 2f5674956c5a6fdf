//! Inventory directory: the catalog plus every warehouse ledger.
//!
//! All stock mutations go through here so that references are checked
//! before a ledger is touched. Lookup and duplication failures are returned
//! as errors (and logged); the state is left exactly as it was.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use stockroom_core::{InventoryError, InventoryResult, Quantity, Sku, WarehouseId};
use stockroom_products::{Catalog, Product};

use crate::ledger::{StockLedger, WarehouseSnapshot, ledger_for};

/// Outcome of a stock or unstock request.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockReceipt {
    /// Units asked for.
    pub requested: Quantity,
    /// Units actually added or removed after clamping.
    pub applied: Quantity,
    /// Units of the SKU held by the warehouse afterwards.
    pub on_hand: Quantity,
}

/// One row of a warehouse listing, joined against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRow {
    pub name: String,
    pub sku: Sku,
    pub quantity: Quantity,
}

/// Owns the product catalog and the warehouse ledgers.
#[derive(Debug, Default)]
pub struct InventoryDirectory {
    catalog: Catalog,
    warehouses: IndexMap<WarehouseId, Box<dyn StockLedger>>,
}

impl InventoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Create a warehouse; capacity-limited when `limit` is given.
    ///
    /// An id that already exists is rejected and its ledger is kept.
    pub fn add_warehouse(&mut self, id: WarehouseId, limit: Option<Quantity>) -> InventoryResult<()> {
        if self.warehouses.contains_key(&id) {
            tracing::warn!(warehouse = %id, "duplicate warehouse rejected");
            return Err(InventoryError::DuplicateWarehouse(id));
        }

        tracing::debug!(warehouse = %id, capacity = ?limit.map(Quantity::get), "warehouse added");
        let ledger = ledger_for(id.clone(), limit);
        self.warehouses.insert(id, ledger);
        Ok(())
    }

    pub fn add_product(&mut self, name: impl Into<String>, sku: Sku) -> InventoryResult<&Product> {
        self.catalog.add_product(name, sku)
    }

    pub fn stock(
        &mut self,
        sku: &Sku,
        warehouse: &WarehouseId,
        quantity: Quantity,
    ) -> InventoryResult<StockReceipt> {
        let ledger = self.resolve_mut(sku, warehouse)?;
        let applied = ledger.add_product(sku, quantity);
        let on_hand = ledger.quantity_of(sku);

        tracing::debug!(
            sku = %sku,
            warehouse = %warehouse,
            requested = quantity.get(),
            applied = applied.get(),
            "stocked"
        );
        Ok(StockReceipt {
            requested: quantity,
            applied,
            on_hand,
        })
    }

    pub fn unstock(
        &mut self,
        sku: &Sku,
        warehouse: &WarehouseId,
        quantity: Quantity,
    ) -> InventoryResult<StockReceipt> {
        let ledger = self.resolve_mut(sku, warehouse)?;
        let applied = ledger.remove_product(sku, quantity).inspect_err(|_| {
            tracing::warn!(sku = %sku, warehouse = %warehouse, "unstock of product not held");
        })?;
        let on_hand = ledger.quantity_of(sku);

        tracing::debug!(
            sku = %sku,
            warehouse = %warehouse,
            requested = quantity.get(),
            applied = applied.get(),
            "unstocked"
        );
        Ok(StockReceipt {
            requested: quantity,
            applied,
            on_hand,
        })
    }

    /// Catalog products in registration order.
    pub fn list_products(&self) -> impl Iterator<Item = &Product> {
        self.catalog.list_all()
    }

    /// Warehouse ids in creation order.
    pub fn list_warehouses(&self) -> impl Iterator<Item = &WarehouseId> {
        self.warehouses.keys()
    }

    /// Contents of one warehouse with product names attached.
    ///
    /// An empty warehouse is reported as `EmptyWarehouse` rather than an
    /// empty listing.
    pub fn list_warehouse_contents(&self, warehouse: &WarehouseId) -> InventoryResult<Vec<ContentRow>> {
        let ledger = self.ledger(warehouse)?;
        if ledger.is_empty() {
            return Err(InventoryError::EmptyWarehouse(warehouse.clone()));
        }

        ledger
            .entries()
            .iter()
            .map(|(sku, quantity)| -> InventoryResult<ContentRow> {
                let product = self.catalog.lookup(sku)?;
                Ok(ContentRow {
                    name: product.name().to_string(),
                    sku: sku.clone(),
                    quantity,
                })
            })
            .collect()
    }

    pub fn warehouse(&self, warehouse: &WarehouseId) -> InventoryResult<WarehouseSnapshot> {
        self.ledger(warehouse).map(|ledger| ledger.snapshot())
    }

    fn ledger(&self, warehouse: &WarehouseId) -> InventoryResult<&dyn StockLedger> {
        match self.warehouses.get(warehouse) {
            Some(ledger) => Ok(&**ledger),
            None => {
                tracing::warn!(warehouse = %warehouse, "unknown warehouse");
                Err(InventoryError::UnknownWarehouse(warehouse.clone()))
            }
        }
    }

    /// Validate both references (SKU first) and hand back the target ledger.
    fn resolve_mut(
        &mut self,
        sku: &Sku,
        warehouse: &WarehouseId,
    ) -> InventoryResult<&mut Box<dyn StockLedger>> {
        if !self.catalog.contains(sku) {
            tracing::warn!(sku = %sku, "unknown sku");
            return Err(InventoryError::UnknownSku(sku.clone()));
        }
        match self.warehouses.get_mut(warehouse) {
            Some(ledger) => Ok(ledger),
            None => {
                tracing::warn!(warehouse = %warehouse, "unknown warehouse");
                Err(InventoryError::UnknownWarehouse(warehouse.clone()))
            }
        }
    }
}
