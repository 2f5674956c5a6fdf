use stockroom_core::{InventoryResult, Quantity, Sku, WarehouseId};

use super::r#trait::{StockEntries, StockLedger};

/// Warehouse with no capacity ceiling.
#[derive(Debug, Clone)]
pub struct UnboundedLedger {
    id: WarehouseId,
    entries: StockEntries,
}

impl UnboundedLedger {
    pub fn new(id: WarehouseId) -> Self {
        Self {
            id,
            entries: StockEntries::new(),
        }
    }
}

impl StockLedger for UnboundedLedger {
    fn warehouse_id(&self) -> &WarehouseId {
        &self.id
    }

    fn add_product(&mut self, sku: &Sku, quantity: Quantity) -> Quantity {
        self.entries.add(sku, quantity)
    }

    fn remove_product(&mut self, sku: &Sku, quantity: Quantity) -> InventoryResult<Quantity> {
        self.entries.remove(&self.id, sku, quantity)
    }

    fn entries(&self) -> &StockEntries {
        &self.entries
    }

    fn capacity(&self) -> Option<Quantity> {
        None
    }
}
