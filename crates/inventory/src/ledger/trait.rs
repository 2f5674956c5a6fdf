use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use stockroom_core::{InventoryError, InventoryResult, Quantity, Sku, WarehouseId};

/// One line of a warehouse ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    pub sku: Sku,
    pub quantity: Quantity,
}

/// Point-in-time copy of a ledger, detached from the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseSnapshot {
    pub id: WarehouseId,
    pub capacity: Option<Quantity>,
    pub used: Quantity,
    pub entries: Vec<StockEntry>,
}

/// Stock ledger boundary for one warehouse.
///
/// Implementations must keep every entry strictly positive: an entry that
/// reaches zero is pruned.
pub trait StockLedger: core::fmt::Debug {
    fn warehouse_id(&self) -> &WarehouseId;

    /// Add up to `quantity` units of `sku`; returns the units actually added.
    fn add_product(&mut self, sku: &Sku, quantity: Quantity) -> Quantity;

    /// Remove up to `quantity` units of `sku`; returns the units actually removed.
    ///
    /// Fails with `NotStocked` (and changes nothing) when the SKU has no entry.
    fn remove_product(&mut self, sku: &Sku, quantity: Quantity) -> InventoryResult<Quantity>;

    fn entries(&self) -> &StockEntries;

    /// Total capacity, or `None` for an unbounded warehouse.
    fn capacity(&self) -> Option<Quantity>;

    /// Units currently held across all SKUs.
    fn used(&self) -> Quantity {
        self.entries().total()
    }

    fn quantity_of(&self, sku: &Sku) -> Quantity {
        self.entries().get(sku)
    }

    fn list_products(&self) -> Vec<StockEntry> {
        self.entries()
            .iter()
            .map(|(sku, quantity)| StockEntry {
                sku: sku.clone(),
                quantity,
            })
            .collect()
    }

    fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn snapshot(&self) -> WarehouseSnapshot {
        WarehouseSnapshot {
            id: self.warehouse_id().clone(),
            capacity: self.capacity(),
            used: self.used(),
            entries: self.list_products(),
        }
    }
}

/// SKU → quantity mapping shared by both ledger flavours.
///
/// Iterates in first-stocked order. Pruned entries lose their position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockEntries {
    quantities: IndexMap<Sku, u64>,
}

impl StockEntries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, sku: &Sku) -> Quantity {
        Quantity::new(self.quantities.get(sku).copied().unwrap_or(0))
    }

    pub fn contains(&self, sku: &Sku) -> bool {
        self.quantities.contains_key(sku)
    }

    /// Add units to an entry and return how many were stored.
    ///
    /// Adding zero never creates an entry. An entry saturates at `u64::MAX`.
    pub fn add(&mut self, sku: &Sku, quantity: Quantity) -> Quantity {
        if quantity.is_zero() {
            return Quantity::ZERO;
        }
        let slot = self.quantities.entry(sku.clone()).or_insert(0);
        let before = *slot;
        *slot = before.saturating_add(quantity.get());
        Quantity::new(*slot - before)
    }

    /// Remove up to `quantity` units and return how many were removed.
    ///
    /// `removed` is computed once against the current entry; the caller uses
    /// the returned value for any bookkeeping of its own.
    pub fn remove(
        &mut self,
        warehouse: &WarehouseId,
        sku: &Sku,
        quantity: Quantity,
    ) -> InventoryResult<Quantity> {
        let Some(on_hand) = self.quantities.get_mut(sku) else {
            return Err(InventoryError::NotStocked {
                sku: sku.clone(),
                warehouse: warehouse.clone(),
            });
        };

        let removed = quantity.get().min(*on_hand);
        *on_hand -= removed;
        if *on_hand == 0 {
            self.quantities.shift_remove(sku);
        }
        Ok(Quantity::new(removed))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Sku, Quantity)> {
        self.quantities.iter().map(|(sku, q)| (sku, Quantity::new(*q)))
    }

    pub fn total(&self) -> Quantity {
        Quantity::new(self.quantities.values().fold(0u64, |acc, q| acc.saturating_add(*q)))
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }
}
