use stockroom_core::{InventoryResult, Quantity, Sku, WarehouseId};

use super::r#trait::{StockEntries, StockLedger};

/// Warehouse whose total stock across all SKUs may not exceed `capacity`.
///
/// Stocking beyond the remaining room is clamped; the excess is dropped.
#[derive(Debug, Clone)]
pub struct CapacityLedger {
    id: WarehouseId,
    entries: StockEntries,
    capacity: u64,
    used: u64,
}

impl CapacityLedger {
    pub fn new(id: WarehouseId, capacity: Quantity) -> Self {
        Self {
            id,
            entries: StockEntries::new(),
            capacity: capacity.get(),
            used: 0,
        }
    }

    /// Units that can still be stocked.
    pub fn available(&self) -> Quantity {
        Quantity::new(self.capacity.saturating_sub(self.used))
    }
}

impl StockLedger for CapacityLedger {
    fn warehouse_id(&self) -> &WarehouseId {
        &self.id
    }

    fn add_product(&mut self, sku: &Sku, quantity: Quantity) -> Quantity {
        let added = self.available().min(quantity);
        if added < quantity {
            tracing::debug!(
                warehouse = %self.id,
                sku = %sku,
                requested = quantity.get(),
                added = added.get(),
                "stocking clamped to capacity"
            );
        }
        let added = self.entries.add(sku, added);
        self.used += added.get();
        added
    }

    fn remove_product(&mut self, sku: &Sku, quantity: Quantity) -> InventoryResult<Quantity> {
        let removed = self.entries.remove(&self.id, sku, quantity)?;
        self.used -= removed.get();
        Ok(removed)
    }

    fn entries(&self) -> &StockEntries {
        &self.entries
    }

    fn capacity(&self) -> Option<Quantity> {
        Some(Quantity::new(self.capacity))
    }

    fn used(&self) -> Quantity {
        Quantity::new(self.used)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use stockroom_core::InventoryError;

    fn sku(raw: &str) -> Sku {
        raw.parse().unwrap()
    }

    fn ledger(capacity: u64) -> CapacityLedger {
        CapacityLedger::new("W1".parse().unwrap(), Quantity::new(capacity))
    }

    #[test]
    fn stocking_is_clamped_to_capacity() {
        let mut ledger = ledger(10);
        assert_eq!(ledger.add_product(&sku("W123"), Quantity::new(7)), Quantity::new(7));
        assert_eq!(ledger.add_product(&sku("W123"), Quantity::new(7)), Quantity::new(3));

        assert_eq!(ledger.quantity_of(&sku("W123")), Quantity::new(10));
        assert_eq!(ledger.used(), Quantity::new(10));
        assert_eq!(ledger.available(), Quantity::ZERO);
    }

    #[test]
    fn full_warehouse_accepts_nothing_and_creates_no_entry() {
        let mut ledger = ledger(5);
        ledger.add_product(&sku("A"), Quantity::new(5));

        assert_eq!(ledger.add_product(&sku("B"), Quantity::new(3)), Quantity::ZERO);
        assert!(!ledger.entries().contains(&sku("B")));
    }

    #[test]
    fn over_removal_frees_exactly_what_was_held() {
        let mut ledger = ledger(10);
        ledger.add_product(&sku("W123"), Quantity::new(7));
        ledger.add_product(&sku("W123"), Quantity::new(7));

        let removed = ledger.remove_product(&sku("W123"), Quantity::new(100)).unwrap();
        assert_eq!(removed, Quantity::new(10));
        assert!(ledger.is_empty());
        assert_eq!(ledger.used(), Quantity::ZERO);
    }

    #[test]
    fn partial_removal_decrements_used_once() {
        let mut ledger = ledger(10);
        ledger.add_product(&sku("A"), Quantity::new(6));

        ledger.remove_product(&sku("A"), Quantity::new(4)).unwrap();
        assert_eq!(ledger.quantity_of(&sku("A")), Quantity::new(2));
        assert_eq!(ledger.used(), Quantity::new(2));
        assert_eq!(ledger.available(), Quantity::new(8));
    }

    #[test]
    fn removing_unstocked_sku_keeps_used() {
        let mut ledger = ledger(10);
        ledger.add_product(&sku("A"), Quantity::new(4));

        let err = ledger.remove_product(&sku("B"), Quantity::new(4)).unwrap_err();
        assert!(matches!(err, InventoryError::NotStocked { .. }));
        assert_eq!(ledger.used(), Quantity::new(4));
    }

    #[test]
    fn zero_capacity_holds_nothing() {
        let mut ledger = ledger(0);
        assert_eq!(ledger.add_product(&sku("A"), Quantity::new(1)), Quantity::ZERO);
        assert!(ledger.is_empty());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(usize, u64),
        Remove(usize, u64),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0usize..4, 0u64..50).prop_map(|(s, q)| Op::Add(s, q)),
            (0usize..4, 0u64..50).prop_map(|(s, q)| Op::Remove(s, q)),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: `used` never exceeds capacity and always equals the sum
        /// of the entries, whatever the sequence of adds and removes.
        #[test]
        fn used_tracks_entries_within_capacity(
            capacity in 0u64..100,
            ops in prop::collection::vec(op(), 0..60)
        ) {
            let skus = ["A", "B", "C", "D"];
            let mut ledger = ledger(capacity);

            for op in ops {
                match op {
                    Op::Add(i, q) => {
                        ledger.add_product(&sku(skus[i]), Quantity::new(q));
                    }
                    Op::Remove(i, q) => {
                        let _ = ledger.remove_product(&sku(skus[i]), Quantity::new(q));
                    }
                }
                prop_assert!(ledger.used().get() <= capacity);
                prop_assert_eq!(ledger.used(), ledger.entries().total());
                prop_assert!(ledger.entries().iter().all(|(_, q)| !q.is_zero()));
            }
        }
    }
}
