//! Per-warehouse stock ledgers.
//!
//! Every warehouse keeps a SKU → quantity mapping. Two flavours exist: one
//! that grows without bound and one that clamps stocking to a total capacity.
//! The directory holds them behind the `StockLedger` trait.

pub mod capacity;
pub mod r#trait;
pub mod unbounded;

pub use capacity::CapacityLedger;
pub use r#trait::{StockEntries, StockEntry, StockLedger, WarehouseSnapshot};
pub use unbounded::UnboundedLedger;

use stockroom_core::{Quantity, WarehouseId};

/// Build the ledger for a new warehouse: capacity-limited when a limit is
/// given, unbounded otherwise.
pub fn ledger_for(id: WarehouseId, limit: Option<Quantity>) -> Box<dyn StockLedger> {
    match limit {
        Some(capacity) => Box::new(CapacityLedger::new(id, capacity)),
        None => Box::new(UnboundedLedger::new(id)),
    }
}
