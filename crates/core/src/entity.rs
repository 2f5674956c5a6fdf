//! Entity trait: things known by an identifier rather than by their fields.

/// Anything the inventory tracks by identity (products by SKU, warehouses by id).
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    fn id(&self) -> &Self::Id;

    /// Two entities are the same thing when their identifiers match,
    /// whatever their other fields say.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
