//! Product catalog.
//!
//! Products are registered once by SKU and never change or go away.

pub mod catalog;
pub mod product;

pub use catalog::Catalog;
pub use product::Product;
