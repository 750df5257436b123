//! Common utilities shared by the package writer and the deck serializer.

pub mod unit;
pub mod xml;

pub use unit::{Extent, pct};
