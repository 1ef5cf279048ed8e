//! Domain layer: the basket value types, the pure mutation engine and the
//! key-value store port the persistence adapter is wired against.

pub mod basket;
pub mod item;
pub mod ports;
