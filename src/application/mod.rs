//! Application layer bridging the basket engine to a key-value store.
//!
//! This module defines `BasketStorage`, the persistence adapter that loads
//! the current snapshot, applies one engine mutation and writes the result
//! back. Each call is one unconditional read-modify-write; concurrent
//! writers racing on the same key are last-write-wins.

pub mod storage;
