use crate::domain::item::{Item, Money};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The basket aggregate: an ordered sequence of items plus the derived total.
///
/// `items` keeps insertion order; the order is significant and survives every
/// mutation. `total` is always recomputed at the end of a mutating operation
/// and is never set independently. `postage` is opaque to the engine, and
/// `extra` carries any caller-added top-level fields verbatim through
/// serialization round-trips.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Basket {
    pub items: Vec<Item>,
    pub total: Money,
    pub postage: Money,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Basket {
    /// An empty basket: no items, zero total, zero postage.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Adds a unique item, or merges quantities when the `mpn` is already
    /// present. In the merge case only the incoming quantity is used; the
    /// incoming item's other fields are discarded.
    pub fn add_item(&mut self, item: Item) {
        if self.contains(&item.mpn) {
            self.increment_item(&item.mpn, item.qty);
            return;
        }
        self.items.push(item);
        self.recalculate_total();
    }

    /// Increments the quantity of every item matching `mpn`. Unknown `mpn`
    /// is a no-op. The quantity is not validated; callers may pass any value.
    pub fn increment_item(&mut self, mpn: &str, qty: i64) {
        for item in &mut self.items {
            if item.mpn == mpn {
                item.qty += qty;
            }
        }
        self.recalculate_total();
    }

    /// Decrements the quantity of the matching item, but only while the
    /// result stays above zero. A decrement that would hit or cross zero
    /// leaves the quantity unchanged; removal is always an explicit
    /// `remove_item` call.
    pub fn decrement_item(&mut self, mpn: &str, qty: i64) {
        for item in &mut self.items {
            if item.mpn == mpn && item.qty > qty {
                item.qty -= qty;
            }
        }
        self.recalculate_total();
    }

    /// Removes every item matching `mpn`, keeping the relative order of the
    /// remaining items. Unknown `mpn` is a no-op.
    pub fn remove_item(&mut self, mpn: &str) {
        self.items.retain(|item| item.mpn != mpn);
        self.recalculate_total();
    }

    fn contains(&self, mpn: &str) -> bool {
        self.items.iter().any(|item| item.mpn == mpn)
    }

    fn recalculate_total(&mut self) {
        self.total = self
            .items
            .iter()
            .fold(Money::ZERO, |acc, item| acc + item.line_total());
    }
}
