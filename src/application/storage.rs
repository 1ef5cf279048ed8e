use crate::domain::basket::Basket;
use crate::domain::item::Item;
use crate::domain::ports::KeyValueStoreBox;
use crate::error::{BasketError, Result};
use tracing::debug;

/// Store key the basket snapshot is persisted under.
pub const BASKET_KEY: &str = "basket";

/// Persistence adapter for the basket engine.
///
/// Owns a key-value store handle and exposes the basket operations as
/// load-mutate-save round-trips. Every read/write failure is re-raised with
/// the name of the high-level operation that could not complete; nothing is
/// swallowed or retried.
pub struct BasketStorage {
    store: KeyValueStoreBox,
    empty: Basket,
}

impl BasketStorage {
    pub fn new(store: KeyValueStoreBox) -> Self {
        Self::with_empty(store, Basket::empty())
    }

    /// Uses `empty` as the basket template whenever no snapshot exists yet,
    /// letting callers carry extra top-level fields from the first write on.
    pub fn with_empty(store: KeyValueStoreBox, empty: Basket) -> Self {
        Self { store, empty }
    }

    /// Adds an item (merging quantities on an existing `mpn`) and persists
    /// the updated basket.
    pub fn add(&self, item: Item) -> Result<Basket> {
        self.mutate("add", |basket| basket.add_item(item))
    }

    pub fn increment(&self, mpn: &str, qty: i64) -> Result<Basket> {
        self.mutate("increment", |basket| basket.increment_item(mpn, qty))
    }

    pub fn decrement(&self, mpn: &str, qty: i64) -> Result<Basket> {
        self.mutate("decrement", |basket| basket.decrement_item(mpn, qty))
    }

    pub fn remove(&self, mpn: &str) -> Result<Basket> {
        self.mutate("remove", |basket| basket.remove_item(mpn))
    }

    /// Returns the current item sequence without mutating anything.
    pub fn items(&self) -> Result<Vec<Item>> {
        Ok(self.load("items")?.items)
    }

    /// Returns the current basket, or the empty template when no snapshot
    /// has been written yet.
    pub fn snapshot(&self) -> Result<Basket> {
        self.load("load")
    }

    /// Clears the entire underlying store, basket key included.
    pub fn clear(&self) -> Result<()> {
        debug!("clearing store");
        self.store
            .clear()
            .map_err(|source| BasketError::StoreUnavailable { op: "clear", source })
    }

    fn mutate(&self, op: &'static str, f: impl FnOnce(&mut Basket)) -> Result<Basket> {
        let mut basket = self.load(op)?;
        f(&mut basket);
        self.save(op, &basket)?;
        debug!(op, items = basket.items.len(), "basket updated");
        Ok(basket)
    }

    fn load(&self, op: &'static str) -> Result<Basket> {
        let snapshot = self
            .store
            .get(BASKET_KEY)
            .map_err(|source| BasketError::StoreUnavailable { op, source })?;

        match snapshot {
            Some(bytes) => serde_json::from_slice(&bytes)
                .map_err(|source| BasketError::MalformedSnapshot { op, source }),
            None => Ok(self.empty.clone()),
        }
    }

    fn save(&self, op: &'static str, basket: &Basket) -> Result<()> {
        let bytes = serde_json::to_vec(basket)
            .map_err(|source| BasketError::MalformedSnapshot { op, source })?;
        self.store
            .put(BASKET_KEY, &bytes)
            .map_err(|source| BasketError::StoreUnavailable { op, source })
    }
}
