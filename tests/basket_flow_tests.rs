use kvbasket::application::storage::BasketStorage;
use kvbasket::domain::basket::Basket;
use kvbasket::domain::item::{Item, Money};
use kvbasket::infrastructure::in_memory::InMemoryStore;
use rust_decimal_macros::dec;

// The full client flow: seed an extended empty basket, add an item carrying
// extra fields, adjust quantities, remove, clear.
#[test]
fn test_basket_lifecycle_through_storage() {
    let mut template = Basket::empty();
    template.extra.insert("returns".to_string(), "".into());
    let storage = BasketStorage::with_empty(Box::new(InMemoryStore::new()), template);

    let mut item = Item::priced("11111", 1, dec!(9.99));
    item.extra.insert("image".to_string(), "url".into());

    let basket = storage.add(item).unwrap();
    assert_eq!(basket.items().len(), 1);
    assert_eq!(basket.total, Money::new(dec!(9.99)));

    let basket = storage.increment("11111", 3).unwrap();
    assert_eq!(basket.items()[0].qty, 4);

    let basket = storage.increment("11111", 1).unwrap();
    assert_eq!(basket.items()[0].qty, 5);

    let basket = storage.decrement("11111", 1).unwrap();
    assert_eq!(basket.items()[0].qty, 4);
    assert_eq!(basket.total, Money::new(dec!(39.96)));

    // Caller-attached fields survive the whole round-trip.
    assert_eq!(basket.items()[0].extra.get("image"), Some(&"url".into()));
    assert_eq!(basket.extra.get("returns"), Some(&"".into()));

    let basket = storage.remove("11111").unwrap();
    assert!(basket.items().is_empty());
    assert_eq!(basket.total, Money::ZERO);

    storage.clear().unwrap();
    assert!(storage.items().unwrap().is_empty());
}

#[test]
fn test_two_adapters_share_one_store_last_write_wins() {
    let store = InMemoryStore::new();
    let first = BasketStorage::new(Box::new(store.clone()));
    let second = BasketStorage::new(Box::new(store));

    first.add(Item::priced("11111", 2, dec!(10))).unwrap();
    let basket = second.increment("11111", 2).unwrap();

    assert_eq!(basket.items()[0].qty, 4);
    assert_eq!(first.snapshot().unwrap(), basket);
}
