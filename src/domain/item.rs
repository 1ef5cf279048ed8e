use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::ops::{Add, AddAssign};

/// A monetary value with exact decimal arithmetic.
///
/// Wraps `rust_decimal::Decimal` and serializes as a plain JSON number so
/// persisted snapshots keep the `{"price": 14.56}` shape callers expect.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Money(#[serde(with = "rust_decimal::serde::float")] pub Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// The price extended over a quantity.
    pub fn times(self, qty: i64) -> Self {
        Self(self.0 * Decimal::from(qty))
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

/// A single basket line, keyed by manufacturer part number.
///
/// `extra` is an open bag of additional fields (title, image url, whatever
/// the caller attaches). It is flattened into the serialized object and
/// copied through every mutation untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub mpn: String,
    pub qty: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Money>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// Creates an unpriced item. Unpriced items contribute zero to the total.
    pub fn new(mpn: impl Into<String>, qty: i64) -> Self {
        Self {
            mpn: mpn.into(),
            qty,
            price: None,
            extra: Map::new(),
        }
    }

    pub fn priced(mpn: impl Into<String>, qty: i64, price: Decimal) -> Self {
        Self {
            price: Some(Money::new(price)),
            ..Self::new(mpn, qty)
        }
    }

    pub fn line_total(&self) -> Money {
        self.price.unwrap_or(Money::ZERO).times(self.qty)
    }
}
