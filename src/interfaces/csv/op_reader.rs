use crate::error::{BasketError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum OpKind {
    Add,
    Increment,
    Decrement,
    Remove,
    Clear,
}

/// One basket operation from the CSV stream.
///
/// `mpn` is required for everything except `clear`; `qty` and `price` are
/// optional depending on the operation. Columns: `op, mpn, qty, price`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct BasketOp {
    pub op: OpKind,
    pub mpn: Option<String>,
    pub qty: Option<i64>,
    pub price: Option<Decimal>,
}

/// Reads basket operations from a CSV source.
///
/// Wraps `csv::Reader` and yields an iterator over `Result<BasketOp>`,
/// trimming whitespace and tolerating short records so rows can omit
/// trailing columns.
pub struct OpReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OpReader<R> {
    /// Creates a new `OpReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes operations.
    pub fn ops(self) -> impl Iterator<Item = Result<BasketOp>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(BasketError::from))
    }
}
