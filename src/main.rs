use clap::Parser;
use kvbasket::application::storage::BasketStorage;
use kvbasket::domain::item::{Item, Money};
use kvbasket::error::BasketError;
use kvbasket::infrastructure::factory::{self, StoreKind};
use kvbasket::interfaces::csv::op_reader::{BasketOp, OpKind, OpReader};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input basket operations CSV file (columns: op, mpn, qty, price)
    input: PathBuf,

    /// Storage backend ("memory", or "rocksdb" with the storage-rocksdb feature)
    #[arg(long, default_value = "memory")]
    storage: StoreKind,

    /// Path to the persistent database (required for rocksdb storage)
    #[arg(long)]
    db_path: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let store = factory::create_store(cli.storage, cli.db_path.as_deref()).into_diagnostic()?;
    let storage = BasketStorage::new(store);

    // Replay operations; a bad row is reported and skipped, not fatal.
    let file = File::open(cli.input).into_diagnostic()?;
    let reader = OpReader::new(file);
    for op_result in reader.ops() {
        match op_result {
            Ok(op) => {
                if let Err(e) = apply(&storage, op) {
                    eprintln!("Error applying operation: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading operation: {}", e);
            }
        }
    }

    // Output the final basket snapshot.
    let basket = storage.snapshot().into_diagnostic()?;
    let stdout = io::stdout();
    serde_json::to_writer_pretty(stdout.lock(), &basket).into_diagnostic()?;
    println!();

    Ok(())
}

fn apply(storage: &BasketStorage, op: BasketOp) -> kvbasket::error::Result<()> {
    match op.op {
        OpKind::Add => {
            let mut item = Item::new(required_mpn(&op)?, op.qty.unwrap_or(1));
            item.price = op.price.map(Money::new);
            storage.add(item)?;
        }
        OpKind::Increment => {
            storage.increment(&required_mpn(&op)?, required_qty(&op)?)?;
        }
        OpKind::Decrement => {
            storage.decrement(&required_mpn(&op)?, required_qty(&op)?)?;
        }
        OpKind::Remove => {
            storage.remove(&required_mpn(&op)?)?;
        }
        OpKind::Clear => {
            storage.clear()?;
        }
    }
    Ok(())
}

fn required_mpn(op: &BasketOp) -> kvbasket::error::Result<String> {
    op.mpn
        .clone()
        .ok_or_else(|| BasketError::OperationError("missing mpn".to_string()))
}

fn required_qty(op: &BasketOp) -> kvbasket::error::Result<i64> {
    op.qty
        .ok_or_else(|| BasketError::OperationError("missing qty".to_string()))
}
