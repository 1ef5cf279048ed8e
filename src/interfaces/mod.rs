//! Inbound interfaces: the CSV operation stream consumed by the CLI.

pub mod csv;
