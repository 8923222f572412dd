//! popstat-db: persistent country store
//!
//! Appends extracted country records to a DuckDB database and computes
//! per-region statistics with a single grouped query. The in-memory
//! equivalent is [`popstat_core::aggregate`]; both agree on tie-breaks.

mod sql;
mod store;

pub use store::{IN_MEMORY, Store};
