//! popstat-extract: country population table extraction
//!
//! Finds the population table in an HTML page and turns its data rows into
//! [`CountryRecord`](popstat_core::CountryRecord)s. Pure: no I/O, and bad
//! rows are reported instead of failing the whole document.
//!
//! # Example
//!
//! ```ignore
//! let extraction = popstat_extract::extract(&html);
//! for diag in &extraction.diagnostics {
//!     eprintln!("skipped {diag}");
//! }
//! store.append(&extraction.records)?;
//! ```

pub mod error;
pub mod extract;
pub mod layout;
pub mod normalize;

// Re-exports
pub use error::{RowDiagnostic, RowError};
pub use extract::{Extraction, extract, extract_with};
pub use layout::ColumnLayout;
