//! Popstat Core - shared types and plumbing for the population pipeline
//!
//! Record types and the in-memory regional fold used by both the extractor
//! and the store, plus the document fetcher, logging and progress display.

pub mod aggregate;
pub mod fetch;
pub mod logging;
pub mod progress;
pub mod record;

// Re-exports for convenience
pub use aggregate::aggregate;
pub use fetch::{FetchConfig, FetchError, SHARED_RUNTIME, fetch_document};
pub use logging::init_logging;
pub use progress::{ProgressContext, fmt_num};
pub use record::{ABSENT, CountryPopulation, CountryRecord, MAX_POPULATION, RegionSummary};
