//! Where the fields live in the source table.
//!
//! Extraction is positional: if the publisher reorders columns, only this
//! mapping changes, not the traversal in [`crate::extract`].

use serde::Deserialize;

/// Position-based mapping from table cells to record fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ColumnLayout {
    /// Class that marks the population table (first match wins)
    pub table_class: String,
    /// Leading rows that are header, never data
    pub header_rows: usize,
    /// Rows with fewer cells are ignored without a diagnostic
    pub min_cells: usize,
    pub name_column: usize,
    pub population_column: usize,
    pub region_column: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            table_class: "wikitable".to_string(),
            header_rows: 2,
            min_cells: 3,
            name_column: 0,
            population_column: 2,
            region_column: 4,
        }
    }
}

impl ColumnLayout {
    /// Default layout targeting a different table class.
    pub fn with_table_class(class: impl Into<String>) -> Self {
        Self {
            table_class: class.into(),
            ..Self::default()
        }
    }
}
