//! Row-level extraction failures.
//!
//! These never abort an extraction; the row is skipped and the failure is
//! reported back as a [`RowDiagnostic`].

/// Why a table row produced no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    /// Row has enough cells to look like data but lacks a mapped column
    MissingColumn {
        field: &'static str,
        column: usize,
        cells: usize,
    },
    EmptyName,
    EmptyRegion,
    /// Population text left something other than digits after cleaning
    InvalidPopulation { raw: String },
    /// Population is digits but too large to store
    PopulationOutOfRange { raw: String },
}

impl std::fmt::Display for RowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingColumn {
                field,
                column,
                cells,
            } => write!(f, "missing {field} column {column} (row has {cells} cells)"),
            Self::EmptyName => write!(f, "empty country name"),
            Self::EmptyRegion => write!(f, "empty region"),
            Self::InvalidPopulation { raw } => write!(f, "invalid population {raw:?}"),
            Self::PopulationOutOfRange { raw } => write!(f, "population {raw:?} out of range"),
        }
    }
}

impl std::error::Error for RowError {}

/// A skipped row and the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDiagnostic {
    /// Zero-based position among the table's rows, header rows included
    pub row: usize,
    pub error: RowError,
}

impl std::fmt::Display for RowDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row {}: {}", self.row, self.error)
    }
}
