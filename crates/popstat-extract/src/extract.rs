//! Table extraction from an HTML document.

use std::sync::LazyLock;

use popstat_core::CountryRecord;
use scraper::{ElementRef, Html, Selector};

use crate::error::{RowDiagnostic, RowError};
use crate::layout::ColumnLayout;
use crate::normalize::{clean_name, parse_population};

static TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("invalid table selector"));
static ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("invalid row selector"));
static CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("th, td").expect("invalid cell selector"));

/// Records pulled from a document plus the rows that were skipped.
#[derive(Debug, Default)]
pub struct Extraction {
    pub records: Vec<CountryRecord>,
    pub diagnostics: Vec<RowDiagnostic>,
    /// Whether a table with the layout's class was present at all
    pub table_found: bool,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Extract country records using the default layout.
pub fn extract(html: &str) -> Extraction {
    extract_with(html, &ColumnLayout::default())
}

/// Extract country records from the first table carrying `layout.table_class`.
///
/// Never fails: a missing table yields an empty extraction, and bad rows are
/// skipped and listed in [`Extraction::diagnostics`].
pub fn extract_with(html: &str, layout: &ColumnLayout) -> Extraction {
    let document = Html::parse_document(html);

    let Some(table) = find_table(&document, &layout.table_class) else {
        log::warn!("No table with class '{}' found", layout.table_class);
        return Extraction::default();
    };

    let mut extraction = Extraction {
        table_found: true,
        ..Default::default()
    };

    for (idx, row) in table.select(&ROW).enumerate().skip(layout.header_rows) {
        let cells: Vec<String> = row.select(&CELL).map(cell_text).collect();
        if cells.len() < layout.min_cells {
            log::debug!("row {idx}: {} cells, skipping", cells.len());
            continue;
        }

        match parse_row(&cells, layout) {
            Ok(record) => extraction.records.push(record),
            Err(error) => {
                let diag = RowDiagnostic { row: idx, error };
                log::warn!("Parsing error: {diag}");
                extraction.diagnostics.push(diag);
            }
        }
    }

    log::debug!(
        "Extracted {} records, {} rows rejected",
        extraction.records.len(),
        extraction.diagnostics.len()
    );
    extraction
}

fn find_table<'a>(document: &'a Html, class: &str) -> Option<ElementRef<'a>> {
    document
        .select(&TABLE)
        .find(|t| t.value().classes().any(|c| c == class))
}

/// Concatenated text of a cell and its descendants, trimmed.
fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

fn column<'c>(
    cells: &'c [String],
    column: usize,
    field: &'static str,
) -> Result<&'c str, RowError> {
    cells
        .get(column)
        .map(String::as_str)
        .ok_or(RowError::MissingColumn {
            field,
            column,
            cells: cells.len(),
        })
}

/// Map one row's cells to a record by column position.
fn parse_row(cells: &[String], layout: &ColumnLayout) -> Result<CountryRecord, RowError> {
    let name = clean_name(column(cells, layout.name_column, "name")?);
    let region = column(cells, layout.region_column, "region")?.trim().to_string();
    let population = parse_population(column(cells, layout.population_column, "population")?)?;

    if name.is_empty() {
        return Err(RowError::EmptyName);
    }
    if region.is_empty() {
        return Err(RowError::EmptyRegion);
    }

    Ok(CountryRecord {
        name,
        region,
        population,
    })
}
