//! DuckDB-backed country store.
//!
//! Each [`Store`] owns one connection for the duration of a load or a read;
//! dropping it closes the connection on every exit path.

use std::path::Path;

use anyhow::{Context, Result, bail};
use duckdb::{Connection, Row, params};
use popstat_core::{CountryPopulation, CountryRecord, RegionSummary};

use crate::sql;

/// Locator that selects a throwaway in-memory database.
pub const IN_MEMORY: &str = ":memory:";

pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (or create) the database at `locator` and ensure the schema.
    ///
    /// [`IN_MEMORY`] opens a private in-memory database. Server URLs such as
    /// `postgresql://...` are rejected rather than treated as file paths.
    pub fn open(locator: &str) -> Result<Self> {
        if locator == IN_MEMORY {
            return Self::open_in_memory();
        }
        if locator.contains("://") {
            bail!("Database locator must be a DuckDB file path or {IN_MEMORY}, got URL: {locator}");
        }

        let path = Path::new(locator);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create database dir: {}", parent.display())
            })?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open DuckDB database: {}", path.display()))?;
        log::debug!("Opened database {}", path.display());
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn =
            Connection::open_in_memory().context("Failed to open DuckDB in-memory connection")?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(sql::create_schema())
            .context("Failed to create countries table")?;
        Ok(Self { conn })
    }

    /// Append records in one transaction. Existing rows are never touched,
    /// so loading the same page twice stores every country twice.
    ///
    /// Returns the number of rows inserted.
    pub fn append(&mut self, records: &[CountryRecord]) -> Result<usize> {
        let tx = self
            .conn
            .transaction()
            .context("Failed to begin transaction")?;
        {
            let mut stmt = tx
                .prepare(sql::insert_country())
                .context("Failed to prepare insert")?;
            for record in records {
                let population = record
                    .population
                    .map(i64::try_from)
                    .transpose()
                    .with_context(|| format!("Population out of range for {}", record.name))?;
                stmt.execute(params![record.name, record.region, population])
                    .with_context(|| format!("Failed to insert {}", record.name))?;
            }
        }
        tx.commit().context("Failed to commit countries")?;

        log::debug!("Inserted {} rows", records.len());
        Ok(records.len())
    }

    /// All stored records in load order.
    pub fn records(&self) -> Result<Vec<CountryRecord>> {
        let mut stmt = self
            .conn
            .prepare(sql::select_countries())
            .context("Failed to prepare countries query")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(CountryRecord {
                    name: row.get(0)?,
                    region: row.get(1)?,
                    population: population(row, 2)?,
                })
            })
            .context("Failed to query countries")?;
        rows.collect::<Result<Vec<_>, _>>()
            .context("Failed to read country row")
    }

    /// Per-region totals and extremes, computed by the grouped query.
    pub fn region_summaries(&self) -> Result<Vec<RegionSummary>> {
        let mut stmt = self
            .conn
            .prepare(sql::region_summaries())
            .context("Failed to prepare region summary query")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(RegionSummary {
                    region: row.get(0)?,
                    total_population: row.get::<_, i64>(1)? as u64,
                    largest: extremum(row, 2)?,
                    smallest: extremum(row, 4)?,
                })
            })
            .context("Failed to query region summaries")?;
        rows.collect::<Result<Vec<_>, _>>()
            .context("Failed to read region summary row")
    }

    /// Number of stored rows.
    pub fn count(&self) -> Result<u64> {
        let n: i64 = self
            .conn
            .query_row(sql::count_countries(), [], |row| row.get(0))
            .context("Failed to count countries")?;
        Ok(n as u64)
    }
}

// The schema's CHECK keeps stored populations non-negative.
fn population(row: &Row<'_>, idx: usize) -> duckdb::Result<Option<u64>> {
    Ok(row.get::<_, Option<i64>>(idx)?.map(|p| p as u64))
}

/// Name at `idx`, population at `idx + 1`; both NULL when the region has
/// no known population.
fn extremum(row: &Row<'_>, idx: usize) -> duckdb::Result<Option<CountryPopulation>> {
    let name: Option<String> = row.get(idx)?;
    let population = population(row, idx + 1)?;
    Ok(name
        .zip(population)
        .map(|(name, population)| CountryPopulation { name, population }))
}
