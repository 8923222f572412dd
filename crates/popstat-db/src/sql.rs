//! SQL for the `countries` relation.
//!
//! The schema lives here once and is shared by the load and print paths.

/// Creates the id sequence and the `countries` table if missing.
///
/// DuckDB has no AUTOINCREMENT; the primary key defaults to a sequence.
pub fn create_schema() -> &'static str {
    "CREATE SEQUENCE IF NOT EXISTS countries_id_seq START 1;

     CREATE TABLE IF NOT EXISTS countries (
       id BIGINT PRIMARY KEY DEFAULT nextval('countries_id_seq'),
       name VARCHAR NOT NULL,
       region VARCHAR NOT NULL,
       population BIGINT CHECK (population >= 0)
     )"
}

/// Single-row insert, executed once per record inside a transaction.
pub fn insert_country() -> &'static str {
    "INSERT INTO countries (name, region, population) VALUES (?, ?, ?)"
}

/// All records in load order.
pub fn select_countries() -> &'static str {
    "SELECT name, region, population FROM countries ORDER BY id"
}

pub fn count_countries() -> &'static str {
    "SELECT COUNT(*) FROM countries"
}

/// One row per region: total, then largest and smallest country by population.
///
/// Unknown populations add 0 to the total and never win an extreme; a region
/// with no known population gets NULL extremes. Ties on population go to the
/// lowest id (first loaded).
pub fn region_summaries() -> &'static str {
    "WITH totals AS (
       SELECT region,
         CAST(COALESCE(SUM(population), 0) AS BIGINT) AS total_population
       FROM countries
       GROUP BY region
     ),
     largest AS (
       SELECT region, name, population
       FROM countries
       WHERE population IS NOT NULL
       QUALIFY ROW_NUMBER() OVER (
         PARTITION BY region ORDER BY population DESC, id ASC
       ) = 1
     ),
     smallest AS (
       SELECT region, name, population
       FROM countries
       WHERE population IS NOT NULL
       QUALIFY ROW_NUMBER() OVER (
         PARTITION BY region ORDER BY population ASC, id ASC
       ) = 1
     )
     SELECT
       t.region,
       t.total_population,
       l.name AS largest_country,
       l.population AS largest_population,
       s.name AS smallest_country,
       s.population AS smallest_population
     FROM totals t
     LEFT JOIN largest l ON l.region = t.region
     LEFT JOIN smallest s ON s.region = t.region
     ORDER BY t.region"
}
