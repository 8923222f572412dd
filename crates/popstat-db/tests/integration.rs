//! Load and print paths against an on-disk database.

use popstat_core::{CountryRecord, aggregate};
use popstat_db::Store;
use tempfile::TempDir;

const PAGE: &str = r#"
<html><body>
<table class="wikitable sortable">
  <tr><th rowspan="2">Location</th><th colspan="2">Population</th><th rowspan="2">Change</th><th rowspan="2">Region</th></tr>
  <tr><th>2022</th><th>2023</th></tr>
  <tr><td>France<sup>[a]</sup></td><td>67,000,000</td><td>67000000</td><td>…</td><td>Europe</td></tr>
  <tr><td>Monaco</td><td>36,297</td><td>36,297</td><td>+0.7%</td><td>Europe</td></tr>
  <tr><td>Sark</td><td></td><td>N/A</td><td></td><td>Europe</td></tr>
  <tr><td>Peru</td><td>34,049,588</td><td>34,352,719</td><td>+0.9%</td><td>Americas</td></tr>
  <tr><td>Bouvet Island</td><td></td><td></td><td></td><td>Antarctica</td></tr>
  <tr><td>Footnote</td><td>see text</td></tr>
  <tr><td>Atlantis</td><td>?</td><td>unknown</td><td></td><td>Ocean</td></tr>
</table>
</body></html>
"#;

fn db_path(dir: &TempDir) -> String {
    dir.path()
        .join("data")
        .join("population.duckdb")
        .to_string_lossy()
        .into_owned()
}

fn load(path: &str, html: &str) -> usize {
    let extraction = popstat_extract::extract(html);
    let mut store = Store::open(path).unwrap();
    store.append(&extraction.records).unwrap()
}

#[test]
fn load_then_print_in_separate_sessions() {
    let dir = TempDir::new().unwrap();
    let path = db_path(&dir);

    assert_eq!(load(&path, PAGE), 5);

    // Fresh connection: the store is the only coupling between the two paths
    let store = Store::open(&path).unwrap();
    let summaries = store.region_summaries().unwrap();

    let regions: Vec<&str> = summaries.iter().map(|s| s.region.as_str()).collect();
    assert_eq!(regions, vec!["Americas", "Antarctica", "Europe"]);

    let europe = &summaries[2];
    assert_eq!(europe.total_population, 67_036_297);
    assert_eq!(europe.largest_country(), "France");
    assert_eq!(europe.largest_population(), "67000000");
    assert_eq!(europe.smallest_country(), "Monaco");
    assert_eq!(europe.smallest_population(), "36297");

    let antarctica = &summaries[1];
    assert_eq!(antarctica.total_population, 0);
    assert!(antarctica.largest.is_none());
    assert!(antarctica.smallest.is_none());
}

#[test]
fn extracted_record_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = db_path(&dir);
    load(&path, PAGE);

    let store = Store::open(&path).unwrap();
    let records = store.records().unwrap();
    assert_eq!(
        records[0],
        CountryRecord::new("France", "Europe", Some(67_000_000))
    );
    assert_eq!(records[2], CountryRecord::new("Sark", "Europe", None));
}

#[test]
fn repeated_loads_append() {
    let dir = TempDir::new().unwrap();
    let path = db_path(&dir);
    load(&path, PAGE);
    load(&path, PAGE);

    let store = Store::open(&path).unwrap();
    assert_eq!(store.count().unwrap(), 10);
    let europe = store
        .region_summaries()
        .unwrap()
        .into_iter()
        .find(|s| s.region == "Europe")
        .unwrap();
    assert_eq!(europe.total_population, 2 * 67_036_297);
}

#[test]
fn page_without_table_persists_nothing() {
    let dir = TempDir::new().unwrap();
    let path = db_path(&dir);
    assert_eq!(load(&path, "<html><body><p>moved</p></body></html>"), 0);

    let store = Store::open(&path).unwrap();
    assert_eq!(store.count().unwrap(), 0);
    assert!(store.region_summaries().unwrap().is_empty());
}

#[test]
fn grouped_query_matches_in_memory_fold() {
    let records = vec![
        CountryRecord::new("A", "North", Some(10)),
        CountryRecord::new("B", "North", None),
        CountryRecord::new("C", "North", Some(30)),
        CountryRecord::new("D", "South", Some(30)),
        CountryRecord::new("E", "South", Some(30)),
        CountryRecord::new("F", "South", Some(2)),
        CountryRecord::new("G", "East", None),
        CountryRecord::new("H", "West", Some(0)),
    ];

    let mut store = Store::open_in_memory().unwrap();
    store.append(&records).unwrap();

    let from_sql = store.region_summaries().unwrap();
    let from_fold = aggregate(&store.records().unwrap());
    assert_eq!(from_sql, from_fold);
    assert_eq!(from_fold, aggregate(&records));
}

#[test]
fn summaries_are_stable_across_reads() {
    let mut store = Store::open_in_memory().unwrap();
    store
        .append(&popstat_extract::extract(PAGE).records)
        .unwrap();
    assert_eq!(
        store.region_summaries().unwrap(),
        store.region_summaries().unwrap()
    );
}
