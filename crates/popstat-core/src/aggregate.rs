//! In-memory regional aggregation.
//!
//! Reference semantics for the grouped query in `popstat-db`: both must
//! produce the same summaries for the same record set.

use std::collections::BTreeMap;

use crate::record::{CountryPopulation, CountryRecord, RegionSummary};

/// Fold records into one summary per region, sorted by region.
///
/// Unknown populations count as 0 toward the total and are ignored when
/// picking the largest and smallest country. Ties go to the record that
/// appears first in `records`. Totals saturate at `u64::MAX`.
pub fn aggregate(records: &[CountryRecord]) -> Vec<RegionSummary> {
    let mut groups: BTreeMap<&str, RegionSummary> = BTreeMap::new();

    for record in records {
        let summary = groups
            .entry(record.region.as_str())
            .or_insert_with(|| RegionSummary::empty(&record.region));

        let Some(population) = record.population else {
            continue;
        };
        summary.total_population = summary.total_population.saturating_add(population);

        if summary
            .largest
            .as_ref()
            .map_or(true, |c| population > c.population)
        {
            summary.largest = Some(CountryPopulation {
                name: record.name.clone(),
                population,
            });
        }
        if summary
            .smallest
            .as_ref()
            .map_or(true, |c| population < c.population)
        {
            summary.smallest = Some(CountryPopulation {
                name: record.name.clone(),
                population,
            });
        }
    }

    groups.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, region: &str, population: Option<u64>) -> CountryRecord {
        CountryRecord::new(name, region, population)
    }

    fn cp(name: &str, population: u64) -> Option<CountryPopulation> {
        Some(CountryPopulation {
            name: name.to_string(),
            population,
        })
    }

    #[test]
    fn empty_input() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn null_population_counts_toward_total_only() {
        let records = vec![
            rec("A", "R", Some(10)),
            rec("B", "R", None),
            rec("C", "R", Some(30)),
        ];
        let summaries = aggregate(&records);
        assert_eq!(summaries.len(), 1);
        let s = &summaries[0];
        assert_eq!(s.total_population, 40);
        assert_eq!(s.largest, cp("C", 30));
        assert_eq!(s.smallest, cp("A", 10));
    }

    #[test]
    fn all_null_region_is_kept() {
        let records = vec![rec("X", "Nowhere", None), rec("Y", "Nowhere", None)];
        let summaries = aggregate(&records);
        assert_eq!(summaries, vec![RegionSummary::empty("Nowhere")]);
    }

    #[test]
    fn one_summary_per_region_sorted() {
        let records = vec![
            rec("Peru", "Americas", Some(34)),
            rec("France", "Europe", Some(67)),
            rec("Chile", "Americas", Some(19)),
            rec("Mali", "Africa", Some(22)),
        ];
        let regions: Vec<_> = aggregate(&records)
            .into_iter()
            .map(|s| s.region)
            .collect();
        assert_eq!(regions, vec!["Africa", "Americas", "Europe"]);
    }

    #[test]
    fn single_record_is_both_extremes() {
        let summaries = aggregate(&[rec("Monaco", "Europe", Some(38_000))]);
        assert_eq!(summaries[0].largest, cp("Monaco", 38_000));
        assert_eq!(summaries[0].smallest, cp("Monaco", 38_000));
    }

    #[test]
    fn ties_go_to_first_record() {
        let records = vec![
            rec("First", "R", Some(5)),
            rec("Second", "R", Some(5)),
        ];
        let s = &aggregate(&records)[0];
        assert_eq!(s.largest, cp("First", 5));
        assert_eq!(s.smallest, cp("First", 5));
        assert_eq!(s.total_population, 10);
    }

    #[test]
    fn zero_population_is_an_extreme() {
        let records = vec![rec("Empty", "R", Some(0)), rec("Full", "R", Some(9))];
        let s = &aggregate(&records)[0];
        assert_eq!(s.smallest, cp("Empty", 0));
    }

    #[test]
    fn aggregation_is_idempotent() {
        let records = vec![
            rec("A", "R1", Some(1)),
            rec("B", "R2", None),
            rec("C", "R1", Some(3)),
        ];
        assert_eq!(aggregate(&records), aggregate(&records));
    }

    #[test]
    fn duplicates_accumulate() {
        let records = vec![rec("A", "R", Some(7)), rec("A", "R", Some(7))];
        assert_eq!(aggregate(&records)[0].total_population, 14);
    }

    #[test]
    fn total_saturates_instead_of_overflowing() {
        let half = u64::MAX / 2 + 1;
        let records = vec![rec("A", "R", Some(half)), rec("B", "R", Some(half))];
        let s = &aggregate(&records)[0];
        assert_eq!(s.total_population, u64::MAX);
        assert_eq!(s.largest, cp("A", half));
    }
}
