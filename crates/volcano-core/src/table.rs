//! Ordered volcano table and its order-preserving filters

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::record::VolcanoRecord;

/// Volcano rows sorted by (country, name)
///
/// The order is fixed when the table is built. Every filter keeps the
/// relative order of the rows it retains.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VolcanoTable {
    records: Vec<VolcanoRecord>,
}

impl VolcanoTable {
    /// Build a table, sorting rows by (country, name) with a stable sort
    pub fn from_records(mut records: Vec<VolcanoRecord>) -> Self {
        records.sort_by(compare_country_name);
        Self { records }
    }

    /// Wrap rows that are already in table order (used by filters)
    fn from_sorted(records: Vec<VolcanoRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[VolcanoRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VolcanoRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether rows are in (country, name) order
    pub fn is_sorted(&self) -> bool {
        self.records
            .windows(2)
            .all(|pair| compare_country_name(&pair[0], &pair[1]) != Ordering::Greater)
    }

    /// Rows of one country
    pub fn filter_country(&self, country: &str) -> Self {
        self.filter(|r| r.country == country)
    }

    /// Rows of one region
    pub fn filter_region(&self, region: &str) -> Self {
        self.filter(|r| r.region == region)
    }

    /// Rows whose country is any of `countries`
    pub fn filter_countries<S: AsRef<str>>(&self, countries: &[S]) -> Self {
        let wanted: HashSet<&str> = countries.iter().map(AsRef::as_ref).collect();
        self.filter(|r| wanted.contains(r.country.as_str()))
    }

    /// Rows matching an arbitrary predicate
    pub fn filter(&self, mut keep: impl FnMut(&VolcanoRecord) -> bool) -> Self {
        Self::from_sorted(self.records.iter().filter(|r| keep(r)).cloned().collect())
    }

    /// Countries of a region, in table order without repeats
    pub fn countries_in_region(&self, region: &str) -> Vec<String> {
        unique_in_order(
            self.records
                .iter()
                .filter(|r| r.region == region)
                .map(|r| r.country.as_str()),
        )
    }

    /// Volcano types present, in order of first appearance
    pub fn volcano_types(&self) -> Vec<String> {
        unique_in_order(self.records.iter().map(|r| r.volcano_type.as_str()))
    }
}

impl<'a> IntoIterator for &'a VolcanoTable {
    type Item = &'a VolcanoRecord;
    type IntoIter = std::slice::Iter<'a, VolcanoRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn compare_country_name(a: &VolcanoRecord, b: &VolcanoRecord) -> Ordering {
    a.country
        .cmp(&b.country)
        .then_with(|| a.name.cmp(&b.name))
}

/// Distinct values keeping first-occurrence order
pub(crate) fn unique_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::fixtures::{placed, volcano};

    fn sample() -> VolcanoTable {
        VolcanoTable::from_records(vec![
            volcano("Japan", "Fuji", "Stratovolcano", 3776.0),
            volcano("Chile", "Villarrica", "Stratovolcano", 2847.0),
            volcano("Japan", "Asama", "Complex volcano", 2568.0),
            volcano("Chile", "Lascar", "Stratovolcano", 5592.0),
            volcano("Iceland", "Hekla", "Stratovolcano", 1491.0),
        ])
    }

    #[test]
    fn test_rows_sorted_by_country_then_name() {
        let table = sample();
        let keys: Vec<(&str, &str)> = table
            .iter()
            .map(|r| (r.country.as_str(), r.name.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("Chile", "Lascar"),
                ("Chile", "Villarrica"),
                ("Iceland", "Hekla"),
                ("Japan", "Asama"),
                ("Japan", "Fuji"),
            ]
        );
        assert!(table.is_sorted());
    }

    #[test]
    fn test_resorting_is_idempotent() {
        let table = sample();
        let again = VolcanoTable::from_records(table.records().to_vec());
        assert_eq!(table, again);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut first = volcano("Japan", "Fuji", "Stratovolcano", 3776.0);
        first.last_eruption = "1707".into();
        let mut second = first.clone();
        second.last_eruption = "Unknown".into();

        let table = VolcanoTable::from_records(vec![first.clone(), second.clone()]);
        assert_eq!(table.records(), &[first, second]);
    }

    #[test]
    fn test_filters_keep_order() {
        let table = sample();
        let japan = table.filter_country("Japan");
        let names: Vec<&str> = japan.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Asama", "Fuji"]);

        let picked = table.filter_countries(&["Japan", "Chile"]);
        assert_eq!(picked.len(), 4);
        assert!(picked.is_sorted());

        assert!(table.filter_country("Atlantis").is_empty());
    }

    #[test]
    fn test_countries_in_region() {
        let table = VolcanoTable::from_records(vec![
            placed("Italy", "Mediterranean", "Etna", 37.7, 15.0),
            placed("Greece", "Mediterranean", "Santorini", 36.4, 25.4),
            placed("Italy", "Mediterranean", "Vesuvius", 40.8, 14.4),
            placed("Iceland", "Iceland", "Hekla", 63.9, -19.6),
        ]);
        assert_eq!(
            table.countries_in_region("Mediterranean"),
            vec!["Greece".to_string(), "Italy".to_string()]
        );
        assert!(table.countries_in_region("Antarctica").is_empty());
        assert_eq!(table.filter_region("Iceland").len(), 1);
    }

    #[test]
    fn test_volcano_types_first_occurrence() {
        let table = sample();
        assert_eq!(
            table.volcano_types(),
            vec!["Stratovolcano".to_string(), "Complex volcano".to_string()]
        );
    }
}
