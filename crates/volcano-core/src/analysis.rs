//! Queries behind the tables and charts: tallest volcanoes, per-country
//! counts, elevation statistics and type counts.

use std::cmp::Ordering;

use serde::Serialize;

use crate::table::{unique_in_order, VolcanoTable};

/// Rows shown in the "tallest volcanoes" table and bar chart
pub const TALLEST_LIMIT: usize = 10;

/// Projection of a record used by the tallest-volcanoes table
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TallestRow {
    pub country: String,
    pub name: String,
    pub elevation: f64,
    pub last_eruption: String,
}

/// Volcano count of one country
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CountryCount {
    pub country: String,
    pub volcanoes: usize,
}

/// Elevation aggregates of one country
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ElevationStats {
    pub country: String,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Up to `limit` rows sorted by elevation, highest first
///
/// The sort is stable, so equal elevations keep table order. Rows without
/// an elevation go last.
pub fn tallest(table: &VolcanoTable, limit: usize) -> Vec<TallestRow> {
    let mut rows: Vec<TallestRow> = table
        .iter()
        .map(|r| TallestRow {
            country: r.country.clone(),
            name: r.name.clone(),
            elevation: r.elevation,
            last_eruption: r.last_eruption.clone(),
        })
        .collect();
    rows.sort_by(|a, b| descending_nan_last(a.elevation, b.elevation));
    rows.truncate(limit);
    rows
}

fn descending_nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

/// Number of volcanoes per country, countries ascending
///
/// Counts rows with a known elevation, the column the count is taken over.
pub fn count_by_country(table: &VolcanoTable) -> Vec<CountryCount> {
    let mut counts: Vec<CountryCount> = Vec::new();
    // Table rows are grouped by country already
    for record in table {
        let counted = usize::from(record.has_elevation());
        match counts.last_mut() {
            Some(last) if last.country == record.country => last.volcanoes += counted,
            _ => counts.push(CountryCount {
                country: record.country.clone(),
                volcanoes: counted,
            }),
        }
    }
    counts
}

/// Keep the count rows of the selected countries, in count-table order
pub fn narrow_counts<S: AsRef<str>>(counts: &[CountryCount], selected: &[S]) -> Vec<CountryCount> {
    counts
        .iter()
        .filter(|c| selected.iter().any(|s| s.as_ref() == c.country))
        .cloned()
        .collect()
}

/// Minimum, maximum and mean elevation for each selected country present
/// in the table, countries ascending
///
/// Missing elevations are ignored; a country without any yields `NaN`.
pub fn elevation_stats<S: AsRef<str>>(table: &VolcanoTable, selected: &[S]) -> Vec<ElevationStats> {
    let subset = table.filter_countries(selected);
    let countries = unique_in_order(subset.iter().map(|r| r.country.as_str()));

    countries
        .into_iter()
        .map(|country| {
            let elevations: Vec<f64> = subset
                .iter()
                .filter(|r| r.country == country && r.has_elevation())
                .map(|r| r.elevation)
                .collect();
            let (min, max, mean) = if elevations.is_empty() {
                (f64::NAN, f64::NAN, f64::NAN)
            } else {
                let min = elevations.iter().copied().fold(f64::INFINITY, f64::min);
                let max = elevations.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                let mean = elevations.iter().sum::<f64>() / elevations.len() as f64;
                (min, max, mean)
            };
            ElevationStats {
                country,
                min,
                max,
                mean,
            }
        })
        .collect()
}

/// Occurrences of each volcano type, in order of first appearance
pub fn type_counts(table: &VolcanoTable) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for record in table {
        match counts.iter_mut().find(|(t, _)| *t == record.volcano_type) {
            Some((_, n)) => *n += 1,
            None => counts.push((record.volcano_type.clone(), 1)),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::fixtures::volcano;

    fn world() -> VolcanoTable {
        VolcanoTable::from_records(vec![
            volcano("Chile", "Lascar", "Stratovolcano", 5592.0),
            volcano("Chile", "Villarrica", "Stratovolcano", 2847.0),
            volcano("Iceland", "Hekla", "Stratovolcano", 1491.0),
            volcano("Iceland", "Katla", "Subglacial", 1512.0),
            volcano("Iceland", "Grimsvotn", "Caldera", 1725.0),
            volcano("Japan", "Fuji", "Stratovolcano", 3776.0),
            volcano("Peru", "Misti", "Stratovolcano", f64::NAN),
        ])
    }

    #[test]
    fn test_tallest_orders_by_elevation() {
        let table = VolcanoTable::from_records(
            [1000.0, 5000.0, 3000.0, 4000.0, 2000.0]
                .iter()
                .enumerate()
                .map(|(i, e)| volcano("Japan", &format!("V{i}"), "Stratovolcano", *e))
                .collect(),
        );
        let elevations: Vec<f64> = tallest(&table, TALLEST_LIMIT)
            .iter()
            .map(|r| r.elevation)
            .collect();
        assert_eq!(elevations, vec![5000.0, 4000.0, 3000.0, 2000.0, 1000.0]);
    }

    #[test]
    fn test_tallest_limits_rows() {
        let table = VolcanoTable::from_records(
            (0..25)
                .map(|i| volcano("Indonesia", &format!("V{i:02}"), "Stratovolcano", i as f64 * 100.0))
                .collect(),
        );
        let rows = tallest(&table, TALLEST_LIMIT);
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].elevation, 2400.0);
        assert_eq!(rows[9].elevation, 1500.0);
        assert!(rows.iter().all(|r| r.country == "Indonesia"));
    }

    #[test]
    fn test_tallest_puts_missing_elevation_last() {
        let table = VolcanoTable::from_records(vec![
            volcano("Peru", "Misti", "Stratovolcano", f64::NAN),
            volcano("Peru", "Ubinas", "Stratovolcano", 5672.0),
        ]);
        let rows = tallest(&table, TALLEST_LIMIT);
        assert_eq!(rows[0].name, "Ubinas");
        assert!(rows[1].elevation.is_nan());
    }

    #[test]
    fn test_count_by_country() {
        let counts = count_by_country(&world());
        let pairs: Vec<(&str, usize)> = counts
            .iter()
            .map(|c| (c.country.as_str(), c.volcanoes))
            .collect();
        assert_eq!(
            pairs,
            vec![("Chile", 2), ("Iceland", 3), ("Japan", 1), ("Peru", 0)]
        );
    }

    #[test]
    fn test_narrow_counts_keeps_table_order() {
        let counts = count_by_country(&world());
        let narrowed = narrow_counts(&counts, &["Japan", "Chile", "Iceland"]);
        let names: Vec<&str> = narrowed.iter().map(|c| c.country.as_str()).collect();
        assert_eq!(names, vec!["Chile", "Iceland", "Japan"]);
    }

    #[test]
    fn test_elevation_stats() {
        let stats = elevation_stats(&world(), &["Iceland", "Chile", "Peru"]);
        assert_eq!(stats.len(), 3);

        let chile = &stats[0];
        assert_eq!(chile.country, "Chile");
        assert_eq!(chile.min, 2847.0);
        assert_eq!(chile.max, 5592.0);
        assert!((chile.mean - 4219.5).abs() < 1e-9);

        let iceland = &stats[1];
        assert_eq!(iceland.min, 1491.0);
        assert_eq!(iceland.max, 1725.0);

        let peru = &stats[2];
        assert!(peru.mean.is_nan());
    }

    #[test]
    fn test_type_counts_first_occurrence() {
        let counts = type_counts(&world().filter_country("Iceland"));
        assert_eq!(
            counts,
            vec![
                ("Caldera".to_string(), 1),
                ("Stratovolcano".to_string(), 1),
                ("Subglacial".to_string(), 1),
            ]
        );
    }
}
