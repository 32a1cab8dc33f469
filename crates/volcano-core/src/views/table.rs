//! Plain tabular display

use serde::Serialize;

use super::format_number;
use crate::analysis::{CountryCount, ElevationStats, TallestRow};
use crate::record::columns;
use crate::table::VolcanoTable;

/// Column headers plus rows of display strings
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TableView {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    fn with_columns(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Every record with every required column
    pub fn full(table: &VolcanoTable) -> Self {
        let mut view = Self::with_columns(&columns::REQUIRED);
        view.rows = table
            .iter()
            .map(|r| {
                vec![
                    r.country.clone(),
                    r.name.clone(),
                    r.volcano_type.clone(),
                    r.region.clone(),
                    format_number(r.latitude),
                    format_number(r.longitude),
                    format_number(r.elevation),
                    r.last_eruption.clone(),
                ]
            })
            .collect();
        view
    }

    /// Tallest-volcano projection
    pub fn tallest(rows: &[TallestRow]) -> Self {
        let mut view = Self::with_columns(&[
            columns::COUNTRY,
            columns::VOLCANO_NAME,
            columns::ELEVATION,
            columns::LAST_ERUPTION,
        ]);
        view.rows = rows
            .iter()
            .map(|r| {
                vec![
                    r.country.clone(),
                    r.name.clone(),
                    format_number(r.elevation),
                    r.last_eruption.clone(),
                ]
            })
            .collect();
        view
    }

    /// Country / "Number of Volcanoes"
    pub fn counts(counts: &[CountryCount]) -> Self {
        let mut view = Self::with_columns(&[columns::COUNTRY, "Number of Volcanoes"]);
        view.rows = counts
            .iter()
            .map(|c| vec![c.country.clone(), c.volcanoes.to_string()])
            .collect();
        view
    }

    /// Country / min / max / mean elevation
    pub fn elevation_stats(stats: &[ElevationStats]) -> Self {
        let mut view = Self::with_columns(&[
            columns::COUNTRY,
            "Min Elevation",
            "Max Elevation",
            "Mean Elevation",
        ]);
        view.rows = stats
            .iter()
            .map(|s| {
                vec![
                    s.country.clone(),
                    format_number(s.min),
                    format_number(s.max),
                    format_number(s.mean),
                ]
            })
            .collect();
        view
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
