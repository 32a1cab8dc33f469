//! Sorted unique values used to populate selection widgets

use std::collections::BTreeSet;

use crate::table::VolcanoTable;

/// Country preselected in the sidebar when present
pub const DEFAULT_COUNTRY: &str = "United States";

/// Volcano preselected for the description lookup when present
pub const DEFAULT_VOLCANO: &str = "Yellowstone";

/// Distinct categorical values of a table, each list ascending
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryIndex {
    pub regions: Vec<String>,
    pub countries: Vec<String>,
    pub volcano_names: Vec<String>,
    pub volcano_types: Vec<String>,
}

impl CategoryIndex {
    /// Build the index from a table
    pub fn build(table: &VolcanoTable) -> Self {
        Self {
            regions: sorted_unique(table.iter().map(|r| r.region.as_str())),
            countries: sorted_unique(table.iter().map(|r| r.country.as_str())),
            volcano_names: sorted_unique(table.iter().map(|r| r.name.as_str())),
            volcano_types: sorted_unique(table.iter().map(|r| r.volcano_type.as_str())),
        }
    }

    /// "United States" if present, otherwise the first country
    pub fn default_country(&self) -> Option<&str> {
        preferred_or_first(&self.countries, DEFAULT_COUNTRY)
    }

    /// "Yellowstone" if present, otherwise the first volcano
    pub fn default_volcano(&self) -> Option<&str> {
        preferred_or_first(&self.volcano_names, DEFAULT_VOLCANO)
    }

    pub fn has_country(&self, country: &str) -> bool {
        self.countries.binary_search_by(|c| c.as_str().cmp(country)).is_ok()
    }
}

fn sorted_unique<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn preferred_or_first<'a>(values: &'a [String], preferred: &str) -> Option<&'a str> {
    values
        .iter()
        .find(|v| *v == preferred)
        .or_else(|| values.first())
        .map(String::as_str)
}
