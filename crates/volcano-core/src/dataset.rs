//! The immutable session dataset

use std::path::Path;

use crate::analysis::{count_by_country, CountryCount};
use crate::error::LoadResult;
use crate::index::CategoryIndex;
use crate::loader::load_table;
use crate::table::VolcanoTable;

/// Table plus everything derived from it once at startup
///
/// Built before the UI starts and shared read-only for the rest of the
/// session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    table: VolcanoTable,
    index: CategoryIndex,
    country_counts: Vec<CountryCount>,
}

impl Dataset {
    pub fn new(table: VolcanoTable) -> Self {
        let index = CategoryIndex::build(&table);
        let country_counts = count_by_country(&table);
        tracing::debug!(
            rows = table.len(),
            countries = index.countries.len(),
            regions = index.regions.len(),
            types = index.volcano_types.len(),
            "Built category index"
        );
        Self {
            table,
            index,
            country_counts,
        }
    }

    /// Load a workbook and derive the index
    pub fn load(path: impl AsRef<Path>) -> LoadResult<Self> {
        Ok(Self::new(load_table(path)?))
    }

    pub fn table(&self) -> &VolcanoTable {
        &self.table
    }

    pub fn index(&self) -> &CategoryIndex {
        &self.index
    }

    /// Volcano count of every country across the whole table
    pub fn country_counts(&self) -> &[CountryCount] {
        &self.country_counts
    }
}
