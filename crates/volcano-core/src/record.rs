//! A single volcano row

use serde::{Deserialize, Serialize};

/// Column headers the loader requires, in display order
pub mod columns {
    pub const COUNTRY: &str = "Country";
    pub const VOLCANO_NAME: &str = "Volcano_Name";
    pub const VOLCANO_TYPE: &str = "Volcano_Type";
    pub const REGION: &str = "Region";
    pub const LATITUDE: &str = "Latitude";
    pub const LONGITUDE: &str = "Longitude";
    pub const ELEVATION: &str = "Elevation";
    pub const LAST_ERUPTION: &str = "Last_Eruption";

    /// Every required column, in the order the full table is displayed
    pub const REQUIRED: [&str; 8] = [
        COUNTRY,
        VOLCANO_NAME,
        VOLCANO_TYPE,
        REGION,
        LATITUDE,
        LONGITUDE,
        ELEVATION,
        LAST_ERUPTION,
    ];
}

/// One volcano as read from the dataset
///
/// Numeric cells left empty in the spreadsheet are stored as `NaN`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VolcanoRecord {
    pub country: String,
    pub name: String,
    pub volcano_type: String,
    pub region: String,
    /// Degrees north
    pub latitude: f64,
    /// Degrees east
    pub longitude: f64,
    /// Meters above sea level
    pub elevation: f64,
    /// Year or label of the last known eruption
    pub last_eruption: String,
}

impl VolcanoRecord {
    /// Whether the record carries a usable elevation
    pub fn has_elevation(&self) -> bool {
        !self.elevation.is_nan()
    }

    /// Whether the record can be placed on a map
    pub fn has_position(&self) -> bool {
        !self.latitude.is_nan() && !self.longitude.is_nan()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::VolcanoRecord;

    /// Build a record with the fields tests usually care about
    pub fn volcano(country: &str, name: &str, volcano_type: &str, elevation: f64) -> VolcanoRecord {
        VolcanoRecord {
            country: country.to_string(),
            name: name.to_string(),
            volcano_type: volcano_type.to_string(),
            region: format!("{country} Region"),
            latitude: 0.0,
            longitude: 0.0,
            elevation,
            last_eruption: "Unknown".to_string(),
        }
    }

    /// Same as [`volcano`] with an explicit region and position
    pub fn placed(
        country: &str,
        region: &str,
        name: &str,
        latitude: f64,
        longitude: f64,
    ) -> VolcanoRecord {
        VolcanoRecord {
            region: region.to_string(),
            latitude,
            longitude,
            ..volcano(country, name, "Stratovolcano", 1000.0)
        }
    }
}
