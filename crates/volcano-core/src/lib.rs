//! # Volcano Core
//!
//! Dataset model, spreadsheet loader, analysis queries and the page
//! controller for the Volcano Atlas dashboard.
//!
//! Everything here is UI-agnostic. The dashboard crate loads a [`Dataset`]
//! once, keeps a [`SelectionState`] per session and asks [`render_page`]
//! for a fresh [`PageView`] after every interaction.
//!
//! ## Key Types
//!
//! - [`VolcanoRecord`] / [`VolcanoTable`]: the loaded rows, sorted by country and name
//! - [`CategoryIndex`]: sorted unique values that feed the selection widgets
//! - [`SelectionState`]: what the user has picked so far
//! - [`PageView`]: the rendered description of the whole page
//! - [`MapView`], [`PieChartView`], [`BarChartView`], [`TableView`]: per-visual view models

pub mod analysis;
pub mod dataset;
pub mod error;
pub mod index;
pub mod loader;
pub mod page;
pub mod record;
pub mod selection;
pub mod table;
pub mod views;

// Re-export main types
pub use analysis::*;
pub use dataset::*;
pub use error::*;
pub use index::*;
pub use loader::{load_table, parse_rows};
pub use page::*;
pub use record::{columns, VolcanoRecord};
pub use selection::*;
pub use table::VolcanoTable;
pub use views::{
    format_number, Bar, BarChartView, GeoPoint, MapPoint, MapView, PieChartView, PieSlice,
    TableView, TileRef, Tooltip, Viewport, ZoomLevel,
};
