//! View models: renderer-neutral descriptions of every visual on the page
//!
//! Each builder is a pure function of a (sub)table. The dashboard turns
//! these into SVG and HTML; nothing here knows about the UI toolkit.

pub mod bar;
pub mod map;
pub mod pie;
pub mod table;

pub use bar::{Bar, BarChartView};
pub use map::{GeoPoint, MapPoint, MapView, TileRef, Tooltip, Viewport, ZoomLevel};
pub use pie::{PieChartView, PieSlice};
pub use table::TableView;

/// Format a number for display
///
/// Whole numbers print without decimals, others with at most three.
/// `NaN` prints as an empty cell.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return String::new();
    }
    let text = if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        let fixed = format!("{value:.3}");
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    };
    // -0.0 and values that round to zero
    if text == "-0" {
        "0".to_string()
    } else {
        text
    }
}
