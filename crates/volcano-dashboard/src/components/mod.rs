//! Page components
//!
//! Each component renders one part of the `PageView`; user input goes
//! straight into the shared `SelectionState` signal.

pub mod analysis;
pub mod charts;
pub mod map;
pub mod sidebar;
pub mod summary;
pub mod tables;

pub use analysis::AnalysisSection;
pub use charts::{BarChart, PieChart};
pub use map::VolcanoMap;
pub use sidebar::Sidebar;
pub use summary::SummaryPanel;
pub use tables::DataTable;

/// Fill colors cycled across chart series
pub const SERIES_COLORS: [&str; 8] = [
    "var(--series-1)",
    "var(--series-2)",
    "var(--series-3)",
    "var(--series-4)",
    "var(--series-5)",
    "var(--series-6)",
    "var(--series-7)",
    "var(--series-8)",
];

pub fn series_color(i: usize) -> &'static str {
    SERIES_COLORS[i % SERIES_COLORS.len()]
}
