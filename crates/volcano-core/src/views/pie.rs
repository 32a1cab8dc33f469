//! Volcano type distribution as pie slices

use serde::Serialize;

use crate::analysis::type_counts;
use crate::table::VolcanoTable;

/// Angle of the first slice edge, counter-clockwise from 3 o'clock
pub const START_ANGLE_DEGREES: f64 = 120.0;

/// One volcano type's share
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
    /// Share of the total, 0.0..=1.0
    pub fraction: f64,
    /// Edges in degrees, counter-clockwise; `end > start`
    pub start_degrees: f64,
    pub end_degrees: f64,
}

impl PieSlice {
    /// Percentage label with one decimal, e.g. `"33.3%"`
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.fraction * 100.0)
    }

    pub fn mid_degrees(&self) -> f64 {
        (self.start_degrees + self.end_degrees) / 2.0
    }

    pub fn is_full_circle(&self) -> bool {
        self.end_degrees - self.start_degrees >= 360.0 - 1e-9
    }

    /// SVG path of the wedge for a circle at (`cx`, `cy`) with radius `r`
    ///
    /// SVG's y axis points down, so counter-clockwise in chart terms is a
    /// negative sweep on screen.
    pub fn svg_path(&self, cx: f64, cy: f64, r: f64) -> String {
        let (x0, y0) = polar(cx, cy, r, self.start_degrees);
        let (x1, y1) = polar(cx, cy, r, self.end_degrees);
        let large_arc = if self.end_degrees - self.start_degrees > 180.0 { 1 } else { 0 };
        format!(
            "M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 {large_arc} 0 {x1:.2} {y1:.2} Z"
        )
    }

    /// Where to place a label at `ratio` of the radius along the wedge middle
    pub fn label_point(&self, cx: f64, cy: f64, r: f64, ratio: f64) -> (f64, f64) {
        polar(cx, cy, r * ratio, self.mid_degrees())
    }
}

/// Screen position of an angle on a circle, y pointing down
pub fn polar(cx: f64, cy: f64, r: f64, degrees: f64) -> (f64, f64) {
    let rad = degrees.to_radians();
    (cx + r * rad.cos(), cy - r * rad.sin())
}

/// Pie chart of volcano types
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PieChartView {
    pub title: String,
    pub slices: Vec<PieSlice>,
    pub total: usize,
}

impl PieChartView {
    /// One slice per distinct type, in order of first appearance
    ///
    /// An empty table gives a chart with no slices.
    pub fn build(table: &VolcanoTable, title: impl Into<String>) -> Self {
        let counts = type_counts(table);
        let total: usize = counts.iter().map(|(_, n)| n).sum();

        let mut angle = START_ANGLE_DEGREES;
        let slices = counts
            .into_iter()
            .map(|(label, count)| {
                let fraction = count as f64 / total as f64;
                let start = angle;
                angle += fraction * 360.0;
                PieSlice {
                    label,
                    count,
                    fraction,
                    start_degrees: start,
                    end_degrees: angle,
                }
            })
            .collect();

        Self {
            title: title.into(),
            slices,
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}
