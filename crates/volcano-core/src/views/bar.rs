//! "Tallest volcanoes" bar chart

use serde::Serialize;

use super::format_number;
use crate::analysis::TallestRow;

/// Rotation of the x tick labels
pub const TICK_ROTATION_DEGREES: f64 = 30.0;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

impl Bar {
    /// Annotation drawn on top of the bar
    pub fn value_label(&self) -> String {
        format_number(self.value)
    }
}

/// Vertical bar chart, one bar per input row in input order
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BarChartView {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
}

impl BarChartView {
    /// Chart the rows exactly as given; sorting and limiting is up to the caller
    pub fn build(rows: &[TallestRow], title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: "Volcano Name".to_string(),
            y_label: "Elevation".to_string(),
            bars: rows
                .iter()
                .map(|r| Bar {
                    label: r.name.clone(),
                    value: r.elevation,
                })
                .collect(),
        }
    }

    /// Largest finite bar value, at least zero
    pub fn max_value(&self) -> f64 {
        self.bars
            .iter()
            .map(|b| b.value)
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max)
    }

    /// Smallest finite bar value, at most zero
    pub fn min_value(&self) -> f64 {
        self.bars
            .iter()
            .map(|b| b.value)
            .filter(|v| v.is_finite())
            .fold(0.0, f64::min)
    }
}
