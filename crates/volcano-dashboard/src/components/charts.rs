//! Pure SVG chart components
//!
//! These components render directly as SVG elements within Dioxus RSX,
//! using CSS variables for theming.

use dioxus::prelude::*;
use volcano_core::views::bar::TICK_ROTATION_DEGREES;
use volcano_core::{BarChartView, PieChartView};

use super::series_color;

/// Volcano type distribution
///
/// Slices start at 120° and run counter-clockwise, each labelled with
/// its percentage; a legend lists the types.
#[component]
pub fn PieChart(
    chart: PieChartView,
    /// Diameter of the pie in pixels
    #[props(default = 320)]
    size: u32,
) -> Element {
    if chart.is_empty() {
        return rsx! {
            div { class: "chart-card",
                h4 { class: "chart-title", "{chart.title}" }
                div {
                    class: "chart-container chart-empty",
                    style: "width: {size}px; height: {size}px;",
                    "No data"
                }
            }
        };
    }

    let r = size as f64 / 2.0 - 4.0;
    let c = size as f64 / 2.0;

    rsx! {
        div { class: "chart-card",
            h4 { class: "chart-title", "{chart.title}" }
            div { class: "pie-layout",
                svg {
                    width: "{size}",
                    height: "{size}",
                    view_box: "0 0 {size} {size}",

                    for (i, slice) in chart.slices.iter().enumerate() {
                        {
                            let color = series_color(i);
                            let (lx, ly) = slice.label_point(c, c, r, 0.65);
                            let tooltip = format!("{}: {} ({})", slice.label, slice.count, slice.percent_label());
                            let wedge = slice.svg_path(c, c, r);
                            let percent = slice.percent_label();
                            rsx! {
                                g { key: "{slice.label}",
                                    if slice.is_full_circle() {
                                        circle {
                                            cx: "{c}",
                                            cy: "{c}",
                                            r: "{r:.2}",
                                            fill: "{color}",
                                            stroke: "var(--bg-primary)",
                                            stroke_width: "1",
                                        }
                                    } else {
                                        path {
                                            d: "{wedge}",
                                            fill: "{color}",
                                            stroke: "var(--bg-primary)",
                                            stroke_width: "1",
                                        }
                                    }
                                    title { "{tooltip}" }
                                    text {
                                        x: "{lx:.1}",
                                        y: "{ly:.1}",
                                        text_anchor: "middle",
                                        dominant_baseline: "middle",
                                        font_size: "11",
                                        fill: "var(--chart-label)",
                                        "{percent}"
                                    }
                                }
                            }
                        }
                    }
                }
                ul { class: "chart-legend",
                    for (i, slice) in chart.slices.iter().enumerate() {
                        {
                            let swatch = format!("background: {};", series_color(i));
                            rsx! {
                                li { key: "{slice.label}",
                                    span { class: "legend-swatch", style: "{swatch}" }
                                    "{slice.label} ({slice.count})"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Elevation bars in input order with rotated name ticks
#[component]
pub fn BarChart(
    chart: BarChartView,
    #[props(default = 900)]
    width: u32,
    #[props(default = 420)]
    height: u32,
) -> Element {
    if chart.bars.is_empty() {
        return rsx! {
            div { class: "chart-card",
                h4 { class: "chart-title", "{chart.title}" }
                div {
                    class: "chart-container chart-empty",
                    style: "width: {width}px; height: {height}px;",
                    "No data"
                }
            }
        };
    }

    // Padding for labels
    let padding_left = 64.0;
    let padding_right = 16.0;
    let padding_top = 24.0;
    let padding_bottom = 110.0;

    let plot_width = width as f64 - padding_left - padding_right;
    let plot_height = height as f64 - padding_top - padding_bottom;

    let y_max = (chart.max_value() * 1.1).max(1.0);
    let y_min = chart.min_value() * 1.1;
    let y_range = y_max - y_min;
    let scale_y = move |v: f64| padding_top + (1.0 - (v - y_min) / y_range) * plot_height;
    let baseline = scale_y(0.0);

    let slot = plot_width / chart.bars.len() as f64;
    let bar_width = slot * 0.7;

    let grid_lines_y = 4;
    let y_grid_step = y_range / grid_lines_y as f64;
    let axis_y = height as f64 - 8.0;
    let axis_x_mid = padding_left + plot_width / 2.0;
    let y_label_y = padding_top + plot_height / 2.0;

    rsx! {
        div { class: "chart-card",
            h4 { class: "chart-title", "{chart.title}" }
            div {
                class: "chart-container",
                style: "width: {width}px; height: {height}px;",
                svg {
                    width: "{width}",
                    height: "{height}",
                    view_box: "0 0 {width} {height}",

                    // Grid lines
                    for i in 0..=grid_lines_y {
                        {
                            let y_val = y_min + (i as f64) * y_grid_step;
                            let y_pos = scale_y(y_val);
                            rsx! {
                                line {
                                    x1: "{padding_left}",
                                    y1: "{y_pos:.1}",
                                    x2: "{width as f64 - padding_right}",
                                    y2: "{y_pos:.1}",
                                    stroke: "var(--border-color)",
                                    stroke_dasharray: "2,2",
                                    stroke_width: "1",
                                }
                                text {
                                    x: "{padding_left - 6.0}",
                                    y: "{y_pos:.1}",
                                    text_anchor: "end",
                                    dominant_baseline: "middle",
                                    font_size: "10",
                                    fill: "var(--text-muted)",
                                    "{y_val:.0}"
                                }
                            }
                        }
                    }

                    for (i, bar) in chart.bars.iter().enumerate() {
                        {
                            let x = padding_left + slot * i as f64 + (slot - bar_width) / 2.0;
                            let value = if bar.value.is_finite() { bar.value } else { 0.0 };
                            let top = scale_y(value.max(0.0));
                            let bar_height = (scale_y(value.min(0.0)) - top).abs();
                            let center = x + bar_width / 2.0;
                            let label_y = if value >= 0.0 { top - 4.0 } else { top + bar_height + 12.0 };
                            let tick_y = height as f64 - padding_bottom + 14.0;
                            let tick_transform = format!("rotate(-{TICK_ROTATION_DEGREES} {center:.1} {tick_y:.1})");
                            let value_label = bar.value_label();
                            rsx! {
                                g { key: "{i}",
                                    rect {
                                        x: "{x:.1}",
                                        y: "{top:.1}",
                                        width: "{bar_width:.1}",
                                        height: "{bar_height:.1}",
                                        fill: "var(--accent-primary)",
                                        title { "{bar.label}: {value_label}" }
                                    }
                                    text {
                                        x: "{center:.1}",
                                        y: "{label_y:.1}",
                                        text_anchor: "middle",
                                        font_size: "10",
                                        fill: "var(--text-primary)",
                                        "{value_label}"
                                    }
                                    text {
                                        x: "{center:.1}",
                                        y: "{tick_y:.1}",
                                        text_anchor: "end",
                                        font_size: "10",
                                        fill: "var(--text-muted)",
                                        transform: "{tick_transform}",
                                        "{bar.label}"
                                    }
                                }
                            }
                        }
                    }

                    // Axes
                    line {
                        x1: "{padding_left}",
                        y1: "{baseline:.1}",
                        x2: "{width as f64 - padding_right}",
                        y2: "{baseline:.1}",
                        stroke: "var(--text-muted)",
                        stroke_width: "1",
                    }
                    text {
                        x: "{axis_x_mid:.1}",
                        y: "{axis_y:.1}",
                        text_anchor: "middle",
                        font_size: "12",
                        fill: "var(--text-primary)",
                        "{chart.x_label}"
                    }
                    text {
                        x: "14",
                        y: "{y_label_y:.1}",
                        text_anchor: "middle",
                        font_size: "12",
                        fill: "var(--text-primary)",
                        transform: "rotate(-90 14 {y_label_y:.1})",
                        "{chart.y_label}"
                    }
                }
            }
        }
    }
}
