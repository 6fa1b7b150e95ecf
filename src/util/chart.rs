//! Bar-chart geometry and palette.
//!
//! Pure layout math for `components::bar_chart`: maps a [`ChartSeries`] onto
//! rectangles inside a plot area, with a zero baseline that moves down when
//! the series contains negative values.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use crate::state::dashboard::ChartSeries;

/// Bar fill colours, cycled per equipment.
pub const PALETTE: [&str; 8] = [
    "#4bc0c0", "#ff6384", "#36a2eb", "#ffcd56", "#9966ff", "#ff9f40", "#c9cbcf", "#2e7d32",
];

/// Fraction of each slot left empty between bars.
const BAR_GAP_RATIO: f64 = 0.2;

#[must_use]
pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// One laid-out bar in plot coordinates (origin top-left, y grows down).
#[derive(Clone, Debug, PartialEq)]
pub struct BarGeometry {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
}

/// Vertical position of the zero line for `series` in a plot `height` tall.
#[must_use]
pub fn baseline_y(series: &ChartSeries, height: f64) -> f64 {
    let (min, max) = value_range(series);
    height * max / (max - min)
}

/// Lay out one bar per series entry across a `width` x `height` plot area.
#[must_use]
pub fn layout_bars(series: &ChartSeries, width: f64, height: f64) -> Vec<BarGeometry> {
    if series.is_empty() || width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }
    let (min, max) = value_range(series);
    let span = max - min;
    let baseline = height * max / span;
    #[allow(clippy::cast_precision_loss)]
    let slot = width / series.len() as f64;
    let bar_width = slot * (1.0 - BAR_GAP_RATIO);

    series
        .labels
        .iter()
        .zip(&series.values)
        .enumerate()
        .map(|(i, (label, &value))| {
            let bar_height = value.abs() / span * height;
            #[allow(clippy::cast_precision_loss)]
            let x = slot * i as f64 + (slot - bar_width) / 2.0;
            let y = if value >= 0.0 { baseline - bar_height } else { baseline };
            BarGeometry { label: label.clone(), value, x, y, width: bar_width, height: bar_height, color: color_for(i) }
        })
        .collect()
}

/// Value range always including zero; never zero-width.
fn value_range(series: &ChartSeries) -> (f64, f64) {
    let min = series.values.iter().copied().fold(0.0_f64, f64::min);
    let max = series.values.iter().copied().fold(0.0_f64, f64::max);
    if max - min > 0.0 { (min, max) } else { (0.0, 1.0) }
}

/// Round `value` for an axis or tooltip label.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON { format!("{value:.0}") } else { format!("{value:.2}") }
}
