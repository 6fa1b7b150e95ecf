//! Dashboard view-model: selected period, fetch bookkeeping, chart series.
//!
//! DESIGN
//! ======
//! Re-fetching is driven by an explicit parameter-change notification
//! (`select_period` returning `true`) rather than by framework effect
//! scheduling. Each fetch gets a sequence number so a slow response for a
//! superseded period cannot overwrite a newer one.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::api::ApiError;
use crate::net::types::{AggregatePoint, Period};

/// Dataset label shown in the chart legend.
pub const SERIES_LABEL: &str = "Average value";

/// Labeled numeric series handed to the chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartSeries {
    pub label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    /// One entry per point, in API order.
    #[must_use]
    pub fn from_points(points: &[AggregatePoint]) -> Self {
        Self {
            label: SERIES_LABEL.to_owned(),
            labels: points.iter().map(|p| p.equipment_id.clone()).collect(),
            values: points.iter().map(|p| p.avg_value).collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub period: Period,
    pub series: Option<ChartSeries>,
    pub error: Option<String>,
    pub loading: bool,
    fetch_seq: u64,
}

impl DashboardState {
    /// Change the selected period. Returns `true` when a re-fetch is needed.
    pub fn select_period(&mut self, period: Period) -> bool {
        if self.period == period {
            return false;
        }
        self.period = period;
        true
    }

    /// Mark a fetch as started and return its sequence number.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.loading = true;
        self.fetch_seq
    }

    /// Apply the outcome of fetch `seq`. Outcomes of superseded fetches are
    /// dropped; returns whether this one was applied.
    pub fn finish_fetch(&mut self, seq: u64, outcome: Result<Vec<AggregatePoint>, ApiError>) -> bool {
        if seq != self.fetch_seq {
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(points) => {
                self.series = Some(ChartSeries::from_points(&points));
                self.error = None;
            }
            Err(e) => {
                leptos::logging::warn!("aggregated data fetch failed: {e}");
                self.error = Some(load_failed_message(self.period));
            }
        }
        true
    }
}

pub(crate) fn load_failed_message(period: Period) -> String {
    format!("Could not load sensor data for the last {}.", period.label())
}
