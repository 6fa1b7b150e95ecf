use super::*;

fn point(id: &str, value: f64) -> AggregatePoint {
    AggregatePoint { equipment_id: id.to_owned(), avg_value: value }
}

// =============================================================
// ChartSeries
// =============================================================

#[test]
fn chart_series_preserves_api_order() {
    let series = ChartSeries::from_points(&[point("EQ-2", 3.0), point("EQ-1", 1.5)]);
    assert_eq!(series.label, SERIES_LABEL);
    assert_eq!(series.labels, ["EQ-2", "EQ-1"]);
    assert_eq!(series.values, [3.0, 1.5]);
    assert_eq!(series.len(), 2);
}

#[test]
fn chart_series_empty() {
    assert!(ChartSeries::from_points(&[]).is_empty());
}

// =============================================================
// DashboardState
// =============================================================

#[test]
fn dashboard_defaults_to_last_24_hours() {
    let state = DashboardState::default();
    assert_eq!(state.period, Period::Last24Hours);
    assert!(state.series.is_none());
    assert!(!state.loading);
}

#[test]
fn select_same_period_needs_no_refetch() {
    let mut state = DashboardState::default();
    assert!(!state.select_period(Period::Last24Hours));
}

#[test]
fn select_new_period_needs_refetch() {
    let mut state = DashboardState::default();
    assert!(state.select_period(Period::LastWeek));
    assert_eq!(state.period, Period::LastWeek);
}

#[test]
fn finish_fetch_applies_series() {
    let mut state = DashboardState::default();
    let seq = state.begin_fetch();
    assert!(state.loading);

    assert!(state.finish_fetch(seq, Ok(vec![point("EQ-1", 10.0)])));

    assert!(!state.loading);
    assert_eq!(state.series.as_ref().map(ChartSeries::len), Some(1));
    assert!(state.error.is_none());
}

#[test]
fn finish_fetch_error_keeps_previous_series() {
    let mut state = DashboardState::default();
    let first = state.begin_fetch();
    state.finish_fetch(first, Ok(vec![point("EQ-1", 10.0)]));

    state.select_period(Period::LastMonth);
    let second = state.begin_fetch();
    state.finish_fetch(second, Err(ApiError::Status(400)));

    assert_eq!(state.error.as_deref(), Some("Could not load sensor data for the last 1 month."));
    assert_eq!(state.series.as_ref().map(ChartSeries::len), Some(1));
}

#[test]
fn stale_fetch_is_dropped() {
    let mut state = DashboardState::default();
    let stale = state.begin_fetch();
    state.select_period(Period::Last48Hours);
    let fresh = state.begin_fetch();

    assert!(state.finish_fetch(fresh, Ok(vec![point("EQ-new", 2.0)])));
    assert!(!state.finish_fetch(stale, Ok(vec![point("EQ-old", 1.0)])));

    assert_eq!(state.series.unwrap().labels, ["EQ-new"]);
}

#[test]
fn success_clears_previous_error() {
    let mut state = DashboardState::default();
    let seq = state.begin_fetch();
    state.finish_fetch(seq, Err(ApiError::Transport("offline".into())));
    assert!(state.error.is_some());

    let seq = state.begin_fetch();
    state.finish_fetch(seq, Ok(Vec::new()));
    assert!(state.error.is_none());
}
