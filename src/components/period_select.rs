//! Period selector for the dashboard chart.

use leptos::prelude::*;

use crate::net::types::Period;

/// Drop-down of the fixed aggregation periods. Fires `on_change` only for a
/// recognised value.
#[component]
pub fn PeriodSelect(#[prop(into)] selected: Signal<Period>, on_change: Callback<Period>) -> impl IntoView {
    view! {
        <select
            class="period-select"
            on:change=move |ev| {
                if let Some(period) = Period::from_query(&event_target_value(&ev)) {
                    on_change.run(period);
                }
            }
        >
            {Period::ALL
                .into_iter()
                .map(|period| {
                    view! {
                        <option value=period.as_query() selected=move || selected.get() == period>
                            {period.label()}
                        </option>
                    }
                })
                .collect::<Vec<_>>()}
        </select>
    }
}
