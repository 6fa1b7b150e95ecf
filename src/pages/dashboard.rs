//! Dashboard page: period selector plus a bar chart of per-equipment
//! averages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at `/`. Anonymous visitors are redirected to `/login` once the
//! auth state has settled. Data is fetched on mount and again whenever the
//! selector reports a different period.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::auth::context::{AuthContext, use_auth};
use crate::components::bar_chart::BarChart;
use crate::components::period_select::PeriodSelect;
#[cfg(feature = "hydrate")]
use crate::net::api::SensorApi;
use crate::net::types::Period;
use crate::state::dashboard::DashboardState;
use crate::util::auth::install_unauth_redirect;

/// Request the aggregates for `period` and hand the outcome back as fetch `seq`.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn spawn_fetch(auth: AuthContext, dashboard: RwSignal<DashboardState>, seq: u64, period: Period) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let bearer = auth.state().with_untracked(|s| s.bearer_token().map(str::to_owned));
        let outcome = auth.api().aggregated_data(period, bearer.as_deref()).await;
        dashboard.update(|d| {
            d.finish_fetch(seq, outcome);
        });
    });
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state();
    install_unauth_redirect(state, use_navigate());

    let dashboard = RwSignal::new(DashboardState::default());

    let fetch = {
        let auth = auth.clone();
        move || {
            let Some(seq) = dashboard.try_update(DashboardState::begin_fetch) else {
                return;
            };
            let period = dashboard.with_untracked(|d| d.period);

            spawn_fetch(auth.clone(), dashboard, seq, period);
        }
    };

    // Effects only run in the browser, so the initial fetch is client-side.
    Effect::new(fetch.clone());

    let on_change = Callback::new(move |period: Period| {
        if dashboard.try_update(|d| d.select_period(period)).unwrap_or(false) {
            fetch();
        }
    });

    let on_logout = move |_: leptos::ev::MouseEvent| auth.logout();

    view! {
        <div class="dashboard-page">
            <nav class="navbar">
                <div class="navbar__content">
                    <h1 class="navbar__title">"Sensor Dashboard"</h1>
                    <span class="navbar__user">
                        {move || state.with(|s| s.identifier().map(str::to_owned)).unwrap_or_default()}
                    </span>
                    <button class="btn navbar__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </nav>
            <main class="dashboard-page__content">
                <section class="chart-controls">
                    <p class="chart-controls__hint">
                        "Select a period to chart the average value of each equipment."
                    </p>
                    <PeriodSelect selected=Signal::derive(move || dashboard.with(|d| d.period)) on_change=on_change/>
                </section>
                <Show when=move || dashboard.with(|d| d.error.is_some())>
                    <p class="error-message">{move || dashboard.with(|d| d.error.clone().unwrap_or_default())}</p>
                </Show>
                <section class="chart-container">
                    {move || match dashboard.with(|d| (d.series.clone(), d.loading)) {
                        (Some(series), _) => view! { <BarChart series=series/> }.into_any(),
                        (None, true) => view! { <p class="chart__empty">"Loading sensor data..."</p> }.into_any(),
                        (None, false) => view! { <p class="chart__empty">"No sensor data loaded."</p> }.into_any(),
                    }}
                </section>
            </main>
        </div>
    }
}
