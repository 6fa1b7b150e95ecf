//! SVG bar chart for a single labeled numeric series.

use leptos::prelude::*;

use crate::state::dashboard::ChartSeries;
use crate::util::chart::{baseline_y, format_value, layout_bars};

const VIEW_WIDTH: f64 = 640.0;
const VIEW_HEIGHT: f64 = 320.0;
/// Space under the plot reserved for equipment labels.
const LABEL_BAND: f64 = 40.0;

/// One coloured bar per equipment, value printed above each bar.
#[component]
pub fn BarChart(series: ChartSeries) -> impl IntoView {
    if series.is_empty() {
        return view! { <p class="chart__empty">"No sensor data for this period."</p> }.into_any();
    }

    let plot_height = VIEW_HEIGHT - LABEL_BAND;
    let baseline = baseline_y(&series, plot_height).to_string();
    let bars = layout_bars(&series, VIEW_WIDTH, plot_height);

    view! {
        <figure class="chart">
            <figcaption class="chart__legend">{series.label}</figcaption>
            <svg
                class="chart__svg"
                viewBox=format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}")
                preserveAspectRatio="xMidYMid meet"
                role="img"
            >
                <line class="chart__baseline" x1="0" x2=VIEW_WIDTH.to_string() y1=baseline.clone() y2=baseline></line>
                {bars
                    .into_iter()
                    .map(|bar| {
                        let center = (bar.x + bar.width / 2.0).to_string();
                        view! {
                            <g class="chart__bar">
                                <rect
                                    x=bar.x.to_string()
                                    y=bar.y.to_string()
                                    width=bar.width.to_string()
                                    height=bar.height.to_string()
                                    fill=bar.color
                                ></rect>
                                <text class="chart__value" x=center.clone() y=(bar.y - 4.0).to_string() text-anchor="middle">
                                    {format_value(bar.value)}
                                </text>
                                <text class="chart__label" x=center y=(plot_height + 18.0).to_string() text-anchor="middle">
                                    {bar.label}
                                </text>
                            </g>
                        }
                    })
                    .collect::<Vec<_>>()}
            </svg>
        </figure>
    }
    .into_any()
}
