//! Main dashboard layout component

use scatter_charts::ScatterChart;
use scatter_core::AxisKind;
use scatter_state::{use_app_state, LoadStatus};
use leptos::prelude::*;

use crate::AxisLabelGroup;

#[component]
pub fn Dashboard(#[prop(optional, into)] title: Option<String>) -> impl IntoView {
    let state = use_app_state();
    let title = title.unwrap_or_else(|| "Health Risks vs. Demographics".to_string());
    let chart = state.chart;
    let config = state.config.clone();
    let status = state.status;

    view! {
        <div class="dashboard">
            <header class="dash-header">
                <h1 class="dash-title">{title}</h1>
            </header>

            <main class="dash-main">
                <div class="panel chart-container">
                    <div class="panel-header">
                        <span class="panel-title">"ACS 2014 by State"</span>
                        <ActiveAxes />
                    </div>
                    <div class="panel-content" id="scatter">
                        {move || match status.get() {
                            LoadStatus::Ready => view! {
                                <ScatterChart
                                    x_axis=chart.x_axis
                                    y_axis=chart.y_axis
                                    points=chart.points
                                    point_duration=chart.point_duration
                                    tooltips=chart.tooltips
                                    config=config.clone()
                                >
                                    <AxisLabelGroup kind=AxisKind::Horizontal />
                                    <AxisLabelGroup kind=AxisKind::Vertical />
                                </ScatterChart>
                            }.into_any(),
                            LoadStatus::Loading => view! {
                                <div class="chart-placeholder">{status.get().label()}</div>
                            }.into_any(),
                            LoadStatus::Failed => view! {
                                <div class="chart-placeholder error">{status.get().label()}</div>
                            }.into_any(),
                        }}
                    </div>
                </div>
            </main>

            <footer class="dash-footer">
                <StatusBar />
            </footer>
        </div>
    }
}

/// "x: Poverty (%) / y: Obese (%)" summary derived from the pushed label marks
#[component]
fn ActiveAxes() -> impl IntoView {
    let chart = use_app_state().chart;

    let active_title = move |kind: AxisKind| {
        chart
            .labels(kind)
            .with(|marks| marks.iter().find(|m| m.active).map(|m| m.field.title()))
    };

    view! {
        <span class="panel-subtitle">
            {move || {
                match (active_title(AxisKind::Horizontal), active_title(AxisKind::Vertical)) {
                    (Some(x), Some(y)) => format!("x: {} / y: {}", x, y),
                    _ => String::new(),
                }
            }}
        </span>
    }
}

#[component]
fn StatusBar() -> impl IntoView {
    let state = use_app_state();
    let status = state.status;
    let error = state.error;
    let dismiss = state.clone();

    view! {
        <div class="status-bar">
            <div class="sb-connection">
                <span class="sb-label">"Status:"</span>
                <span class=move || format!("sb-value {}", status.get().css_class())>
                    {move || status.get().label()}
                </span>
            </div>

            {move || {
                let dismiss = dismiss.clone();
                error.get().map(|e| {
                    view! {
                        <div class="sb-error" on:click=move |_| dismiss.clear_error()>
                            <span class="error-icon">"⚠"</span>
                            <span class="error-msg">{e}</span>
                        </div>
                    }
                })
            }}

            <div class="sb-version">
                <span>"v0.1.0"</span>
            </div>
        </div>
    }
}
