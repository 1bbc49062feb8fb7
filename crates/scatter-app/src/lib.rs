//! # scatter-app
//!
//! WASM entry point for the ACS Scatter Dashboard: wires the app state into
//! context, starts the dataset loader and mounts the dashboard.

pub mod loader;

pub use loader::*;

use leptos::prelude::*;
use scatter_charts::ScatterConfig;
use scatter_components::Dashboard;
use scatter_core::AxisLayout;
use scatter_state::provide_app_state;

/// Top-level application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub chart: ScatterConfig,
    pub layout: AxisLayout,
    pub loader: LoaderConfig,
}

impl AppConfig {
    pub fn data_url(mut self, url: impl Into<String>) -> Self {
        self.loader.url = url.into();
        self
    }
}

#[component]
pub fn App(#[prop(optional)] config: Option<AppConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let state = provide_app_state(config.chart, config.layout);

    DatasetLoader::with_config(state, config.loader).start();

    view! { <Dashboard /> }
}
