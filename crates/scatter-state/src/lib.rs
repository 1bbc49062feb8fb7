//! # scatter-state
//!
//! Axis selection, render dispatch and reactive state for the ACS Scatter
//! Dashboard. The selection logic is plain Rust; Leptos signals only appear
//! in the production rendering surface (`ChartState`) and `AppState`.

pub mod chart;
pub mod dispatcher;
pub mod frame;
pub mod selection;

pub use chart::*;
pub use dispatcher::*;
pub use selection::*;

use leptos::prelude::*;
use scatter_charts::{PaddedScaleFactory, ScatterConfig};
use scatter_core::{AxisKind, AxisLayout, Dataset, Field, Result};

/// Dispatcher wired to the reactive chart surface
pub type ChartDispatcher = RenderDispatcher<PaddedScaleFactory, ChartState>;

// ============================================================================
// LOAD STATUS
// ============================================================================

/// Startup FSM: the dataset loads once, then the chart is interactive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed,
}

impl LoadStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Loading => "Loading data...",
            Self::Ready => "Ready",
            Self::Failed => "Failed to load data",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Loading => "load-pending",
            Self::Ready => "load-ready",
            Self::Failed => "load-failed",
        }
    }
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Global application state with reactive signals
#[derive(Clone)]
pub struct AppState {
    pub config: ScatterConfig,
    pub layout: AxisLayout,
    /// Rendering surface signals
    pub chart: ChartState,
    /// Present once the dataset has loaded
    pub dispatcher: StoredValue<Option<ChartDispatcher>>,
    pub status: RwSignal<LoadStatus>,
    /// Current error message
    pub error: RwSignal<Option<String>>,
}

impl AppState {
    pub fn new(config: ScatterConfig, layout: AxisLayout) -> Self {
        Self {
            chart: ChartState::new(config.tick_count),
            config,
            layout,
            dispatcher: StoredValue::new(None),
            status: RwSignal::new(LoadStatus::Loading),
            error: RwSignal::new(None),
        }
    }

    /// Build the dispatcher over a freshly loaded dataset and draw the first frame
    pub fn load_dataset(&self, dataset: Dataset) -> Result<()> {
        let factory = PaddedScaleFactory::from_dimensions(&self.config.dims);
        let mut dispatcher = RenderDispatcher::new(dataset, &self.layout, factory, self.chart)?
            .with_transition(self.config.transition_ms);
        dispatcher.initialize()?;

        self.dispatcher.set_value(Some(dispatcher));
        self.status.set(LoadStatus::Ready);
        self.error.set(None);
        Ok(())
    }

    /// Startup failed: no chart is rendered
    pub fn fail(&self, msg: impl Into<String>) {
        let msg = msg.into();
        tracing::error!("{}", msg);
        self.chart.clear();
        self.status.set(LoadStatus::Failed);
        self.error.set(Some(msg));
    }

    /// Axis label clicked
    pub fn select_axis(&self, kind: AxisKind, field: Field) {
        let result = self
            .dispatcher
            .try_update_value(|dispatcher| {
                dispatcher.as_mut().map(|d| d.on_axis_changed(kind, field))
            })
            .flatten();

        match result {
            Some(Err(err)) => self.set_error(err.to_string()),
            None => tracing::warn!("Axis click on `{}` before the dataset loaded", field),
            Some(Ok(_)) => {}
        }
    }

    /// Switch square clicked
    pub fn move_label(&self, field: Field) {
        let result = self
            .dispatcher
            .try_update_value(|dispatcher| dispatcher.as_mut().map(|d| d.on_label_moved(field)))
            .flatten();

        match result {
            Some(Err(err)) => self.set_error(err.to_string()),
            None => tracing::warn!("Label move of `{}` before the dataset loaded", field),
            Some(Ok(_)) => {}
        }
    }

    // ========================================================================
    // Error Handling
    // ========================================================================

    /// Set error message
    pub fn set_error(&self, msg: impl Into<String>) {
        let msg = msg.into();
        tracing::error!("{}", msg);
        self.error.set(Some(msg));
    }

    /// Clear error
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ScatterConfig::default(), AxisLayout::default())
    }
}

// ============================================================================
// CONTEXT HELPERS
// ============================================================================

/// Provide app state context to component tree
pub fn provide_app_state(config: ScatterConfig, layout: AxisLayout) -> AppState {
    let state = AppState::new(config, layout);
    provide_context(state.clone());
    state
}

/// Use app state from context
pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}
