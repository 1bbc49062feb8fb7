//! # scatter-charts
//!
//! D3.js-style SVG charting library built with Leptos.
//! Provides the scales, axes and the scatter plot used by the dashboard.
//!
//! ## Architecture
//!
//! Uses Strategy pattern for:
//! - Scale computation (`ScaleFactory`)
//! - Rendering targets (`RenderSurface`)
//!
//! ## Modules
//!
//! - `chartkit` - Core primitives: linear scale, path builder
//! - `factory` - Padded scale factory driven by a dataset column
//! - `axis` - Tick generation and axis views
//! - `surface` - Rendering surface trait and frame types
//! - `scatter` - Scatter plot component

pub mod axis;
pub mod chartkit;
pub mod factory;
pub mod scatter;
pub mod surface;

pub use axis::*;
pub use chartkit::*;
pub use factory::*;
pub use scatter::*;
pub use surface::*;

// Re-export colors from scatter-core for convenience
pub use scatter_core::colors;

/// Default animation length for axis swaps, in milliseconds
pub const TRANSITION_MS: u32 = 1000;

/// Inline style placing a node at `(x, y)`; later moves animate over `duration_ms`
pub fn translate_style(x: f64, y: f64, duration_ms: u32) -> String {
    format!(
        "transform: translate({:.2}px, {:.2}px); transition: transform {}ms ease",
        x, y, duration_ms
    )
}

/// Chart margin configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl ChartMargin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    /// Room below and left of the chart for the stacked axis labels
    pub const fn labeled_axes() -> Self {
        Self::new(60.0, 60.0, 120.0, 150.0)
    }
}

impl Default for ChartMargin {
    fn default() -> Self {
        Self::labeled_axes()
    }
}

/// Chart dimensions with margin handling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
    pub margin: ChartMargin,
}

impl ChartDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: ChartMargin::default(),
        }
    }

    /// Inner width (excluding margins)
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Inner height (excluding margins)
    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }

    /// SVG transform for inner chart area
    pub fn inner_transform(&self) -> String {
        format!("translate({}, {})", self.margin.left, self.margin.top)
    }

    /// ViewBox string for SVG
    pub fn viewbox(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self::new(960.0, 500.0)
    }
}

/// Scatter chart configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterConfig {
    pub dims: ChartDimensions,
    pub point_radius: f64,
    /// Vertical distance between stacked axis labels
    pub label_spacing: f64,
    /// Side of the "move to other axis" square
    pub switch_size: f64,
    pub transition_ms: u32,
    pub tick_count: usize,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            dims: ChartDimensions::default(),
            point_radius: 10.0,
            label_spacing: 20.0,
            switch_size: 12.0,
            transition_ms: TRANSITION_MS,
            tick_count: 10,
        }
    }
}

impl ScatterConfig {
    /// Font size of the abbreviation drawn in each point
    pub fn point_font_size(&self) -> f64 {
        (self.point_radius * 0.8).floor()
    }
}
