//! # scatter-components
//!
//! Leptos UI components for the ACS Scatter Dashboard: the page layout and
//! the clickable axis label groups drawn inside the chart.

pub mod axis_labels;
pub mod dashboard;

pub use axis_labels::*;
pub use dashboard::*;
