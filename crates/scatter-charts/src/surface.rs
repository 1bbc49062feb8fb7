//! Rendering surface seam between the axis engine and whatever draws the chart

use crate::LinearScale;
use scatter_core::{AxisKind, Field};

/// Pixel position of one record plus the text drawn inside its circle
#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

/// Hover content for one record
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub title: String,
    pub lines: Vec<String>,
}

impl Tooltip {
    /// Single-line rendering, lines separated by " | "
    pub fn text(&self) -> String {
        let mut text = self.title.clone();
        for line in &self.lines {
            text.push_str(" | ");
            text.push_str(line);
        }
        text
    }
}

/// Active/inactive marking for one clickable axis label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelMark {
    pub field: Field,
    pub kind: AxisKind,
    pub active: bool,
    /// Whether the label can be moved to the other axis (inactive labels only)
    pub movable: bool,
}

impl LabelMark {
    pub fn css_class(&self) -> &'static str {
        if self.active { "active" } else { "inactive" }
    }

    /// Hint shown on the switch square
    pub fn move_hint(&self) -> String {
        format!("Move {} to {}-axis", self.field, self.kind.other().short())
    }
}

// ============================================================================
// STRATEGY PATTERN: Rendering Surface
// ============================================================================

/// Strategy trait for the target that draws the chart.
///
/// Every call is fire-and-forget: a new request simply restarts any
/// animation still running from its current visual state.
pub trait RenderSurface {
    /// Animate the ticks of one axis to a new scale
    fn transition_axis(&mut self, kind: AxisKind, scale: &LinearScale, duration_ms: u32);

    /// Animate every point (and its label) to new coordinates
    fn transition_points(&mut self, points: &[PlotPoint], duration_ms: u32);

    /// Replace hover content for every point
    fn update_tooltips(&mut self, tooltips: &[Tooltip]);

    /// Replace the marking of every label of one axis kind
    fn mark_labels(&mut self, kind: AxisKind, marks: &[LabelMark]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_hint_targets_other_axis() {
        let mark = LabelMark {
            field: Field::Age,
            kind: AxisKind::Horizontal,
            active: false,
            movable: true,
        };
        assert_eq!(mark.move_hint(), "Move age to y-axis");
        assert_eq!(mark.css_class(), "inactive");
    }

    #[test]
    fn test_tooltip_text() {
        let tooltip = Tooltip {
            title: "Alabama".to_string(),
            lines: vec!["poverty: 19.3".to_string(), "obesity: 33.5".to_string()],
        };
        assert_eq!(tooltip.text(), "Alabama | poverty: 19.3 | obesity: 33.5");
    }
}
