//! Reactive chart state: the production rendering surface
//!
//! Each surface request lands in a signal, so only the SVG nodes that read
//! that signal update.

use scatter_charts::{AxisView, LabelMark, LinearScale, PlotPoint, RenderSurface, Tooltip};
use scatter_core::AxisKind;
use leptos::prelude::*;

/// Signals read by the scatter chart and the axis label groups
#[derive(Clone, Copy)]
pub struct ChartState {
    pub x_axis: RwSignal<Option<AxisView>>,
    pub y_axis: RwSignal<Option<AxisView>>,
    pub points: RwSignal<Vec<PlotPoint>>,
    /// Duration of the most recent point transition
    pub point_duration: RwSignal<u32>,
    pub tooltips: RwSignal<Vec<Tooltip>>,
    pub x_labels: RwSignal<Vec<LabelMark>>,
    pub y_labels: RwSignal<Vec<LabelMark>>,
    tick_count: usize,
}

impl ChartState {
    pub fn new(tick_count: usize) -> Self {
        Self {
            x_axis: RwSignal::new(None),
            y_axis: RwSignal::new(None),
            points: RwSignal::new(Vec::new()),
            point_duration: RwSignal::new(0),
            tooltips: RwSignal::new(Vec::new()),
            x_labels: RwSignal::new(Vec::new()),
            y_labels: RwSignal::new(Vec::new()),
            tick_count,
        }
    }

    pub fn axis(&self, kind: AxisKind) -> RwSignal<Option<AxisView>> {
        match kind {
            AxisKind::Horizontal => self.x_axis,
            AxisKind::Vertical => self.y_axis,
        }
    }

    pub fn labels(&self, kind: AxisKind) -> RwSignal<Vec<LabelMark>> {
        match kind {
            AxisKind::Horizontal => self.x_labels,
            AxisKind::Vertical => self.y_labels,
        }
    }

    /// Forget the current frame (chart unmounted or reloaded)
    pub fn clear(&self) {
        self.x_axis.set(None);
        self.y_axis.set(None);
        self.points.set(Vec::new());
        self.tooltips.set(Vec::new());
        self.x_labels.set(Vec::new());
        self.y_labels.set(Vec::new());
    }
}

impl RenderSurface for ChartState {
    fn transition_axis(&mut self, kind: AxisKind, scale: &LinearScale, duration_ms: u32) {
        let view = AxisView::from_scale(kind, scale, self.tick_count, duration_ms);
        self.axis(kind).set(Some(view));
    }

    fn transition_points(&mut self, points: &[PlotPoint], duration_ms: u32) {
        self.point_duration.set(duration_ms);
        self.points.set(points.to_vec());
    }

    fn update_tooltips(&mut self, tooltips: &[Tooltip]) {
        self.tooltips.set(tooltips.to_vec());
    }

    fn mark_labels(&mut self, kind: AxisKind, marks: &[LabelMark]) {
        self.labels(kind).set(marks.to_vec());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scatter_core::Field;

    #[test]
    fn test_surface_writes_signals() {
        let mut chart = ChartState::new(10);
        let scale = LinearScale::new().domain(8.0, 36.0).range(0.0, 750.0);

        chart.transition_axis(AxisKind::Horizontal, &scale, 1000);
        chart.transition_points(
            &[PlotPoint { x: 1.0, y: 2.0, label: "AL".to_string() }],
            1000,
        );
        chart.mark_labels(
            AxisKind::Vertical,
            &[LabelMark {
                field: Field::Smokes,
                kind: AxisKind::Vertical,
                active: true,
                movable: false,
            }],
        );

        let axis = chart.x_axis.get_untracked().unwrap();
        assert_eq!(axis.duration_ms, 1000);
        assert!(!axis.ticks.is_empty());
        assert!(axis.tick_style(10.0).unwrap().ends_with("transform 1000ms ease"));
        assert!(chart.y_axis.get_untracked().is_none());
        assert_eq!(chart.points.get_untracked().len(), 1);
        assert_eq!(chart.point_duration.get_untracked(), 1000);
        assert_eq!(chart.y_labels.get_untracked()[0].field, Field::Smokes);
        assert!(chart.x_labels.get_untracked().is_empty());
    }
}
