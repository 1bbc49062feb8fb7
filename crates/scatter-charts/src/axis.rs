//! Axis tick generation (the `axisBottom` / `axisLeft` half of a D3 axis)

use crate::{translate_style, LinearScale, PathBuilder, Scale};
use scatter_core::{AxisKind, CompactFormatter, FixedFormatter, ValueFormatter};

/// Length of the outer tick marks at both ends of the domain line
pub const TICK_SIZE: f64 = 6.0;

/// A single tick: domain value, pixel offset along the axis, and label
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub offset: f64,
    pub label: String,
}

/// Everything needed to draw one axis after a transition request
#[derive(Debug, Clone, PartialEq)]
pub struct AxisView {
    pub kind: AxisKind,
    pub ticks: Vec<AxisTick>,
    pub domain_path: String,
    pub duration_ms: u32,
}

impl AxisView {
    pub fn from_scale(
        kind: AxisKind,
        scale: &LinearScale,
        tick_count: usize,
        duration_ms: u32,
    ) -> Self {
        Self {
            kind,
            ticks: axis_ticks(scale, tick_count),
            domain_path: domain_path(kind, scale),
            duration_ms,
        }
    }

    /// Stable identity of a tick across rescales
    pub fn tick_key(tick: &AxisTick) -> (u64, String) {
        (tick.value.to_bits(), tick.label.clone())
    }

    /// Position style of the tick at `value`, animated over this view's
    /// duration. `None` once the tick has left the axis.
    pub fn tick_style(&self, value: f64) -> Option<String> {
        let tick = self.ticks.iter().find(|t| t.value.to_bits() == value.to_bits())?;
        let (x, y) = match self.kind {
            AxisKind::Horizontal => (tick.offset, 0.0),
            AxisKind::Vertical => (0.0, tick.offset),
        };
        Some(translate_style(x, y, self.duration_ms))
    }
}

/// Formatter matching the precision of the tick step
fn tick_formatter(step: f64) -> Box<dyn ValueFormatter> {
    if step >= 1_000.0 {
        Box::new(CompactFormatter)
    } else {
        let decimals = (-step.log10().floor()).max(0.0) as usize;
        Box::new(FixedFormatter { decimals })
    }
}

/// Nice ticks for the scale's domain, positioned in range space
pub fn axis_ticks(scale: &LinearScale, count: usize) -> Vec<AxisTick> {
    let formatter = tick_formatter(scale.nice_step(count).unwrap_or(1.0));

    scale
        .nice_ticks(count)
        .into_iter()
        .map(|value| AxisTick {
            value,
            offset: scale.scale(value),
            label: formatter.format(value),
        })
        .collect()
}

/// Domain line with outer ticks, drawn outward from the chart area
pub fn domain_path(kind: AxisKind, scale: &LinearScale) -> String {
    let (start, end) = scale.range_bounds();

    match kind {
        AxisKind::Horizontal => PathBuilder::new()
            .move_to(start, TICK_SIZE)
            .vertical_to(0.0)
            .horizontal_to(end)
            .vertical_to(TICK_SIZE)
            .build(),
        AxisKind::Vertical => PathBuilder::new()
            .move_to(-TICK_SIZE, start)
            .horizontal_to(0.0)
            .vertical_to(end)
            .horizontal_to(-TICK_SIZE)
            .build(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_ticks_positions() {
        let scale = LinearScale::new().domain(8.0, 36.0).range(0.0, 700.0);
        let ticks = axis_ticks(&scale, 10);

        assert_eq!(ticks.len(), 6);
        assert_eq!(ticks[0].label, "10");
        assert!((ticks[0].offset - 50.0).abs() < 1e-9);
        assert_eq!(ticks[5].label, "35");
    }

    #[test]
    fn test_income_ticks_use_compact_labels() {
        let scale = LinearScale::new().domain(30_000.0, 90_000.0).range(0.0, 750.0);
        let ticks = axis_ticks(&scale, 10);

        assert_eq!(ticks.first().map(|t| t.label.as_str()), Some("30K"));
        assert_eq!(ticks.last().map(|t| t.label.as_str()), Some("90K"));
    }

    #[test]
    fn test_tick_style_carries_duration() {
        let scale = LinearScale::new().domain(8.0, 36.0).range(320.0, 0.0);
        let view = AxisView::from_scale(AxisKind::Vertical, &scale, 10, 1000);

        let style = view.tick_style(10.0).unwrap();
        assert!(style.starts_with("transform: translate(0.00px, 297.14px)"));
        assert!(style.ends_with("transition: transform 1000ms ease"));
        assert_eq!(view.tick_style(12.5), None);

        let initial = AxisView::from_scale(AxisKind::Horizontal, &scale, 10, 0);
        assert!(initial.tick_style(35.0).unwrap().contains("transform 0ms"));
    }

    #[test]
    fn test_vertical_domain_path() {
        let scale = LinearScale::new().domain(0.0, 10.0).range(320.0, 0.0);
        assert_eq!(
            domain_path(AxisKind::Vertical, &scale),
            "M-6.00,320.00H0.00V0.00H-6.00"
        );
    }
}
