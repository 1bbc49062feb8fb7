//! # chartkit
//!
//! Core chart primitives: scales and the SVG path builder.

use std::fmt::Write;

// ============================================================================
// STRATEGY PATTERN: Scale Trait
// ============================================================================

/// Strategy trait for scales (maps domain values to range values)
pub trait Scale: Send + Sync {
    /// Scale a value from domain to range
    fn scale(&self, value: f64) -> f64;
}

// ============================================================================
// LINEAR SCALE
// ============================================================================

/// Linear scale (D3-style continuous scale).
///
/// Unclamped: values outside the domain extrapolate along the same line.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
        }
    }

    pub fn domain(mut self, min: f64, max: f64) -> Self {
        self.domain = (min, max);
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

    /// Get domain bounds
    pub fn domain_bounds(&self) -> (f64, f64) {
        self.domain
    }

    /// Get range bounds
    pub fn range_bounds(&self) -> (f64, f64) {
        self.range
    }

    /// Step between "nice" ticks (1, 2 or 5 times a power of ten)
    pub fn nice_step(&self, count: usize) -> Option<f64> {
        let (a, b) = self.domain;
        let span = (b - a).abs();

        if span == 0.0 || count == 0 || !span.is_finite() {
            return None;
        }

        let rough_step = span / count as f64;
        let magnitude = 10.0_f64.powf(rough_step.log10().floor());
        let residual = rough_step / magnitude;

        let step = if residual <= 1.0 {
            magnitude
        } else if residual <= 2.0 {
            2.0 * magnitude
        } else if residual <= 5.0 {
            5.0 * magnitude
        } else {
            10.0 * magnitude
        };

        Some(step)
    }

    /// Generate "nice" tick values (rounded to clean numbers) inside the domain
    pub fn nice_ticks(&self, count: usize) -> Vec<f64> {
        let (a, b) = self.domain;
        let (min, max) = if a <= b { (a, b) } else { (b, a) };

        let Some(step) = self.nice_step(count) else {
            return vec![min];
        };

        // Integer multiples of the step avoid accumulated float drift
        let first = (min / step).ceil() as i64;
        let last = (max / step).floor() as i64;

        (first..=last).map(|i| i as f64 * step).collect()
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::new()
    }
}

impl Scale for LinearScale {
    fn scale(&self, value: f64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        if (d_max - d_min).abs() < f64::EPSILON {
            return (r_min + r_max) / 2.0;
        }

        let normalized = (value - d_min) / (d_max - d_min);
        r_min + normalized * (r_max - r_min)
    }
}

// ============================================================================
// PATH BUILDER (fluent API)
// ============================================================================

/// SVG path builder with fluent API
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    commands: String,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            commands: String::with_capacity(64),
        }
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        let _ = write!(self.commands, "M{:.2},{:.2}", x, y);
        self
    }

    pub fn horizontal_to(mut self, x: f64) -> Self {
        let _ = write!(self.commands, "H{:.2}", x);
        self
    }

    pub fn vertical_to(mut self, y: f64) -> Self {
        let _ = write!(self.commands, "V{:.2}", y);
        self
    }

    pub fn build(self) -> String {
        self.commands
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new().domain(0.0, 100.0).range(0.0, 500.0);

        assert_eq!(scale.scale(0.0), 0.0);
        assert_eq!(scale.scale(50.0), 250.0);
        assert_eq!(scale.scale(100.0), 500.0);
    }

    #[test]
    fn test_linear_scale_extrapolates() {
        let scale = LinearScale::new().domain(0.0, 100.0).range(0.0, 500.0);

        assert_eq!(scale.scale(120.0), 600.0);
        assert_eq!(scale.scale(-20.0), -100.0);
    }

    #[test]
    fn test_inverted_range() {
        let scale = LinearScale::new().domain(0.0, 10.0).range(320.0, 0.0);

        assert_eq!(scale.scale(0.0), 320.0);
        assert_eq!(scale.scale(10.0), 0.0);
        assert_eq!(scale.scale(5.0), 160.0);
    }

    #[test]
    fn test_degenerate_domain_maps_to_mid_range() {
        let scale = LinearScale::new().domain(0.0, 0.0).range(0.0, 100.0);
        assert_eq!(scale.scale(0.0), 50.0);
    }

    #[test]
    fn test_nice_ticks() {
        let scale = LinearScale::new().domain(8.0, 36.0).range(0.0, 750.0);

        assert_eq!(scale.nice_step(10), Some(5.0));
        assert_eq!(scale.nice_ticks(10), vec![10.0, 15.0, 20.0, 25.0, 30.0, 35.0]);
    }

    #[test]
    fn test_nice_ticks_reversed_domain() {
        let scale = LinearScale::new().domain(10.0, 0.0);
        assert_eq!(scale.nice_ticks(5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn test_nice_ticks_degenerate() {
        let scale = LinearScale::new().domain(4.0, 4.0);
        assert_eq!(scale.nice_ticks(10), vec![4.0]);
    }

    #[test]
    fn test_path_builder() {
        let path = PathBuilder::new()
            .move_to(0.0, 6.0)
            .vertical_to(0.0)
            .horizontal_to(750.0)
            .vertical_to(6.0)
            .build();

        assert_eq!(path, "M0.00,6.00V0.00H750.00V6.00");
    }
}
