//! Scale factory: builds the linear scale for one axis from a dataset column

use crate::{ChartDimensions, LinearScale};
use scatter_core::{AxisKind, Dataset, Field, Result};

/// Lower domain bound as a fraction of the observed minimum
pub const DOMAIN_LOWER_PAD: f64 = 0.8;
/// Upper domain bound as a multiple of the observed maximum
pub const DOMAIN_UPPER_PAD: f64 = 1.2;

// ============================================================================
// STRATEGY PATTERN: Scale Factory
// ============================================================================

/// Strategy trait for turning a dataset column into an axis scale
pub trait ScaleFactory {
    fn compute_scale(
        &self,
        dataset: &Dataset,
        field: Field,
        kind: AxisKind,
    ) -> Result<LinearScale>;
}

/// Production factory: domain `[0.8 * min, 1.2 * max]`, range sized to the
/// chart area. Vertical ranges are inverted since SVG y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddedScaleFactory {
    pub chart_width: f64,
    pub chart_height: f64,
}

impl PaddedScaleFactory {
    pub fn new(chart_width: f64, chart_height: f64) -> Self {
        Self {
            chart_width,
            chart_height,
        }
    }

    pub fn from_dimensions(dims: &ChartDimensions) -> Self {
        Self::new(dims.inner_width(), dims.inner_height())
    }

    pub fn range_for(&self, kind: AxisKind) -> (f64, f64) {
        match kind {
            AxisKind::Horizontal => (0.0, self.chart_width),
            AxisKind::Vertical => (self.chart_height, 0.0),
        }
    }
}

impl Default for PaddedScaleFactory {
    fn default() -> Self {
        Self::from_dimensions(&ChartDimensions::default())
    }
}

impl ScaleFactory for PaddedScaleFactory {
    fn compute_scale(
        &self,
        dataset: &Dataset,
        field: Field,
        kind: AxisKind,
    ) -> Result<LinearScale> {
        let (min, max) = dataset.extent(field)?;
        let (r_start, r_end) = self.range_for(kind);

        let scale = LinearScale::new()
            .domain(min * DOMAIN_LOWER_PAD, max * DOMAIN_UPPER_PAD)
            .range(r_start, r_end);

        tracing::debug!(
            "Computed {} scale for `{}`: domain {:?}",
            kind,
            field,
            scale.domain_bounds()
        );

        Ok(scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Scale;
    use scatter_core::{Record, ScatterError};

    fn two_states() -> Dataset {
        Dataset::from_records(vec![
            Record::new("First", "FI")
                .with_value(Field::Poverty, 10.0)
                .with_value(Field::Obesity, 20.0),
            Record::new("Second", "SE")
                .with_value(Field::Poverty, 30.0)
                .with_value(Field::Obesity, 40.0),
        ])
    }

    #[test]
    fn test_horizontal_domain_and_range() {
        let factory = PaddedScaleFactory::new(750.0, 320.0);
        let scale = factory
            .compute_scale(&two_states(), Field::Poverty, AxisKind::Horizontal)
            .unwrap();

        let (lo, hi) = scale.domain_bounds();
        assert!((lo - 8.0).abs() < 1e-9);
        assert!((hi - 36.0).abs() < 1e-9);
        assert_eq!(scale.range_bounds(), (0.0, 750.0));
    }

    #[test]
    fn test_vertical_range_is_inverted() {
        let factory = PaddedScaleFactory::new(750.0, 320.0);
        let scale = factory
            .compute_scale(&two_states(), Field::Obesity, AxisKind::Vertical)
            .unwrap();

        let (lo, hi) = scale.domain_bounds();
        assert!((lo - 16.0).abs() < 1e-9);
        assert!((hi - 48.0).abs() < 1e-9);
        assert_eq!(scale.range_bounds(), (320.0, 0.0));
        assert!((scale.scale(lo) - 320.0).abs() < 1e-9);
        assert!(scale.scale(hi).abs() < 1e-9);
    }

    #[test]
    fn test_points_stay_inside_chart_area() {
        let factory = PaddedScaleFactory::default();
        let dataset = two_states();
        let scale = factory
            .compute_scale(&dataset, Field::Poverty, AxisKind::Horizontal)
            .unwrap();

        for record in dataset.iter() {
            let x = scale.scale(record.value(Field::Poverty).unwrap());
            assert!(x > 0.0 && x < factory.chart_width);
        }
    }

    #[test]
    fn test_negative_values_invert_padding() {
        let dataset = Dataset::from_records(vec![
            Record::new("A", "A").with_value(Field::Age, -10.0),
            Record::new("B", "B").with_value(Field::Age, -5.0),
        ]);
        let scale = PaddedScaleFactory::default()
            .compute_scale(&dataset, Field::Age, AxisKind::Horizontal)
            .unwrap();

        // 0.8 * -10 = -8 sits above the minimum; accepted, not an error
        let (lo, hi) = scale.domain_bounds();
        assert!((lo + 8.0).abs() < 1e-9);
        assert!((hi + 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_field_fails_loudly() {
        let err = PaddedScaleFactory::default()
            .compute_scale(&two_states(), Field::Income, AxisKind::Horizontal)
            .unwrap_err();

        assert!(matches!(
            err,
            ScatterError::MissingField { field: Field::Income, row: 0 }
        ));
    }

    #[test]
    fn test_empty_dataset_fails() {
        let err = PaddedScaleFactory::default()
            .compute_scale(&Dataset::default(), Field::Age, AxisKind::Vertical)
            .unwrap_err();

        assert!(matches!(err, ScatterError::EmptyDataset));
    }
}
