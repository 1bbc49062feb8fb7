//! Per-record render data derived from the current scales and selection

use scatter_charts::{LinearScale, PlotPoint, Scale, Tooltip};
use scatter_core::{Dataset, Field, Result, ScatterError, ValueFormatter};

/// Pixel position and label of every record, in dataset order
pub fn plot_points(
    dataset: &Dataset,
    x_field: Field,
    x_scale: &LinearScale,
    y_field: Field,
    y_scale: &LinearScale,
) -> Result<Vec<PlotPoint>> {
    dataset
        .iter()
        .enumerate()
        .map(|(row, record)| {
            let x = record
                .value(x_field)
                .ok_or(ScatterError::MissingField { field: x_field, row })?;
            let y = record
                .value(y_field)
                .ok_or(ScatterError::MissingField { field: y_field, row })?;

            Ok(PlotPoint {
                x: x_scale.scale(x),
                y: y_scale.scale(y),
                label: record.abbr.clone(),
            })
        })
        .collect()
}

/// Hover content for every record: the state name, then the active
/// horizontal and vertical field with their values.
pub fn tooltips<F: ValueFormatter>(
    dataset: &Dataset,
    x_field: Field,
    y_field: Field,
    formatter: &F,
) -> Result<Vec<Tooltip>> {
    dataset
        .iter()
        .enumerate()
        .map(|(row, record)| {
            let lines = [x_field, y_field]
                .into_iter()
                .map(|field| {
                    record
                        .value(field)
                        .map(|value| format!("{}: {}", field, formatter.format(value)))
                        .ok_or(ScatterError::MissingField { field, row })
                })
                .collect::<Result<Vec<_>>>()?;

            Ok(Tooltip {
                title: record.state.clone(),
                lines,
            })
        })
        .collect()
}
