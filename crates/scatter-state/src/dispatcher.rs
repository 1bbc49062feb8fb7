//! Render dispatcher: turns label clicks into scale recomputation and
//! rendering-surface updates

use crate::frame;
use crate::selection::{AxisLabels, AxisSelection};
use scatter_charts::{LinearScale, RenderSurface, ScaleFactory, TRANSITION_MS};
use scatter_core::{AxisKind, AxisLayout, Dataset, Field, PlainFormatter, Result, ScatterError};
use std::sync::Arc;

/// Owns the selection state and both scales; the only writer of either.
pub struct RenderDispatcher<F, S> {
    dataset: Dataset,
    factory: F,
    surface: S,
    selection: AxisSelection,
    labels: AxisLabels,
    x_scale: Arc<LinearScale>,
    y_scale: Arc<LinearScale>,
    transition_ms: u32,
}

impl<F, S> RenderDispatcher<F, S>
where
    F: ScaleFactory,
    S: RenderSurface,
{
    /// Build the dispatcher and compute the initial scale of both axes.
    /// Nothing is sent to the surface until [`initialize`](Self::initialize).
    pub fn new(dataset: Dataset, layout: &AxisLayout, factory: F, surface: S) -> Result<Self> {
        layout.validate()?;

        let selection = AxisSelection::from_layout(layout);
        let x_scale = factory.compute_scale(
            &dataset,
            selection.active(AxisKind::Horizontal),
            AxisKind::Horizontal,
        )?;
        let y_scale = factory.compute_scale(
            &dataset,
            selection.active(AxisKind::Vertical),
            AxisKind::Vertical,
        )?;

        Ok(Self {
            dataset,
            factory,
            surface,
            selection,
            labels: AxisLabels::from_layout(layout),
            x_scale: Arc::new(x_scale),
            y_scale: Arc::new(y_scale),
            transition_ms: TRANSITION_MS,
        })
    }

    pub fn with_transition(mut self, ms: u32) -> Self {
        self.transition_ms = ms;
        self
    }

    /// Push the complete first frame with no animation
    pub fn initialize(&mut self) -> Result<()> {
        let points = self.points()?;
        let tooltips = self.tooltips()?;

        for &kind in AxisKind::all() {
            let scale = Arc::clone(self.scale(kind));
            self.surface.transition_axis(kind, &scale, 0);
        }
        self.surface.transition_points(&points, 0);
        self.surface.update_tooltips(&tooltips);
        for &kind in AxisKind::all() {
            let marks = self.labels.marks(kind, &self.selection);
            self.surface.mark_labels(kind, &marks);
        }

        tracing::info!(
            "Chart initialized: {} vs {} over {} records",
            self.selection.active(AxisKind::Horizontal),
            self.selection.active(AxisKind::Vertical),
            self.dataset.len()
        );
        Ok(())
    }

    /// Handle a click on an axis label. Returns whether anything changed;
    /// clicking the active label is a no-op with no surface calls.
    pub fn on_axis_changed(&mut self, kind: AxisKind, field: Field) -> Result<bool> {
        if !self.labels.contains(kind, field) {
            return Err(ScatterError::NotOnAxis { field, kind });
        }

        let previous = self.selection.active(kind);
        if !self.selection.try_select(kind, field) {
            tracing::trace!("{} axis already shows `{}`", kind, field);
            return Ok(false);
        }

        let scale = match self.factory.compute_scale(&self.dataset, field, kind) {
            Ok(scale) => Arc::new(scale),
            Err(err) => {
                self.selection.try_select(kind, previous);
                return Err(err);
            }
        };

        let old_scale = std::mem::replace(self.scale_slot(kind), scale);
        let frame = self.points().and_then(|points| Ok((points, self.tooltips()?)));
        let (points, tooltips) = match frame {
            Ok(frame) => frame,
            Err(err) => {
                *self.scale_slot(kind) = old_scale;
                self.selection.try_select(kind, previous);
                return Err(err);
            }
        };

        tracing::debug!("{} axis: `{}` -> `{}`", kind, previous, field);

        let scale = Arc::clone(self.scale(kind));
        self.surface.transition_axis(kind, &scale, self.transition_ms);
        self.surface.transition_points(&points, self.transition_ms);
        self.surface.update_tooltips(&tooltips);

        let marks = self.labels.marks(kind, &self.selection);
        self.surface.mark_labels(kind, &marks);

        Ok(true)
    }

    /// Handle a click on a label's switch square: move the label to the
    /// other axis. The active label of an axis cannot be moved.
    pub fn on_label_moved(&mut self, field: Field) -> Result<bool> {
        let from = self
            .labels
            .kind_of(field)
            .ok_or(ScatterError::UnknownLabel(field))?;

        if self.selection.active(from) == field {
            tracing::trace!("`{}` is active on the {} axis and stays put", field, from);
            return Ok(false);
        }

        let Some(to) = self.labels.move_label(field, from) else {
            return Ok(false);
        };

        tracing::debug!("Moved `{}` from {} to {} axis", field, from, to);

        for &kind in AxisKind::all() {
            let marks = self.labels.marks(kind, &self.selection);
            self.surface.mark_labels(kind, &marks);
        }

        Ok(true)
    }

    pub fn selection(&self) -> &AxisSelection {
        &self.selection
    }

    pub fn labels(&self) -> &AxisLabels {
        &self.labels
    }

    pub fn scale(&self, kind: AxisKind) -> &Arc<LinearScale> {
        match kind {
            AxisKind::Horizontal => &self.x_scale,
            AxisKind::Vertical => &self.y_scale,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn scale_slot(&mut self, kind: AxisKind) -> &mut Arc<LinearScale> {
        match kind {
            AxisKind::Horizontal => &mut self.x_scale,
            AxisKind::Vertical => &mut self.y_scale,
        }
    }

    fn points(&self) -> Result<Vec<scatter_charts::PlotPoint>> {
        frame::plot_points(
            &self.dataset,
            self.selection.active(AxisKind::Horizontal),
            &self.x_scale,
            self.selection.active(AxisKind::Vertical),
            &self.y_scale,
        )
    }

    fn tooltips(&self) -> Result<Vec<scatter_charts::Tooltip>> {
        frame::tooltips(
            &self.dataset,
            self.selection.active(AxisKind::Horizontal),
            self.selection.active(AxisKind::Vertical),
            &PlainFormatter,
        )
    }
}
