//! Active field per axis and the label sets each axis offers

use scatter_charts::LabelMark;
use scatter_core::{AxisKind, AxisLayout, Field};

/// The pair of fields currently driving point positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisSelection {
    horizontal: Field,
    vertical: Field,
}

impl AxisSelection {
    pub fn new(horizontal: Field, vertical: Field) -> Self {
        Self { horizontal, vertical }
    }

    pub fn from_layout(layout: &AxisLayout) -> Self {
        Self::new(layout.default_horizontal, layout.default_vertical)
    }

    pub fn active(&self, kind: AxisKind) -> Field {
        match kind {
            AxisKind::Horizontal => self.horizontal,
            AxisKind::Vertical => self.vertical,
        }
    }

    /// Make `field` the active field of `kind`. Returns `false` (and leaves
    /// the selection untouched) when it already is.
    pub fn try_select(&mut self, kind: AxisKind, field: Field) -> bool {
        let slot = match kind {
            AxisKind::Horizontal => &mut self.horizontal,
            AxisKind::Vertical => &mut self.vertical,
        };

        if *slot == field {
            return false;
        }

        *slot = field;
        true
    }
}

impl Default for AxisSelection {
    fn default() -> Self {
        Self::from_layout(&AxisLayout::default())
    }
}

/// Clickable labels grouped by axis kind, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisLabels {
    horizontal: Vec<Field>,
    vertical: Vec<Field>,
}

impl AxisLabels {
    pub fn new(horizontal: Vec<Field>, vertical: Vec<Field>) -> Self {
        Self { horizontal, vertical }
    }

    pub fn from_layout(layout: &AxisLayout) -> Self {
        Self::new(layout.horizontal.clone(), layout.vertical.clone())
    }

    pub fn labels(&self, kind: AxisKind) -> &[Field] {
        match kind {
            AxisKind::Horizontal => &self.horizontal,
            AxisKind::Vertical => &self.vertical,
        }
    }

    fn labels_mut(&mut self, kind: AxisKind) -> &mut Vec<Field> {
        match kind {
            AxisKind::Horizontal => &mut self.horizontal,
            AxisKind::Vertical => &mut self.vertical,
        }
    }

    pub fn contains(&self, kind: AxisKind, field: Field) -> bool {
        self.labels(kind).contains(&field)
    }

    /// Axis kind whose label group holds `field` (horizontal checked first)
    pub fn kind_of(&self, field: Field) -> Option<AxisKind> {
        AxisKind::all()
            .iter()
            .copied()
            .find(|&kind| self.contains(kind, field))
    }

    /// Move `field` from `from` to the end of the other axis group.
    /// Returns the destination, or `None` if `field` is not on `from`.
    pub fn move_label(&mut self, field: Field, from: AxisKind) -> Option<AxisKind> {
        let source = self.labels_mut(from);
        let index = source.iter().position(|&f| f == field)?;
        source.remove(index);

        let to = from.other();
        let target = self.labels_mut(to);
        if !target.contains(&field) {
            target.push(field);
        }

        Some(to)
    }

    /// Active/inactive marks for one axis group under `selection`
    pub fn marks(&self, kind: AxisKind, selection: &AxisSelection) -> Vec<LabelMark> {
        partition_labels(kind, self.labels(kind), selection.active(kind))
    }
}

impl Default for AxisLabels {
    fn default() -> Self {
        Self::from_layout(&AxisLayout::default())
    }
}

/// Mark `active` as the one active label; every other label is inactive and
/// may be moved to the other axis.
pub fn partition_labels(kind: AxisKind, labels: &[Field], active: Field) -> Vec<LabelMark> {
    labels
        .iter()
        .map(|&field| {
            let is_active = field == active;
            LabelMark {
                field,
                kind,
                active: is_active,
                movable: !is_active,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_select_changes_once() {
        let mut selection = AxisSelection::default();

        assert!(selection.try_select(AxisKind::Vertical, Field::Smokes));
        assert_eq!(selection.active(AxisKind::Vertical), Field::Smokes);
        assert!(!selection.try_select(AxisKind::Vertical, Field::Smokes));
    }

    #[test]
    fn test_try_select_active_field_is_noop() {
        let mut selection = AxisSelection::default();
        let before = selection;

        assert!(!selection.try_select(AxisKind::Horizontal, Field::Poverty));
        assert!(!selection.try_select(AxisKind::Horizontal, Field::Poverty));
        assert_eq!(selection, before);
    }

    #[test]
    fn test_try_select_leaves_other_axis_alone() {
        let mut selection = AxisSelection::default();
        selection.try_select(AxisKind::Horizontal, Field::Income);

        assert_eq!(selection.active(AxisKind::Horizontal), Field::Income);
        assert_eq!(selection.active(AxisKind::Vertical), Field::Obesity);
    }

    #[test]
    fn test_partition_has_single_active() {
        let marks = partition_labels(
            AxisKind::Horizontal,
            &[Field::Poverty, Field::Age, Field::Income],
            Field::Age,
        );

        assert_eq!(marks.iter().filter(|m| m.active).count(), 1);
        assert!(marks[1].active && !marks[1].movable);
        assert!(!marks[0].active && marks[0].movable);
        assert!(marks.iter().all(|m| m.kind == AxisKind::Horizontal));
    }

    #[test]
    fn test_move_label_appends_to_other_axis() {
        let mut labels = AxisLabels::default();

        assert_eq!(
            labels.move_label(Field::Age, AxisKind::Horizontal),
            Some(AxisKind::Vertical)
        );
        assert_eq!(labels.labels(AxisKind::Horizontal), &[Field::Poverty, Field::Income]);
        assert_eq!(
            labels.labels(AxisKind::Vertical),
            &[Field::Obesity, Field::Smokes, Field::Healthcare, Field::Age]
        );
        assert_eq!(labels.kind_of(Field::Age), Some(AxisKind::Vertical));
    }

    #[test]
    fn test_move_label_not_on_source() {
        let mut labels = AxisLabels::default();
        assert_eq!(labels.move_label(Field::Smokes, AxisKind::Horizontal), None);
        assert_eq!(labels, AxisLabels::default());
    }
}
