//! Default axis label sets and active fields

use crate::{AxisKind, Field, Result, ScatterError};

/// Which labels sit on which axis at startup, and which one is active
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisLayout {
    pub horizontal: Vec<Field>,
    pub vertical: Vec<Field>,
    pub default_horizontal: Field,
    pub default_vertical: Field,
}

impl Default for AxisLayout {
    fn default() -> Self {
        Self {
            horizontal: vec![Field::Poverty, Field::Age, Field::Income],
            vertical: vec![Field::Obesity, Field::Smokes, Field::Healthcare],
            default_horizontal: Field::Poverty,
            default_vertical: Field::Obesity,
        }
    }
}

impl AxisLayout {
    /// Single fixed field per axis (no switching)
    pub fn fixed(horizontal: Field, vertical: Field) -> Self {
        Self {
            horizontal: vec![horizontal],
            vertical: vec![vertical],
            default_horizontal: horizontal,
            default_vertical: vertical,
        }
    }

    pub fn labels(&self, kind: AxisKind) -> &[Field] {
        match kind {
            AxisKind::Horizontal => &self.horizontal,
            AxisKind::Vertical => &self.vertical,
        }
    }

    pub fn default_field(&self, kind: AxisKind) -> Field {
        match kind {
            AxisKind::Horizontal => self.default_horizontal,
            AxisKind::Vertical => self.default_vertical,
        }
    }

    /// Each default must be one of its own axis labels
    pub fn validate(&self) -> Result<()> {
        for &kind in AxisKind::all() {
            let field = self.default_field(kind);
            if !self.labels(kind).contains(&field) {
                return Err(ScatterError::NotOnAxis { field, kind });
            }
        }
        Ok(())
    }
}
