//! Plottable survey fields and axis orientation

use crate::ScatterError;
use std::str::FromStr;

/// Numeric survey column that can drive an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Poverty,
    Age,
    Income,
    Obesity,
    Smokes,
    Healthcare,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Self::Poverty,
        Self::Age,
        Self::Income,
        Self::Obesity,
        Self::Smokes,
        Self::Healthcare,
    ];

    /// Column name in the dataset file
    pub fn name(&self) -> &'static str {
        match self {
            Self::Poverty => "poverty",
            Self::Age => "age",
            Self::Income => "income",
            Self::Obesity => "obesity",
            Self::Smokes => "smokes",
            Self::Healthcare => "healthcare",
        }
    }

    /// Axis label text
    pub fn title(&self) -> &'static str {
        match self {
            Self::Poverty => "In Poverty (%)",
            Self::Age => "Age (Median)",
            Self::Income => "Household Income (Median)",
            Self::Obesity => "Obese (%)",
            Self::Smokes => "Smokes (%)",
            Self::Healthcare => "Lacks Healthcare (%)",
        }
    }

    pub fn all() -> &'static [Self] {
        &Self::ALL
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = ScatterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.name() == s)
            .ok_or_else(|| ScatterError::UnknownField(s.to_string()))
    }
}

/// Axis orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisKind {
    Horizontal,
    Vertical,
}

impl AxisKind {
    pub fn other(&self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Short axis name used in hints (`x` / `y`)
    pub fn short(&self) -> &'static str {
        match self {
            Self::Horizontal => "x",
            Self::Vertical => "y",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Horizontal => "x-axis",
            Self::Vertical => "y-axis",
        }
    }

    pub fn all() -> &'static [Self] {
        &[Self::Horizontal, Self::Vertical]
    }
}

impl std::fmt::Display for AxisKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Horizontal => f.write_str("horizontal"),
            Self::Vertical => f.write_str("vertical"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_parsing() {
        assert_eq!("smokes".parse::<Field>().unwrap(), Field::Smokes);
        assert_eq!("income".parse::<Field>().unwrap(), Field::Income);
    }

    #[test]
    fn test_unknown_field_is_error() {
        let err = "abbr".parse::<Field>().unwrap_err();
        assert!(matches!(err, ScatterError::UnknownField(name) if name == "abbr"));
    }

    #[test]
    fn test_axis_kind_other() {
        assert_eq!(AxisKind::Horizontal.other(), AxisKind::Vertical);
        assert_eq!(AxisKind::Vertical.other().short(), "x");
    }
}
