//! # scatter-core
//!
//! Core domain types for the ACS Scatter Dashboard.
//! Survey records, the closed set of plottable fields, axis layout and errors.

pub mod error;
pub mod field;
pub mod layout;
pub mod record;

pub use error::*;
pub use field::*;
pub use layout::*;
pub use record::*;

// ============================================================================
// STRATEGY PATTERN: Value Formatters
// ============================================================================

/// Strategy trait for formatting field values in tooltips and tick labels
pub trait ValueFormatter: Send + Sync {
    fn format(&self, value: f64) -> String;
}

/// Shortest round-trip representation (`19.3`, `42830`)
#[derive(Debug, Clone, Default)]
pub struct PlainFormatter;

impl ValueFormatter for PlainFormatter {
    fn format(&self, value: f64) -> String {
        format!("{}", value)
    }
}

/// Fixed number of decimals
#[derive(Debug, Clone)]
pub struct FixedFormatter {
    pub decimals: usize,
}

impl Default for FixedFormatter {
    fn default() -> Self {
        Self { decimals: 1 }
    }
}

impl ValueFormatter for FixedFormatter {
    fn format(&self, value: f64) -> String {
        format!("{:.prec$}", value, prec = self.decimals)
    }
}

/// Compact formatter for large values (K, M suffixes), used for income ticks
#[derive(Debug, Clone, Default)]
pub struct CompactFormatter;

impl ValueFormatter for CompactFormatter {
    fn format(&self, value: f64) -> String {
        let abs = value.abs();
        let sign = if value < 0.0 { "-" } else { "" };

        if abs >= 1_000_000.0 {
            format!("{}{:.1}M", sign, abs / 1_000_000.0)
        } else if abs >= 10_000.0 {
            format!("{}{:.0}K", sign, abs / 1_000.0)
        } else if abs >= 1_000.0 {
            format!("{}{:.1}K", sign, abs / 1_000.0)
        } else {
            format!("{}{}", sign, abs)
        }
    }
}

// ============================================================================
// COLOR CONSTANTS
// ============================================================================

pub mod colors {
    pub const POINT: &str = "#89bdd3";
    pub const POINT_STROKE: &str = "#e3e3e3";
    pub const POINT_TEXT: &str = "#ffffff";
    pub const AXIS: &str = "#000000";
    pub const LABEL_ACTIVE: &str = "#000000";
    pub const LABEL_INACTIVE: &str = "#aaaaaa";
    pub const SWITCH: &str = "#89bdd3";
    pub const TOOLTIP_BG: &str = "rgba(0, 0, 0, 0.8)";
    pub const TOOLTIP_TEXT: &str = "#ffffff";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_formatter_matches_shortest_repr() {
        let formatter = PlainFormatter;
        assert_eq!(formatter.format(19.3), "19.3");
        assert_eq!(formatter.format(42830.0), "42830");
    }

    #[test]
    fn test_compact_formatter() {
        let formatter = CompactFormatter;
        assert_eq!(formatter.format(42_830.0), "43K");
        assert_eq!(formatter.format(2_500.0), "2.5K");
        assert_eq!(formatter.format(1_500_000.0), "1.5M");
        assert_eq!(formatter.format(12.5), "12.5");
    }

    #[test]
    fn test_fixed_formatter() {
        let formatter = FixedFormatter { decimals: 2 };
        assert_eq!(formatter.format(3.14159), "3.14");
    }
}
