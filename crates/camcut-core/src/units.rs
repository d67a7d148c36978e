//! Unit conversion utilities
//!
//! Handles conversion between Metric (mm) and Imperial (inch) systems and
//! selects the units word (G21/G20) emitted in program preambles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    Metric,
    /// Imperial system (inches)
    Imperial,
}

impl Default for MeasurementSystem {
    fn default() -> Self {
        Self::Metric
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Convert millimeters to inches
pub fn mm_to_inch(value_mm: f64) -> f64 {
    value_mm / MM_PER_INCH
}

/// Convert inches to millimeters
pub fn inch_to_mm(value_inch: f64) -> f64 {
    value_inch * MM_PER_INCH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        assert_eq!("mm".parse::<MeasurementSystem>(), Ok(MeasurementSystem::Metric));
        assert_eq!(
            "Imperial".parse::<MeasurementSystem>(),
            Ok(MeasurementSystem::Imperial)
        );
        assert!("furlong".parse::<MeasurementSystem>().is_err());
        assert_eq!(MeasurementSystem::Metric.to_string(), "Metric");
    }

    #[test]
    fn test_conversion_roundtrip() {
        assert_eq!(inch_to_mm(1.0), 25.4);
        assert!((mm_to_inch(inch_to_mm(3.5)) - 3.5).abs() < 1e-12);
    }
}
