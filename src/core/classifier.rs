//! Risk Classifier
//!
//! Maps the rounded Webacy risk score onto the three-tier verdict shown
//! to users. Bands are closed on the lower tier: a score sitting exactly
//! on a boundary takes the safer verdict.

use serde::{Deserialize, Serialize};

use crate::utils::constants::{LOW_RISK_MAX, MEDIUM_RISK_MAX};

/// Three-tier audit verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Low,
    Medium,
    High,
}

/// Display color token for a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TierColor {
    Green,
    Orange,
    Red,
}

impl TierColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TierColor::Green => "green",
            TierColor::Orange => "orange",
            TierColor::Red => "red",
        }
    }
}

impl Verdict {
    /// Classify a risk score. Total over all floats: out-of-range values
    /// are not clamped and never error, they just land in a band.
    pub fn classify(rounded_risk: f64) -> Verdict {
        if rounded_risk <= LOW_RISK_MAX {
            Verdict::Low
        } else if rounded_risk <= MEDIUM_RISK_MAX {
            Verdict::Medium
        } else {
            Verdict::High
        }
    }

    /// Verdict label as rendered in the assessment and report.
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Low => "LOW RISK",
            Verdict::Medium => "MEDIUM RISK",
            Verdict::High => "HIGH RISK",
        }
    }

    /// Display color token.
    pub fn color(&self) -> TierColor {
        match self {
            Verdict::Low => TierColor::Green,
            Verdict::Medium => TierColor::Orange,
            Verdict::High => TierColor::Red,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Verdict::Low => "✅",
            Verdict::Medium => "🟠",
            Verdict::High => "🔴",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_interiors() {
        assert_eq!(Verdict::classify(0.0), Verdict::Low);
        assert_eq!(Verdict::classify(15.0), Verdict::Low);
        assert_eq!(Verdict::classify(35.0), Verdict::Medium);
        assert_eq!(Verdict::classify(75.0), Verdict::High);
    }

    #[test]
    fn test_boundaries_resolve_to_lower_tier() {
        assert_eq!(Verdict::classify(23.0), Verdict::Low);
        assert_eq!(Verdict::classify(23.01), Verdict::Medium);
        assert_eq!(Verdict::classify(50.0), Verdict::Medium);
        assert_eq!(Verdict::classify(50.01), Verdict::High);
    }

    #[test]
    fn test_out_of_range_still_classifies() {
        assert_eq!(Verdict::classify(-10.0), Verdict::Low);
        assert_eq!(Verdict::classify(250.0), Verdict::High);
    }

    #[test]
    fn test_labels_and_colors() {
        assert_eq!(Verdict::Low.label(), "LOW RISK");
        assert_eq!(Verdict::Low.color(), TierColor::Green);
        assert_eq!(Verdict::Medium.color(), TierColor::Orange);
        assert_eq!(Verdict::High.color(), TierColor::Red);
        assert_eq!(TierColor::Green.as_str(), "green");
    }
}
