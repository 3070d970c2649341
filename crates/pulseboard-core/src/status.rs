//! # Status Evaluation
//!
//! Pure derivation of a traffic-light band from a reading versus its target.
//!
//! The band policy is the codified compatibility contract of the scorecard:
//!
//! | Direction        | On Track    | Watch             | At Risk   |
//! |------------------|-------------|-------------------|-----------|
//! | higher-is-better | r >= 0.9    | 0.7 <= r < 0.9    | r < 0.7   |
//! | lower-is-better  | r <= 1.1    | 1.1 < r <= 1.4    | r > 1.4   |
//!
//! where `r = value / target`. The breakpoints are asymmetric: a 10% miss
//! near a delivery floor reads as more material than the same miss near a
//! cost ceiling. They are policy, not law; change them only as a deliberate
//! compatibility break.
//!
//! No division is performed. Each breakpoint is checked by integer
//! cross-multiplication widened to `i128`, which is exact for any positive
//! target and any `i64` thousandths reading.

use crate::types::{Direction, PulseboardError, Quantity, StatusBand};
use serde::{Deserialize, Serialize};

// =============================================================================
// EVALUATE
// =============================================================================

/// Derive the status band for a reading against a target.
///
/// `target` must be strictly positive; a zero (or negative) target is an
/// [`PulseboardError::InvalidTarget`] error rather than a silently wrong
/// band. Side-effect free and deterministic: identical inputs always
/// produce the identical band.
pub fn evaluate(
    value: Quantity,
    target: Quantity,
    direction: Direction,
) -> Result<StatusBand, PulseboardError> {
    if !target.is_positive() {
        return Err(PulseboardError::InvalidTarget);
    }

    let v = i128::from(value.milli());
    let t = i128::from(target.milli());

    let band = match direction {
        Direction::HigherIsBetter => {
            // r >= 0.9  <=>  10v >= 9t ; r >= 0.7  <=>  10v >= 7t
            if v * 10 >= t * 9 {
                StatusBand::OnTrack
            } else if v * 10 >= t * 7 {
                StatusBand::Watch
            } else {
                StatusBand::AtRisk
            }
        }
        Direction::LowerIsBetter => {
            // r <= 1.1  <=>  10v <= 11t ; r <= 1.4  <=>  10v <= 14t
            if v * 10 <= t * 11 {
                StatusBand::OnTrack
            } else if v * 10 <= t * 14 {
                StatusBand::Watch
            } else {
                StatusBand::AtRisk
            }
        }
    };

    Ok(band)
}

// =============================================================================
// STATUS READING
// =============================================================================

/// The status a rendered metric actually carries.
///
/// A metric whose target has gone non-evaluable (a zero budget, say) must
/// render as explicitly unavailable, never as a misleading band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusReading {
    /// A derived or preset traffic-light band.
    Band(StatusBand),
    /// Evaluation was not possible for this metric.
    Unavailable,
}

impl StatusReading {
    /// Get the band, if one is available.
    #[must_use]
    pub fn band(&self) -> Option<StatusBand> {
        match self {
            StatusReading::Band(band) => Some(*band),
            StatusReading::Unavailable => None,
        }
    }

    /// Check whether evaluation was impossible.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StatusReading::Unavailable)
    }

    /// Human-readable badge label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            StatusReading::Band(band) => band.label(),
            StatusReading::Unavailable => "Unavailable",
        }
    }
}

impl std::fmt::Display for StatusReading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// BAND COUNTS (Banner Aggregation)
// =============================================================================

/// Tally of status readings across a set of metrics.
///
/// Recomputed on every query; nothing here is cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BandCounts {
    pub on_track: usize,
    pub watch: usize,
    pub at_risk: usize,
    pub unavailable: usize,
}

impl BandCounts {
    /// Tally readings from an iterator of status readings.
    #[must_use]
    pub fn tally(readings: impl IntoIterator<Item = StatusReading>) -> Self {
        let mut counts = Self::default();
        for reading in readings {
            match reading {
                StatusReading::Band(StatusBand::OnTrack) => counts.on_track += 1,
                StatusReading::Band(StatusBand::Watch) => counts.watch += 1,
                StatusReading::Band(StatusBand::AtRisk) => counts.at_risk += 1,
                StatusReading::Unavailable => counts.unavailable += 1,
            }
        }
        counts
    }

    /// Total number of readings tallied.
    #[must_use]
    pub fn total(&self) -> usize {
        self.on_track + self.watch + self.at_risk + self.unavailable
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn q(s: &str) -> Quantity {
        Quantity::parse(s).expect("quantity")
    }

    #[test]
    fn higher_bands_at_reference_points() {
        let target = q("100");
        assert_eq!(
            evaluate(q("95"), target, Direction::HigherIsBetter).expect("eval"),
            StatusBand::OnTrack
        );
        assert_eq!(
            evaluate(q("80"), target, Direction::HigherIsBetter).expect("eval"),
            StatusBand::Watch
        );
        assert_eq!(
            evaluate(q("50"), target, Direction::HigherIsBetter).expect("eval"),
            StatusBand::AtRisk
        );
    }

    #[test]
    fn lower_bands_at_reference_points() {
        let target = q("100");
        assert_eq!(
            evaluate(q("105"), target, Direction::LowerIsBetter).expect("eval"),
            StatusBand::OnTrack
        );
        assert_eq!(
            evaluate(q("125"), target, Direction::LowerIsBetter).expect("eval"),
            StatusBand::Watch
        );
        assert_eq!(
            evaluate(q("150"), target, Direction::LowerIsBetter).expect("eval"),
            StatusBand::AtRisk
        );
    }

    #[test]
    fn breakpoints_are_inclusive_exactly_as_specified() {
        let target = q("1000");
        // higher: r = 0.9 and r = 0.7 land on the better side
        assert_eq!(
            evaluate(q("900"), target, Direction::HigherIsBetter).expect("eval"),
            StatusBand::OnTrack
        );
        assert_eq!(
            evaluate(q("700"), target, Direction::HigherIsBetter).expect("eval"),
            StatusBand::Watch
        );
        // lower: r = 1.1 and r = 1.4 land on the better side
        assert_eq!(
            evaluate(q("1100"), target, Direction::LowerIsBetter).expect("eval"),
            StatusBand::OnTrack
        );
        assert_eq!(
            evaluate(q("1400"), target, Direction::LowerIsBetter).expect("eval"),
            StatusBand::Watch
        );
        assert_eq!(
            evaluate(q("1400.001"), target, Direction::LowerIsBetter).expect("eval"),
            StatusBand::AtRisk
        );
    }

    #[test]
    fn zero_target_is_invalid() {
        for direction in [Direction::HigherIsBetter, Direction::LowerIsBetter] {
            let result = evaluate(q("5"), q("0"), direction);
            assert!(matches!(result, Err(PulseboardError::InvalidTarget)));
        }
    }

    #[test]
    fn negative_target_is_invalid() {
        let result = evaluate(q("5"), q("-10"), Direction::HigherIsBetter);
        assert!(matches!(result, Err(PulseboardError::InvalidTarget)));
    }

    #[test]
    fn negative_value_is_at_risk_for_higher() {
        assert_eq!(
            evaluate(q("-3"), q("10"), Direction::HigherIsBetter).expect("eval"),
            StatusBand::AtRisk
        );
    }

    #[test]
    fn token_budget_scenario_is_watch_not_at_risk() {
        // 930K consumed against a 700K budget: r = 1.329 sits inside (1.1, 1.4].
        assert_eq!(
            evaluate(q("930"), q("700"), Direction::LowerIsBetter).expect("eval"),
            StatusBand::Watch
        );
    }

    #[test]
    fn cycle_time_scenario_is_on_track() {
        // 18h against a 24h ceiling: r = 0.75 <= 1.1.
        assert_eq!(
            evaluate(q("18"), q("24"), Direction::LowerIsBetter).expect("eval"),
            StatusBand::OnTrack
        );
    }

    #[test]
    fn band_counts_tally() {
        let counts = BandCounts::tally([
            StatusReading::Band(StatusBand::OnTrack),
            StatusReading::Band(StatusBand::OnTrack),
            StatusReading::Band(StatusBand::Watch),
            StatusReading::Band(StatusBand::AtRisk),
            StatusReading::Unavailable,
        ]);
        assert_eq!(counts.on_track, 2);
        assert_eq!(counts.watch, 1);
        assert_eq!(counts.at_risk, 1);
        assert_eq!(counts.unavailable, 1);
        assert_eq!(counts.total(), 5);
    }
}
