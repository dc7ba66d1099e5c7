//! Trend classification of the rate of change.
//!
//! A small deadband keeps sensor jitter from flapping the dashboard between
//! RISING and FALLING: only a rate clear of ±0.005 m/h counts as movement.

use crate::model::Trend;

/// Half-width of the stable deadband, in meters per hour.
pub const TREND_DEADBAND_M_H: f64 = 0.005;

/// Classifies a rate of change against the deadband.
///
/// An undefined rate (single-sample series, or zero elapsed time between
/// samples) classifies as STABLE. That mirrors the long-standing behavior
/// of this station's dashboard, where an unknown rate failed both strict
/// comparisons and fell through to the stable branch; treating "unknown"
/// as "stable" is inherited policy, not a derived fact. A literal NaN takes
/// the same path for the same reason.
pub fn classify_trend(vel_m_h: Option<f64>) -> Trend {
    match vel_m_h {
        Some(v) if v > TREND_DEADBAND_M_H => Trend::Rising,
        Some(v) if v < -TREND_DEADBAND_M_H => Trend::Falling,
        // None, NaN, and anything inside the deadband.
        _ => Trend::Stable,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_above_deadband_is_rising() {
        assert_eq!(classify_trend(Some(0.02)), Trend::Rising);
        assert_eq!(classify_trend(Some(0.0051)), Trend::Rising);
    }

    #[test]
    fn test_rate_below_negative_deadband_is_falling() {
        assert_eq!(classify_trend(Some(-0.01)), Trend::Falling);
        assert_eq!(classify_trend(Some(-0.0051)), Trend::Falling);
    }

    #[test]
    fn test_rate_inside_deadband_is_stable() {
        assert_eq!(classify_trend(Some(0.001)), Trend::Stable);
        assert_eq!(classify_trend(Some(-0.004)), Trend::Stable);
        assert_eq!(classify_trend(Some(0.0)), Trend::Stable);
    }

    #[test]
    fn test_deadband_edges_are_stable() {
        // Strict comparisons: exactly ±0.005 m/h is not movement.
        assert_eq!(classify_trend(Some(TREND_DEADBAND_M_H)), Trend::Stable);
        assert_eq!(classify_trend(Some(-TREND_DEADBAND_M_H)), Trend::Stable);
    }

    #[test]
    fn test_undefined_rate_is_stable() {
        assert_eq!(classify_trend(None), Trend::Stable);
    }

    #[test]
    fn test_nan_rate_is_stable() {
        // NaN fails both comparisons and lands in the catch-all arm, the
        // same way an undefined rate does.
        assert_eq!(classify_trend(Some(f64::NAN)), Trend::Stable);
    }
}
