//! Alert threshold checking.
//!
//! The two alert levels are process-wide constants, not runtime
//! configuration: they are the official hazard stages for this station and
//! the dashboard draws them as reference lines, so both the classifier and
//! the presentation layer read the same values from here.

use crate::model::AlertLevel;

/// Level at or above which the station is in red alert, in meters.
pub const ALERT_RED_M: f64 = 5.9;

/// Level at or above which the station is in orange alert, in meters.
pub const ALERT_ORANGE_M: f64 = 5.4;

fn at_or_above_red(level_m: f64) -> bool {
    level_m >= ALERT_RED_M
}

fn at_or_above_orange(level_m: f64) -> bool {
    level_m >= ALERT_ORANGE_M
}

fn any_level(_level_m: f64) -> bool {
    true
}

/// The alert ladder, evaluated top to bottom — first match wins.
///
/// Kept as an explicit ordered list rather than an if/else chain so the
/// tie-break policy is auditable: a level at or above both thresholds is
/// RED because the red rung comes first. The catch-all Normal rung makes
/// the fall-through explicit.
pub static ALERT_LADDER: &[(fn(f64) -> bool, AlertLevel)] = &[
    (at_or_above_red, AlertLevel::Red),
    (at_or_above_orange, AlertLevel::Orange),
    (any_level, AlertLevel::Normal),
];

/// Classifies a water level against the alert ladder.
pub fn classify_alert(level_m: f64) -> AlertLevel {
    for (matches, level) in ALERT_LADDER {
        if matches(level_m) {
            return *level;
        }
    }
    // The ladder ends in a catch-all rung; this is unreachable by
    // construction and tested below.
    AlertLevel::Normal
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_above_red_is_red() {
        assert_eq!(classify_alert(6.0), AlertLevel::Red);
        assert_eq!(classify_alert(12.5), AlertLevel::Red);
    }

    #[test]
    fn test_level_between_thresholds_is_orange() {
        assert_eq!(classify_alert(5.5), AlertLevel::Orange);
        assert_eq!(classify_alert(5.89), AlertLevel::Orange);
    }

    #[test]
    fn test_level_below_orange_is_normal() {
        assert_eq!(classify_alert(5.0), AlertLevel::Normal);
        assert_eq!(classify_alert(0.0), AlertLevel::Normal);
        assert_eq!(classify_alert(-1.0), AlertLevel::Normal);
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        // ">= threshold" on both rungs: landing exactly on a threshold
        // classifies at that severity.
        assert_eq!(classify_alert(ALERT_RED_M), AlertLevel::Red);
        assert_eq!(classify_alert(ALERT_ORANGE_M), AlertLevel::Orange);
    }

    #[test]
    fn test_ladder_is_ordered_most_severe_first() {
        // A red-level reading satisfies the orange rung too; only the
        // ladder order makes it RED. If someone reorders the rungs this
        // fails before the dashboard starts under-reporting hazards.
        assert_eq!(ALERT_LADDER.len(), 3);
        assert_eq!(ALERT_LADDER[0].1, AlertLevel::Red);
        assert_eq!(ALERT_LADDER[1].1, AlertLevel::Orange);
        assert_eq!(ALERT_LADDER[2].1, AlertLevel::Normal);
    }

    #[test]
    fn test_catch_all_rung_accepts_everything() {
        let (matches, level) = ALERT_LADDER[ALERT_LADDER.len() - 1];
        assert!(matches(f64::MIN) && matches(0.0) && matches(f64::MAX));
        assert_eq!(level, AlertLevel::Normal);
    }

    #[test]
    fn test_thresholds_are_ordered_ascending() {
        // orange < red — violating this order would make the ladder
        // unreachable at the orange rung.
        assert!(ALERT_ORANGE_M < ALERT_RED_M);
    }
}
