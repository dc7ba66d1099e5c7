///is_stale + staleness tests
/// Latest-observation staleness detection.
///
/// The FEWS visor updates this station roughly hourly under normal
/// conditions. During a rising river, stale data is dangerous — a sensor
/// outage or a stuck upstream export may not be obvious from an
/// otherwise-normal dashboard. This module lets the presentation layer flag
/// an observation that is older than expected.
///
/// # Clock injection
/// `is_stale_at` accepts a `now: NaiveDateTime` parameter rather than
/// reading the clock internally. This makes staleness purely deterministic
/// in tests without mocking or time manipulation.

use chrono::NaiveDateTime;

use crate::analysis::rates::hours_between;

// ---------------------------------------------------------------------------
// Staleness check
// ---------------------------------------------------------------------------

/// Returns `true` if `observed_at` is older than `max_age_hours` relative
/// to `now`.
///
/// Staleness is strictly greater than the threshold:
///   age > max_age_hours  →  stale
///   age == max_age_hours →  not stale
///
/// Timestamps are station-local wall-clock instants, the same convention
/// the normalized series uses.
pub fn is_stale_at(observed_at: NaiveDateTime, max_age_hours: f64, now: NaiveDateTime) -> bool {
    hours_between(observed_at, now) > max_age_hours
}

/// Convenience wrapper over the local clock.
/// Use `is_stale_at` in tests to keep them deterministic.
pub fn is_stale(observed_at: NaiveDateTime, max_age_hours: f64) -> bool {
    is_stale_at(observed_at, max_age_hours, chrono::Local::now().naive_local())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
