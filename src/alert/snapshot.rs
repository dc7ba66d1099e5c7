//! Current-state snapshot: the latest observation classified.
//!
//! Pure function over the derived level series — no side effects, no I/O,
//! deterministic given its input. Recomputed fresh on every acquisition.

use crate::alert::thresholds::classify_alert;
use crate::alert::trends::classify_trend;
use crate::model::{CurrentState, FewsError, LevelSeries};

/// Classifies the most recent sample of the level series.
///
/// Fails with `EmptySeries` when there is nothing to classify. Callers that
/// want a "no data yet" display state rather than an error should check
/// `LevelSeries::is_empty` before calling.
pub fn classify(series: &LevelSeries) -> Result<CurrentState, FewsError> {
    let latest = series.latest().ok_or(FewsError::EmptySeries)?;

    Ok(CurrentState {
        timestamp: latest.timestamp,
        level_m: latest.level_m,
        vel_m_h: latest.vel_m_h,
        alert: classify_alert(latest.level_m),
        trend: classify_trend(latest.vel_m_h),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
