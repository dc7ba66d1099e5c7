/// Sample, LevelSeries, CurrentState, FewsError
/// core data structures and error handling
///
/// Core data types for the Río Sinú gauge monitoring service.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic, no I/O, and no external dependencies beyond chrono —
/// only types.

use chrono::NaiveDateTime;

// ---------------------------------------------------------------------------
// Variable names
// ---------------------------------------------------------------------------

/// FEWS variable name for the observed water level, in meters.
pub const VAR_LEVEL_OBSERVED: &str = "Hobs";

/// FEWS variable name for the sensor-derived water level, in meters.
pub const VAR_LEVEL_SENSOR: &str = "Hsen";

/// FEWS variable name for observed daily precipitation, in millimeters.
pub const VAR_PRECIPITATION: &str = "Pobs";

// ---------------------------------------------------------------------------
// Sample types
// ---------------------------------------------------------------------------

/// A single normalized observation from the FEWS feed.
///
/// Produced by `ingest::fews` after screening: the timestamp parsed and the
/// value known to be finite. The feed reports station-local wall-clock time
/// with no UTC offset, so timestamps are naive by design.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub timestamp: NaiveDateTime,
    pub value: f64,
}

/// One water-level sample enriched with its rate-of-change fields.
///
/// `None` encodes "undefined": the first sample of a series has no previous
/// sample to difference against, and `vel_m_h` is undefined whenever the
/// elapsed time between samples is zero (duplicate timestamps are preserved,
/// not deduplicated).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelSample {
    pub timestamp: NaiveDateTime,
    pub level_m: f64,
    /// Level difference from the previous sample, in meters.
    pub delta_m: Option<f64>,
    /// Elapsed time since the previous sample, in hours.
    pub delta_h: Option<f64>,
    /// Rate of change, in meters per hour (`delta_m / delta_h`).
    pub vel_m_h: Option<f64>,
}

/// Which FEWS variable the level series was built from.
///
/// The pipeline prefers observed data (`Hobs`) and falls back to the
/// sensor-derived variable (`Hsen`) when no observed record survives
/// normalization. The choice is retained so the dashboard can say which
/// kind of data it is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelSource {
    Observed,
    SensorDerived,
}

impl LevelSource {
    /// Human-readable label for the dashboard header.
    pub fn label(&self) -> &'static str {
        match self {
            LevelSource::Observed => "Observed",
            LevelSource::SensorDerived => "Sensor-derived",
        }
    }

    /// The FEWS variable name this source corresponds to.
    pub fn variable(&self) -> &'static str {
        match self {
            LevelSource::Observed => VAR_LEVEL_OBSERVED,
            LevelSource::SensorDerived => VAR_LEVEL_SENSOR,
        }
    }
}

impl std::fmt::Display for LevelSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The normalized water-level series with derived rate-of-change fields,
/// tagged with the variable it was built from.
///
/// Samples are sorted ascending by timestamp. May be empty — an upstream
/// outage that leaves zero valid records is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelSeries {
    pub source: LevelSource,
    pub samples: Vec<LevelSample>,
}

impl LevelSeries {
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The most recent sample, if any.
    pub fn latest(&self) -> Option<&LevelSample> {
        self.samples.last()
    }
}

/// Everything one acquisition cycle hands to the presentation layer.
///
/// The source label travels on `level.source`.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedFeed {
    pub level: LevelSeries,
    /// Daily precipitation in millimeters, sorted ascending.
    pub precipitation: Vec<Sample>,
}

// ---------------------------------------------------------------------------
// Classification types
// ---------------------------------------------------------------------------

/// Alert classification of the current water level, in ascending severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Normal,
    Orange,
    Red,
}

impl std::fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertLevel::Normal => write!(f, "NORMAL"),
            AlertLevel::Orange => write!(f, "ORANGE ALERT"),
            AlertLevel::Red => write!(f, "RED ALERT"),
        }
    }
}

/// Trend classification of the current rate of change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Rising,
    Falling,
    Stable,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Rising => write!(f, "RISING"),
            Trend::Falling => write!(f, "FALLING"),
            Trend::Stable => write!(f, "STABLE"),
        }
    }
}

/// Snapshot of the latest level observation with its classification.
///
/// Recomputed fresh on every acquisition; never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentState {
    pub timestamp: NaiveDateTime,
    pub level_m: f64,
    /// Undefined for a single-sample series or zero elapsed time.
    pub vel_m_h: Option<f64>,
    pub alert: AlertLevel,
    pub trend: Trend,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when fetching, parsing, or classifying FEWS data.
///
/// `Fetch` and `Http` together cover the fetch-failure class (transport
/// errors and timeouts vs. non-2xx statuses). Per-record malformation is
/// never an error — noisy partial data is the normal case for a live sensor
/// feed, and bad records are screened out during normalization instead.
#[derive(Debug, PartialEq)]
pub enum FewsError {
    /// Network failure or timeout reaching the FEWS endpoint.
    Fetch(String),
    /// Non-2xx HTTP response from the FEWS endpoint.
    Http(u16),
    /// The response body was not valid JSON or lacked the expected
    /// top-level variable keys.
    Parse(String),
    /// Classification was attempted on a series with no valid samples.
    EmptySeries,
}

impl std::fmt::Display for FewsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FewsError::Fetch(msg) => write!(f, "Fetch error: {}", msg),
            FewsError::Http(code) => write!(f, "HTTP error: {}", code),
            FewsError::Parse(msg) => write!(f, "Parse error: {}", msg),
            FewsError::EmptySeries => write!(f, "No valid samples in series"),
        }
    }
}

impl std::error::Error for FewsError {}
