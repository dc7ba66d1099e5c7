/// FEWS (IDEAM) Visor Data Client
///
/// Retrieves the station series document from the IDEAM Flood Early Warning
/// System visor and normalizes it into clean, time-ordered numeric series.
///
/// Document shape: a top-level mapping with keys "Hobs", "Hsen", "Pobs",
/// each holding a `data` list of records; each record carries a "Fecha"
/// timestamp string and a value field named after the variable itself.
///
/// Endpoint: https://fews.ideam.gov.co/visorfews/data/series/jsonH/<code>.json

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use crate::analysis::rates::derive_level_series;
use crate::logging::{self, DataSource};
use crate::model::{
    FewsError, LevelSource, NormalizedFeed, Sample, VAR_LEVEL_OBSERVED, VAR_LEVEL_SENSOR,
    VAR_PRECIPITATION,
};
use crate::station::{self, STATION};

/// Upper bound on the single fetch attempt. No retries, no caching: the
/// caller re-invokes the whole cycle on its own refresh trigger.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Timestamp field present in every FEWS record.
const FIELD_TIMESTAMP: &str = "Fecha";

// ============================================================================
// FEWS Document Structures
// ============================================================================

/// One named variable block in the series document.
///
/// Records stay as raw `Value`s here: the value field is named after the
/// enclosing variable ("Hobs"/"Hsen"/"Pobs"), so screening reads them by key
/// rather than through a fixed-shape struct.
#[derive(Debug, Deserialize)]
pub struct VariableBlock {
    pub data: Vec<Value>,
}

/// Top-level series document for one station.
///
/// A document missing any of the three variable keys fails deserialization,
/// which surfaces as a parse error — unlike per-record noise, a missing
/// variable means the upstream contract changed.
#[derive(Debug, Deserialize)]
pub struct SeriesDocument {
    #[serde(rename = "Hobs")]
    pub hobs: VariableBlock,
    #[serde(rename = "Hsen")]
    pub hsen: VariableBlock,
    #[serde(rename = "Pobs")]
    pub pobs: VariableBlock,
}

// ============================================================================
// Record Screening
// ============================================================================

/// Why a raw record was dropped during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// No "Fecha" field in the record.
    MissingTimestamp,
    /// No field named after the variable in the record.
    MissingValue,
    /// The value field was JSON null.
    NullValue,
    /// The timestamp string did not match any known FEWS format.
    UnparseableTimestamp,
    /// The value was neither a number nor a numeric string.
    NonNumericValue,
    /// The value parsed but was NaN or infinite.
    NonFiniteValue,
}

/// Outcome of screening one raw record.
///
/// Partial, noisy upstream data is the normal case for a live sensor feed,
/// so a `Drop` is diagnostics, not an error: the public contract exposes
/// only the kept samples, and drop reasons go to the debug log.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordOutcome {
    Keep(Sample),
    Drop(DropReason),
}

/// Timestamp formats the FEWS visor has been observed to emit.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parses a FEWS timestamp string into a naive instant.
///
/// The feed reports station-local wall-clock time with no UTC offset.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    for format in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(ts);
        }
    }
    // Pobs is a daily series; some documents carry date-only stamps.
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Coerces a record's value field into a finite number.
///
/// Accepts JSON numbers and numeric strings — the visor switches between
/// the two depending on which backend produced the document.
fn parse_value(raw: &Value) -> Result<f64, DropReason> {
    let value = match raw {
        Value::Number(n) => n.as_f64().ok_or(DropReason::NonNumericValue)?,
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| DropReason::NonNumericValue)?,
        _ => return Err(DropReason::NonNumericValue),
    };
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DropReason::NonFiniteValue)
    }
}

/// Screens one raw record for the named variable.
///
/// Checks run in a fixed order: presence of both fields, null value,
/// timestamp parse, value parse.
pub fn screen_record(record: &Value, value_field: &str) -> RecordOutcome {
    let Some(raw_timestamp) = record.get(FIELD_TIMESTAMP) else {
        return RecordOutcome::Drop(DropReason::MissingTimestamp);
    };
    let Some(raw_value) = record.get(value_field) else {
        return RecordOutcome::Drop(DropReason::MissingValue);
    };
    if raw_value.is_null() {
        return RecordOutcome::Drop(DropReason::NullValue);
    }

    let Some(timestamp) = raw_timestamp.as_str().and_then(parse_timestamp) else {
        return RecordOutcome::Drop(DropReason::UnparseableTimestamp);
    };

    match parse_value(raw_value) {
        Ok(value) => RecordOutcome::Keep(Sample { timestamp, value }),
        Err(reason) => RecordOutcome::Drop(reason),
    }
}

/// Normalizes one variable's record list into a clean time series.
///
/// Records that fail screening are skipped silently (debug-logged, never an
/// error). Survivors are sorted ascending by timestamp with a stable sort,
/// so records sharing a timestamp keep their arrival order — duplicates are
/// preserved, not deduplicated. An empty result is a valid outcome.
pub fn normalize_records(records: &[Value], value_field: &str) -> Vec<Sample> {
    let mut kept = Vec::with_capacity(records.len());
    let mut dropped = 0usize;

    for record in records {
        match screen_record(record, value_field) {
            RecordOutcome::Keep(sample) => kept.push(sample),
            RecordOutcome::Drop(reason) => {
                dropped += 1;
                logging::debug(
                    DataSource::Fews,
                    Some(value_field),
                    &format!("dropped record: {:?}", reason),
                );
            }
        }
    }

    if dropped > 0 {
        logging::debug(
            DataSource::Fews,
            Some(value_field),
            &format!("screened {} records: kept {}, dropped {}", records.len(), kept.len(), dropped),
        );
    }

    kept.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    kept
}

// ============================================================================
// Fetch
// ============================================================================

/// Builds the blocking HTTP client used for the single fetch attempt.
///
/// Certificate verification is DISABLED for this client. The FEWS visor has
/// served an incomplete certificate chain for years, and the feed is public,
/// read-only data; accepting the invalid chain is a known operational
/// constraint of this one upstream. Do not reuse this client for any other
/// endpoint.
pub fn build_client() -> Result<reqwest::blocking::Client, FewsError> {
    reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .danger_accept_invalid_certs(true)
        .build()
        .map_err(|e| FewsError::Fetch(e.to_string()))
}

/// Fetches the raw series document body for the monitored station.
///
/// One attempt, bounded by `FETCH_TIMEOUT`. Transport failures and timeouts
/// surface as `Fetch`; a non-2xx status surfaces as `Http`.
pub fn fetch_raw(client: &reqwest::blocking::Client) -> Result<String, FewsError> {
    let url = station::series_url(&STATION);

    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .map_err(|e| FewsError::Fetch(e.to_string()))?;

    if !response.status().is_success() {
        return Err(FewsError::Http(response.status().as_u16()));
    }

    response.text().map_err(|e| FewsError::Fetch(e.to_string()))
}

/// Parses a raw response body into the typed series document.
pub fn parse_series_document(body: &str) -> Result<SeriesDocument, FewsError> {
    serde_json::from_str(body).map_err(|e| FewsError::Parse(e.to_string()))
}

// ============================================================================
// Normalization Pipeline
// ============================================================================

/// Normalizes a parsed series document into the feed handed to the
/// presentation layer.
///
/// Pure function over the document: the same input yields an identical feed.
/// Level source selection prefers observed data; the sensor-derived variable
/// is the fallback when no observed record survived screening. If both are
/// empty the feed carries an empty level series — downstream must check
/// emptiness before classifying.
pub fn normalize(doc: &SeriesDocument) -> NormalizedFeed {
    let hobs = normalize_records(&doc.hobs.data, VAR_LEVEL_OBSERVED);
    let hsen = normalize_records(&doc.hsen.data, VAR_LEVEL_SENSOR);
    let pobs = normalize_records(&doc.pobs.data, VAR_PRECIPITATION);

    let (samples, source) = if !hobs.is_empty() {
        (hobs, LevelSource::Observed)
    } else {
        (hsen, LevelSource::SensorDerived)
    };

    NormalizedFeed {
        level: derive_level_series(samples, source),
        precipitation: pobs,
    }
}

/// Full acquisition cycle: fetch the series document, parse it, and
/// normalize it.
///
/// One HTTPS GET, bounded timeout, no retries. All failures propagate
/// unmodified; there is no internal recovery beyond the Hobs→Hsen source
/// preference.
pub fn fetch_and_normalize(
    client: &reqwest::blocking::Client,
) -> Result<NormalizedFeed, FewsError> {
    let body = fetch_raw(client)?;
    let doc = parse_series_document(&body)?;
    let feed = normalize(&doc);

    logging::info(
        DataSource::Fews,
        Some(STATION.station_code),
        &format!(
            "normalized {} level samples ({}) and {} precipitation samples",
            feed.level.samples.len(),
            feed.level.source.label(),
            feed.precipitation.len()
        ),
    );

    Ok(feed)
}

// ============================================================================
// Tests
// ============================================================================
