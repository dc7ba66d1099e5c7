//! Single-station river gauge monitor for the Río Sinú at Montería.
//!
//! Pulls the station's series document from the IDEAM FEWS visor on demand,
//! normalizes it into clean time-ordered series, derives the hourly rate of
//! change, classifies the latest observation against the fixed alert
//! thresholds, and hands everything to a thin terminal dashboard. Stateless:
//! every refresh is a full independent fetch-normalize-classify cycle.

pub mod alert;
pub mod analysis;
pub mod config;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod render;
pub mod station;
