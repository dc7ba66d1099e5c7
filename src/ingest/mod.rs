/// Data ingestion for the monitoring service.
///
/// Submodules:
/// - `fews` — IDEAM FEWS visor client: fetch, parse, and normalize the
///   station series document.

pub mod fews;
