/// Derived-signal computation for the monitoring service.
///
/// This module provides the numeric derivations layered on top of the
/// normalized series. Charting and any heavier statistics live with the
/// presentation layer that consumes the derived output.
///
/// Submodules:
/// - `rates` — per-sample rate-of-change derivation for the level series.

pub mod rates;
