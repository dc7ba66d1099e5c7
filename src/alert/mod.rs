/// Alert classification for the monitoring service.
///
/// Submodules:
/// - `thresholds` — the fixed alert-level ladder over the current level.
/// - `trends` — trend classification of the rate of change.
/// - `snapshot` — combines both into the `CurrentState` snapshot.
/// - `staleness` — flags a latest observation that is older than expected.

pub mod snapshot;
pub mod staleness;
pub mod thresholds;
pub mod trends;
