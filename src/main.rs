//! Dashboard entry point: one fetch-normalize-classify-render cycle.
//!
//! No flags, no arguments — re-running the binary is the refresh trigger.

use fewsmon_service::alert::{snapshot, staleness};
use fewsmon_service::config::{self, DashboardConfig};
use fewsmon_service::ingest::fews;
use fewsmon_service::logging::{self, DataSource};
use fewsmon_service::model::FewsError;
use fewsmon_service::render;
use fewsmon_service::station::STATION;

const CONFIG_PATH: &str = "./fewsmon.toml";

fn main() {
    dotenv::dotenv().ok();

    let cfg = config::load(CONFIG_PATH);
    logging::init_logger(cfg.log_level, cfg.log_file.as_deref());

    if let Err(err) = run(&cfg) {
        logging::log_fews_failure(STATION.station_code, "refresh", &err);
        render::render_error(&err, &cfg);
        std::process::exit(1);
    }
}

fn run(cfg: &DashboardConfig) -> Result<(), FewsError> {
    let client = fews::build_client()?;
    let feed = fews::fetch_and_normalize(&client)?;

    // An empty level series is a valid "no data yet" state, not an error —
    // classification only runs when there is a sample to classify.
    let state = if feed.level.is_empty() {
        logging::warn(
            DataSource::Fews,
            Some(STATION.station_code),
            "feed contained no valid level samples",
        );
        None
    } else {
        Some(snapshot::classify(&feed.level)?)
    };

    let stale = state
        .map(|s| staleness::is_stale(s.timestamp, cfg.stale_after_hours))
        .unwrap_or(false);

    render::render_dashboard(&feed, state.as_ref(), stale, cfg);
    Ok(())
}
