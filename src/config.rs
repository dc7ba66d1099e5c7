/// Runtime configuration for the dashboard and logging.
///
/// Read from an optional `fewsmon.toml` next to the binary, then overridden
/// by `FEWSMON_*` environment variables (loaded from `.env` by the caller
/// via dotenv before this module runs). A missing file means defaults — the
/// dashboard must come up with zero setup.
///
/// Configuration feeds the presentation layer and the logger only. The
/// acquisition pipeline reads none of it: endpoint, timeout, and thresholds
/// are fixed contracts, not knobs.

use serde::Deserialize;
use std::env;
use std::fs;

use crate::logging::LogLevel;

/// Color palette for the rendered dashboard.
///
/// Passed explicitly into the renderer at render time; there is no global
/// theme state anywhere in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    fn from_name(name: &str) -> Option<Theme> {
        match name.to_ascii_lowercase().as_str() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}

/// Resolved configuration with every default applied.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub theme: Theme,
    pub log_level: LogLevel,
    pub log_file: Option<String>,
    /// Age beyond which the latest observation gets a stale banner.
    pub stale_after_hours: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            theme: Theme::Dark,
            log_level: LogLevel::Info,
            log_file: None,
            stale_after_hours: 6.0,
        }
    }
}

/// On-disk shape: everything optional so a partial file works.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    theme: Option<String>,
    log_level: Option<String>,
    log_file: Option<String>,
    stale_after_hours: Option<f64>,
}

/// Loads configuration from `path`, applying defaults and env overrides.
///
/// A missing file is the normal case. An unreadable or malformed file is
/// worth a warning but never fatal — the dashboard still renders with
/// defaults. Runs before the logger exists, so warnings go straight to
/// stderr.
pub fn load(path: &str) -> DashboardConfig {
    let raw = match fs::read_to_string(path) {
        Ok(text) => match toml::from_str::<RawConfig>(&text) {
            Ok(raw) => raw,
            Err(e) => {
                eprintln!("⚠ Warning: could not parse {}: {}", path, e);
                RawConfig::default()
            }
        },
        Err(_) => RawConfig::default(),
    };

    resolve(raw)
}

fn resolve(raw: RawConfig) -> DashboardConfig {
    let defaults = DashboardConfig::default();

    let theme_name = env::var("FEWSMON_THEME").ok().or(raw.theme);
    let level_name = env::var("FEWSMON_LOG_LEVEL").ok().or(raw.log_level);
    let log_file = env::var("FEWSMON_LOG_FILE").ok().or(raw.log_file);

    DashboardConfig {
        theme: theme_name
            .as_deref()
            .and_then(Theme::from_name)
            .unwrap_or(defaults.theme),
        log_level: level_name
            .as_deref()
            .and_then(LogLevel::from_name)
            .unwrap_or(defaults.log_level),
        log_file,
        stale_after_hours: raw
            .stale_after_hours
            .filter(|h| *h > 0.0)
            .unwrap_or(defaults.stale_after_hours),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var overrides are exercised manually rather than in tests: the
    // test harness runs threads in parallel and process-global env mutation
    // races across them.

    #[test]
    fn test_missing_file_yields_defaults() {
        let cfg = load("./does-not-exist.toml");
        assert_eq!(cfg, DashboardConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults_for_absent_keys() {
        let raw: RawConfig = toml::from_str(r#"theme = "light""#).unwrap();
        let cfg = resolve(raw);
        assert_eq!(cfg.theme, Theme::Light);
        assert_eq!(cfg.log_level, DashboardConfig::default().log_level);
        assert_eq!(cfg.stale_after_hours, 6.0);
    }

    #[test]
    fn test_full_file_parses() {
        let raw: RawConfig = toml::from_str(
            r#"
            theme = "light"
            log_level = "debug"
            log_file = "fewsmon.log"
            stale_after_hours = 12.0
            "#,
        )
        .unwrap();
        let cfg = resolve(raw);
        assert_eq!(cfg.theme, Theme::Light);
        assert_eq!(cfg.log_level, LogLevel::Debug);
        assert_eq!(cfg.log_file.as_deref(), Some("fewsmon.log"));
        assert_eq!(cfg.stale_after_hours, 12.0);
    }

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        let raw: RawConfig = toml::from_str(r#"theme = "solarized""#).unwrap();
        assert_eq!(resolve(raw).theme, Theme::Dark);
    }

    #[test]
    fn test_nonpositive_stale_age_is_rejected() {
        let raw: RawConfig = toml::from_str("stale_after_hours = -1.0").unwrap();
        assert_eq!(resolve(raw).stale_after_hours, 6.0);
    }
}
