/// Terminal dashboard rendering.
///
/// A thin view over the pipeline's output structures: indicator cards for
/// the current state, a level chart with the alert reference lines, a
/// velocity chart, and recent precipitation bars. Nothing in here computes
/// domain values — it only formats what acquisition and classification
/// already produced, plus the theme palette handed in at render time.

use crate::alert::thresholds::{ALERT_ORANGE_M, ALERT_RED_M};
use crate::config::{DashboardConfig, Theme};
use crate::model::{AlertLevel, CurrentState, FewsError, NormalizedFeed, Trend};
use crate::station::STATION;

const CHART_WIDTH: usize = 64;
const CHART_HEIGHT: usize = 10;
const PRECIP_ROWS: usize = 10;
const BANNER: &str =
    "═══════════════════════════════════════════════════════════════════════";

// ---------------------------------------------------------------------------
// Theme palette
// ---------------------------------------------------------------------------

/// ANSI color set for one theme. Light terminals get the darker variants.
struct Palette {
    reset: &'static str,
    bold: &'static str,
    dim: &'static str,
    ok: &'static str,
    warn: &'static str,
    danger: &'static str,
    accent: &'static str,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            reset: "\x1b[0m",
            bold: "\x1b[1m",
            dim: "\x1b[2m",
            ok: "\x1b[92m",
            warn: "\x1b[93m",
            danger: "\x1b[91m",
            accent: "\x1b[96m",
        },
        Theme::Light => Palette {
            reset: "\x1b[0m",
            bold: "\x1b[1m",
            dim: "\x1b[2m",
            ok: "\x1b[32m",
            warn: "\x1b[33m",
            danger: "\x1b[31m",
            accent: "\x1b[36m",
        },
    }
}

fn alert_color<'p>(p: &'p Palette, alert: AlertLevel) -> &'p str {
    match alert {
        AlertLevel::Normal => p.ok,
        AlertLevel::Orange => p.warn,
        AlertLevel::Red => p.danger,
    }
}

// A rising river is the hazardous direction; falling is the relieving one.
fn trend_color<'p>(p: &'p Palette, trend: Trend) -> &'p str {
    match trend {
        Trend::Rising => p.danger,
        Trend::Falling => p.ok,
        Trend::Stable => p.warn,
    }
}

fn alert_glyph(alert: AlertLevel) -> &'static str {
    match alert {
        AlertLevel::Normal => "🟢",
        AlertLevel::Orange => "🟠",
        AlertLevel::Red => "🔴",
    }
}

fn trend_glyph(trend: Trend) -> &'static str {
    match trend {
        Trend::Rising => "📈",
        Trend::Falling => "📉",
        Trend::Stable => "➖",
    }
}

/// Velocity card text: explicit sign, or a dash when undefined.
fn format_velocity(vel_m_h: Option<f64>) -> String {
    match vel_m_h {
        Some(v) => format!("{:+.3}", v),
        None => "—".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Charts
// ---------------------------------------------------------------------------

/// Maps a value into a chart row, row 0 being the top.
fn scale_to_row(value: f64, min: f64, max: f64, height: usize) -> usize {
    if max <= min {
        return height / 2;
    }
    let t = (value - min) / (max - min);
    let row = ((1.0 - t) * (height - 1) as f64).round() as isize;
    row.clamp(0, height as isize - 1) as usize
}

/// The most recent `width` values; older samples scroll off the left edge.
fn tail(values: &[f64], width: usize) -> &[f64] {
    let start = values.len().saturating_sub(width);
    &values[start..]
}

/// Renders a line chart with optional horizontal reference lines.
///
/// Reference lines are always inside the y-range so they stay visible even
/// when the data sits far below them — matching how the dashboard draws the
/// alert stages as fixed reference lines, not data.
fn draw_chart(
    p: &Palette,
    values: &[f64],
    references: &[(f64, &str, &str)], // (value, label, color)
    unit: &str,
) {
    if values.is_empty() {
        println!("   {}(no data){}", p.dim, p.reset);
        return;
    }

    let window = tail(values, CHART_WIDTH);
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in window.iter().chain(references.iter().map(|(v, _, _)| v)) {
        min = min.min(*v);
        max = max.max(*v);
    }
    // Breathing room so extremes don't sit on the frame.
    let pad = ((max - min) * 0.05).max(1e-6);
    min -= pad;
    max += pad;

    let mut rows = vec![vec![' '; window.len()]; CHART_HEIGHT];
    for (col, value) in window.iter().enumerate() {
        rows[scale_to_row(*value, min, max, CHART_HEIGHT)][col] = '●';
    }

    let reference_rows: Vec<(usize, &str, &str)> = references
        .iter()
        .map(|(v, label, color)| (scale_to_row(*v, min, max, CHART_HEIGHT), *label, *color))
        .collect();

    for (row_idx, row) in rows.iter().enumerate() {
        let y = max - (row_idx as f64 / (CHART_HEIGHT - 1) as f64) * (max - min);
        let reference = reference_rows.iter().find(|(r, _, _)| *r == row_idx);

        let mut line = String::with_capacity(window.len());
        for &cell in row {
            if cell == ' ' && reference.is_some() {
                line.push('┄');
            } else {
                line.push(cell);
            }
        }

        match reference {
            Some((_, label, color)) => println!(
                "   {:>7.2} ┤{}{}{} {}",
                y, color, line, p.reset, label
            ),
            None => println!("   {:>7.2} ┤{}", y, line),
        }
    }
    println!(
        "           {}└ last {} samples, {}{}",
        p.dim,
        window.len(),
        unit,
        p.reset
    );
}

/// Renders recent precipitation as horizontal bars, one row per day.
fn draw_precip_bars(p: &Palette, feed: &NormalizedFeed) {
    if feed.precipitation.is_empty() {
        println!("   {}(no data){}", p.dim, p.reset);
        return;
    }

    let start = feed.precipitation.len().saturating_sub(PRECIP_ROWS);
    let window = &feed.precipitation[start..];
    let max = window.iter().map(|s| s.value).fold(0.0_f64, f64::max);

    for sample in window {
        let bar_len = if max > 0.0 {
            ((sample.value / max) * 40.0).round() as usize
        } else {
            0
        };
        println!(
            "   {} {}{}{} {:.1} mm",
            sample.timestamp.format("%Y-%m-%d"),
            p.accent,
            "█".repeat(bar_len),
            p.reset,
            sample.value
        );
    }
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Renders the full dashboard for one acquisition cycle.
///
/// `state` is `None` when the feed produced zero valid level samples — a
/// valid "no data yet" display state, not an error. `stale` flags a latest
/// observation older than the configured age.
pub fn render_dashboard(
    feed: &NormalizedFeed,
    state: Option<&CurrentState>,
    stale: bool,
    cfg: &DashboardConfig,
) {
    let p = palette(cfg.theme);

    println!("{}", BANNER);
    println!("{}🌊 {}{}", p.bold, STATION.name, p.reset);
    match state {
        Some(s) => println!(
            "   Updated {} | Source: FEWS-IDEAM ({})",
            s.timestamp.format("%Y-%m-%d %H:%M"),
            feed.level.source.label()
        ),
        None => println!("   Source: FEWS-IDEAM ({})", feed.level.source.label()),
    }
    if stale {
        println!(
            "   {}⚠ latest observation is older than {:.0} h — data may be outdated{}",
            p.warn, cfg.stale_after_hours, p.reset
        );
    }
    println!("{}", BANNER);

    let Some(state) = state else {
        println!();
        println!("   {}No data yet — the feed returned no valid samples.{}", p.dim, p.reset);
        println!("   {}Re-run to refresh.{}", p.dim, p.reset);
        return;
    };

    // Indicator cards
    let ac = alert_color(&p, state.alert);
    let tc = trend_color(&p, state.trend);
    println!();
    println!(
        "   Level (m)      Velocity (m/h)   Trend            State"
    );
    println!(
        "   {}{:<12.2}{}   {:<14}   {}{} {:<10}{}   {}{} {}{}",
        p.bold,
        state.level_m,
        p.reset,
        format_velocity(state.vel_m_h),
        tc,
        trend_glyph(state.trend),
        state.trend,
        p.reset,
        ac,
        alert_glyph(state.alert),
        state.alert,
        p.reset,
    );

    // Level chart with alert reference lines
    println!();
    println!("{}📈 River level{}", p.bold, p.reset);
    let levels: Vec<f64> = feed.level.samples.iter().map(|s| s.level_m).collect();
    draw_chart(
        &p,
        &levels,
        &[
            (ALERT_RED_M, "red alert", p.danger),
            (ALERT_ORANGE_M, "orange alert", p.warn),
        ],
        "m",
    );

    // Velocity chart with a zero reference line
    println!();
    println!("{}⚡ Rate of change{}", p.bold, p.reset);
    let velocities: Vec<f64> = feed
        .level
        .samples
        .iter()
        .filter_map(|s| s.vel_m_h)
        .collect();
    draw_chart(&p, &velocities, &[(0.0, "stable", p.dim)], "m/h");

    // Precipitation bars
    println!();
    println!("{}🌧 Daily precipitation{}", p.bold, p.reset);
    draw_precip_bars(&p, feed);
    println!();
}

/// Renders a fetch or parse failure as a visible error state.
pub fn render_error(err: &FewsError, cfg: &DashboardConfig) {
    let p = palette(cfg.theme);
    println!("{}", BANNER);
    println!("{}🌊 {}{}", p.bold, STATION.name, p.reset);
    println!("{}", BANNER);
    println!();
    println!("   {}✗ Could not refresh: {}{}", p.danger, err, p.reset);
    println!("   {}The last attempt was not retried; re-run to try again.{}", p.dim, p.reset);
    println!();
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_to_row_maps_extremes_to_frame_edges() {
        assert_eq!(scale_to_row(10.0, 0.0, 10.0, 10), 0, "max lands on top row");
        assert_eq!(scale_to_row(0.0, 0.0, 10.0, 10), 9, "min lands on bottom row");
    }

    #[test]
    fn test_scale_to_row_handles_flat_series() {
        // A constant series has max == min; the point sits mid-frame
        // instead of dividing by zero.
        assert_eq!(scale_to_row(5.0, 5.0, 5.0, 10), 5);
    }

    #[test]
    fn test_tail_keeps_only_the_most_recent_window() {
        let values: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let window = tail(&values, 64);
        assert_eq!(window.len(), 64);
        assert_eq!(window[0], 36.0);
        assert_eq!(window[63], 99.0);
    }

    #[test]
    fn test_tail_of_short_series_is_the_whole_series() {
        let values = [1.0, 2.0];
        assert_eq!(tail(&values, 64), &values);
    }

    #[test]
    fn test_format_velocity_signs_and_undefined() {
        assert_eq!(format_velocity(Some(0.02)), "+0.020");
        assert_eq!(format_velocity(Some(-0.01)), "-0.010");
        assert_eq!(format_velocity(None), "—");
    }
}
