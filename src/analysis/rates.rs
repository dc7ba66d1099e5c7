/// Rate-of-change derivation for the level series.
///
/// Turns a plain, sorted sample sequence into the enriched level series the
/// classifier and dashboard consume: per-sample level delta, elapsed hours,
/// and velocity in meters per hour.
///
/// "Undefined" is `None` throughout — the first sample has nothing to
/// difference against, and zero elapsed time (duplicate timestamps) leaves
/// the velocity undefined rather than infinite or a crash.

use chrono::NaiveDateTime;

use crate::model::{LevelSample, LevelSeries, LevelSource, Sample};

/// Elapsed time from `earlier` to `later`, in fractional hours.
///
/// Negative when the arguments are reversed; zero for identical instants.
pub fn hours_between(earlier: NaiveDateTime, later: NaiveDateTime) -> f64 {
    later.signed_duration_since(earlier).num_seconds() as f64 / 3600.0
}

/// Derives the enriched level series from normalized samples.
///
/// For each index i > 0:
///   delta_m[i]  = level[i] - level[i-1]
///   delta_h[i]  = hours between sample i-1 and sample i
///   vel_m_h[i]  = delta_m[i] / delta_h[i], undefined when delta_h[i] == 0
/// Index 0 carries all three as undefined.
///
/// Expects input already sorted ascending (the normalizer's invariant);
/// the derivation itself never reorders.
pub fn derive_level_series(samples: Vec<Sample>, source: LevelSource) -> LevelSeries {
    let mut enriched = Vec::with_capacity(samples.len());

    for (i, sample) in samples.iter().enumerate() {
        let (delta_m, delta_h, vel_m_h) = match i.checked_sub(1).map(|p| &samples[p]) {
            None => (None, None, None),
            Some(prev) => {
                let delta_m = sample.value - prev.value;
                let delta_h = hours_between(prev.timestamp, sample.timestamp);
                let vel_m_h = if delta_h == 0.0 {
                    None
                } else {
                    Some(delta_m / delta_h)
                };
                (Some(delta_m), Some(delta_h), vel_m_h)
            }
        };

        enriched.push(LevelSample {
            timestamp: sample.timestamp,
            level_m: sample.value,
            delta_m,
            delta_h,
            vel_m_h,
        });
    }

    LevelSeries {
        source,
        samples: enriched,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn sample(hour: u32, minute: u32, value: f64) -> Sample {
        Sample {
            timestamp: at(hour, minute),
            value,
        }
    }

    #[test]
    fn test_hours_between_whole_and_fractional() {
        assert_eq!(hours_between(at(6, 0), at(7, 0)), 1.0);
        assert_eq!(hours_between(at(6, 0), at(6, 30)), 0.5);
        assert_eq!(hours_between(at(6, 0), at(6, 0)), 0.0);
        assert_eq!(hours_between(at(7, 0), at(6, 0)), -1.0);
    }

    #[test]
    fn test_first_sample_has_all_derived_fields_undefined() {
        let series = derive_level_series(vec![sample(6, 0, 5.0)], LevelSource::Observed);
        let first = &series.samples[0];
        assert_eq!(first.delta_m, None);
        assert_eq!(first.delta_h, None);
        assert_eq!(first.vel_m_h, None);
    }

    #[test]
    fn test_one_hour_rise_of_30cm_is_0_3_m_per_h() {
        let series = derive_level_series(
            vec![sample(6, 0, 5.0), sample(7, 0, 5.3)],
            LevelSource::Observed,
        );
        let second = &series.samples[1];
        assert!((second.delta_m.unwrap() - 0.3).abs() < 1e-9);
        assert_eq!(second.delta_h, Some(1.0));
        let vel = second.vel_m_h.expect("velocity should be defined");
        assert!((vel - 0.3).abs() < 1e-9, "expected ~0.3 m/h, got {}", vel);
    }

    #[test]
    fn test_velocity_matches_delta_ratio_at_every_index() {
        let series = derive_level_series(
            vec![
                sample(0, 0, 5.00),
                sample(1, 30, 5.12),
                sample(2, 0, 5.07),
                sample(8, 45, 5.90),
            ],
            LevelSource::Observed,
        );
        for s in series.samples.iter().skip(1) {
            let (dm, dh) = (s.delta_m.unwrap(), s.delta_h.unwrap());
            assert_eq!(s.vel_m_h, Some(dm / dh));
        }
    }

    #[test]
    fn test_falling_level_gives_negative_velocity() {
        let series = derive_level_series(
            vec![sample(6, 0, 5.3), sample(7, 0, 5.0)],
            LevelSource::Observed,
        );
        let vel = series.samples[1].vel_m_h.unwrap();
        assert!(vel < 0.0, "expected negative velocity, got {}", vel);
    }

    #[test]
    fn test_duplicate_timestamp_leaves_velocity_undefined() {
        // The feed does not deduplicate; two records for the same instant
        // yield zero elapsed time and therefore an undefined rate.
        let series = derive_level_series(
            vec![sample(6, 0, 5.0), sample(6, 0, 5.1)],
            LevelSource::Observed,
        );
        let second = &series.samples[1];
        assert_eq!(second.delta_h, Some(0.0));
        assert!((second.delta_m.unwrap() - 0.1).abs() < 1e-9);
        assert_eq!(second.vel_m_h, None, "zero elapsed time must not divide");
    }

    #[test]
    fn test_empty_input_yields_empty_series() {
        let series = derive_level_series(vec![], LevelSource::SensorDerived);
        assert!(series.is_empty());
        assert_eq!(series.source, LevelSource::SensorDerived);
    }

    #[test]
    fn test_source_tag_is_carried_through() {
        let series = derive_level_series(vec![sample(6, 0, 5.0)], LevelSource::SensorDerived);
        assert_eq!(series.source, LevelSource::SensorDerived);
        assert_eq!(series.source.label(), "Sensor-derived");
    }
}
