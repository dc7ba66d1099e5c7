///station metadata + the series URL builder, the "valid format" test lives here
/// Station metadata for the Río Sinú monitoring service.
///
/// Defines the single FEWS gauge station this service monitors, along with
/// its metadata and the series endpoint URL. This is the single source of
/// truth for the station code — other modules should reference the station
/// from here rather than hardcoding it.
///
/// Alert thresholds do not live here: they are process-wide constants in
/// `alert::thresholds`, since the service is single-station by design.

// ---------------------------------------------------------------------------
// FEWS endpoint
// ---------------------------------------------------------------------------

const FEWS_BASE_URL: &str = "https://fews.ideam.gov.co";

// ---------------------------------------------------------------------------
// Station metadata
// ---------------------------------------------------------------------------

/// Metadata for a single FEWS gauge station.
pub struct Station {
    /// 10-digit IDEAM station code.
    pub station_code: &'static str,
    /// Station name as displayed on the dashboard.
    pub name: &'static str,
    /// Human-readable description of the station's role.
    pub description: &'static str,
    /// WGS84 latitude.
    pub latitude: f64,
    /// WGS84 longitude.
    pub longitude: f64,
}

/// The monitored gauge station.
///
/// Sources:
///   - Station code: IDEAM FEWS visor (fews.ideam.gov.co)
///   - Coordinates: IDEAM station catalog
pub static STATION: Station = Station {
    station_code: "0013067020",
    name: "Río Sinú at Montería",
    description: "Primary urban reference gauge for the Sinú river at \
                  Montería. Reports observed level (Hobs), sensor-derived \
                  level (Hsen), and daily precipitation (Pobs).",
    latitude: 8.7479,
    longitude: -75.8814,
};

/// Full URL of the station's series document on the FEWS visor.
///
/// Fixed endpoint, no query parameters, no auth.
pub fn series_url(station: &Station) -> String {
    format!(
        "{}/visorfews/data/series/jsonH/{}.json",
        FEWS_BASE_URL, station.station_code
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_code_is_valid_ideam_format() {
        // IDEAM station codes are 10-digit numeric strings. If the code
        // violates this, the visor returns a 404 for the series document.
        assert_eq!(
            STATION.station_code.len(),
            10,
            "station code for '{}' should be 10 digits, got '{}'",
            STATION.name,
            STATION.station_code
        );
        assert!(
            STATION.station_code.chars().all(|c| c.is_ascii_digit()),
            "station code for '{}' should be numeric, got '{}'",
            STATION.name,
            STATION.station_code
        );
    }

    #[test]
    fn test_series_url_points_at_the_station_document() {
        let url = series_url(&STATION);
        assert!(url.starts_with("https://fews.ideam.gov.co/"));
        assert!(
            url.ends_with(&format!("{}.json", STATION.station_code)),
            "series URL should end with '<station_code>.json', got '{}'",
            url
        );
        assert!(
            !url.contains('?'),
            "series URL takes no query parameters, got '{}'",
            url
        );
    }

    #[test]
    fn test_station_is_in_the_sinu_basin() {
        // Montería sits near 8.75 N, 75.88 W. A swapped or sign-flipped
        // coordinate would place the gauge on the wrong continent.
        assert!(STATION.latitude > 7.0 && STATION.latitude < 10.0);
        assert!(STATION.longitude > -77.0 && STATION.longitude < -74.0);
    }
}
