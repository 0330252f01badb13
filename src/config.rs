//! Environment-based configuration for the dashboard.

use std::env;
use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Configuration errors; each names the offending variable.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var}: '{value}' is not a positive number")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var}: expected 'lat,lon' in degrees, got '{value}'")]
    InvalidCoordinates { var: &'static str, value: String },

    #[error("{var}: '{value}' is not a YYYY-MM-DD date")]
    InvalidDate {
        var: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Initial map viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub center_lat: f64,
    pub center_lon: f64,
    /// Longitude span shown on first render, in degrees.
    pub span_deg: f64,
}

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// PDF offered by the "Download manual" button
    pub manual_path: PathBuf,

    /// Agency logo shown in the sidebar when the file exists
    pub logo_path: PathBuf,

    /// Initial window size in logical points
    pub window_size: [f32; 2],

    pub map: MapConfig,

    /// Initial start of the sidebar date range
    pub default_start_date: NaiveDate,

    /// Credit line in the sidebar
    pub developer: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup; unset keys use defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let width = positive(&lookup, "DASHBOARD_WINDOW_WIDTH", 1400.0)?;
        let height = positive(&lookup, "DASHBOARD_WINDOW_HEIGHT", 900.0)?;

        let (center_lat, center_lon) = match lookup("DASHBOARD_MAP_CENTER") {
            Some(value) => parse_center(&value).ok_or(ConfigError::InvalidCoordinates {
                var: "DASHBOARD_MAP_CENTER",
                value,
            })?,
            None => (23.5, -102.0),
        };

        let default_start_date = match lookup("DASHBOARD_START_DATE") {
            Some(value) => match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
                Ok(date) => date,
                Err(source) => {
                    return Err(ConfigError::InvalidDate {
                        var: "DASHBOARD_START_DATE",
                        value,
                        source,
                    });
                }
            },
            None => NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default(),
        };

        Ok(Self {
            manual_path: lookup("DASHBOARD_MANUAL_PATH")
                .unwrap_or_else(|| "manual.pdf".to_string())
                .into(),
            logo_path: lookup("DASHBOARD_LOGO_PATH")
                .unwrap_or_else(|| "logo_sener.jpg".to_string())
                .into(),
            window_size: [width as f32, height as f32],
            map: MapConfig {
                center_lat,
                center_lon,
                span_deg: positive(&lookup, "DASHBOARD_MAP_SPAN_DEG", 12.0)?,
            },
            default_start_date,
            developer: lookup("DASHBOARD_DEVELOPER")
                .unwrap_or_else(|| "Exploration Plans Directorate".to_string()),
        })
    }
}

fn positive(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: f64,
) -> Result<f64, ConfigError> {
    let Some(value) = lookup(var) else {
        return Ok(default);
    };
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(ConfigError::InvalidNumber { var, value }),
    }
}

fn parse_center(value: &str) -> Option<(f64, f64)> {
    let (lat, lon) = value.split_once(',')?;
    let lat: f64 = lat.trim().parse().ok()?;
    let lon: f64 = lon.trim().parse().ok()?;
    ((-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)).then_some((lat, lon))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = from_pairs(&[]).unwrap();
        assert_eq!(cfg.manual_path, PathBuf::from("manual.pdf"));
        assert_eq!(cfg.window_size, [1400.0, 900.0]);
        assert_eq!(cfg.map.center_lat, 23.5);
        assert_eq!(cfg.map.center_lon, -102.0);
        assert_eq!(cfg.map.span_deg, 12.0);
        assert_eq!(cfg.default_start_date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = from_pairs(&[
            ("DASHBOARD_MANUAL_PATH", "/srv/docs/guide.pdf"),
            ("DASHBOARD_WINDOW_WIDTH", "1920"),
            ("DASHBOARD_MAP_CENTER", " 19.4 , -99.1 "),
            ("DASHBOARD_START_DATE", "2022-06-30"),
        ])
        .unwrap();
        assert_eq!(cfg.manual_path, PathBuf::from("/srv/docs/guide.pdf"));
        assert_eq!(cfg.window_size, [1920.0, 900.0]);
        assert_eq!((cfg.map.center_lat, cfg.map.center_lon), (19.4, -99.1));
        assert_eq!(cfg.default_start_date, NaiveDate::from_ymd_opt(2022, 6, 30).unwrap());
    }

    #[test]
    fn bad_values_name_the_variable() {
        let err = from_pairs(&[("DASHBOARD_WINDOW_HEIGHT", "-5")]).unwrap_err();
        assert!(err.to_string().starts_with("DASHBOARD_WINDOW_HEIGHT"));

        let err = from_pairs(&[("DASHBOARD_MAP_CENTER", "95,10")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCoordinates { .. }));

        let err = from_pairs(&[("DASHBOARD_START_DATE", "30/06/2022")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDate { .. }));
    }
}
