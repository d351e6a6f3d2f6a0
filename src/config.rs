use std::str::FromStr;

use crate::error::ConfigError;
use crate::services::airport_directory::DEFAULT_AIRPORTS_URL;
use crate::services::flight_analyzer::DEFAULT_MISSED_LANDING_MINUTES;

/// Program configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// JSONL file with one flight per line
    pub input_path: String,
    /// Maximum number of flights to read, 0 for all
    pub flight_limit: usize,
    /// How many of the longest flights to report
    pub longest_flights_count: usize,
    /// Minutes late before a landing counts as missed
    pub missed_landing_threshold_minutes: i64,
    /// TOML registration table; the built-in sample directory is used when unset
    pub airline_table_path: Option<String>,
    /// Airport dataset location
    pub airports_url: String,
    /// Whether to look up airport details for the report
    pub lookup_airports: bool,
    /// Debug-level logging
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: "var/input.jsonl".to_string(),
            flight_limit: 0,
            longest_flights_count: 3,
            missed_landing_threshold_minutes: DEFAULT_MISSED_LANDING_MINUTES,
            airline_table_path: None,
            airports_url: DEFAULT_AIRPORTS_URL.to_string(),
            lookup_airports: true,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// Build from the environment
    ///
    /// Unset variables fall back to their defaults; a variable that is set
    /// but cannot be parsed is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let default = Self::default();
        Ok(Self {
            input_path: lookup("FLIGHTS_INPUT_PATH").unwrap_or(default.input_path),
            flight_limit: parse_var(&lookup, "FLIGHTS_LIMIT", "usize")?
                .unwrap_or(default.flight_limit),
            longest_flights_count: parse_var(&lookup, "LONGEST_FLIGHTS_COUNT", "usize")?
                .unwrap_or(default.longest_flights_count),
            missed_landing_threshold_minutes: parse_var(
                &lookup,
                "MISSED_LANDING_THRESHOLD_MINUTES",
                "i64",
            )?
            .unwrap_or(default.missed_landing_threshold_minutes),
            airline_table_path: lookup("AIRLINE_TABLE_PATH")
                .filter(|v| !v.is_empty())
                .or(default.airline_table_path),
            airports_url: lookup("AIRPORTS_URL").unwrap_or(default.airports_url),
            lookup_airports: parse_var(&lookup, "LOOKUP_AIRPORTS", "bool")?
                .unwrap_or(default.lookup_airports),
            verbose_logging: parse_var(&lookup, "VERBOSE_LOGGING", "bool")?
                .unwrap_or(default.verbose_logging),
        })
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var_name: &str,
    expected_type: &str,
) -> Result<Option<T>, ConfigError> {
    match lookup(var_name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.input_path, "var/input.jsonl");
        assert_eq!(config.flight_limit, 0);
        assert_eq!(config.longest_flights_count, 3);
        assert_eq!(config.missed_landing_threshold_minutes, 5);
        assert!(config.airline_table_path.is_none());
        assert!(config.lookup_airports);
    }

    #[test]
    fn test_values_from_environment() {
        let config = config_from(&[
            ("FLIGHTS_INPUT_PATH", "/data/flights.jsonl"),
            ("FLIGHTS_LIMIT", "100"),
            ("MISSED_LANDING_THRESHOLD_MINUTES", "15"),
            ("AIRLINE_TABLE_PATH", "airlines.toml"),
            ("LOOKUP_AIRPORTS", "false"),
        ])
        .unwrap();

        assert_eq!(config.input_path, "/data/flights.jsonl");
        assert_eq!(config.flight_limit, 100);
        assert_eq!(config.missed_landing_threshold_minutes, 15);
        assert_eq!(config.airline_table_path.as_deref(), Some("airlines.toml"));
        assert!(!config.lookup_airports);
    }

    #[test]
    fn test_unparsable_value_is_an_error() {
        let err = config_from(&[("FLIGHTS_LIMIT", "many")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::EnvVarParseFailed { ref var_name, .. } if var_name == "FLIGHTS_LIMIT"
        ));
    }
}
