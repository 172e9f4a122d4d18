use crate::server_actors::services::radius_policy::RadiusPolicyConfig;
use colored::Color;
use common::constants::{
    BASE_PORT, DEFAULT_RESTAURANTS_FILE, NORMAL_HOURS_RADIUS_KM, PEAK_HOURS_RADIUS_KM,
    SERVER_IP_ADDRESS,
};
use common::logger::Logger;
use std::env;
use std::fmt::Display;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

/// Server settings, read from the environment with a default for every key.
#[derive(Debug, Clone)]
pub struct Config {
    pub address: SocketAddr,
    pub restaurants_file: PathBuf,
    pub radius: RadiusPolicyConfig,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, e.g. a map in tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let logger = Logger::new("Config", Color::Cyan);
        let load = Loader { lookup, logger };

        let host: IpAddr = load.try_load("SERVER_HOST", SERVER_IP_ADDRESS)?;
        let port: u16 = load.try_load("SERVER_PORT", &BASE_PORT.to_string())?;
        let restaurants_file: PathBuf = load.try_load("RESTAURANTS_FILE", DEFAULT_RESTAURANTS_FILE)?;
        let peak_radius_km =
            load.try_load_radius("PEAK_RADIUS_KM", &PEAK_HOURS_RADIUS_KM.to_string())?;
        let normal_radius_km =
            load.try_load_radius("NORMAL_RADIUS_KM", &NORMAL_HOURS_RADIUS_KM.to_string())?;

        Ok(Self {
            address: SocketAddr::new(host, port),
            restaurants_file,
            radius: RadiusPolicyConfig {
                peak_radius_km,
                normal_radius_km,
                ..RadiusPolicyConfig::default()
            },
        })
    }
}

struct Loader<F: Fn(&str) -> Option<String>> {
    lookup: F,
    logger: Logger,
}

impl<F: Fn(&str) -> Option<String>> Loader<F> {
    fn try_load<T: FromStr>(&self, key: &str, default: &str) -> Result<T, ConfigError>
    where
        T::Err: Display,
    {
        let value = (self.lookup)(key).unwrap_or_else(|| {
            self.logger
                .info(format!("{key} not set, using default: {default}"));
            default.to_string()
        });

        value.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.clone(),
            reason: e.to_string(),
        })
    }

    fn try_load_radius(&self, key: &str, default: &str) -> Result<f64, ConfigError> {
        let radius: f64 = self.try_load(key, default)?;
        if radius.is_finite() && radius > 0.0 {
            Ok(radius)
        } else {
            Err(ConfigError::InvalidValue {
                key: key.to_string(),
                value: radius.to_string(),
                reason: "radius must be a positive number of kilometers".to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load_with(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = load_with(&[]).unwrap();
        assert_eq!(config.address, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.restaurants_file, PathBuf::from("data/restaurants.json"));
        assert_eq!(config.radius, RadiusPolicyConfig::default());
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = load_with(&[
            ("SERVER_HOST", "0.0.0.0"),
            ("SERVER_PORT", "9090"),
            ("RESTAURANTS_FILE", "/srv/restaurants.json"),
            ("PEAK_RADIUS_KM", "2.5"),
            ("NORMAL_RADIUS_KM", "6"),
        ])
        .unwrap();

        assert_eq!(config.address, "0.0.0.0:9090".parse().unwrap());
        assert_eq!(config.restaurants_file, PathBuf::from("/srv/restaurants.json"));
        assert_eq!(config.radius.peak_radius_km, 2.5);
        assert_eq!(config.radius.normal_radius_km, 6.0);
        assert_eq!(
            config.radius.peak_windows,
            RadiusPolicyConfig::default().peak_windows
        );
    }

    #[test]
    fn malformed_port_is_reported() {
        let err = load_with(&[("SERVER_PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "SERVER_PORT"));
    }

    #[test]
    fn non_positive_radius_is_rejected() {
        assert!(load_with(&[("PEAK_RADIUS_KM", "0")]).is_err());
        assert!(load_with(&[("NORMAL_RADIUS_KM", "-1")]).is_err());
        assert!(load_with(&[("NORMAL_RADIUS_KM", "NaN")]).is_err());
    }
}
