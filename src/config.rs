use std::env;

use dotenvy::dotenv;
use tracing::Level;

use crate::error::ConfigError;

#[derive(Clone, Debug)]
pub struct Config {
    /// `mysql://...` or `sqlite://...` depending on the compiled backend
    pub database_url: String,
    pub max_connections: u32,

    // Logging
    pub log_dir: String,
    pub log_level: Level,
}

impl Config {
    /// Config for a host application that already knows its connection string.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 5,
            log_dir: "logs".to_string(),
            log_level: Level::DEBUG,
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing {
            key: "DATABASE_URL",
        })?;

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid {
                    key: "DB_MAX_CONNECTIONS",
                    value: raw,
                })?,
            None => 5,
        };

        let log_level = match lookup("LOG_LEVEL") {
            Some(raw) => raw.parse::<Level>().map_err(|_| ConfigError::Invalid {
                key: "LOG_LEVEL",
                value: raw,
            })?,
            None => Level::DEBUG,
        };

        Ok(Self {
            database_url,
            max_connections,
            log_dir: lookup("LOG_DIR").unwrap_or_else(|| "logs".to_string()),
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_url_is_set() {
        let config = Config::from_lookup(lookup_in(&[("DATABASE_URL", "sqlite::memory:")]))
            .expect("config");

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.log_dir, "logs");
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn missing_database_url_is_rejected() {
        let err = Config::from_lookup(lookup_in(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing { key: "DATABASE_URL" });
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = Config::from_lookup(lookup_in(&[
            ("DATABASE_URL", "mysql://lms@localhost/lms"),
            ("DB_MAX_CONNECTIONS", "12"),
            ("LOG_DIR", "/var/log/lms"),
            ("LOG_LEVEL", "warn"),
        ]))
        .expect("config");

        assert_eq!(config.max_connections, 12);
        assert_eq!(config.log_dir, "/var/log/lms");
        assert_eq!(config.log_level, Level::WARN);
    }

    #[test]
    fn bad_numbers_and_levels_are_reported() {
        let err = Config::from_lookup(lookup_in(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("DB_MAX_CONNECTIONS", "0"),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                value: "0".to_string()
            }
        );

        let err = Config::from_lookup(lookup_in(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("LOG_LEVEL", "loud"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "LOG_LEVEL", .. }));
    }
}
