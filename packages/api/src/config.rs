use std::fmt;
use std::time::Duration;

use tracing::Level;

use crate::types::Lang;

/// Runtime configuration, read once at startup.
///
/// In the browser there is no process environment, so every lookup misses and
/// the defaults apply.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub default_lang: Lang,
    pub log_level: Level,
    pub latency: SimulatedLatency,
}

/// How long each stand-in call waits before completing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    pub auth: Duration,
    pub generate: Duration,
    pub save: Duration,
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self {
            auth: Duration::from_millis(1500),
            generate: Duration::from_millis(3000),
            save: Duration::from_millis(1500),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_lang: Lang::default(),
            log_level: Level::INFO,
            latency: SimulatedLatency::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLang(String),
    InvalidLogLevel(String),
    InvalidDelay { var: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidLang(v) => {
                write!(f, "APP_DEFAULT_LANG={v:?} is not a supported language (vi, en)")
            }
            ConfigError::InvalidLogLevel(v) => write!(f, "APP_LOG_LEVEL={v:?} is not a log level"),
            ConfigError::InvalidDelay { var, value } => {
                write!(f, "{var}={value:?} is not a number of milliseconds")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = AppConfig::default();

        let default_lang = match non_empty(lookup("APP_DEFAULT_LANG")) {
            Some(code) => code
                .parse::<Lang>()
                .map_err(|_| ConfigError::InvalidLang(code))?,
            None => defaults.default_lang,
        };

        let log_level = match non_empty(lookup("APP_LOG_LEVEL")) {
            Some(level) => level
                .parse::<Level>()
                .map_err(|_| ConfigError::InvalidLogLevel(level))?,
            None => defaults.log_level,
        };

        let latency = SimulatedLatency {
            auth: delay(&lookup, "APP_AUTH_DELAY_MS", defaults.latency.auth)?,
            generate: delay(&lookup, "APP_GENERATE_DELAY_MS", defaults.latency.generate)?,
            save: delay(&lookup, "APP_SAVE_DELAY_MS", defaults.latency.save)?,
        };

        Ok(Self {
            default_lang,
            log_level,
            latency,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn delay(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    fallback: Duration,
) -> Result<Duration, ConfigError> {
    match non_empty(lookup(var)) {
        Some(value) => value
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| ConfigError::InvalidDelay { var, value }),
        None => Ok(fallback),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.default_lang, Lang::Vi);
        assert_eq!(config.latency.generate, Duration::from_millis(3000));
    }

    #[test]
    fn test_default_lang_override_is_case_insensitive() {
        let config = config_from(&[("APP_DEFAULT_LANG", "EN")]).unwrap();
        assert_eq!(config.default_lang, Lang::En);
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = config_from(&[("APP_DEFAULT_LANG", "  "), ("APP_SAVE_DELAY_MS", "")]).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_unsupported_lang_is_rejected() {
        let err = config_from(&[("APP_DEFAULT_LANG", "fr")]).unwrap_err();
        assert_eq!(err, ConfigError::InvalidLang("fr".to_string()));
    }

    #[test]
    fn test_delays_and_log_level() {
        let config = config_from(&[
            ("APP_AUTH_DELAY_MS", "0"),
            ("APP_GENERATE_DELAY_MS", "250"),
            ("APP_LOG_LEVEL", "debug"),
        ])
        .unwrap();
        assert_eq!(config.latency.auth, Duration::ZERO);
        assert_eq!(config.latency.generate, Duration::from_millis(250));
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn test_invalid_delay_names_the_variable() {
        let err = config_from(&[("APP_SAVE_DELAY_MS", "soon")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidDelay {
                var: "APP_SAVE_DELAY_MS",
                value: "soon".to_string()
            }
        );
        assert!(err.to_string().contains("APP_SAVE_DELAY_MS"));
    }
}
