use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::onboarding::sequencer::TimingProfile;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var} must be true or false, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },
    #[error("Unknown SPLASH_PROFILE {0:?} (expected \"staged\" or \"classic\")")]
    UnknownProfile(String),
    #[error("Splash must complete after the icon reveal ({complete_ms}ms <= {reveal_ms}ms)")]
    CompleteBeforeReveal { reveal_ms: u64, complete_ms: u64 },
    #[error("SPLASH_COMPLETE_MS must be greater than zero")]
    ZeroCompletion,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub timing: TimingProfile,
    pub register_service_worker: bool,
    pub static_dir: PathBuf,
    pub sentry_dsn: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            timing: TimingProfile::staged(),
            register_service_worker: true,
            static_dir: PathBuf::from("static"),
            sentry_dsn: None,
        }
    }
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, falling back
    /// to the defaults for anything unset or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let environment = get("ENVIRONMENT").unwrap_or(defaults.environment);
        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidNumber {
                var: "PORT",
                value: raw,
            })?,
            None => match environment.as_str() {
                "staging" => 3100,
                _ => defaults.port,
            },
        };

        let mut timing = match get("SPLASH_PROFILE").as_deref() {
            None | Some("staged") => TimingProfile::staged(),
            Some("classic") => TimingProfile::classic(),
            Some(other) => return Err(ConfigError::UnknownProfile(other.to_string())),
        };
        if let Some(raw) = get("SPLASH_ICON_REVEAL_MS") {
            timing.icon_reveal = if raw == "off" || raw == "0" {
                None
            } else {
                Some(parse_millis("SPLASH_ICON_REVEAL_MS", raw)?)
            };
        }
        if let Some(raw) = get("SPLASH_COMPLETE_MS") {
            timing.complete_after = parse_millis("SPLASH_COMPLETE_MS", raw)?;
        }
        if let Some(raw) = get("MENU_ENTRANCE_DELAY_MS") {
            timing.menu_entrance_delay = parse_millis("MENU_ENTRANCE_DELAY_MS", raw)?;
        }
        validate_timing(&timing)?;

        let register_service_worker = match get("REGISTER_SERVICE_WORKER") {
            Some(raw) => parse_flag("REGISTER_SERVICE_WORKER", raw)?,
            None => defaults.register_service_worker,
        };

        Ok(Self {
            environment,
            host: get("HOST").unwrap_or(defaults.host),
            port,
            timing,
            register_service_worker,
            static_dir: get("STATIC_DIR").map(PathBuf::from).unwrap_or(defaults.static_dir),
            sentry_dsn: get("SENTRY_DSN"),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_production(&self) -> bool {
        self.environment != "development"
    }
}

fn parse_millis(var: &'static str, raw: String) -> Result<Duration, ConfigError> {
    raw.parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::InvalidNumber { var, value: raw })
}

fn parse_flag(var: &'static str, raw: String) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { var, value: raw }),
    }
}

fn validate_timing(timing: &TimingProfile) -> Result<(), ConfigError> {
    if timing.complete_after.is_zero() {
        return Err(ConfigError::ZeroCompletion);
    }
    if let Some(reveal) = timing.icon_reveal {
        if timing.complete_after <= reveal {
            return Err(ConfigError::CompleteBeforeReveal {
                reveal_ms: reveal.as_millis() as u64,
                complete_ms: timing.complete_after.as_millis() as u64,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_staged_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.timing, TimingProfile::staged());
        assert!(config.register_service_worker);
        assert!(config.sentry_dsn.is_none());
        assert!(!config.is_production());
    }

    #[test]
    fn staging_moves_default_port() {
        let config = load(&[("ENVIRONMENT", "staging")]).unwrap();
        assert_eq!(config.port, 3100);
        assert!(config.is_production());

        let config = load(&[("ENVIRONMENT", "staging"), ("PORT", "8080")]).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn classic_profile_with_overrides() {
        let config = load(&[
            ("SPLASH_PROFILE", "classic"),
            ("SPLASH_COMPLETE_MS", "2000"),
            ("MENU_ENTRANCE_DELAY_MS", "0"),
            ("REGISTER_SERVICE_WORKER", "off"),
        ])
        .unwrap();
        assert_eq!(config.timing.icon_reveal, None);
        assert_eq!(config.timing.complete_after, Duration::from_millis(2000));
        assert_eq!(config.timing.menu_entrance_delay, Duration::ZERO);
        assert!(!config.register_service_worker);
    }

    #[test]
    fn reveal_can_be_switched_off() {
        let config = load(&[("SPLASH_ICON_REVEAL_MS", "off")]).unwrap();
        assert_eq!(config.timing.icon_reveal, None);
        assert_eq!(config.timing.complete_after, Duration::from_millis(3000));
    }

    #[test]
    fn rejects_completion_before_reveal() {
        let err = load(&[("SPLASH_ICON_REVEAL_MS", "2000"), ("SPLASH_COMPLETE_MS", "1500")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::CompleteBeforeReveal { reveal_ms: 2000, complete_ms: 1500 }
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            load(&[("PORT", "eighty")]),
            Err(ConfigError::InvalidNumber { var: "PORT", .. })
        ));
        assert!(matches!(
            load(&[("SPLASH_PROFILE", "dramatic")]),
            Err(ConfigError::UnknownProfile(_))
        ));
        assert!(matches!(
            load(&[("REGISTER_SERVICE_WORKER", "maybe")]),
            Err(ConfigError::InvalidFlag { .. })
        ));
        assert_eq!(load(&[("SPLASH_COMPLETE_MS", "0")]).unwrap_err(), ConfigError::ZeroCompletion);
    }
}
