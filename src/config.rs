//! Client configuration baked in at build time.
//!
//! A WASM bundle has no process environment, so values come from
//! compile-time environment variables:
//!
//! - `GATEKEEPER_API_URL`: resource server base URL (default
//!   `http://localhost:8080`)
//! - `GATEKEEPER_CLEAR_SESSION_ON_AUTH_FAILURE`: `true` (default) or `false`
//! - `GATEKEEPER_REDIRECT_ON_TRANSIENT_FAILURE`: `false` (default) or `true`
//! - `GATEKEEPER_LOG_LEVEL`: `error`, `warn`, `info` (default), `debug`, `trace`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be `true` or `false`, got {value:?}")]
    InvalidBool { var: &'static str, value: String },
    #[error("{var} is not a log level: {value:?}")]
    InvalidLogLevel { var: &'static str, value: String },
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

/// How views react to a failed fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FailurePolicy {
    /// Clear the stored session before redirecting on an authentication
    /// failure. When `false` the stale token stays until explicit logout.
    pub clear_session_on_auth_failure: bool,
    /// Treat transient failures like authentication failures (redirect to
    /// login) instead of showing an error in place.
    pub redirect_on_transient_failure: bool,
}

impl Default for FailurePolicy {
    fn default() -> Self {
        Self { clear_session_on_auth_failure: true, redirect_on_transient_failure: false }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub failure_policy: FailurePolicy,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_owned(),
            failure_policy: FailurePolicy::default(),
            log_level: log::Level::Info,
        }
    }
}

impl ClientConfig {
    /// Build config from compile-time environment. Each missing or invalid
    /// value falls back to its own default; the others are kept.
    pub fn from_build_env() -> Self {
        let raw = RawConfig {
            api_url: option_env!("GATEKEEPER_API_URL"),
            clear_session_on_auth_failure: option_env!("GATEKEEPER_CLEAR_SESSION_ON_AUTH_FAILURE"),
            redirect_on_transient_failure: option_env!("GATEKEEPER_REDIRECT_ON_TRANSIENT_FAILURE"),
            log_level: option_env!("GATEKEEPER_LOG_LEVEL"),
        };
        let (config, errors) = Self::parse_lenient(&raw);
        for e in errors {
            log::warn!("invalid build configuration ({e}); using its default");
        }
        config
    }

    /// Strict parse of raw values. `None` means unset.
    ///
    /// # Errors
    ///
    /// Returns the first invalid value.
    pub fn parse(raw: &RawConfig<'_>) -> Result<Self, ConfigError> {
        let (config, errors) = Self::parse_lenient(raw);
        match errors.into_iter().next() {
            Some(e) => Err(e),
            None => Ok(config),
        }
    }

    /// Parse every value independently, substituting the default for each
    /// invalid one. Returns the config and the errors that were replaced.
    pub fn parse_lenient(raw: &RawConfig<'_>) -> (Self, Vec<ConfigError>) {
        let defaults = Self::default();
        let mut errors = Vec::new();
        let api_base_url = or_default(parse_url(raw.api_url), defaults.api_base_url, &mut errors);
        let clear_session_on_auth_failure = or_default(
            parse_bool("GATEKEEPER_CLEAR_SESSION_ON_AUTH_FAILURE", raw.clear_session_on_auth_failure),
            defaults.failure_policy.clear_session_on_auth_failure,
            &mut errors,
        );
        let redirect_on_transient_failure = or_default(
            parse_bool("GATEKEEPER_REDIRECT_ON_TRANSIENT_FAILURE", raw.redirect_on_transient_failure),
            defaults.failure_policy.redirect_on_transient_failure,
            &mut errors,
        );
        let log_level = or_default(parse_level(raw.log_level), defaults.log_level, &mut errors);
        let config = Self {
            api_base_url,
            failure_policy: FailurePolicy { clear_session_on_auth_failure, redirect_on_transient_failure },
            log_level,
        };
        (config, errors)
    }
}

/// Unparsed configuration values.
#[derive(Clone, Copy, Debug, Default)]
pub struct RawConfig<'a> {
    pub api_url: Option<&'a str>,
    pub clear_session_on_auth_failure: Option<&'a str>,
    pub redirect_on_transient_failure: Option<&'a str>,
    pub log_level: Option<&'a str>,
}

/// `Ok(None)` when unset, the parsed value when valid.
type Parsed<T> = Result<Option<T>, ConfigError>;

fn or_default<T>(parsed: Parsed<T>, default: T, errors: &mut Vec<ConfigError>) -> T {
    match parsed {
        Ok(Some(value)) => value,
        Ok(None) => default,
        Err(e) => {
            errors.push(e);
            default
        }
    }
}

fn parse_url(value: Option<&str>) -> Parsed<String> {
    let Some(url) = value else { return Ok(None) };
    let url = url.trim().trim_end_matches('/');
    if url.is_empty() {
        return Err(ConfigError::Empty { var: "GATEKEEPER_API_URL" });
    }
    Ok(Some(url.to_owned()))
}

fn parse_bool(var: &'static str, value: Option<&str>) -> Parsed<bool> {
    match value.map(str::trim) {
        None => Ok(None),
        Some("true" | "1") => Ok(Some(true)),
        Some("false" | "0") => Ok(Some(false)),
        Some(other) => Err(ConfigError::InvalidBool { var, value: other.to_owned() }),
    }
}

fn parse_level(value: Option<&str>) -> Parsed<log::Level> {
    let Some(value) = value else { return Ok(None) };
    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidLogLevel { var: "GATEKEEPER_LOG_LEVEL", value: value.to_owned() })
}
