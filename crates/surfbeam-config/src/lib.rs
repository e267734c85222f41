//! Shared configuration for SurfBeam modem tools.
//!
//! TOML profiles layered with environment variables, and translation to a
//! `surfbeam_api::TransportConfig` plus modem base URL. The CLI adds
//! flag-aware overrides on top.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use surfbeam_api::{DEFAULT_MODEM_URI, TlsMode, TransportConfig};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("profile '{name}' not found")]
    ProfileNotFound { name: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named modem profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default)]
    pub insecure: bool,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            insecure: false,
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    10
}

/// A named modem profile.
#[derive(Debug, Deserialize, Serialize)]
pub struct Profile {
    /// Modem base URL (e.g., "http://192.168.100.1").
    #[serde(default = "default_modem")]
    pub modem: String,

    /// Override insecure TLS setting.
    pub insecure: Option<bool>,

    /// Override timeout, in seconds.
    pub timeout: Option<u64>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            modem: default_modem(),
            insecure: None,
            timeout: None,
        }
    }
}

fn default_modem() -> String {
    DEFAULT_MODEM_URI.into()
}

impl Profile {
    /// Parse and validate the modem base URL.
    pub fn modem_url(&self) -> Result<Url, ConfigError> {
        parse_modem_url(&self.modem)
    }

    /// Transport settings for this profile, falling back to `defaults`.
    pub fn to_transport_config(&self, defaults: &Defaults) -> TransportConfig {
        let tls = if self.insecure.unwrap_or(defaults.insecure) {
            TlsMode::DangerAcceptInvalid
        } else {
            TlsMode::System
        };
        let timeout = Duration::from_secs(self.timeout.unwrap_or(defaults.timeout));

        TransportConfig::default().with_tls(tls).with_timeout(timeout)
    }
}

/// Parse a user-supplied modem URL, requiring an http(s) scheme and a host.
pub fn parse_modem_url(raw: &str) -> Result<Url, ConfigError> {
    let url: Url = raw.parse().map_err(|_| ConfigError::Validation {
        field: "modem".into(),
        reason: format!("invalid URL: {raw}"),
    })?;

    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(ConfigError::Validation {
            field: "modem".into(),
            reason: format!("expected an http(s) URL with a host, got: {raw}"),
        });
    }

    Ok(url)
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "surfbeam", "surfbeam").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("surfbeam");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

fn file_figment(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
}

/// Load the full Config from `path` + environment.
///
/// Environment variables use the `SURFBEAM_` prefix with `__` between
/// nesting levels, e.g. `SURFBEAM_DEFAULTS__TIMEOUT=5`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = file_figment(path).merge(Env::prefixed("SURFBEAM_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load only what the canonical config file holds, ignoring the environment.
pub fn load_config_file() -> Result<Config, ConfigError> {
    load_config_file_from(&config_path())
}

/// Load only what `path` holds. Use this before rewriting the file so
/// environment overrides are never persisted. A missing file is the
/// default config; a malformed one is an error.
pub fn load_config_file_from(path: &Path) -> Result<Config, ConfigError> {
    let config: Config = file_figment(path).extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

/// Serialize config to TOML and write it to `path`.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Profile resolution ──────────────────────────────────────────────

/// Name of the profile to use: explicit choice, then config default, then "default".
pub fn active_profile_name(requested: Option<&str>, config: &Config) -> String {
    requested
        .map(String::from)
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Look up a profile, falling back to the built-in default profile when the
/// name is "default" and nothing is configured under it.
pub fn resolve_profile(config: &Config, name: &str) -> Result<Profile, ConfigError> {
    match config.profiles.get(name) {
        Some(profile) => Ok(Profile {
            modem: profile.modem.clone(),
            insecure: profile.insecure,
            timeout: profile.timeout,
        }),
        None if name == "default" => Ok(Profile::default()),
        None => Err(ConfigError::ProfileNotFound { name: name.into() }),
    }
}
