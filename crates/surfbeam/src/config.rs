//! CLI configuration: a thin wrapper around `surfbeam_config` shared types.
//!
//! Re-exports the shared types and adds resolution that respects
//! `GlobalOpts` flag overrides (--modem, --timeout, --insecure).

use std::time::Duration;

use clap::ValueEnum;
use surfbeam_api::{ModemClient, TlsMode, TransportConfig};
use url::Url;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use surfbeam_config::{
    Config, Defaults, Profile, active_profile_name, config_path, load_config, load_config_file,
    load_config_or_default, save_config,
};

/// Everything needed to talk to one modem.
#[derive(Debug, Clone)]
pub struct ModemTarget {
    pub url: Url,
    pub transport: TransportConfig,
}

impl ModemTarget {
    pub fn client(&self) -> Result<ModemClient, CliError> {
        ModemClient::new(self.url.clone(), &self.transport)
            .map_err(|e| CliError::from_api(e, self.url.as_str()))
    }
}

/// Fill `--output` and `--color` from `[defaults]` when neither the flag
/// nor its env var was given.
pub fn apply_defaults(global: &mut GlobalOpts, defaults: &Defaults) -> Result<(), CliError> {
    if global.output.is_none() {
        let format = OutputFormat::from_str(&defaults.output, true).map_err(|_| {
            CliError::Validation {
                field: "defaults.output".into(),
                reason: format!("unknown output format '{}'", defaults.output),
            }
        })?;
        global.output = Some(format);
    }
    if global.color.is_none() {
        let mode = ColorMode::from_str(&defaults.color, true).map_err(|_| CliError::Validation {
            field: "defaults.color".into(),
            reason: format!("unknown color mode '{}'", defaults.color),
        })?;
        global.color = Some(mode);
    }
    Ok(())
}

/// Translate the active profile + global flags into a `ModemTarget`.
///
/// Precedence: flag (or its env var) > profile > config defaults.
pub fn resolve_target(global: &GlobalOpts, config: &Config) -> Result<ModemTarget, CliError> {
    let profile_name = active_profile_name(global.profile.as_deref(), config);

    let profile = match surfbeam_config::resolve_profile(config, &profile_name) {
        Ok(profile) => profile,
        Err(surfbeam_config::ConfigError::ProfileNotFound { name }) => {
            let mut names: Vec<&str> = config.profiles.keys().map(String::as_str).collect();
            names.sort_unstable();
            return Err(CliError::ProfileNotFound {
                name,
                available: if names.is_empty() {
                    "(none)".into()
                } else {
                    names.join(", ")
                },
            });
        }
        Err(e) => return Err(e.into()),
    };

    // 1. Modem URL (flag > env > profile)
    let url = match global.modem.as_deref() {
        Some(raw) => surfbeam_config::parse_modem_url(raw)?,
        None => profile.modem_url()?,
    };

    // 2. Transport (profile, then flag overrides)
    let mut transport = profile.to_transport_config(&config.defaults);
    if global.insecure {
        transport = transport.with_tls(TlsMode::DangerAcceptInvalid);
    }
    if let Some(secs) = global.timeout {
        if secs == 0 {
            return Err(CliError::Validation {
                field: "timeout".into(),
                reason: "must be at least 1 second".into(),
            });
        }
        transport = transport.with_timeout(Duration::from_secs(secs));
    }

    tracing::debug!(profile = %profile_name, url = %url, timeout = ?transport.timeout, "resolved modem target");

    Ok(ModemTarget { url, transport })
}
