//! CLI error types with miette diagnostics.
//!
//! Maps `surfbeam_api` and `surfbeam_config` errors into user-facing errors
//! with actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use surfbeam_api::DecodeError;
use surfbeam_config::ConfigError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const HTTP_STATUS: i32 = 6;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
    pub const DECODE: i32 = 9;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not connect to modem at {url}")]
    #[diagnostic(
        code(surfbeam::connection_failed),
        help(
            "Check that this machine is on the modem's LAN side and the modem is powered.\n\
             URL: {url}\n\
             Override the address with --modem or SURFBEAM_MODEM."
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Request to {url} timed out")]
    #[diagnostic(
        code(surfbeam::timeout),
        help("Increase the timeout with --timeout or check the modem's responsiveness.")
    )]
    Timeout { url: String },

    #[error("Response from {url} was cut short")]
    #[diagnostic(
        code(surfbeam::response_body),
        help("The modem accepted the request but did not finish sending the page; try again.")
    )]
    ResponseBody {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Modem at {url} returned HTTP {status}")]
    #[diagnostic(
        code(surfbeam::http_status),
        help("The modem's web interface may be restarting; try again shortly.")
    )]
    HttpStatus { url: String, status: u16 },

    // ── Decoding ─────────────────────────────────────────────────────

    #[error("Could not decode the modem status page")]
    #[diagnostic(
        code(surfbeam::decode),
        help(
            "The firmware may use a different page layout.\n\
             Capture the page with `surfbeam raw > status.txt` and inspect field {index}."
        )
    )]
    Decode {
        index: usize,
        #[source]
        source: DecodeError,
    },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(surfbeam::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(surfbeam::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: surfbeam config init --name {name} --url <URL>"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Profile '{name}' already exists")]
    #[diagnostic(
        code(surfbeam::profile_exists),
        help("Use --force to replace it.")
    )]
    ProfileExists { name: String },

    #[error(transparent)]
    #[diagnostic(code(surfbeam::config))]
    Config(Box<figment::Error>),

    // ── IO / Serialization ────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to serialize config: {message}")]
    #[diagnostic(code(surfbeam::serialize))]
    Serialize { message: String },

    #[error(transparent)]
    #[diagnostic(code(surfbeam::output))]
    Output(#[from] crate::output::OutputError),

    #[error("failed to build HTTP client: {0}")]
    #[diagnostic(code(surfbeam::client))]
    Client(String),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::HttpStatus { .. } => exit_code::HTTP_STATUS,
            Self::Decode { .. } => exit_code::DECODE,
            Self::Validation { .. } | Self::ProfileNotFound { .. } | Self::ProfileExists { .. } => {
                exit_code::USAGE
            }
            _ => exit_code::GENERAL,
        }
    }

    /// Attach the request URL to an API error.
    pub fn from_api(err: surfbeam_api::Error, url: &str) -> Self {
        use surfbeam_api::Error as Api;

        match err {
            ref e if e.is_timeout() => Self::Timeout { url: url.into() },
            Api::Transport(source) => Self::ConnectionFailed {
                url: url.into(),
                source: Box::new(source),
            },
            Api::Body(source) => Self::ResponseBody {
                url: url.into(),
                source: Box::new(source),
            },
            Api::HttpStatus { status } => Self::HttpStatus {
                url: url.into(),
                status,
            },
            Api::Decode(source) => source.into(),
            Api::InvalidUrl(e) => Self::Validation {
                field: "modem".into(),
                reason: e.to_string(),
            },
            Api::ClientBuild(message) => Self::Client(message),
        }
    }
}

impl From<DecodeError> for CliError {
    fn from(source: DecodeError) -> Self {
        Self::Decode {
            index: source.index(),
            source,
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            ConfigError::ProfileNotFound { name } => Self::ProfileNotFound {
                name,
                available: String::new(),
            },
            ConfigError::Serialization(e) => Self::Serialize {
                message: e.to_string(),
            },
            ConfigError::Figment(e) => Self::Config(e),
            ConfigError::Io(e) => Self::Io(e),
        }
    }
}
