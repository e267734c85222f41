use thiserror::Error;

/// Failure to turn a raw status page into a [`ModemStatus`](crate::ModemStatus).
///
/// Every variant names the offending field by index and name. Decoding stops
/// at the first failure, so the field reported is always the lowest-indexed
/// one that could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The body ran out of `##`-separated fields before this index.
    #[error("missing field {index} ({field}): status page has only {found} fields")]
    MissingField {
        index: usize,
        field: &'static str,
        found: usize,
    },

    /// An IP or MAC address field failed strict validation.
    #[error("invalid address in field {index} ({field}): {raw:?}: {reason}")]
    InvalidAddress {
        index: usize,
        field: &'static str,
        raw: String,
        reason: String,
    },

    /// A numeric or percentage field was still not a number after cleanup.
    #[error("invalid number in field {index} ({field}): {raw:?}: {reason}")]
    InvalidNumber {
        index: usize,
        field: &'static str,
        raw: String,
        reason: String,
    },
}

impl DecodeError {
    /// Index of the field that failed.
    pub fn index(&self) -> usize {
        match self {
            Self::MissingField { index, .. }
            | Self::InvalidAddress { index, .. }
            | Self::InvalidNumber { index, .. } => *index,
        }
    }

    /// Name of the field that failed.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field, .. }
            | Self::InvalidAddress { field, .. }
            | Self::InvalidNumber { field, .. } => field,
        }
    }
}

/// Top-level error type for the `surfbeam-api` crate.
///
/// Covers the transport round-trip and the decode step. Nothing here is
/// retried; callers decide whether to try the whole operation again.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The modem answered with a non-success status code.
    #[error("modem returned HTTP {status}")]
    HttpStatus { status: u16 },

    /// The response headers arrived but the body could not be read.
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP client could not be constructed from the transport config.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),

    // ── Data ────────────────────────────────────────────────────────
    /// The status page arrived but could not be decoded.
    #[error("failed to decode modem status: {0}")]
    Decode(#[from] DecodeError),
}

impl Error {
    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) | Self::Body(e) => e.is_timeout() || e.is_connect(),
            Self::HttpStatus { status } => *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if the round-trip succeeded but the body was not understood.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// Returns `true` if this is a timeout reported by the transport.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) | Self::Body(e) if e.is_timeout())
    }
}
