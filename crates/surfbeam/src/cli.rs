//! Clap derive structures for the `surfbeam` CLI.
//!
//! Defines the command tree, global flags, and shared types. Also compiled
//! by `build.rs` for man page generation, so it depends on clap only.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// surfbeam -- read status from SurfBeam satellite modems
#[derive(Debug, Parser)]
#[command(
    name = "surfbeam",
    version,
    about = "Read status from SurfBeam satellite modems",
    long_about = "Queries the embedded web interface of a SurfBeam satellite modem\n\
        and decodes its status page into named, typed fields.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Modem profile to use
    #[arg(long, short = 'p', env = "SURFBEAM_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Modem base URL (overrides profile)
    #[arg(long, short = 'm', env = "SURFBEAM_MODEM", global = true)]
    pub modem: Option<String>,

    /// Output format [default: table, or `defaults.output` from config]
    #[arg(long, short = 'o', env = "SURFBEAM_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: auto, or `defaults.color` from config]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept invalid TLS certificates (HTTPS proxies only)
    #[arg(long, short = 'k', env = "SURFBEAM_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "SURFBEAM_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

impl GlobalOpts {
    /// Selected output format, falling back to a table.
    pub fn output_format(&self) -> &OutputFormat {
        self.output.as_ref().unwrap_or(&OutputFormat::Table)
    }

    /// Selected color mode, falling back to auto-detection.
    pub fn color_mode(&self) -> &ColorMode {
        self.color.as_ref().unwrap_or(&ColorMode::Auto)
    }
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch and decode the current modem status
    #[command(alias = "st")]
    Status,

    /// Decode a captured status page from a file or stdin
    Decode(DecodeArgs),

    /// Print a status page exactly as the modem sends it
    Raw(RawArgs),

    /// Show the endpoint URLs for the selected modem
    Endpoints,

    /// List the positional fields of the status page
    Fields,

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Command Arguments ────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// File containing the status page (reads stdin when omitted or "-")
    pub file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct RawArgs {
    /// Fetch the TRIA status page instead of the modem status page
    #[arg(long)]
    pub tria: bool,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file location
    Path,

    /// Display current resolved configuration
    Show,

    /// Create or update a profile in the config file
    Init {
        /// Profile name
        #[arg(long, default_value = "default")]
        name: String,

        /// Modem base URL for the profile
        #[arg(long)]
        url: Option<String>,

        /// Request timeout in seconds for the profile
        #[arg(long)]
        profile_timeout: Option<u64>,

        /// Replace the profile if it already exists
        #[arg(long)]
        force: bool,
    },

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
