//! CLI argument definitions for the Shelf catalog browser.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "shelf",
    version,
    about = "Browse a library book catalog from the terminal",
    long_about = "Browse a library book catalog from the terminal.\n\n\
                  Search input is debounced, sorting toggles per column and \
                  responses to superseded queries are never shown."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Settings file (default: settings.toml in the user config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search, sort and page through the catalog interactively.
    Browse(BrowseArgs),

    /// List the admin commands and their endpoints.
    Endpoints,

    /// Inspect or create the settings file.
    Config(ConfigArgs),
}

#[derive(Parser)]
pub struct BrowseArgs {
    /// Catalog service address, e.g. http://localhost:1271.
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Records per page.
    #[arg(long = "page-size", value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Quiet period before a search is sent, in milliseconds.
    #[arg(long = "debounce-ms", value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// Environment variable holding a bearer token for the catalog.
    #[arg(long = "token-env", value_name = "VAR")]
    pub token_env: Option<String>,
}

#[derive(Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the settings file location.
    Path,

    /// Print the effective settings as TOML.
    Show,

    /// Write a settings file with default values.
    Init {
        /// Overwrite an existing file.
        #[arg(long = "force")]
        force: bool,
    },
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
