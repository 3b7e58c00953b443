//! CLI argument definitions for `gosnomer`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "gosnomer",
    version,
    about = "Correct manual-entry errors in Russian vehicle registration plates",
    long_about = "Correct manual-entry errors in Russian vehicle registration plates.\n\n\
                  Maps Latin look-alikes to Cyrillic letters, resolves 0/О ambiguity \
                  against the GOST R 50577-2018 plate formats and rejects plates \
                  that cannot be corrected."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

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

    /// Allow raw plate values in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize plates given as arguments, or one per line on stdin.
    Normalize(NormalizeArgs),

    /// List the canonical plate formats.
    Formats,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Plates to normalize. Reads stdin when omitted.
    #[arg(value_name = "PLATE")]
    pub plates: Vec<String>,

    /// Preferred format for ambiguous plates (repeatable, in order).
    #[arg(long = "prefer", value_name = "FORMAT")]
    pub prefer: Vec<String>,

    /// TOML file with `preferred_formats = [...]`.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Result output style.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputArg {
    Table,
    Plain,
    Json,
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
