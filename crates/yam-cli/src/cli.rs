//! CLI argument definitions for the YamTrack importer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use yam_model::Source;

#[derive(Parser)]
#[command(
    name = "yamtrack-import",
    version,
    about = "YamTrack CSV importer - normalize media-tracking exports",
    long_about = "Normalize third-party media-tracking exports into the YamTrack CSV format.\n\n\
                  Supports Hardcover library exports, OpenLibrary reading logs,\n\
                  and IGDB list / enriched Steam library exports."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize one export file into the YamTrack CSV format.
    Import(ImportArgs),

    /// List supported sources and their strategies.
    Sources,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Input file (CSV or XML).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Originating service of the export.
    #[arg(long = "source", value_enum)]
    pub source: SourceArg,

    /// Output file (default: output/<input-stem><timestamp>.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Mapping strategy override (default: inferred from the filename,
    /// falling back to the adapter's default).
    #[arg(long = "strategy", value_name = "ID")]
    pub strategy: Option<String>,

    /// Drop rows that fail schema validation instead of writing them
    /// through (YAM_SKIP_INVALID=true does the same).
    #[arg(long = "skip-invalid")]
    pub skip_invalid: bool,
}

/// Sources with a shipped adapter.
#[derive(Clone, Copy, ValueEnum)]
pub enum SourceArg {
    Hardcover,
    Openlibrary,
    Igdb,
}

impl From<SourceArg> for Source {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Hardcover => Source::Hardcover,
            SourceArg::Openlibrary => Source::OpenLibrary,
            SourceArg::Igdb => Source::Igdb,
        }
    }
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
