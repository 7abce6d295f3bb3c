//! CLI argument definitions for the Escopo e Sequência ingester.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "escopo",
    version,
    about = "Escopo e Sequência - normalize curriculum workbooks",
    long_about = "Normalize scope-and-sequence curriculum workbooks.\n\n\
                  Reads an .xlsx workbook where each worksheet is one subject,\n\
                  locates the header row, maps the columns and emits one\n\
                  normalized record per valid data row."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Ingest a workbook and print a per-sheet summary.
    Ingest(IngestArgs),

    /// List the canonical fields and their accepted header spellings.
    Fields(FieldsArgs),

    /// List education levels stored in a store directory.
    Levels(LevelsArgs),
}

#[derive(Parser)]
pub struct IngestArgs {
    /// Path to the .xlsx workbook.
    #[arg(value_name = "WORKBOOK")]
    pub workbook: PathBuf,

    /// Education level label used to group the stored items.
    ///
    /// The label is opaque to ingestion; it is never read from the
    /// file.
    #[arg(long = "level", value_name = "LEVEL")]
    pub level: String,

    /// Write the normalized items as JSON to this path.
    #[arg(long = "json", value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Save items to this store directory, replacing the level's
    /// previous upload.
    #[arg(long = "store-dir", value_name = "DIR")]
    pub store_dir: Option<PathBuf>,

    /// Load header synonyms from a JSON file instead of the built-in
    /// Portuguese table.
    #[arg(long = "synonyms", value_name = "PATH")]
    pub synonyms: Option<PathBuf>,

    /// Mandatory-column matches required to accept a header row.
    #[arg(long = "min-matches", value_name = "N")]
    pub min_matches: Option<usize>,

    /// Rows scanned from the top of each sheet when locating the
    /// header.
    #[arg(long = "search-window", value_name = "N")]
    pub search_window: Option<usize>,

    /// Parse and report without writing JSON or store output.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct FieldsArgs {
    /// Show a custom synonym table instead of the built-in one.
    #[arg(long = "synonyms", value_name = "PATH")]
    pub synonyms: Option<PathBuf>,
}

#[derive(Parser)]
pub struct LevelsArgs {
    /// Store directory to list.
    #[arg(long = "store-dir", value_name = "DIR")]
    pub store_dir: PathBuf,
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
