//! CLI argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "nwss",
    version,
    about = "NWSS wastewater surveillance submission validator",
    long_about = "Validate NWSS water-sample submissions.\n\n\
                  Checks every field against the data dictionary and every record against\n\
                  the cross-field rules, and exports the dictionary as JSON Schema."
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

    /// Include raw cell values in trace-level logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate CSV submissions.
    Validate(ValidateArgs),

    /// Write the data dictionary as a JSON Schema document.
    Schema(SchemaArgs),

    /// List the data dictionary fields and their constraints.
    Fields,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// CSV files, or directories of CSV files.
    #[arg(value_name = "CSV", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Write one JSON validation report per input into this directory.
    #[arg(long = "report-dir", value_name = "DIR")]
    pub report_dir: Option<PathBuf>,

    /// Validate as of this date instead of the local clock (YYYY-MM-DD).
    #[arg(long = "today", value_name = "DATE", value_parser = parse_date)]
    pub today: Option<NaiveDate>,

    /// Ignore columns the dictionary does not declare.
    #[arg(long = "allow-unknown-fields")]
    pub allow_unknown_fields: bool,
}

#[derive(Parser)]
pub struct SchemaArgs {
    /// Output path for the JSON Schema.
    #[arg(long = "output", short = 'o', value_name = "PATH", default_value = "schema.json")]
    pub output: PathBuf,
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

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, nwss_model::DATE_FORMAT)
        .map_err(|error| format!("expected YYYY-MM-DD: {error}"))
}
