//! CLI argument definitions for the US MEC reference viewer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "usmec",
    version,
    about = "US MEC reference viewer - contraceptive eligibility by medical condition",
    long_about = "Browse the US Medical Eligibility Criteria for Contraceptive Use.\n\n\
                  Search medical conditions, view color-coded Initiation and\n\
                  Continuation ratings per contraceptive method, and open the\n\
                  canonical summary chart PDF."
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

    /// Use an external chart JSON instead of the bundled summary chart.
    #[arg(long = "chart-file", value_name = "PATH", global = true)]
    pub chart_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List every condition in the summary chart.
    Conditions,

    /// Search conditions by name (case-insensitive substring).
    Search(SearchArgs),

    /// Show eligibility ratings for one or more conditions.
    Show(ShowArgs),

    /// Print the four eligibility category definitions.
    Categories,

    /// Open the canonical summary chart PDF.
    Chart(ChartArgs),
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Search text; at least 3 characters.
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Condition names to exclude, as if already selected (repeatable).
    #[arg(long = "exclude", value_name = "NAME")]
    pub exclude: Vec<String>,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Condition names (matched case-insensitively against chart keys).
    #[arg(value_name = "CONDITION", required = true)]
    pub conditions: Vec<String>,
}

#[derive(Parser)]
pub struct ChartArgs {
    /// Print the PDF URL instead of opening it.
    #[arg(long = "print-only")]
    pub print_only: bool,
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
