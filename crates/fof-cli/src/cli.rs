//! CLI argument definitions for the league editor.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "fof-editor",
    about = "Inspect and validate FOF9 custom league projects",
    disable_version_flag = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Print version, commit and build date, then exit.
    #[arg(long)]
    pub version: bool,

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
    /// Load a project and check every record against the game's limits.
    Validate(ValidateArgs),

    /// Create a new project with empty data files.
    Init(InitArgs),

    /// List the CSV columns of a record kind.
    Columns(ColumnsArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the .fof9proj file.
    #[arg(value_name = "PROJECT")]
    pub project: PathBuf,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

#[derive(Parser)]
pub struct InitArgs {
    /// Directory to create the project in.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// League name shown in the editor.
    #[arg(long)]
    pub name: String,

    /// Short identifier used for file names.
    #[arg(long)]
    pub identifier: String,

    #[arg(long = "base-year", default_value_t = 2024)]
    pub base_year: i32,
}

#[derive(Parser)]
pub struct ColumnsArgs {
    #[arg(value_enum)]
    pub kind: RecordKindArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RecordKindArg {
    Player,
    Coach,
    Team,
    LeagueInfo,
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
