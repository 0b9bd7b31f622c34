//! FOF9 league editor CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, CommandFactory, Parser};
use fof_cli::logging::{LogConfig, LogFormat, init_logging};
use fof_cli::version::version_info;
use fof_persistence::PersistenceError;
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_columns, run_init, run_validate};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();

    if cli.version {
        println!("{}", version_info());
        std::process::exit(0);
    }

    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let exit_code = match cli.command {
        Some(Command::Validate(args)) => match run_validate(&args) {
            Ok(true) => 0,
            Ok(false) => 1,
            Err(error) => report_error(&error),
        },
        Some(Command::Init(args)) => match run_init(&args) {
            Ok(()) => 0,
            Err(error) => report_error(&error),
        },
        Some(Command::Columns(args)) => {
            run_columns(&args);
            0
        }
        None => {
            let _ = Cli::command().print_help();
            2
        }
    };
    std::process::exit(exit_code);
}

fn report_error(error: &anyhow::Error) -> i32 {
    eprintln!("error: {error:#}");
    if let Some(hint) = error
        .downcast_ref::<PersistenceError>()
        .and_then(PersistenceError::suggestion)
    {
        eprintln!("hint: {hint}");
    }
    1
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
