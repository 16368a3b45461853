//! Hosts switcher CLI entry point.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use hostswitch_cli::logging::{LogConfig, LogFormat, init_logging};

mod cli;
mod commands;
mod tables;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_details, run_list, run_status, run_switch};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();

    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let result = match &cli.command {
        Command::Status => run_status(&cli),
        Command::List => run_list(&cli),
        Command::Details(args) => run_details(&cli, args),
        Command::Switch(args) => run_switch(&cli, args),
    };

    match result {
        Ok(()) => {}
        Err(error) => {
            tracing::error!("{error:#}");
            eprintln!("error: {error:#}");
            std::process::exit(1);
        }
    }
}

fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };

    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };

    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };

    LogConfig::default()
        .with_level(level)
        .with_format(format)
        .with_ansi(with_ansi)
        .with_log_file(cli.log_file.clone())
        .with_timestamps(cli.log_file.is_some())
}
