//! Solar measurement explorer CLI.

use clap::{ColorChoice, Parser};
use solar_cli::logging::{LogConfig, LogFormat, init_logging};
use solar_cli::render::{compare_json, country_json, print_compare, print_country, print_metrics};
use solar_cli::types::{CompareResult, CountryResult};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_compare, run_country};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Compare(args) => match run_compare(&args, &cli.data_dir) {
            Ok(result) => finish_compare(&result, args.json),
            Err(error) => {
                eprintln!("error: {error}");
                1
            }
        },
        Command::Country(args) => match run_country(&args, &cli.data_dir) {
            Ok(result) => finish_country(&result, args.json),
            Err(error) => {
                eprintln!("error: {error}");
                1
            }
        },
        Command::Metrics => {
            print_metrics();
            0
        }
    };
    std::process::exit(exit_code);
}

fn finish_compare(result: &CompareResult, json: bool) -> i32 {
    if json {
        match compare_json(result) {
            Ok(payload) => println!("{payload}"),
            Err(error) => {
                eprintln!("error: {error}");
                return 1;
            }
        }
    } else {
        print_compare(result);
    }
    if result.rows == 0 { 1 } else { 0 }
}

fn finish_country(result: &CountryResult, json: bool) -> i32 {
    if json {
        match country_json(result) {
            Ok(payload) => println!("{payload}"),
            Err(error) => {
                eprintln!("error: {error}");
                return 1;
            }
        }
    } else {
        print_country(result);
    }
    if result.rows == 0 { 1 } else { 0 }
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
