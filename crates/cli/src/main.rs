//! sift: flag interesting files by name, extension, path and type.

mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use sift_core::{load_dotenv, Config};
use sift_rules::Status;

use crate::cli::{CliArgs, Command};

fn main() -> Result<ExitCode> {
    // Logs go to stderr so hits on stdout stay machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    load_dotenv();
    let args = CliArgs::parse();

    let mut config = match &args.profile {
        Some(profile) => Config::for_profile(profile),
        None => Config::from_env(),
    };

    let status = match &args.command {
        Command::Scan(scan) => {
            commands::apply_rule_args(&mut config, &scan.rules);
            config.log_summary();
            commands::scan(&config, scan)?
        }
        Command::Check(check) => {
            commands::apply_rule_args(&mut config, &check.rules);
            commands::check(&config, check)?
        }
        Command::Explain(rules) => {
            commands::apply_rule_args(&mut config, rules);
            commands::explain(&config)?
        }
        Command::Snapshot(snapshot) => commands::snapshot(snapshot)?,
    };

    Ok(match status {
        Status::Success => ExitCode::SUCCESS,
        Status::Failure => ExitCode::FAILURE,
    })
}
