use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use rust_fsas::cli::Cli;
use rust_fsas::progress::{NoopProgress, ScanProgress, SpinnerProgress};
use rust_fsas::{Config, run};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    let config = Config::resolve(cli).context("Could not resolve configuration")?;

    println!(
        "{} Scanning {} ...",
        "=>".blue().bold(),
        config.base.display().to_string().bold()
    );

    let progress: Box<dyn ScanProgress> = if config.quiet {
        init_logging(verbose, BoxMakeWriter::new(std::io::stderr));
        Box::new(NoopProgress)
    } else {
        let spinner = SpinnerProgress::new();
        init_logging(verbose, BoxMakeWriter::new(spinner.log_writer()));
        Box::new(spinner)
    };

    match run(&config, progress.as_ref()) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn init_logging(verbose: u8, writer: BoxMakeWriter) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .init();
}
