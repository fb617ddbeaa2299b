//! Flashmap CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, info};
use miette::GraphicalReportHandler;

use flashmap_cli::{Args, error_adapter::to_reportables};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logger(&args.log_level);

    info!(log_level = args.log_level; "Starting Flashmap");
    debug!(args:?; "Parsed arguments");

    if let Err(err) = flashmap_cli::run(&args) {
        // Errors go to stderr even when logging is off; stdout may carry output.
        let reporter = GraphicalReportHandler::new();
        for reportable in to_reportables(&err) {
            let mut writer = String::new();
            reporter
                .render_report(&mut writer, &reportable)
                .expect("Writing to String buffer is infallible");
            eprint!("{writer}");
        }

        process::exit(1);
    }

    info!("Completed successfully");
}

fn init_logger(level: &str) {
    let level = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {level}. Using 'warn' instead.");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(level)
        .init();
}
