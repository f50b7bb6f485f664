//! Command-line entry point for the bytepress compression tool.

mod config;

use bytepress_core::{compress_file, decompress_file, Direction};
use config::Config;
use log::{error, info, warn, LevelFilter};
use simplelog::{ColorChoice, Config as LogConfig, TermLogger, TerminalMode};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("Error: {message}");
            eprintln!("Try --help for usage.");
            std::process::exit(1);
        }
    };

    let level = if config.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    TermLogger::init(
        level,
        LogConfig::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .expect("logger init");

    info!(
        "{} {}: {} -> {}",
        config.algorithm.name(),
        config.direction.name(),
        config.input.display(),
        config.output.display()
    );

    if config.direction == Direction::Decompress {
        match std::fs::read(&config.input) {
            Ok(data) if !config.algorithm.is_valid_container(&data) => {
                warn!(
                    "input does not look like a {} container",
                    config.algorithm.name()
                );
            }
            _ => {}
        }
    }

    let result = match config.direction {
        Direction::Compress => compress_file(config.algorithm, &config.input, &config.output),
        Direction::Decompress => decompress_file(config.algorithm, &config.input, &config.output),
    };

    match result {
        Ok(metrics) => {
            if config.print_metrics {
                metrics.print_summary();
            }
        }
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    }
}
