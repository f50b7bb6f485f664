//! Configuration for the bytepress command-line tool.
//!
//! Hand-rolled argument parsing: the flag set is small enough that a
//! dependency would outweigh the loop.

use bytepress_core::{Algorithm, Direction};
use std::path::PathBuf;

/// Complete configuration for one codec run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Which codec to run
    pub algorithm: Algorithm,

    /// Compress or decompress
    pub direction: Direction,

    /// Input file path
    pub input: PathBuf,

    /// Output file path
    pub output: PathBuf,

    /// Whether to print the metrics summary after the run
    pub print_metrics: bool,

    /// Whether to log at debug level
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut algorithm: Option<Algorithm> = None;
        let mut direction: Option<Direction> = None;
        let mut input: Option<PathBuf> = None;
        let mut output: Option<PathBuf> = None;
        let mut print_metrics = true;
        let mut verbose = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--algo" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--algo requires a name".to_string());
                    }
                    algorithm = Some(
                        Algorithm::from_name(&args[i])
                            .ok_or_else(|| format!("unknown algorithm: {}", args[i]))?,
                    );
                }
                "--mode" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--mode requires a name".to_string());
                    }
                    direction = Some(match args[i].as_str() {
                        "compress" => Direction::Compress,
                        "decompress" => Direction::Decompress,
                        other => return Err(format!("unknown mode: {other}")),
                    });
                }
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input = Some(PathBuf::from(&args[i]));
                }
                "--out" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--out requires a path".to_string());
                    }
                    output = Some(PathBuf::from(&args[i]));
                }
                "--no-metrics" => {
                    print_metrics = false;
                }
                "--verbose" => {
                    verbose = true;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        let algorithm = algorithm.ok_or("--algo is required")?;
        let direction = direction.ok_or("--mode is required")?;
        let input = input.ok_or("--in is required")?;
        let output = output.ok_or("--out is required")?;

        if input == output {
            return Err("input and output files cannot be the same".to_string());
        }

        Ok(Config {
            algorithm,
            direction,
            input,
            output,
            print_metrics,
            verbose,
        })
    }
}

fn print_help() {
    println!("bytepress: multi-algorithm file compression tool");
    println!();
    println!("USAGE:");
    println!("    bytepress --algo <ALGO> --mode <MODE> --in <PATH> --out <PATH>");
    println!();
    println!("OPTIONS:");
    println!("    --algo <ALGO>       Compression algorithm: rle, huffman, or lzw");
    println!("    --mode <MODE>       Operation mode: compress or decompress");
    println!("    --in <PATH>         Input file");
    println!("    --out <PATH>        Output file");
    println!();
    println!("    --no-metrics        Don't print the metrics summary");
    println!("    --verbose           Log at debug level");
    println!("    --help, -h          Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    bytepress --algo rle --mode compress --in sample.txt --out sample.rle");
    println!("    bytepress --algo rle --mode decompress --in sample.rle --out restored.txt");
    println!("    bytepress --algo huffman --mode compress --in sample.txt --out sample.huf");
    println!("    bytepress --algo lzw --mode compress --in sample.txt --out sample.lzw");
    println!();
}
