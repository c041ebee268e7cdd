//! `coon` CLI — compress, decompress, and analyze Dart/Flutter source from
//! the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Compress Dart source to COON (stdin → stdout, stats on stderr)
//! cat login_screen.dart | coon compress
//!
//! # Compress from file to file with an explicit strategy
//! coon compress -i login_screen.dart -o login_screen.coon -s basic
//!
//! # Decompress COON back to approximate Dart
//! coon decompress -i login_screen.coon
//!
//! # Show compression statistics (token counts, ratio, cost estimate)
//! coon stats -i login_screen.dart
//!
//! # Machine-readable statistics
//! coon stats -i login_screen.dart --json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use coon_core::Strategy;
use std::io::{self, Read};

// GPT-4 pricing used for the reported cost estimate, per 1K tokens.
const INPUT_COST_PER_1K: f64 = 0.03;
const OUTPUT_COST_PER_1K: f64 = 0.06;

#[derive(Parser)]
#[command(
    name = "coon",
    version,
    about = "COON (Code-Oriented Object Notation) CLI — token-efficient Dart/Flutter code"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress Dart source to COON format
    Compress {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Compression strategy (auto, basic, aggressive, component_ref, template_ref)
        #[arg(short, long, default_value = "auto")]
        strategy: String,
    },
    /// Decompress COON back to approximate Dart source
    Decompress {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show compression statistics (token counts, ratio, cost estimate)
    Stats {
        /// Input Dart file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Compression strategy to measure with
        #[arg(short, long, default_value = "auto")]
        strategy: String,
        /// Emit the statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compress {
            input,
            output,
            strategy,
        } => {
            let source = read_input(input.as_deref())?;
            let strategy = parse_strategy(&strategy)?;
            let result = coon_core::compress(&source, strategy);

            eprintln!(
                "Compressed {} -> {} tokens ({:.1}% saved, strategy: {})",
                result.original_tokens,
                result.compressed_tokens,
                result.percentage_saved(),
                result.strategy_used
            );
            write_output(output.as_deref(), &result.compressed)?;
        }
        Commands::Decompress { input, output } => {
            let coon = read_input(input.as_deref())?;
            let dart = coon_core::decompress(&coon);
            write_output(output.as_deref(), &dart)?;
        }
        Commands::Stats {
            input,
            strategy,
            json,
        } => {
            let source = read_input(input.as_deref())?;
            let strategy = parse_strategy(&strategy)?;
            let result = coon_core::compress(&source, strategy);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                let savings = result.token_savings();
                println!("Original tokens:    {}", result.original_tokens);
                println!("Original chars:     {}", source.chars().count());
                println!("Compressed tokens:  {}", result.compressed_tokens);
                println!("Compressed chars:   {}", result.compressed.chars().count());
                println!(
                    "Token savings:      {} ({:.1}%)",
                    savings,
                    result.percentage_saved()
                );
                println!("Compression ratio:  {:.2}", result.ratio);
                println!("Strategy used:      {}", result.strategy_used);
                println!(
                    "Input cost saved:   ${:.4} per call (GPT-4 pricing)",
                    savings as f64 / 1000.0 * INPUT_COST_PER_1K
                );
                println!(
                    "Output cost saved:  ${:.4} per call (GPT-4 pricing)",
                    savings as f64 / 1000.0 * OUTPUT_COST_PER_1K
                );
            }
        }
    }

    Ok(())
}

fn parse_strategy(name: &str) -> Result<Strategy> {
    name.parse()
        .with_context(|| format!("Invalid --strategy value: '{}'", name))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
