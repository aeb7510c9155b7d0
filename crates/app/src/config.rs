//! Configuration for the zb32 command-line driver.
//!
//! Flags are parsed by clap and resolved into a [`Config`] with every
//! default filled in.
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments: with no subcommand it prints a
//! batch of sample tokens from a clock-derived seed. The resolved config can
//! be printed so such a run is reproducible.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default number of tokens printed by `sample`.
const DEFAULT_COUNT: usize = 8;

/// Default identifier size for `sample`, in bytes.
const DEFAULT_BYTES: usize = 16;

/// Largest identifier `sample` will generate.
const MAX_SAMPLE_BYTES: usize = 1 << 20;

#[derive(Parser, Debug)]
#[command(
    name = "zb32",
    version,
    about = "Encode bytes as human-friendly base-32 tokens and back"
)]
pub struct Cli {
    /// Log level (error|warn|info|debug|trace); RUST_LOG takes precedence
    #[arg(long = "log-level", global = true)]
    pub log_level: Option<String>,

    /// Print the resolved configuration to stderr before running
    #[arg(long = "print-config", global = true)]
    pub print_config: bool,

    /// Print a metrics summary to stderr after running
    #[arg(long = "metrics", global = true)]
    pub metrics: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode raw bytes into a token
    Encode {
        /// Input file (default: stdin)
        #[arg(long = "in")]
        input: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(long = "out")]
        output: Option<PathBuf>,

        /// Don't terminate the token with a newline
        #[arg(long = "no-newline")]
        no_newline: bool,
    },

    /// Decode a token back into raw bytes
    Decode {
        /// Input file (default: stdin)
        #[arg(long = "in")]
        input: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(long = "out")]
        output: Option<PathBuf>,

        /// Lowercase the input before decoding
        #[arg(long = "ignore-case")]
        ignore_case: bool,
    },

    /// Print random identifiers encoded as tokens
    Sample {
        /// Random seed for determinism (default: derived from the clock)
        #[arg(long)]
        seed: Option<u64>,

        /// Number of tokens to print
        #[arg(long)]
        count: Option<usize>,

        /// Size of each identifier in bytes
        #[arg(long)]
        bytes: Option<usize>,
    },
}

/// What a run does, with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Encode {
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        newline: bool,
    },
    Decode {
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        ignore_case: bool,
    },
    Sample {
        seed: u64,
        count: usize,
        bytes: usize,
    },
}

/// Complete configuration for a run.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,

    // === Behavior ===
    /// Default log filter when RUST_LOG is unset
    pub log_level: String,

    /// Whether to print the resolved config
    pub print_config: bool,

    /// Whether to print the metrics summary
    pub print_metrics: bool,
}

impl Config {
    /// Resolve parsed flags into a full configuration.
    ///
    /// A missing subcommand means `sample` with all defaults.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let command = cli.command.unwrap_or(Command::Sample {
            seed: None,
            count: None,
            bytes: None,
        });

        let mode = match command {
            Command::Encode {
                input,
                output,
                no_newline,
            } => Mode::Encode {
                input,
                output,
                newline: !no_newline,
            },
            Command::Decode {
                input,
                output,
                ignore_case,
            } => Mode::Decode {
                input,
                output,
                ignore_case,
            },
            Command::Sample { seed, count, bytes } => {
                let count = count.unwrap_or(DEFAULT_COUNT);
                let bytes = bytes.unwrap_or(DEFAULT_BYTES);
                if count == 0 {
                    bail!("--count must be at least 1");
                }
                if bytes == 0 || bytes > MAX_SAMPLE_BYTES {
                    bail!("--bytes must be between 1 and {MAX_SAMPLE_BYTES}, got {bytes}");
                }
                Mode::Sample {
                    seed: seed.unwrap_or_else(clock_seed),
                    count,
                    bytes,
                }
            }
        };

        Ok(Config {
            mode,
            log_level: cli.log_level.unwrap_or_else(|| "warn".to_string()),
            print_config: cli.print_config,
            print_metrics: cli.metrics,
        })
    }

    /// Print the configuration in human-readable form.
    ///
    /// Goes to stderr so it never mixes with encoded output.
    pub fn print(&self) {
        eprintln!("=== Configuration ===");
        match &self.mode {
            Mode::Encode {
                input,
                output,
                newline,
            } => {
                eprintln!("Mode:    encode");
                eprintln!("Input:   {}", display_path(input.as_ref(), "(stdin)"));
                eprintln!("Output:  {}", display_path(output.as_ref(), "(stdout)"));
                eprintln!("Newline: {newline}");
            }
            Mode::Decode {
                input,
                output,
                ignore_case,
            } => {
                eprintln!("Mode:        decode");
                eprintln!("Input:       {}", display_path(input.as_ref(), "(stdin)"));
                eprintln!("Output:      {}", display_path(output.as_ref(), "(stdout)"));
                eprintln!("Ignore case: {ignore_case}");
            }
            Mode::Sample { seed, count, bytes } => {
                eprintln!("Mode:  sample");
                eprintln!("Seed:  {seed}");
                eprintln!("Count: {count}");
                eprintln!("Bytes: {bytes}");
            }
        }
        eprintln!("Log level: {}", self.log_level);
        eprintln!();
    }
}

fn display_path(path: Option<&PathBuf>, fallback: &str) -> String {
    path.map_or_else(|| fallback.to_string(), |p| p.display().to_string())
}

fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
