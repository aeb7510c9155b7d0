//! zb32: command-line driver for the zb32 codec.
//!
//! Reads from a file or stdin, writes to a file or stdout. Diagnostics go to
//! stderr through `log`, so piped output stays clean.

mod config;
mod input_gen;
mod metrics;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Cli, Config, Mode};
use log::{debug, error, info};
use metrics::Metrics;
use std::borrow::Cow;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;

fn init_logger(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env).try_init();
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(p) => fs::read(p).with_context(|| format!("read input {}", p.display())),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("read stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match path {
        Some(p) => fs::write(p, bytes).with_context(|| format!("write output {}", p.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes).context("write stdout")?;
            stdout.flush().context("flush stdout")
        }
    }
}

/// Encode raw input into a token, newline-terminated if asked.
fn encode_token(raw: &[u8], newline: bool) -> String {
    let mut token = zb32_core::encode(raw);
    if newline {
        token.push('\n');
    }
    token
}

/// Decode token text read from a file or pipe.
///
/// Surrounding ASCII whitespace (typically the trailing newline) is
/// stripped. With `ignore_case` the text is lowercased first; otherwise
/// uppercase symbols are rejected by the codec.
fn decode_token(raw: &[u8], ignore_case: bool) -> Result<Vec<u8>> {
    let text = std::str::from_utf8(raw).context("token is not valid UTF-8")?;
    let text = text.trim_matches(|c: char| c.is_ascii_whitespace());

    let text: Cow<'_, str> = if ignore_case {
        Cow::Owned(text.to_ascii_lowercase())
    } else {
        Cow::Borrowed(text)
    };

    zb32_core::decode(&text).context("decode token")
}

fn run(config: &Config, metrics: &mut Metrics) -> Result<()> {
    match &config.mode {
        Mode::Encode {
            input,
            output,
            newline,
        } => {
            let raw = read_input(input.as_deref())?;
            let token = encode_token(&raw, *newline);
            debug!(
                "encoded {} bytes into {} symbols",
                raw.len(),
                zb32_core::encoded_len(raw.len())
            );
            write_output(output.as_deref(), token.as_bytes())?;
            metrics.record(raw.len(), token.len());
        }
        Mode::Decode {
            input,
            output,
            ignore_case,
        } => {
            let raw = read_input(input.as_deref())?;
            let bytes = decode_token(&raw, *ignore_case)?;
            debug!("decoded {} input bytes into {} bytes", raw.len(), bytes.len());
            write_output(output.as_deref(), &bytes)?;
            metrics.record(raw.len(), bytes.len());
        }
        Mode::Sample { seed, count, bytes } => {
            let ids = input_gen::generate_ids(*seed, *count, *bytes);
            let mut out = String::with_capacity(ids.len() * (zb32_core::encoded_len(*bytes) + 1));
            for id in &ids {
                let before = out.len();
                zb32_core::encode_into(id, &mut out);
                metrics.record(id.len(), out.len() - before);
                out.push('\n');
            }
            write_output(None, out.as_bytes())?;
        }
    }
    Ok(())
}

/// Log a failed run and map it to the process exit status.
///
/// The error is reported once, through the logger.
fn exit_status(result: &Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            error!("{e:#}");
            1
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match Config::from_cli(cli) {
        Ok(config) => config,
        Err(e) => {
            init_logger("warn");
            return ExitCode::from(exit_status(&Err(e)));
        }
    };
    init_logger(&config.log_level);
    info!("starting zb32: {:?}", config.mode);

    if config.print_config {
        config.print();
    }

    let mut metrics = Metrics::new();
    let result = run(&config, &mut metrics);
    metrics.complete();

    if config.print_metrics {
        metrics.print_summary();
    }

    ExitCode::from(exit_status(&result))
}
