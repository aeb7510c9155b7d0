//! Run metrics for the zb32 driver.
//!
//! Counts what went in and out of the codec and how long it took. The
//! driver is single-threaded, so this is a plain struct updated in place.

use std::time::{Duration, Instant};

/// Counters for a single run.
#[derive(Debug, Clone)]
pub struct Metrics {
    // === Timing ===
    /// When the run started
    pub start_time: Instant,

    /// When the run ended (set on completion)
    pub end_time: Option<Instant>,

    // === Input/Output ===
    /// Bytes read (raw bytes for encode, token text for decode)
    pub input_bytes: u64,

    /// Bytes written (token text for encode, raw bytes for decode)
    pub output_bytes: u64,

    /// Tokens encoded or decoded
    pub tokens: u64,
}

impl Metrics {
    /// Create new metrics with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            input_bytes: 0,
            output_bytes: 0,
            tokens: 0,
        }
    }

    /// Record one codec call.
    pub fn record(&mut self, input_bytes: usize, output_bytes: usize) {
        self.input_bytes += input_bytes as u64;
        self.output_bytes += output_bytes as u64;
        self.tokens += 1;
    }

    /// Mark the run as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Get total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Output size relative to input size.
    ///
    /// Returns 0.0 if nothing was read.
    pub fn expansion_ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.output_bytes as f64 / self.input_bytes as f64
        }
    }

    /// Compute throughput in input bytes/second.
    pub fn throughput_bps(&self) -> f64 {
        let duration_secs = self.duration().as_secs_f64();
        if duration_secs == 0.0 {
            0.0
        } else {
            self.input_bytes as f64 / duration_secs
        }
    }

    /// Print a human-readable summary to stderr.
    pub fn print_summary(&self) {
        eprintln!("\n=== Run Summary ===");
        eprintln!("Duration: {} us", self.duration().as_micros());
        eprintln!("Tokens:   {}", self.tokens);
        eprintln!("Input:    {} bytes", self.input_bytes);
        eprintln!("Output:   {} bytes", self.output_bytes);
        eprintln!("Ratio:    {:.3}", self.expansion_ratio());
        eprintln!("Throughput: {:.2} MB/s", self.throughput_bps() / 1_000_000.0);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
