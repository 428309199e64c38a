//! Markdown output generation for benchmark results.
//!
//! Used by the CLI when several runs are compared at once.

use crate::report::{format_millis, format_thousands};
use crate::result::BenchmarkResult;
use std::fmt::Write;

/// Generate a markdown summary from a series of runs.
pub fn generate_summary(results: &[BenchmarkResult]) -> String {
    let mut output = String::new();

    writeln!(output, "# Benchmark Summary").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "Generated: {}", chrono::Utc::now().to_rfc3339()).unwrap();
    writeln!(output).unwrap();
    writeln!(output, "## Results").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "| Run | Iterations | Result | Time |").unwrap();
    writeln!(output, "|-----|------------|--------|------|").unwrap();

    for (index, result) in results.iter().enumerate() {
        writeln!(
            output,
            "| {} | {} | {:.6} | {} |",
            index + 1,
            format_thousands(result.iterations),
            result.accumulated_value,
            format_millis(result.elapsed_seconds),
        )
        .unwrap();
    }

    writeln!(output).unwrap();
    if let Some(stats) = TimingStats::from_results(results) {
        writeln!(output, "- Min: {}", format_millis(stats.min)).unwrap();
        writeln!(output, "- Mean: {}", format_millis(stats.mean)).unwrap();
        writeln!(output, "- Max: {}", format_millis(stats.max)).unwrap();
        writeln!(output).unwrap();
    }
    writeln!(output, "---").unwrap();
    writeln!(output, "Total runs: {}", results.len()).unwrap();

    output
}

/// Min/mean/max of elapsed seconds across runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingStats {
    /// Fastest run, in seconds.
    pub min: f64,
    /// Average run, in seconds.
    pub mean: f64,
    /// Slowest run, in seconds.
    pub max: f64,
}

impl TimingStats {
    /// Compute stats, or `None` when there are no runs.
    pub fn from_results(results: &[BenchmarkResult]) -> Option<Self> {
        if results.is_empty() {
            return None;
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut total = 0.0;
        for result in results {
            min = min.min(result.elapsed_seconds);
            max = max.max(result.elapsed_seconds);
            total += result.elapsed_seconds;
        }

        Some(Self {
            min,
            mean: total / results.len() as f64,
            max,
        })
    }
}
