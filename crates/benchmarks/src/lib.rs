//! Floating-point CPU benchmark for Bench Bot.
//!
//! This crate holds the part of the bot that does real work: a fixed
//! trigonometric/square-root loop, its timing, and the text report posted
//! back to chat.
//!
//! # Quick Start
//!
//! ```no_run
//! use benchbot_benchmarks::run_benchmark;
//!
//! let report = run_benchmark();
//! assert_eq!(report.lines().count(), 4);
//! println!("{report}");
//! ```
//!
//! # Modules
//!
//! - [`engine`] - The timed floating-point workload
//! - [`result`] - The `BenchmarkResult` struct
//! - [`report`] - The four-line chat report
//! - [`markdown`] - Markdown summary over several runs

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod engine;
pub mod markdown;
pub mod report;
pub mod result;

pub use engine::{MathWorkload, ITERATIONS};
pub use report::format_report;
pub use result::BenchmarkResult;

/// Run the standard workload and return the chat report.
///
/// This is the single entry point the bot calls for every trigger. It runs
/// synchronously on the calling thread.
pub fn run_benchmark() -> String {
    format_report(&MathWorkload::new().run())
}

/// Run the standard workload `runs` times, one after another.
pub fn run_series(runs: usize) -> Vec<BenchmarkResult> {
    let workload = MathWorkload::new();
    (0..runs).map(|_| workload.run()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_benchmark_returns_four_lines() {
        let report = run_benchmark();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("**Benchmark"));
        assert!(lines[1].contains("1,000,000"));
        assert!(lines[3].ends_with("ms"));
    }

    #[test]
    fn test_run_series_is_independent_per_run() {
        let results = run_series(2);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].accumulated_value, results[1].accumulated_value);
        assert!(results.iter().all(|r| r.iterations == ITERATIONS));
    }

    #[test]
    fn test_run_series_empty() {
        assert!(run_series(0).is_empty());
    }
}
