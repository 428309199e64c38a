//! CLI for Bench Bot.
//!
//! Runs the same workload the bot runs, without a messaging platform, so
//! machines and language ports can be compared from a terminal. Output goes
//! to stdout; nothing is written to disk.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

use benchbot_benchmarks::engine::{E_APPROX, PI_APPROX, SQRT2_APPROX};
use benchbot_benchmarks::{format_report, markdown, run_series, BenchmarkResult, ITERATIONS};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Bench Bot CLI.
#[derive(Parser, Debug)]
#[command(name = "benchbot-bench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for `run`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The chat report, once per run.
    Text,
    /// Pretty-printed JSON array of results.
    Json,
    /// Markdown table with min/mean/max.
    Markdown,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the benchmark and print the results.
    Run {
        /// Number of consecutive runs.
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        runs: u32,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Verbose output (debug logs on stderr).
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the workload configuration.
    Status {
        /// Show the workload constants.
        #[arg(short, long)]
        detailed: bool,
    },
}

/// Render results in the requested format.
pub fn render(
    results: &[BenchmarkResult],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    Ok(match format {
        OutputFormat::Text => results
            .iter()
            .map(format_report)
            .collect::<Vec<_>>()
            .join("\n\n"),
        OutputFormat::Json => serde_json::to_string_pretty(results)?,
        OutputFormat::Markdown => markdown::generate_summary(results),
    })
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the CLI with the given arguments.
///
/// # Returns
///
/// Returns `Ok(())` on success, or an error if the command fails.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            runs,
            format,
            verbose,
        } => {
            init_logging(verbose);
            info!(runs, ?format, "running benchmark");

            let results = run_series(runs as usize);
            for (index, result) in results.iter().enumerate() {
                debug!(
                    run = index + 1,
                    elapsed_ms = result.elapsed_millis(),
                    "run complete"
                );
            }

            println!("{}", render(&results, format)?);
            Ok(())
        }
        Commands::Status { detailed } => {
            println!("Bench Bot Benchmark");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!("Iterations: {}", ITERATIONS);

            if detailed {
                println!("\nPer-iteration term:");
                println!(
                    "  sin(x * {}) + cos(x / {}) + sqrt(x) * {}",
                    PI_APPROX, E_APPROX, SQRT2_APPROX
                );
            }

            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchbot_benchmarks::MathWorkload;
    use clap::CommandFactory;

    fn small_results() -> Vec<BenchmarkResult> {
        let workload = MathWorkload::with_iterations(10);
        vec![workload.run(), workload.run()]
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_defaults() {
        let cli = Cli::try_parse_from(["benchbot-bench", "run"]).unwrap();
        match cli.command {
            Commands::Run {
                runs,
                format,
                verbose,
            } => {
                assert_eq!(runs, 1);
                assert_eq!(format, OutputFormat::Text);
                assert!(!verbose);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_zero_runs_rejected() {
        assert!(Cli::try_parse_from(["benchbot-bench", "run", "--runs", "0"]).is_err());
    }

    #[test]
    fn test_render_text_separates_reports() {
        let output = render(&small_results(), OutputFormat::Text).unwrap();
        assert_eq!(output.matches("**Benchmark Rust**").count(), 2);
        assert!(output.contains("\n\n"));
    }

    #[test]
    fn test_render_json() {
        let output = render(&small_results(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let runs = parsed.as_array().unwrap();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0]["iterations"], 10);
    }

    #[test]
    fn test_render_markdown() {
        let output = render(&small_results(), OutputFormat::Markdown).unwrap();
        assert!(output.contains("| 2 | 10 |"));
        assert!(output.contains("Total runs: 2"));
    }
}
