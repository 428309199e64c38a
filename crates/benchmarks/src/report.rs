//! Chat report formatting.
//!
//! The report is the text the bot posts back to the channel. Its four-line
//! layout and wording match the other language ports of the bot so replies
//! can be compared side by side.

use crate::result::BenchmarkResult;

/// Language named in the report title.
pub const LANGUAGE: &str = "Rust";

/// Render a result as the four-line chat report.
pub fn format_report(result: &BenchmarkResult) -> String {
    format!(
        "**Benchmark {}**\n\
         • Test: {} itérations avec opérations mathématiques\n\
         • Résultat: {:.6}\n\
         • Temps d'exécution: {}",
        LANGUAGE,
        format_thousands(result.iterations),
        result.accumulated_value,
        format_millis(result.elapsed_seconds),
    )
}

/// Group the digits of `n` in threes with `,` separators.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Render a duration given in seconds as milliseconds with two decimals.
pub fn format_millis(seconds: f64) -> String {
    format!("{:.2}ms", seconds * 1000.0)
}
