//! Benchmark result types.
//!
//! A [`BenchmarkResult`] is produced fresh by every engine run and consumed
//! straight away by a formatter; nothing caches or shares it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Outcome of one run of the floating-point workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Number of loop repetitions performed.
    pub iterations: u64,
    /// Running total of the per-iteration terms.
    pub accumulated_value: f64,
    /// Wall-clock duration of the loop, in seconds.
    pub elapsed_seconds: f64,
    /// When the run finished.
    pub timestamp: DateTime<Utc>,
}

impl BenchmarkResult {
    /// Create a new BenchmarkResult stamped with the current time.
    pub fn new(iterations: u64, accumulated_value: f64, elapsed: Duration) -> Self {
        Self {
            iterations,
            accumulated_value,
            elapsed_seconds: elapsed.as_secs_f64(),
            timestamp: Utc::now(),
        }
    }

    /// Elapsed duration in milliseconds.
    pub fn elapsed_millis(&self) -> f64 {
        self.elapsed_seconds * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_converts_duration_to_seconds() {
        let result = BenchmarkResult::new(10, 1.5, Duration::from_micros(51_200));
        assert_eq!(result.iterations, 10);
        assert!((result.elapsed_seconds - 0.0512).abs() < 1e-12);
        assert!((result.elapsed_millis() - 51.2).abs() < 1e-9);
        assert!(result.timestamp <= Utc::now());
    }

    #[test]
    fn test_serialized_field_names() {
        let result = BenchmarkResult::new(3, 0.25, Duration::ZERO);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["iterations"], 3);
        assert_eq!(json["accumulated_value"], 0.25);
        assert_eq!(json["elapsed_seconds"], 0.0);
        assert!(json["timestamp"].is_string());
    }
}
