//! The floating-point CPU workload.
//!
//! Each iteration feeds `x = i as f64` through a sine, a cosine and a square
//! root and adds the terms to a running total. The constants are the
//! truncated literals every port of the bot uses, so results stay comparable
//! across implementations.

use crate::result::BenchmarkResult;
use std::hint::black_box;
use std::time::Instant;
use tracing::debug;

/// Iterations performed by the default workload.
pub const ITERATIONS: u64 = 1_000_000;

/// Truncated π used as the sine multiplier.
#[allow(clippy::approx_constant)]
pub const PI_APPROX: f64 = 3.14159;

/// Truncated e used as the cosine divisor.
#[allow(clippy::approx_constant)]
pub const E_APPROX: f64 = 2.71828;

/// Truncated √2 used as the square-root multiplier.
#[allow(clippy::approx_constant)]
pub const SQRT2_APPROX: f64 = 1.414;

/// Contribution of a single iteration to the accumulator.
#[inline]
pub fn term(x: f64) -> f64 {
    (x * PI_APPROX).sin() + (x / E_APPROX).cos() + x.sqrt() * SQRT2_APPROX
}

/// Fixed-size floating-point workload.
///
/// Holds no state between runs; [`MathWorkload::run`] can be called from any
/// number of threads at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathWorkload {
    iterations: u64,
}

impl Default for MathWorkload {
    fn default() -> Self {
        Self::new()
    }
}

impl MathWorkload {
    /// Workload with the standard [`ITERATIONS`] count.
    pub fn new() -> Self {
        Self::with_iterations(ITERATIONS)
    }

    /// Workload with a custom iteration count.
    pub fn with_iterations(iterations: u64) -> Self {
        Self { iterations }
    }

    /// Number of iterations this workload performs.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Run the loop and time it.
    ///
    /// Only the loop itself sits between the two clock reads.
    pub fn run(&self) -> BenchmarkResult {
        let iterations = black_box(self.iterations);

        let start = Instant::now();
        let mut accumulated = 0.0_f64;
        for i in 0..iterations {
            accumulated += term(i as f64);
        }
        let elapsed = start.elapsed();

        let result = BenchmarkResult::new(iterations, black_box(accumulated), elapsed);
        debug!(
            iterations,
            accumulated_value = result.accumulated_value,
            elapsed_ms = result.elapsed_millis(),
            "math workload finished"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_workload_uses_fixed_iterations() {
        assert_eq!(MathWorkload::default().iterations(), 1_000_000);
        assert_eq!(MathWorkload::new(), MathWorkload::with_iterations(ITERATIONS));
    }

    #[test]
    fn test_full_run_reports_positive_finite_time() {
        let result = MathWorkload::new().run();
        assert_eq!(result.iterations, ITERATIONS);
        assert!(result.elapsed_seconds > 0.0);
        assert!(result.elapsed_seconds.is_finite());
        assert!(result.accumulated_value.is_finite());
    }

    #[test]
    fn test_accumulated_value_is_deterministic() {
        let workload = MathWorkload::new();
        let first = workload.run();
        let second = workload.run();
        assert_eq!(first.accumulated_value, second.accumulated_value);
    }

    #[test]
    fn test_zero_iterations() {
        let result = MathWorkload::with_iterations(0).run();
        assert_eq!(result.iterations, 0);
        assert_eq!(result.accumulated_value, 0.0);
        assert!(result.elapsed_seconds >= 0.0);
    }

    #[test]
    fn test_small_run_matches_manual_sum() {
        // i = 0 contributes sin(0) + cos(0) + 0 = 1.
        assert_eq!(term(0.0), 1.0);

        let expected: f64 = (0..4).map(|i| term(i as f64)).sum();
        let result = MathWorkload::with_iterations(4).run();
        assert_eq!(result.accumulated_value, expected);
    }

    #[test]
    #[allow(clippy::approx_constant)]
    fn test_uses_truncated_constants() {
        let x = 2.0_f64;
        let expected =
            (2.0 * 3.14159_f64).sin() + (2.0 / 2.71828_f64).cos() + 2.0_f64.sqrt() * 1.414;
        assert_eq!(term(x), expected);
        assert_ne!(PI_APPROX, std::f64::consts::PI);
    }
}
