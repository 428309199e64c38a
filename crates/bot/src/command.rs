// Copyright 2025 Bench Bot Contributors
// SPDX-License-Identifier: Apache-2.0

//! Trigger matching for incoming messages.

/// Whether `content` invokes the benchmark command.
///
/// A plain prefix match on the raw message, as every port of the bot does:
/// `?benchmark now` and `?benchmarks` both match, ` ?benchmark` does not.
pub fn is_trigger(content: &str, trigger: &str) -> bool {
    !trigger.is_empty() && content.starts_with(trigger)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIGGER: &str = "?benchmark";

    #[test]
    fn test_exact_trigger() {
        assert!(is_trigger("?benchmark", TRIGGER));
        assert!(is_trigger("?benchmark\n", TRIGGER));
    }

    #[test]
    fn test_trigger_as_prefix() {
        assert!(is_trigger("?benchmark cpu", TRIGGER));
        assert!(is_trigger("?benchmark\tplease", TRIGGER));
        assert!(is_trigger("?benchmarks", TRIGGER));
    }

    #[test]
    fn test_non_matching_messages() {
        assert!(!is_trigger("  ?benchmark", TRIGGER));
        assert!(!is_trigger("hello ?benchmark", TRIGGER));
        assert!(!is_trigger("?BENCHMARK", TRIGGER));
        assert!(!is_trigger("?bench", TRIGGER));
        assert!(!is_trigger("", TRIGGER));
    }

    #[test]
    fn test_empty_trigger_never_matches() {
        assert!(!is_trigger("anything", ""));
        assert!(!is_trigger("", ""));
    }
}
