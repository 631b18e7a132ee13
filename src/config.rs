//! Binary configuration from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `MATCHING_SEED` | 1 |
//! | `MATCHING_SIZE` | 5 |
//! | `MATCHING_SCORE_SAMPLES` | 1000 |
//! | `MATCHING_HISTOGRAM_BINS` | 10 |
//! | `MATCHING_TIMING_SIZES` | `5,10,20,50,100` (comma separated; empty disables) |
//! | `MATCHING_TIMING_REPETITIONS` | 20 |
//!
//! Unset or unparsable values fall back to the default.

use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub seed: u64,
    /// Agents per side of the random demo instance and of score samples.
    pub size: usize,
    pub score_samples: usize,
    pub histogram_bins: usize,
    pub timing_sizes: Vec<usize>,
    pub timing_repetitions: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 1,
            size: 5,
            score_samples: 1000,
            histogram_bins: 10,
            timing_sizes: vec![5, 10, 20, 50, 100],
            timing_repetitions: 20,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; used by `from_env` and tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();
        Self {
            seed: parse_or(lookup("MATCHING_SEED"), d.seed),
            size: parse_or(lookup("MATCHING_SIZE"), d.size).max(1),
            score_samples: parse_or(lookup("MATCHING_SCORE_SAMPLES"), d.score_samples),
            histogram_bins: parse_or(lookup("MATCHING_HISTOGRAM_BINS"), d.histogram_bins),
            timing_sizes: lookup("MATCHING_TIMING_SIZES")
                .map(|s| parse_list(&s))
                .unwrap_or(d.timing_sizes),
            timing_repetitions: parse_or(lookup("MATCHING_TIMING_REPETITIONS"), d.timing_repetitions),
        }
    }
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}

fn parse_list(s: &str) -> Vec<usize> {
    s.split(',')
        .filter_map(|part| part.trim().parse().ok())
        .collect()
}
