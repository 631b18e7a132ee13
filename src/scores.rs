//! Score distributions over random instances.
//!
//! Samples [`Score`]s of proposer-optimal matchings on random tables and summarises them,
//! with a plain-text histogram per side.

use std::fmt;

use crate::random_table::TableGenerator;
use crate::types::Score;

/// Score of the solved matching on one freshly drawn instance.
pub fn random_score(generator: &mut TableGenerator) -> Score {
    let engine = generator.engine();
    let matching = engine.solve();
    engine.compute_score(&matching)
}

/// Scores of `samples` independent instances.
pub fn random_scores(generator: &mut TableGenerator, samples: usize) -> Vec<Score> {
    (0..samples).map(|_| random_score(generator)).collect()
}

/// Per-side statistics of a score sample.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ScoreSummary {
    pub size: usize,
    pub samples: usize,
    pub mean_proposer: f64,
    pub mean_acceptor: f64,
    pub min: Score,
    pub max: Score,
}

impl ScoreSummary {
    /// `None` for an empty sample.
    pub fn from_scores(size: usize, scores: &[Score]) -> Option<Self> {
        let first = scores.first()?;
        let mut min = *first;
        let mut max = *first;
        let mut total = (0usize, 0usize);
        for s in scores {
            min.proposer = min.proposer.min(s.proposer);
            min.acceptor = min.acceptor.min(s.acceptor);
            max.proposer = max.proposer.max(s.proposer);
            max.acceptor = max.acceptor.max(s.acceptor);
            total.0 += s.proposer;
            total.1 += s.acceptor;
        }
        let count = scores.len() as f64;
        Some(Self {
            size,
            samples: scores.len(),
            mean_proposer: total.0 as f64 / count,
            mean_acceptor: total.1 as f64 / count,
            min,
            max,
        })
    }
}

/// Equal-width histogram over non-negative integers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram {
    /// Inclusive lower bound of the first bin.
    pub start: usize,
    pub width: usize,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bins `values` into at most `bins` buckets spanning min..=max. `None` if empty or `bins == 0`.
    pub fn new(values: &[usize], bins: usize) -> Option<Self> {
        if bins == 0 {
            return None;
        }
        let lo = *values.iter().min()?;
        let hi = *values.iter().max()?;
        let span = hi - lo + 1;
        let width = span.div_ceil(bins).max(1);
        let mut counts = vec![0usize; span.div_ceil(width)];
        for v in values {
            counts[(v - lo) / width] += 1;
        }
        Some(Self {
            start: lo,
            width,
            counts,
        })
    }

    /// Inclusive bounds of bin `i`.
    pub fn bounds(&self, i: usize) -> (usize, usize) {
        let lo = self.start + i * self.width;
        (lo, lo + self.width - 1)
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const BAR: usize = 40;
        let peak = self.counts.iter().copied().max().unwrap_or(0).max(1);
        let label_width = self.bounds(self.counts.len().saturating_sub(1)).1.to_string().len();
        for (i, &count) in self.counts.iter().enumerate() {
            let (lo, hi) = self.bounds(i);
            let bar = "#".repeat(count * BAR / peak);
            writeln!(
                f,
                "{:>w$}-{:<w$} | {:<bar_w$} {}",
                lo,
                hi,
                bar,
                count,
                w = label_width,
                bar_w = BAR
            )?;
        }
        Ok(())
    }
}
