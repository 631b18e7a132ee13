//! Execution-time measurement for random instances and a power-law fit of time vs size.
//!
//! For precise numbers use the Criterion benches (`cargo bench --bench solve`); this module
//! is the quick sweep the binary prints.

use std::time::{Duration, Instant};

use crate::random_table::{RandomTableConfig, TableGenerator};

/// Mean wall time of `f` over `repetitions` calls. Zero repetitions yield `Duration::ZERO`.
pub fn average_execution_time<F: FnMut()>(repetitions: u32, mut f: F) -> Duration {
    if repetitions == 0 {
        return Duration::ZERO;
    }
    let start = Instant::now();
    for _ in 0..repetitions {
        f();
    }
    start.elapsed() / repetitions
}

/// Mean time to generate, construct and solve one instance of `size`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TimingSample {
    pub size: usize,
    pub mean: Duration,
}

/// Times `repetitions` random solves for each size. Sizes of 0 are skipped.
pub fn time_random_solves(seed: u64, sizes: &[usize], repetitions: u32) -> Vec<TimingSample> {
    sizes
        .iter()
        .filter(|&&size| size > 0)
        .map(|&size| {
            let mut generator = TableGenerator::new(RandomTableConfig { seed, size });
            let mean = average_execution_time(repetitions, || {
                let engine = generator.engine();
                std::hint::black_box(engine.solve());
            });
            log::debug!("timed size={} mean={:?}", size, mean);
            TimingSample { size, mean }
        })
        .collect()
}

/// `t(n) ≈ coefficient * n^exponent` (seconds).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PowerLawFit {
    pub exponent: f64,
    pub coefficient: f64,
}

impl PowerLawFit {
    /// Predicted time in seconds for `n` agents per side.
    pub fn predict(&self, n: usize) -> f64 {
        self.coefficient * (n as f64).powf(self.exponent)
    }
}

/// Least-squares line through `(ln n, ln t)`.
///
/// `None` with fewer than two distinct sizes or when any mean time is zero.
pub fn fit_power_law(samples: &[TimingSample]) -> Option<PowerLawFit> {
    let points: Vec<(f64, f64)> = samples
        .iter()
        .map(|s| ((s.size as f64).ln(), s.mean.as_secs_f64()))
        .filter(|&(_, t)| t > 0.0)
        .map(|(x, t)| (x, t.ln()))
        .collect();
    if points.len() < 2 || points.len() != samples.len() {
        return None;
    }
    let count = points.len() as f64;
    let mean_x = points.iter().map(|p| p.0).sum::<f64>() / count;
    let mean_y = points.iter().map(|p| p.1).sum::<f64>() / count;
    let sxx: f64 = points.iter().map(|p| (p.0 - mean_x).powi(2)).sum();
    if sxx == 0.0 {
        return None;
    }
    let sxy: f64 = points.iter().map(|p| (p.0 - mean_x) * (p.1 - mean_y)).sum();
    let exponent = sxy / sxx;
    Some(PowerLawFit {
        exponent,
        coefficient: (mean_y - exponent * mean_x).exp(),
    })
}
