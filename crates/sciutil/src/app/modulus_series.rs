//! Modulus series evaluation
//!
//! This module evaluates Young's modulus over a series of stress/strain
//! samples and summarizes the results.

use crate::constants::{PARALLEL_THRESHOLD, PROGRESS_INTERVAL};
use crate::domain::modulus::{ModulusError, StressStrainSample};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Options for series evaluation
#[derive(Clone)]
pub struct SeriesOptions<F = fn(usize, usize)> {
    /// Force sequential evaluation regardless of series length
    pub sequential: bool,
    /// Progress callback (current, total)
    pub on_progress: Option<F>,
}

impl Default for SeriesOptions<fn(usize, usize)> {
    fn default() -> Self {
        Self {
            sequential: false,
            on_progress: None,
        }
    }
}

impl<F> SeriesOptions<F> {
    /// Force sequential evaluation
    pub fn with_sequential(mut self, sequential: bool) -> Self {
        self.sequential = sequential;
        self
    }

    /// Set the progress callback
    pub fn with_progress<G>(self, callback: G) -> SeriesOptions<G> {
        SeriesOptions {
            sequential: self.sequential,
            on_progress: Some(callback),
        }
    }
}

/// Evaluate Young's modulus for every sample
///
/// Results are returned in input order. Series of at least
/// `PARALLEL_THRESHOLD` samples are processed in parallel using rayon
/// unless `options.sequential` is set.
pub fn modulus_series<F>(
    samples: &[StressStrainSample],
    options: SeriesOptions<F>,
) -> Vec<Result<f64, ModulusError>>
where
    F: Fn(usize, usize) + Sync,
{
    let SeriesOptions {
        sequential,
        on_progress,
    } = options;

    let total = samples.len();
    let progress = AtomicUsize::new(0);

    let evaluate = |sample: &StressStrainSample| {
        let result = sample.modulus();

        if let Some(ref callback) = on_progress {
            let count = progress.fetch_add(1, Ordering::Relaxed);
            if count % PROGRESS_INTERVAL == 0 {
                callback(count, total);
            }
        }

        result
    };

    let results: Vec<_> = if sequential || total < PARALLEL_THRESHOLD {
        samples.iter().map(evaluate).collect()
    } else {
        samples.par_iter().map(evaluate).collect()
    };

    if let Some(ref callback) = on_progress {
        callback(total, total);
    }
    results
}

/// Statistics over a modulus series
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SeriesSummary {
    /// Number of samples with a defined modulus
    pub valid: usize,
    /// Number of samples rejected with an error
    pub rejected: usize,
    /// Mean modulus over valid samples
    pub mean: Option<f64>,
    /// Smallest modulus over valid samples
    pub min: Option<f64>,
    /// Largest modulus over valid samples
    pub max: Option<f64>,
}

/// Summarize the results of `modulus_series`
///
/// NaN moduli count as valid and poison `mean`. `min`/`max` ignore them
/// and stay `None` when every valid modulus is NaN.
pub fn summarize(results: &[Result<f64, ModulusError>]) -> SeriesSummary {
    let mut summary = SeriesSummary::default();
    let mut sum = 0.0f64;

    for value in results {
        match value {
            Ok(modulus) => {
                summary.valid += 1;
                sum += *modulus;
                if modulus.is_nan() {
                    continue;
                }
                summary.min = Some(summary.min.map_or(*modulus, |m| m.min(*modulus)));
                summary.max = Some(summary.max.map_or(*modulus, |m| m.max(*modulus)));
            }
            Err(_) => summary.rejected += 1,
        }
    }

    if summary.valid > 0 {
        summary.mean = Some(sum / summary.valid as f64);
    }
    summary
}
