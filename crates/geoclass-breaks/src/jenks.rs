//! Fisher-Jenks natural breaks
//!
//! Finds the partition of sorted values into `k` contiguous classes that
//! minimizes the summed within-class squared deviation. The solver is the
//! classic O(n²·k) dynamic program over two `(n + 1) × (k + 1)` tables:
//! the best total variance for every prefix length and class count, and the
//! 1-based index where the last class of that optimum starts.
//!
//! Large inputs are not solved directly. Above the configured threshold a
//! number of random samples are solved instead and their breaks averaged,
//! with each sample pinned to the true minimum and maximum. That path
//! depends on the random seed; it is only reproducible when
//! [`JenksConfig::seed`] is set.

use geoclass_core::{Error, JenksConfig, Result};
use num_traits::Float;
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use tracing::{debug, instrument, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Compute `class_count + 1` break values for ascending `sorted` values
///
/// The first break is the minimum, the last is the maximum and each
/// interior break is the largest value of the class below it.
pub fn jenks_breaks<T: Float>(sorted: &[T], class_count: usize) -> Result<Vec<T>> {
    if class_count == 0 {
        return Err(Error::invalid_class_count(class_count));
    }
    if sorted.is_empty() {
        return Err(Error::empty_dataset("natural breaks"));
    }
    Error::check_sufficient(class_count, sorted.len())?;
    check_finite(sorted)?;

    let n = sorted.len();
    let k = class_count;

    // Shift to the first value and scale into [0, 2] so squares cannot
    // overflow. Both are affine, so the optimal partition is unchanged.
    let largest = sorted[0].abs().max(sorted[n - 1].abs());
    let scale = if largest > T::one() { largest } else { T::one() };
    let origin = sorted[0] / scale;
    let cols = k + 1;
    let at = |row: usize, col: usize| row * cols + col;

    let mut class_start = vec![0usize; (n + 1) * cols];
    let mut variance = vec![T::zero(); (n + 1) * cols];
    for j in 1..=k {
        class_start[at(1, j)] = 1;
    }
    for l in 2..=n {
        for j in 1..=k {
            variance[at(l, j)] = T::infinity();
        }
    }

    for l in 2..=n {
        let mut sum = T::zero();
        let mut sum_sq = T::zero();
        let mut count = T::zero();
        let mut v = T::zero();

        // grow the last class backwards from value l
        for m in 1..=l {
            let start = l - m + 1;
            let value = sorted[start - 1] / scale - origin;
            sum_sq = sum_sq + value * value;
            sum = sum + value;
            count = count + T::one();
            v = sum_sq - (sum * sum) / count;

            let prefix = start - 1;
            if prefix != 0 {
                // a prefix of p values holds at most p classes
                for j in 2..=k.min(prefix + 1) {
                    let candidate = v + variance[at(prefix, j - 1)];
                    if variance[at(l, j)] >= candidate {
                        class_start[at(l, j)] = start;
                        variance[at(l, j)] = candidate;
                    }
                }
            }
        }

        class_start[at(l, 1)] = 1;
        variance[at(l, 1)] = v;
    }

    let mut breaks = vec![sorted[0]; k + 1];
    breaks[k] = sorted[n - 1];
    let mut row = n;
    for j in (2..=k).rev() {
        let start = class_start[at(row, j)];
        if start < 2 {
            return Err(Error::invalid_argument(format!(
                "natural breaks found no start for class {j} of {k}"
            )));
        }
        breaks[j - 1] = sorted[start - 2];
        row = start - 1;
    }

    trace!(n, k, "jenks breaks solved");
    Ok(breaks)
}

fn check_finite<T: Float>(values: &[T]) -> Result<()> {
    if values.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite("natural breaks input"));
    }
    Ok(())
}

/// Natural breaks estimated from random samples
///
/// Runs `config.trials` trials, each on `config.sample_size` values drawn
/// without replacement. Trial `i` uses an RNG seeded with `seed + i`, so the
/// result is the same whether trials run sequentially or in parallel.
#[instrument(skip(sorted, config), fields(n = sorted.len()))]
pub fn jenks_breaks_sampled<T>(sorted: &[T], class_count: usize, config: &JenksConfig) -> Result<Vec<T>>
where
    T: Float + Send + Sync,
{
    config.validate()?;
    if sorted.is_empty() {
        return Err(Error::empty_dataset("natural breaks"));
    }
    check_finite(sorted)?;

    let n = sorted.len();
    let sample_size = config.sample_size.min(n);
    let seed = config.seed.unwrap_or_else(|| thread_rng().gen());
    let (min, max) = (sorted[0], sorted[n - 1]);

    debug!(
        "Sampling {} trials of {} values from {} for natural breaks (seed {})",
        config.trials, sample_size, n, seed
    );

    let run_trial = |trial: usize| -> Result<Vec<T>> {
        let mut rng = StdRng::seed_from_u64(seed.wrapping_add(trial as u64));
        let mut indices = rand::seq::index::sample(&mut rng, n, sample_size).into_vec();
        indices.sort_unstable();
        let mut sample: Vec<T> = indices.into_iter().map(|i| sorted[i]).collect();
        sample[0] = min;
        sample[sample_size - 1] = max;
        jenks_breaks(&sample, class_count)
    };

    #[cfg(feature = "parallel")]
    let trials: Vec<Vec<T>> = (0..config.trials)
        .into_par_iter()
        .map(run_trial)
        .collect::<Result<_>>()?;

    #[cfg(not(feature = "parallel"))]
    let trials: Vec<Vec<T>> = (0..config.trials).map(run_trial).collect::<Result<_>>()?;

    let divisor = <T as num_traits::NumCast>::from(trials.len())
        .ok_or_else(|| Error::invalid_argument("trial count not representable"))?;
    let mut breaks: Vec<T> = (0..=class_count)
        .map(|i| trials.iter().fold(T::zero(), |acc, b| acc + b[i] / divisor))
        .collect();

    // averaging may drift the ends by rounding
    breaks[0] = min;
    breaks[class_count] = max;

    Ok(breaks)
}

/// Natural breaks, sampling only when the input exceeds the threshold
pub fn natural_breaks<T>(sorted: &[T], class_count: usize, config: &JenksConfig) -> Result<Vec<T>>
where
    T: Float + Send + Sync,
{
    if sorted.len() > config.sample_threshold {
        jenks_breaks_sampled(sorted, class_count, config)
    } else {
        jenks_breaks(sorted, class_count)
    }
}
