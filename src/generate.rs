//! Offline bias calibration.
//!
//! [`generate_biases`] measures how far the raw harmonic estimate drifts from the true
//! cardinality by filling sketches with synthetic sets of known size. Its output feeds
//! [`BiasTable::from_estimates`](crate::BiasTable::from_estimates) or
//! [`BiasRegistry::register`](crate::BiasRegistry::register) when the shipped table does
//! not fit a workload.
//!
//! Progress is logged with `tracing` when the `HLL_BIAS_LOG` environment variable is `1`.

use std::collections::HashSet;
use std::hash::Hasher;

use tracing::info;
use wyhash::WyHash;

use crate::error::SketchError;
use crate::sketch::{hash_element, Sketch, REGISTERS};

/// Environment variable enabling progress logging
pub const VERBOSE_ENV: &str = "HLL_BIAS_LOG";

/// Averaged raw estimate and bias measured over many sets of exactly
/// `true_cardinality` unique elements.
///
/// A raw estimate of `raw_estimated_cardinality` multiplied by `bias` lands close to
/// `true_cardinality`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BiasEstimate {
    pub true_cardinality: u64,
    pub raw_estimated_cardinality: u64,
    pub bias: f64,
}

/// Parameters of [`generate_biases`].
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    /// Size of every generated set, must exceed the number of registers
    pub max_cardinality: u64,
    /// Number of sets averaged per interpolation point
    pub repeats: usize,
    /// Distance between interpolation points in the first tenth of the range
    pub initial_step: u64,
    /// Step multiplier applied at every following tenth of the range
    pub step_rate: f64,
}

impl Default for GenerationOptions {
    /// Options used to produce the shipped bias table
    fn default() -> Self {
        Self {
            max_cardinality: 7 * REGISTERS as u64,
            repeats: 5_000,
            initial_step: 50,
            step_rate: 1.25,
        }
    }
}

impl GenerationOptions {
    /// Fail on options that cannot produce a calibration curve
    pub fn validate(&self) -> Result<(), SketchError> {
        if self.max_cardinality <= REGISTERS as u64 {
            return Err(SketchError::InvalidOptions(
                "max cardinality must be greater than the number of registers",
            ));
        }
        if self.repeats == 0 {
            return Err(SketchError::InvalidOptions(
                "repeats must be greater than 0",
            ));
        }
        if self.initial_step == 0 {
            return Err(SketchError::InvalidOptions(
                "initial step must be greater than 0",
            ));
        }
        if !(self.step_rate > 0.0 && self.step_rate.is_finite()) {
            return Err(SketchError::InvalidOptions(
                "step rate must be a finite number greater than 0",
            ));
        }
        Ok(())
    }
}

/// Generate bias estimates for elements produced by `sampler`.
///
/// For every interpolation point `c` and every one of `options.repeats` sets, the raw
/// estimate of a sketch holding the first `c` elements of the set is recorded along with
/// `c / raw`. Results are averaged per point and returned in ascending point order.
///
/// Depending on `options` this takes a long time; the defaults run 5000 sets of
/// 114688 elements.
///
/// WARNING: if `sampler` cannot produce `options.max_cardinality` distinct elements,
/// this never returns.
pub fn generate_biases<F, T>(
    sampler: F,
    options: &GenerationOptions,
) -> Result<Vec<BiasEstimate>, SketchError>
where
    F: FnMut() -> T,
    T: AsRef<[u8]>,
{
    generate_biases_with_hasher::<WyHash, F, T>(sampler, options)
}

/// Same as [`generate_biases`], measuring sketches that hash elements with `H`.
///
/// Use it to calibrate a curve for `Sketch<H>` with a non-default hasher.
pub fn generate_biases_with_hasher<H, F, T>(
    mut sampler: F,
    options: &GenerationOptions,
) -> Result<Vec<BiasEstimate>, SketchError>
where
    H: Hasher + Default,
    F: FnMut() -> T,
    T: AsRef<[u8]>,
{
    options.validate()?;

    let verbose = verbose_enabled();
    let points = interpolation_points(
        options.max_cardinality,
        options.initial_step,
        options.step_rate,
    );
    if verbose {
        info!(
            points = points.len(),
            repeats = options.repeats,
            max_cardinality = options.max_cardinality,
            "generating bias estimates"
        );
    }

    let mut raw_sums = vec![0u64; points.len()];
    let mut bias_sums = vec![0f64; points.len()];

    for repeat in 0..options.repeats {
        if verbose && repeat % 100 == 0 {
            info!(repeat, repeats = options.repeats, "generating set");
        }

        let set = generate_set::<H, _, _>(&mut sampler, options.max_cardinality);

        // a sketch over the first `c` hashes is a prefix of the one over the first `c' > c`
        let mut sketch = Sketch::<H>::new();
        let mut inserted = 0;
        for (idx, &cardinality) in points.iter().enumerate() {
            let cardinality_idx = cardinality as usize;
            set[inserted..cardinality_idx]
                .iter()
                .for_each(|&hash| sketch.insert_hash(hash));
            inserted = cardinality_idx;

            let raw = sketch.raw_estimate();
            raw_sums[idx] += raw;
            bias_sums[idx] += cardinality as f64 / raw as f64;
        }
    }

    let estimates: Vec<BiasEstimate> = points
        .iter()
        .zip(raw_sums.iter().zip(&bias_sums))
        .map(|(&cardinality, (&raw_sum, &bias_sum))| BiasEstimate {
            true_cardinality: cardinality,
            raw_estimated_cardinality: raw_sum / options.repeats as u64,
            bias: bias_sum / options.repeats as f64,
        })
        .collect();

    if verbose {
        for (idx, estimate) in estimates.iter().enumerate() {
            info!(
                point = idx + 1,
                points = estimates.len(),
                true_cardinality = estimate.true_cardinality,
                raw_estimate = estimate.raw_estimated_cardinality,
                bias = estimate.bias,
                "bias estimate"
            );
        }
    }

    Ok(estimates)
}

/// Return interpolation points in `(0, max_cardinality)`.
///
/// The range is split into tenths; points start `initial_step` apart and the step is
/// multiplied by `step_rate` whenever the walk crosses into the next tenth. The point `0`
/// is excluded. Steps are capped at `max_cardinality`, so any finite positive rate ends
/// the walk without overflow.
pub fn interpolation_points(max_cardinality: u64, initial_step: u64, step_rate: f64) -> Vec<u64> {
    let range = max_cardinality / 10;
    let mut step = initial_step.clamp(1, max_cardinality.max(1));
    let mut next_change = range;

    let mut points = Vec::new();
    let mut point: u64 = 0;
    while point < max_cardinality {
        if point > next_change {
            next_change = next_change.saturating_add(range);
            step = ((step as f64 * step_rate) as u64).clamp(1, max_cardinality);
        }
        if point > 0 {
            points.push(point);
        }
        point = match point.checked_add(step) {
            Some(next) => next,
            None => break,
        };
    }
    points
}

/// Return `max_cardinality` distinct hashes of elements drawn from `sampler`, in draw order.
///
/// Never returns if `sampler` produces fewer than `max_cardinality` distinct hashes.
pub fn generate_set<H, F, T>(sampler: &mut F, max_cardinality: u64) -> Vec<u64>
where
    H: Hasher + Default,
    F: FnMut() -> T,
    T: AsRef<[u8]>,
{
    let len = max_cardinality as usize;
    let mut uniques = HashSet::with_capacity(len);
    let mut set = Vec::with_capacity(len);
    while set.len() < len {
        let hash = hash_element::<H>(sampler().as_ref());
        if uniques.insert(hash) {
            set.push(hash);
        }
    }
    set
}

fn verbose_enabled() -> bool {
    std::env::var(VERBOSE_ENV).is_ok_and(|value| value == "1")
}
