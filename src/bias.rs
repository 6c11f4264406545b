//! ## Bias table
//! Empirical correction curve used by [`Sketch::estimate`](crate::Sketch) for mid-range
//! cardinalities, where the harmonic mean raw estimate is still heavily biased.
//!
//! A table is a sorted list of ticks, each with the multiplier measured at that tick.
//! A raw estimate `x` is corrected by averaging the multipliers of the 2 ticks at or below
//! `x` and the 2 ticks above it.
//!
//! Tables are immutable once built and are shared between sketches through [`Arc`].

use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

use crate::bias_data::DEFAULT_BIASES;
use crate::error::SketchError;
use crate::generate::BiasEstimate;

/// Number of neighbour ticks averaged by interpolation
const NEIGHBOURS: usize = 4;

/// Table shipped with the crate, built on first use
static DEFAULT_TABLE: LazyLock<Arc<BiasTable>> =
    LazyLock::new(|| Arc::new(BiasTable::from_sorted(&DEFAULT_BIASES)));

/// Sorted calibration curve mapping ticks to bias multipliers.
#[derive(Debug, Clone, PartialEq)]
pub struct BiasTable {
    /// Strictly increasing ticks
    ticks: Vec<u64>,
    /// Multiplier measured at `ticks[i]`
    biases: Vec<f64>,
}

impl BiasTable {
    /// Create new `BiasTable` from `(tick, bias)` pairs in any order.
    ///
    /// Duplicate ticks collapse into one entry holding the last bias given for them.
    pub fn new<I>(biases: I) -> Result<Self, SketchError>
    where
        I: IntoIterator<Item = (u64, f64)>,
    {
        let store: BTreeMap<u64, f64> = biases.into_iter().collect();
        if store.is_empty() {
            return Err(SketchError::EmptyBiases);
        }
        let (ticks, biases) = store.into_iter().unzip();
        Ok(Self { ticks, biases })
    }

    /// Create new `BiasTable` from the output of [`generate_biases`](crate::generate_biases).
    ///
    /// Ticks are the averaged raw estimates, since that is the value the table is queried with.
    pub fn from_estimates(estimates: &[BiasEstimate]) -> Result<Self, SketchError> {
        Self::new(
            estimates
                .iter()
                .map(|e| (e.raw_estimated_cardinality, e.bias)),
        )
    }

    /// Return shared instance of the table shipped with the crate
    pub fn default_table() -> Arc<Self> {
        Arc::clone(&DEFAULT_TABLE)
    }

    fn from_sorted(pairs: &[(u64, f64)]) -> Self {
        let (ticks, biases) = pairs.iter().copied().unzip();
        Self { ticks, biases }
    }

    /// Return sorted ticks
    #[inline]
    pub fn ticks(&self) -> &[u64] {
        &self.ticks
    }

    /// Return largest tick
    #[inline]
    pub fn max_tick(&self) -> u64 {
        self.ticks.last().copied().unwrap_or(0)
    }

    /// Return bias stored for exactly `tick`
    pub fn bias(&self, tick: u64) -> Option<f64> {
        self.ticks
            .binary_search(&tick)
            .ok()
            .map(|idx| self.biases[idx])
    }

    /// Return number of ticks
    #[inline]
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    /// Return the 4 ticks surrounding `x`: 2 at or below and 2 above.
    ///
    /// Clamps to the first 4 ticks when `x` underflows and to the last 4 when it overflows.
    pub fn neighbour_ticks(&self, x: u64) -> [u64; NEIGHBOURS] {
        self.neighbour_indices(x).map(|idx| self.ticks[idx])
    }

    /// Return unweighted mean of the biases of the neighbour ticks of `x`
    #[inline]
    pub fn interpolated_bias(&self, x: u64) -> f64 {
        let sum: f64 = self
            .neighbour_indices(x)
            .iter()
            .map(|&idx| self.biases[idx])
            .sum();
        sum / NEIGHBOURS as f64
    }

    #[inline]
    fn neighbour_indices(&self, x: u64) -> [usize; NEIGHBOURS] {
        let len = self.ticks.len();
        let last = len.saturating_sub(1);
        // number of ticks at or below `x`
        let below = self.ticks.partition_point(|&tick| tick <= x);
        let start = below
            .saturating_sub(NEIGHBOURS / 2)
            .min(len.saturating_sub(NEIGHBOURS));
        // tables shorter than `NEIGHBOURS` repeat their last tick
        std::array::from_fn(|i| (start + i).min(last))
    }
}
