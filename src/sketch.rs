//! Sketch allows to estimate number of distinct elements in the stream or dataset
//! using a fixed amount of memory: `M = 2^P` one-byte registers with `P = 14`.
//!
//! # Data-structure design rationale
//!
//! ## Predictable memory
//! Precision and register width are fixed, so every sketch occupies the same
//! 16 KiB register array no matter how many elements were inserted. Inserting
//! never allocates.
//!
//! ## Register update
//! A 64-bit hash is split into:
//! - 0..13 bits    - register index (most significant `P` bits).
//! - 14..63 bits   - remnant, whose leading zero count plus one is the rank.
//!
//! Each register keeps the largest rank it has seen, so inserts are idempotent
//! and merging two sketches is a per-register maximum.
//!
//! ## Estimation
//! - Raw estimate: `alpha * used^2 / sum(2^-rank)` over the `used` non-zero registers.
//! - Raw estimates above the bias table range are returned as is.
//! - Raw estimates below `LINEAR_COUNTING_THRESHOLD` use linear counting
//!   over the number of zero registers.
//! - Everything in between is scaled by the interpolated bias from the
//!   sketch's [`BiasTable`].
//!
//! ## Concurrency
//! `insert` and `merge` take `&mut self`; a sketch has one writer at a time.
//! Independent sketches can be filled on separate threads and combined with
//! [`rollup`](crate::rollup).

use std::fmt::{Debug, Formatter};
use std::hash::{BuildHasher, BuildHasherDefault, Hasher};
use std::mem::size_of;
use std::sync::Arc;

use wyhash::WyHash;

use crate::bias::BiasTable;
use crate::error::SketchError;
use crate::registry::BiasRegistry;

/// Number of hash bits used for register indices
pub const PRECISION: usize = 14;
/// Number of registers
pub const REGISTERS: usize = 1 << PRECISION;
/// Format version stamped on new sketches
pub const CURRENT_VERSION: &str = "1";
/// Raw estimates below this value are replaced by linear counting
pub const LINEAR_COUNTING_THRESHOLD: u64 = 11_500;

/// Number of hash bits left after the register index
const REMNANT: usize = 64 - PRECISION;
/// Mask selecting the remnant (14 zeros followed by 50 ones)
const REMNANT_MASK: u64 = (1 << REMNANT) - 1;
/// Largest rank a register can hold (all remnant bits zero)
pub(crate) const MAX_RANK: u8 = (REMNANT + 1) as u8;

/// Harmonic mean bias correction constant `1 / (2 ln 2)`.
///
/// Paper: http://algo.inria.fr/flajolet/Publications/FlFuGaMe07.pdf
const ALPHA: f64 = 1.0 / (2.0 * std::f64::consts::LN_2);

/// Common operations of a cardinality sketch.
pub trait CardinalitySketch {
    /// Insert an element
    fn insert(&mut self, element: &[u8]);

    /// Return cardinality estimate of everything inserted so far
    fn estimate(&self) -> u64;

    /// Merge `other` into `self`, returning `self` for chaining.
    ///
    /// Fails without touching `self` when versions or register counts differ.
    fn merge(&mut self, other: &Self) -> Result<&mut Self, SketchError>;
}

/// Raw register access shared by merge and rollup.
pub(crate) trait RegisterAccess {
    fn registers(&self) -> &[u8];
    fn version(&self) -> &str;
}

/// Fail when `rhs` was not produced with the same version and precision as `lhs`
pub(crate) fn ensure_compatible(
    lhs: &impl RegisterAccess,
    rhs: &impl RegisterAccess,
) -> Result<(), SketchError> {
    if lhs.version() != rhs.version() {
        return Err(SketchError::VersionMismatch {
            expected: lhs.version().to_string(),
            found: rhs.version().to_string(),
        });
    }
    if lhs.registers().len() != rhs.registers().len() {
        return Err(SketchError::PrecisionMismatch {
            expected: lhs.registers().len(),
            found: rhs.registers().len(),
        });
    }
    Ok(())
}

/// Return register index and rank of the given hash.
///
/// Rank counts leading zeros over exactly the `64 - P` remnant bits, plus one so that
/// an updated register is never zero.
#[inline]
pub(crate) fn register_and_rank(hash: u64) -> (usize, u8) {
    let idx = (hash >> REMNANT) as usize;
    let rank = ((hash & REMNANT_MASK).leading_zeros() as usize - PRECISION + 1) as u8;
    (idx, rank)
}

/// Hash `element` with a fresh `H`
#[inline]
pub(crate) fn hash_element<H: Hasher + Default>(element: &[u8]) -> u64 {
    let mut hasher = BuildHasherDefault::<H>::default().build_hasher();
    hasher.write(element);
    hasher.finish()
}

/// Fixed precision HyperLogLog sketch.
pub struct Sketch<H: Hasher + Default = WyHash> {
    /// One rank per register, `0` for untouched registers
    pub(crate) registers: Vec<u8>,
    /// Format version of the producer
    pub(crate) version: String,
    /// Bias table used by `estimate`
    biases: Arc<BiasTable>,
    /// Zero-sized build hasher
    build_hasher: BuildHasherDefault<H>,
}

impl<H: Hasher + Default> Sketch<H> {
    /// Creates new empty `Sketch` using the default bias table
    #[inline]
    pub fn new() -> Self {
        Self::with_biases(BiasTable::default_table())
    }

    /// Creates new empty `Sketch` using the given bias table
    pub fn with_biases(biases: Arc<BiasTable>) -> Self {
        Self::from_raw_parts(CURRENT_VERSION.to_string(), vec![0; REGISTERS], biases)
    }

    /// Creates new empty `Sketch` using the biases registered under `key` in `registry`
    pub fn from_registry(registry: &BiasRegistry, key: &str) -> Result<Self, SketchError> {
        registry
            .get(key)
            .map(Self::with_biases)
            .ok_or_else(|| SketchError::UnknownBiases(key.to_string()))
    }

    /// Creates new empty `Sketch` using the biases registered under `key` in the
    /// process-wide registry (see [`register_biases`](crate::register_biases))
    pub fn with_registered_biases(key: &str) -> Result<Self, SketchError> {
        Self::from_registry(BiasRegistry::global(), key)
    }

    /// Rebuild a persisted sketch from its version and widened registers.
    ///
    /// The result uses the default bias table. Fails when the register count is not
    /// `REGISTERS` or any register holds a rank no hash can produce.
    pub fn from_parts(version: impl Into<String>, registers: &[u32]) -> Result<Self, SketchError> {
        if registers.len() != REGISTERS {
            return Err(SketchError::Malformed(format!(
                "expected {} registers, found {}",
                REGISTERS,
                registers.len()
            )));
        }
        let registers = registers
            .iter()
            .enumerate()
            .map(|(idx, &rank)| match u8::try_from(rank) {
                Ok(rank) if rank <= MAX_RANK => Ok(rank),
                _ => Err(SketchError::Malformed(format!(
                    "register {} holds rank {} above {}",
                    idx, rank, MAX_RANK
                ))),
            })
            .collect::<Result<Vec<u8>, SketchError>>()?;

        Ok(Self::from_raw_parts(
            version.into(),
            registers,
            BiasTable::default_table(),
        ))
    }

    #[inline]
    pub(crate) fn from_raw_parts(
        version: String,
        registers: Vec<u8>,
        biases: Arc<BiasTable>,
    ) -> Self {
        Self {
            registers,
            version,
            biases,
            build_hasher: BuildHasherDefault::default(),
        }
    }

    /// Return format version of this sketch
    #[inline]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Return bias table used for estimation
    #[inline]
    pub fn bias_table(&self) -> &Arc<BiasTable> {
        &self.biases
    }

    /// Replace bias table used for estimation; registers are left untouched
    #[inline]
    pub fn set_bias_table(&mut self, biases: Arc<BiasTable>) {
        self.biases = biases;
    }

    /// Insert already hashed element into `Sketch`
    #[inline]
    pub fn insert_hash(&mut self, hash: u64) {
        let (idx, rank) = register_and_rank(hash);
        let register = &mut self.registers[idx];
        if rank > *register {
            *register = rank;
        }
    }

    /// Return harmonic mean estimate without linear counting or bias correction
    pub fn raw_estimate(&self) -> u64 {
        let (used, sum) = self
            .registers
            .iter()
            .filter(|&&rank| rank != 0)
            .fold((0u32, 0.0f64), |(used, sum), &rank| {
                (used + 1, sum + 0.5f64.powi(i32::from(rank)))
            });

        // nothing inserted
        if used == 0 {
            return 0;
        }

        let used = f64::from(used);
        (ALPHA * used * used / sum) as u64
    }

    /// Return linear counting estimate, or `None` when no register is zero
    #[inline]
    fn linear_counting(&self) -> Option<u64> {
        let zeros = self.zero_registers();
        if zeros == 0 {
            return None;
        }
        let m = self.registers.len() as f64;
        Some((m * (m / zeros as f64).ln()) as u64)
    }

    /// Return number of untouched registers
    #[inline]
    pub(crate) fn zero_registers(&self) -> usize {
        self.registers.iter().filter(|&&rank| rank == 0).count()
    }

    /// Return memory size of `Sketch`
    pub fn size_of(&self) -> usize {
        size_of::<Self>() + self.registers.len() + self.version.len()
    }
}

impl<H: Hasher + Default> CardinalitySketch for Sketch<H> {
    /// Insert an element into `Sketch`
    #[inline]
    fn insert(&mut self, element: &[u8]) {
        let mut hasher = self.build_hasher.build_hasher();
        hasher.write(element);
        self.insert_hash(hasher.finish());
    }

    /// Return cardinality estimate
    fn estimate(&self) -> u64 {
        let raw = self.raw_estimate();

        // above calibrated range, residual bias is negligible
        if raw > self.biases.max_tick() {
            return raw;
        }

        if raw < LINEAR_COUNTING_THRESHOLD {
            // with no zero registers raw is at least `2 * ALPHA * M`, so this fallback
            // only triggers for a threshold above that bound
            return self.linear_counting().unwrap_or(raw);
        }

        (self.biases.interpolated_bias(raw) * raw as f64) as u64
    }

    /// Merge `other` into `Sketch` by taking per-register maximum
    fn merge(&mut self, other: &Self) -> Result<&mut Self, SketchError> {
        ensure_compatible(&*self, other)?;
        self.registers
            .iter_mut()
            .zip(&other.registers)
            .for_each(|(lhs, &rhs)| *lhs = (*lhs).max(rhs));
        Ok(self)
    }
}

impl<H: Hasher + Default> RegisterAccess for Sketch<H> {
    #[inline]
    fn registers(&self) -> &[u8] {
        &self.registers
    }

    #[inline]
    fn version(&self) -> &str {
        &self.version
    }
}

impl<H: Hasher + Default> Default for Sketch<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Hasher + Default> Clone for Sketch<H> {
    fn clone(&self) -> Self {
        Self::from_raw_parts(
            self.version.clone(),
            self.registers.clone(),
            Arc::clone(&self.biases),
        )
    }
}

impl<H: Hasher + Default> PartialEq for Sketch<H> {
    /// Compare version and registers; bias tables are not part of sketch identity
    fn eq(&self, rhs: &Self) -> bool {
        self.version == rhs.version && self.registers == rhs.registers
    }
}

impl<H: Hasher + Default> Debug for Sketch<H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ version: {:?}, estimate: {}, size: {} }}",
            self.version,
            self.estimate(),
            self.size_of()
        )
    }
}
