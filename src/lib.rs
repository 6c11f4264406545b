//! `hll-sketch` is a Rust crate for estimating the number of distinct elements in a stream or
//! dataset using a fixed 16 KiB HyperLogLog sketch.
//!
//! Estimates combine a harmonic mean raw estimate, linear counting for small cardinalities and
//! an empirical bias correction curve for the range in between. Sketches built independently
//! can be merged pairwise or rolled up in a single pass, and the bias correction curve can be
//! regenerated for a specific workload with [`generate_biases`].
//!
//! ```
//! use hll_sketch::{rollup, CardinalitySketch, Sketch};
//!
//! let mut lhs: Sketch = Sketch::new();
//! let mut rhs: Sketch = Sketch::new();
//! for i in 0..1000u32 {
//!     lhs.insert(&i.to_le_bytes());
//!     rhs.insert(&(i + 500).to_le_bytes());
//! }
//!
//! let combined = rollup([&lhs, &rhs]).unwrap();
//! lhs.merge(&rhs).unwrap();
//! assert_eq!(combined.estimate(), lhs.estimate());
//! ```
mod bias;
mod bias_data;
pub mod error;
pub mod generate;
mod registry;
mod rollup;
#[cfg(feature = "with_serde")]
mod serde;
pub mod sketch;

pub use bias::BiasTable;
pub use error::{ErrorKind, SketchError};
pub use generate::{generate_biases, generate_biases_with_hasher, BiasEstimate, GenerationOptions};
pub use registry::{register_biases, BiasRegistry};
pub use rollup::rollup;
pub use sketch::{CardinalitySketch, Sketch};
