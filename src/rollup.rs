//! Single pass N-way merge of sketches.

use std::hash::Hasher;
use std::sync::Arc;

use crate::error::SketchError;
use crate::sketch::{ensure_compatible, Sketch};

/// Combine `sketches` into a new sketch holding the per-register maximum of all inputs.
///
/// Every sketch must share the version and register count of the first one; this is
/// checked before any register is read. The result keeps the common input version and
/// the bias table of the first sketch, so rolling up `[a, b]` is equivalent to merging
/// `b` into a clone of `a`, without the intermediate mutations.
pub fn rollup<'a, H, I>(sketches: I) -> Result<Sketch<H>, SketchError>
where
    H: Hasher + Default + 'a,
    I: IntoIterator<Item = &'a Sketch<H>>,
{
    let sketches: Vec<&Sketch<H>> = sketches.into_iter().collect();
    let (first, rest) = sketches.split_first().ok_or(SketchError::EmptyRollup)?;
    for sketch in rest {
        ensure_compatible(*first, *sketch)?;
    }

    let sources: Vec<&[u8]> = sketches
        .iter()
        .map(|sketch| sketch.registers.as_slice())
        .collect();
    let registers = (0..first.registers.len())
        .map(|idx| {
            sources
                .iter()
                .map(|registers| registers[idx])
                .max()
                .unwrap_or(0)
        })
        .collect();

    Ok(Sketch::from_raw_parts(
        first.version.clone(),
        registers,
        Arc::clone(first.bias_table()),
    ))
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::bias::BiasTable;
    use crate::sketch::{CardinalitySketch, REGISTERS};
    use test_case::test_case;
    use wyhash::WyHash;

    fn sketch_with(version: &str, set: &[usize]) -> Sketch {
        let mut sketch = Sketch::new();
        sketch.version = version.to_string();
        for &idx in set {
            sketch.registers[idx] = 1;
        }
        sketch
    }

    #[test]
    fn test_rollup_empty() {
        let sketches: Vec<Sketch> = Vec::new();
        assert_eq!(rollup(&sketches).unwrap_err(), SketchError::EmptyRollup);
        assert_eq!(
            rollup(std::iter::empty::<&Sketch>()).unwrap_err(),
            SketchError::EmptyRollup
        );
    }

    #[test]
    fn test_rollup_version_mismatch() {
        let sketches = [sketch_with("TEST0", &[]), sketch_with("TEST1", &[])];
        assert!(matches!(
            rollup(&sketches),
            Err(SketchError::VersionMismatch { .. })
        ));
    }

    #[test]
    fn test_rollup_precision_mismatch() {
        let mut malformed = Sketch::<WyHash>::new();
        malformed.registers = vec![0; 1];
        let sketches = [Sketch::new(), malformed];
        assert_eq!(
            rollup(&sketches).unwrap_err(),
            SketchError::PrecisionMismatch {
                expected: REGISTERS,
                found: 1
            }
        );
    }

    #[test_case(vec![vec![0], vec![1]] => vec![0, 1]; "two sketches")]
    #[test_case(vec![vec![0, 5], vec![5], vec![9]] => vec![0, 5, 9]; "three sketches")]
    #[test_case(vec![vec![3]] => vec![3]; "single sketch")]
    fn test_rollup(sets: Vec<Vec<usize>>) -> Vec<usize> {
        let sketches: Vec<Sketch> = sets.iter().map(|set| sketch_with("1", set)).collect();
        let rolled = rollup(&sketches).unwrap();
        rolled
            .registers
            .iter()
            .enumerate()
            .filter(|(_, &rank)| rank > 0)
            .map(|(idx, _)| idx)
            .collect()
    }

    #[test]
    fn test_rollup_takes_maximum() {
        let mut a = Sketch::<WyHash>::new();
        let mut b = Sketch::<WyHash>::new();
        let mut c = Sketch::<WyHash>::new();
        a.registers[0] = 3;
        b.registers[0] = 7;
        c.registers[0] = 5;
        c.registers[1] = 2;

        let rolled = rollup([&a, &b, &c]).unwrap();
        assert_eq!(&rolled.registers[..3], &[7, 2, 0]);
    }

    #[test]
    fn test_rollup_keeps_common_version() {
        let sketches = [sketch_with("TEST", &[0]), sketch_with("TEST", &[1])];
        assert_eq!(rollup(&sketches).unwrap().version(), "TEST");
    }

    #[test]
    fn test_rollup_keeps_first_bias_table() {
        let custom = Arc::new(BiasTable::new([(1, 1.0)]).unwrap());
        let first = Sketch::<WyHash>::with_biases(Arc::clone(&custom));
        let second = Sketch::<WyHash>::new();
        let rolled = rollup([&first, &second]).unwrap();
        assert!(Arc::ptr_eq(rolled.bias_table(), &custom));
    }

    #[test]
    fn test_rollup_equals_merge() {
        let mut a = Sketch::<WyHash>::new();
        let mut b = Sketch::<WyHash>::new();
        for i in 0..20_000u32 {
            a.insert(&i.to_le_bytes());
            b.insert(&(i + 10_000).to_le_bytes());
        }

        let rolled = rollup([&a, &b]).unwrap();
        let mut merged = a.clone();
        merged.merge(&b).unwrap();

        assert_eq!(rolled, merged);
        assert_eq!(rolled.estimate(), merged.estimate());
    }

    #[test]
    fn test_rollup_leaves_inputs_unchanged() {
        let a = sketch_with("1", &[0]);
        let b = sketch_with("1", &[1]);
        let (a_before, b_before) = (a.clone(), b.clone());
        rollup([&a, &b]).unwrap();
        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }
}
