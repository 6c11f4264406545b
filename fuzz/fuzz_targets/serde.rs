#![no_main]

use hll_sketch::{CardinalitySketch, Sketch};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(mut sketch) = serde_json::from_slice::<Sketch>(data) {
        let serialized = serde_json::to_vec(&sketch).unwrap();
        let restored: Sketch = serde_json::from_slice(&serialized).unwrap();
        assert_eq!(restored, sketch);

        sketch.insert(&1u64.to_le_bytes());
        assert!(sketch.estimate() > 0);
    }
});
