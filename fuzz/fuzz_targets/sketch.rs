#![no_main]

use hll_sketch::{rollup, CardinalitySketch, Sketch};
use libfuzzer_sys::fuzz_target;
use wyhash::wyhash;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let split_index = wyhash(data, 0) as usize % data.len();
    let (first_half, second_half) = data.split_at(split_index);

    let mut sketch1: Sketch = Sketch::new();
    for chunk in first_half.chunks(4) {
        sketch1.insert(chunk);
        assert!(sketch1.estimate() > 0);
    }

    let mut sketch2: Sketch = Sketch::new();
    for chunk in second_half.chunks(4) {
        sketch2.insert(chunk);
        assert!(sketch2.estimate() > 0);
    }

    let rolled = rollup([&sketch1, &sketch2]).unwrap();
    sketch1.merge(&sketch2).unwrap();
    assert_eq!(rolled, sketch1);
    assert_eq!(rolled.size_of(), sketch2.size_of());
});
