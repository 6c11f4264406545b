use hll_sketch::{rollup, CardinalitySketch, Sketch};

fn main() {
    let mut sketch1: Sketch = Sketch::new();
    for i in 0..10u64 {
        sketch1.insert(&i.to_le_bytes());
    }
    println!("sketch1 estimate = {}", sketch1.estimate());

    let mut sketch2: Sketch = Sketch::new();
    for i in 10..15u64 {
        sketch2.insert(&i.to_le_bytes());
    }
    println!("sketch2 estimate = {}", sketch2.estimate());

    let rolled = rollup([&sketch1, &sketch2]).expect("sketches share a version");
    println!("rollup estimate = {}", rolled.estimate());

    sketch1.merge(&sketch2).expect("sketches share a version");
    println!("merged estimate = {}", sketch1.estimate());
}
