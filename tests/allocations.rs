#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use hll_sketch::{CardinalitySketch, Sketch};
use hyperloglogplus::{HyperLogLog, HyperLogLogPlus};
use std::hash::BuildHasherDefault;
use tabled::{
    settings::{Settings, Style},
    Table, Tabled,
};
use wyhash::WyHash;

#[derive(Tabled)]
struct Record {
    cardinality: usize,
    hll_sketch: String,
    amadeus_streaming: String,
    hyperloglogplus: String,
}

fn measure_memory_usage<T>(
    cardinality: usize,
    create: impl Fn() -> T,
    insert: impl Fn(&mut T, u64),
) -> String
where
    T: Sized,
{
    let _profiler = dhat::Profiler::builder().testing().build();
    let mut estimator = create();
    for i in 0..cardinality as u64 {
        insert(&mut estimator, i);
    }
    let stats = dhat::HeapStats::get();
    format!(
        "{} / {} / {}",
        std::mem::size_of::<T>(),
        stats.total_bytes,
        stats.total_blocks
    )
}

/// Every sketch holds the same register array; inserts and estimates never touch the heap.
fn assert_constant_memory() {
    let _profiler = dhat::Profiler::builder().testing().build();
    let mut sketch: Sketch = Sketch::new();
    let before = dhat::HeapStats::get();

    for i in 0..200_000u64 {
        sketch.insert(&i.to_le_bytes());
    }
    let estimate = sketch.estimate();

    let after = dhat::HeapStats::get();
    dhat::assert_eq!(before.total_blocks, after.total_blocks);
    dhat::assert_eq!(before.total_bytes, after.total_bytes);
    dhat::assert!(estimate > 0);
}

#[test]
fn test_allocations() {
    // dhat allows a single running profiler, so every measurement lives in this test
    assert_constant_memory();

    let results: Vec<Record> = std::iter::once(0)
        .chain((0..).map(|c| 1 << (2 * c)))
        .take_while(|&c| c <= 1 << 18)
        .map(|cardinality| Record {
            cardinality,
            hll_sketch: measure_memory_usage(
                cardinality,
                Sketch::<WyHash>::new,
                |sketch, i| sketch.insert(&i.to_le_bytes()),
            ),
            amadeus_streaming: measure_memory_usage(
                cardinality,
                || amadeus_streaming::HyperLogLog::new(0.008125),
                |est, i| est.push(&i),
            ),
            hyperloglogplus: measure_memory_usage(
                cardinality,
                || {
                    HyperLogLogPlus::<u64, _>::new(14, BuildHasherDefault::<WyHash>::default())
                        .unwrap()
                },
                |est, i| est.insert(&i),
            ),
        })
        .collect();

    let table_config = Settings::default().with(Style::markdown());
    let markdown = Table::new(results).with(table_config).to_string();
    println!("{}", markdown);
}
