#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::hash::BuildHasherDefault;

use criterion::measurement::WallTime;
use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};
use hll_sketch::{rollup, CardinalitySketch, Sketch};
use hyperloglogplus::HyperLogLog as _;
use pprof::criterion::{Output, PProfProfiler};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tabled::settings::{Settings, Style};
use tabled::{Table, Tabled};
use wyhash::WyHash;

/// Largest benchmarked cardinality unless overridden by the `N` environment variable.
/// Cardinalities are quadrupled per step as [0, 1, 4, 16, ..., N].
const DEFAULT_MAX_CARDINALITY: usize = 1 << 16;

/// Number of shards combined by the `combine` group
const SHARDS: u64 = 16;

/// Elements inserted into every shard
const SHARD_SIZE: u64 = 10_000;

/// Sketches compared per reported relative error
const ERROR_SAMPLES: usize = 100;

criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Protobuf));
    targets = benchmark
}
criterion_main!(benches);

fn benchmark(c: &mut Criterion) {
    let results_path = std::env::var("BENCH_RESULTS_PATH")
        .unwrap_or_else(|_| format!("{}/target", env!("CARGO_MANIFEST_DIR")));
    let max_cardinality = std::env::var("N")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_MAX_CARDINALITY);
    let cardinalities: Vec<usize> = std::iter::once(0)
        .chain((0..).map(|c| 1 << (2 * c)))
        .take_while(|&c| c <= max_cardinality)
        .collect();

    let mut group = c.benchmark_group("insert");
    for &cardinality in &cardinalities {
        group.throughput(Throughput::Elements(cardinality.max(1) as u64));
        bench_insert::<HllSketch>(&mut group, cardinality);
        bench_insert::<AmadeusStreaming>(&mut group, cardinality);
        bench_insert::<HyperLogLogPlus>(&mut group, cardinality);
    }
    group.finish();

    let mut group = c.benchmark_group("estimate");
    group.throughput(Throughput::Elements(1));
    for &cardinality in &cardinalities {
        bench_estimate::<HllSketch>(&mut group, cardinality);
        bench_estimate::<AmadeusStreaming>(&mut group, cardinality);
        bench_estimate::<HyperLogLogPlus>(&mut group, cardinality);
    }
    group.finish();

    let mut group = c.benchmark_group("combine");
    group.throughput(Throughput::Elements(SHARDS));
    bench_combine(&mut group);
    group.finish();

    let report: Vec<Report> = cardinalities
        .iter()
        .map(|&cardinality| Report {
            cardinality,
            heap: heap_usage(cardinality),
            hll_sketch: mean_relative_error::<HllSketch>(cardinality),
            amadeus_streaming: mean_relative_error::<AmadeusStreaming>(cardinality),
            hyperloglogplus: mean_relative_error::<HyperLogLogPlus>(cardinality),
        })
        .collect();

    let markdown = Table::new(report)
        .with(Settings::default().with(Style::markdown()))
        .to_string();
    std::fs::write(format!("{}/sketch_report.md", results_path), markdown).unwrap();
}

/// Minimal surface shared by the compared sketches
trait Compared {
    const NAME: &'static str;
    fn create() -> Self;
    fn add(&mut self, item: u64);
    fn count(&mut self) -> u64;
}

fn filled<E: Compared>(items: impl Iterator<Item = u64>) -> E {
    let mut sketch = E::create();
    items.for_each(|item| sketch.add(item));
    sketch
}

fn bench_insert<E: Compared>(group: &mut BenchmarkGroup<WallTime>, cardinality: usize) {
    group.bench_with_input(
        BenchmarkId::new(E::NAME, cardinality),
        &(cardinality as u64),
        |b, &cardinality| b.iter(|| filled::<E>((0..black_box(cardinality)).map(black_box))),
    );
}

fn bench_estimate<E: Compared>(group: &mut BenchmarkGroup<WallTime>, cardinality: usize) {
    let mut sketch = filled::<E>(0..cardinality as u64);
    group.bench_function(BenchmarkId::new(E::NAME, cardinality), |b| {
        b.iter(|| sketch.count())
    });
}

fn bench_combine(group: &mut BenchmarkGroup<WallTime>) {
    let shards: Vec<Sketch> = (0..SHARDS)
        .map(|shard| filled::<HllSketch>(shard * SHARD_SIZE..(shard + 1) * SHARD_SIZE).0)
        .collect();

    group.bench_function("merge", |b| {
        b.iter(|| {
            shards[1..]
                .iter()
                .try_fold(shards[0].clone(), |mut combined, shard| {
                    combined.merge(black_box(shard))?;
                    Ok::<_, hll_sketch::SketchError>(combined)
                })
                .unwrap()
        })
    });
    group.bench_function("rollup", |b| b.iter(|| rollup(black_box(&shards)).unwrap()));
}

/// Heap bytes and blocks allocated while filling one `Sketch`, beside its inline size
fn heap_usage(cardinality: usize) -> String {
    let _profiler = dhat::Profiler::builder().testing().build();
    let sketch = filled::<HllSketch>(0..cardinality as u64);
    let stats = dhat::HeapStats::get();
    format!(
        "{} / {} / {}",
        std::mem::size_of_val(&sketch),
        stats.total_bytes,
        stats.total_blocks,
    )
}

fn mean_relative_error<E: Compared>(cardinality: usize) -> String {
    if cardinality == 0 {
        return "-".to_string();
    }
    let mut rng = StdRng::seed_from_u64(cardinality as u64);
    let total: f64 = (0..ERROR_SAMPLES)
        .map(|_| {
            let mut sketch = filled::<E>((0..cardinality).map(|_| rng.gen()));
            (sketch.count() as f64 - cardinality as f64).abs() / cardinality as f64
        })
        .sum();
    format!("{:.4}", total / ERROR_SAMPLES as f64)
}

#[derive(Tabled)]
struct Report {
    cardinality: usize,
    heap: String,
    hll_sketch: String,
    amadeus_streaming: String,
    hyperloglogplus: String,
}

struct HllSketch(Sketch);

impl Compared for HllSketch {
    const NAME: &'static str = "hll-sketch";

    fn create() -> Self {
        Self(Sketch::new())
    }

    fn add(&mut self, item: u64) {
        self.0.insert(&item.to_le_bytes());
    }

    fn count(&mut self) -> u64 {
        self.0.estimate()
    }
}

/// Error rate matching 2^14 registers
struct AmadeusStreaming(amadeus_streaming::HyperLogLog<u64>);

impl Compared for AmadeusStreaming {
    const NAME: &'static str = "amadeus-streaming";

    fn create() -> Self {
        Self(amadeus_streaming::HyperLogLog::new(0.008125))
    }

    fn add(&mut self, item: u64) {
        self.0.push(&item);
    }

    fn count(&mut self) -> u64 {
        self.0.len() as u64
    }
}

struct HyperLogLogPlus(hyperloglogplus::HyperLogLogPlus<u64, BuildHasherDefault<WyHash>>);

impl Compared for HyperLogLogPlus {
    const NAME: &'static str = "hyperloglogplus";

    fn create() -> Self {
        Self(hyperloglogplus::HyperLogLogPlus::new(14, BuildHasherDefault::default()).unwrap())
    }

    fn add(&mut self, item: u64) {
        self.0.insert(&item);
    }

    fn count(&mut self) -> u64 {
        self.0.count() as u64
    }
}
