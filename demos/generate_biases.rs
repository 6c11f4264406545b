//! Regenerate the default bias table.
//!
//! ```text
//! HLL_BIAS_LOG=1 cargo run --release --example generate_biases > src/bias_data.rs
//! ```
//!
//! `REPEATS` and `N` override the number of sets per point and the set size.

use hll_sketch::generate::VERBOSE_ENV;
use hll_sketch::{generate_biases, GenerationOptions};
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let defaults = GenerationOptions::default();
    let options = GenerationOptions {
        max_cardinality: env_or("N", defaults.max_cardinality),
        repeats: env_or("REPEATS", defaults.repeats),
        ..defaults
    };
    if std::env::var(VERBOSE_ENV).as_deref() != Ok("1") {
        eprintln!("set {}=1 to log progress", VERBOSE_ENV);
    }

    let mut rng = StdRng::from_entropy();
    let sampler = || -> String {
        (&mut rng)
            .sample_iter(&Alphanumeric)
            .take(20)
            .map(char::from)
            .collect()
    };
    let estimates = generate_biases(sampler, &options)
        .expect("invalid generation options");

    println!("//! Default bias correction curve for `P = 14`.");
    println!("//!");
    println!("//! Produced by `cargo run --release --example generate_biases` with the default");
    println!(
        "//! `GenerationOptions` (`max_cardinality = {}`, `repeats = {}`, `initial_step = {}`,",
        options.max_cardinality, options.repeats, options.initial_step
    );
    println!(
        "//! `step_rate = {}`), one entry per interpolation point.",
        options.step_rate
    );
    println!("//!");
    println!(
        "//! Each entry is `(raw estimate, bias)`: the averaged raw harmonic estimate measured at the"
    );
    println!(
        "//! interpolation point and the averaged `true cardinality / raw estimate` multiplier."
    );
    println!();
    println!("#[rustfmt::skip]");
    println!("#[allow(clippy::excessive_precision)]");
    println!(
        "pub(crate) const DEFAULT_BIASES: [(u64, f64); {}] = [",
        estimates.len()
    );
    for row in estimates.chunks(3) {
        let entries: Vec<String> = row
            .iter()
            .map(|e| format!("({}, {:?}),", e.raw_estimated_cardinality, e.bias))
            .collect();
        println!("    {}", entries.join(" "));
    }
    println!("];");
}
