//! Compares the bin counts each procedure picks for differently shaped samples
//!
//! Run with `RUST_LOG=binning_histogram=debug` to see the intermediate values.

use binning_histogram::{BinEdgeCalculator, BinningConfig, BinningProcedure};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Exp, LogNormal, Normal};
use tracing_subscriber::EnvFilter;

fn main() -> binning_histogram::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let normal = Normal::new(50.0, 10.0).expect("valid normal parameters");
    let exponential = Exp::new(0.5).expect("valid rate");
    let lognormal = LogNormal::new(0.0, 1.0).expect("valid lognormal parameters");

    let samples: Vec<(&str, Vec<f64>)> = vec![
        ("normal", (0..500).map(|_| normal.sample(&mut rng)).collect()),
        ("exponential", (0..500).map(|_| exponential.sample(&mut rng)).collect()),
        ("lognormal", (0..500).map(|_| lognormal.sample(&mut rng)).collect()),
        ("constant", vec![7.0; 50]),
    ];

    let calc = BinEdgeCalculator::new();

    for (name, data) in &samples {
        println!("=== {name} (n = {}) ===", data.len());
        for procedure in BinningProcedure::ALL {
            let config = BinningConfig::procedural(procedure);
            let hist = calc.histogram(data, &config)?;
            println!(
                "  {:<12} {:>2} bins, counts = {:?}",
                procedure.as_str(),
                hist.len(),
                hist.counts()
            );
        }

        let fixed = calc.compute(data, &BinningConfig::fixed(5))?;
        println!("  {:<12} edges = {:.3?}", "fixed(5)", fixed.as_slice());
        println!();
    }

    Ok(())
}
