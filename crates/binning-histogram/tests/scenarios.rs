//! End-to-end bin edge scenarios

use approx::assert_relative_eq;
use binning_histogram::{
    bin_edges, histogram, BinEdgeCalculator, BinningConfig, BinningProcedure, BinningStrategy,
    Error, Sample,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, LogNormal, Normal};
use tracing_subscriber::EnvFilter;

const EPS: f64 = BinEdgeCalculator::EPSILON;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn one_to(n: i32) -> Vec<f64> {
    (1..=n).map(f64::from).collect()
}

#[test]
fn test_sturges_on_one_to_ten() {
    init_tracing();
    let config = BinningConfig::procedural(BinningProcedure::Sturges);
    let edges = bin_edges(&one_to(10), &config).unwrap();

    assert_eq!(edges.len(), 6);
    assert_eq!(edges.lower(), 1.0);
    assert_eq!(edges.upper(), 10.0 + EPS);

    let width = (10.0 + EPS - 1.0) / 5.0;
    for w in edges.widths() {
        assert_relative_eq!(w, width, epsilon = 1e-12);
    }
}

#[test]
fn test_constant_sample_uses_default_bins() {
    init_tracing();
    for procedure in BinningProcedure::ALL {
        let edges = bin_edges(&[5, 5, 5, 5], &BinningConfig::procedural(procedure)).unwrap();
        assert_eq!(edges.len(), BinEdgeCalculator::DEFAULT_BINS + 1, "{procedure}");
        assert_eq!(edges.lower(), 5.0);
        assert_eq!(edges.upper(), 5.0 + EPS);
        assert!(edges.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_fixed_four_bins_on_one_to_hundred() {
    let edges = bin_edges(&one_to(100), &BinningConfig::fixed(4)).unwrap();

    assert_eq!(edges.len(), 5);
    let width = (100.0 + EPS - 1.0) / 4.0;
    for (i, &e) in edges.iter().enumerate() {
        assert_relative_eq!(e, 1.0 + i as f64 * width, epsilon = 1e-9);
    }
    assert_eq!(edges.upper(), 100.0 + EPS);
}

#[test]
fn test_unknown_procedure_is_config_error() {
    let config = BinningConfig {
        procedural: true,
        procedure: "unknown".to_string(),
        ..BinningConfig::default()
    };
    let err = bin_edges(&one_to(10), &config).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
}

#[test]
fn test_empty_sample_is_input_error() {
    let err = bin_edges::<f64>(&[], &BinningConfig::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));

    // Also when the config is bad: the sample is checked first
    let config = BinningConfig {
        procedure: "unknown".to_string(),
        ..BinningConfig::default()
    };
    let err = bin_edges::<f64>(&[], &config).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[test]
fn test_non_finite_sample_is_input_error() {
    let err = bin_edges(&[1.0, f64::NAN, 3.0], &BinningConfig::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[test]
fn test_freedman_default_config() {
    init_tracing();
    // IQR = 49.5, width = 99 * 100^(-1/3) ≈ 21.33, range 99 ⇒ 4.64 ⇒ 4 bins
    let edges = bin_edges(&one_to(100), &BinningConfig::default()).unwrap();
    assert_eq!(edges.num_bins(), 4);
}

#[test]
fn test_freedman_zero_iqr_falls_back() {
    let mut data = vec![1.0; 20];
    data.push(100.0);
    let edges = bin_edges(&data, &BinningConfig::procedural(BinningProcedure::Freedman)).unwrap();
    assert_eq!(edges.num_bins(), BinEdgeCalculator::DEFAULT_BINS);
}

#[test]
fn test_freedman_is_capped() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let normal = Normal::new(0.0, 1.0).unwrap();
    let data: Vec<f64> = (0..10_000).map(|_| normal.sample(&mut rng)).collect();

    let edges = bin_edges(&data, &BinningConfig::procedural(BinningProcedure::Freedman)).unwrap();
    assert_eq!(edges.num_bins(), BinEdgeCalculator::MAX_BINS);
}

#[test]
fn test_square_root() {
    let config = BinningConfig::procedural(BinningProcedure::SquareRoot);
    let edges = bin_edges(&one_to(50), &config).unwrap();
    assert_eq!(edges.num_bins(), 7);
}

#[test]
fn test_doane_skewed_exceeds_sturges_base() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let lognormal = LogNormal::new(0.0, 1.0).unwrap();
    let data: Vec<f64> = (0..200).map(|_| lognormal.sample(&mut rng)).collect();

    let calc = BinEdgeCalculator::new();
    let sample = Sample::new(&data).unwrap();
    let doane = calc.bin_count(&sample, BinningProcedure::Doane.into()).unwrap();
    let base = (1.0 + 200f64.log2()).floor() as usize;
    assert!(doane > base, "doane = {doane}, base = {base}");
    assert!(doane <= BinEdgeCalculator::MAX_BINS);
}

#[test]
fn test_doane_tiny_sample_falls_back() {
    let config = BinningConfig::procedural(BinningProcedure::Doane);
    let edges = bin_edges(&[1.0, 2.0], &config).unwrap();
    assert_eq!(edges.num_bins(), BinEdgeCalculator::DEFAULT_BINS);
}

#[test]
fn test_rice_formula_is_preserved() {
    let calc = BinEdgeCalculator::new();
    let rice = BinningStrategy::Procedural(BinningProcedure::Rice);

    // 2 * 2^(-1/3) ≈ 1.59
    let sample = Sample::new(&[3.0, 4.0]).unwrap();
    assert_eq!(calc.bin_count(&sample, rice).unwrap(), 1);

    // 2 * 9^(-1/3) ≈ 0.96
    let sample = Sample::new(&one_to(9)).unwrap();
    assert_eq!(calc.bin_count(&sample, rice).unwrap(), BinEdgeCalculator::DEFAULT_BINS);

    // Below one bin for any realistic sample
    let sample = Sample::new(&one_to(1000)).unwrap();
    assert_eq!(calc.bin_count(&sample, rice).unwrap(), BinEdgeCalculator::DEFAULT_BINS);
}

#[test]
fn test_single_value_sample() {
    for procedure in BinningProcedure::ALL {
        let edges = bin_edges(&[42.0], &BinningConfig::procedural(procedure)).unwrap();
        assert_eq!(edges.num_bins(), BinEdgeCalculator::DEFAULT_BINS);
        assert_eq!(edges.lower(), 42.0);
    }
}

#[test]
fn test_maximum_falls_in_last_bin() {
    let data = one_to(37);
    let edges = bin_edges(&data, &BinningConfig::procedural(BinningProcedure::Sturges)).unwrap();
    let max = 37.0;
    assert!(max < edges.upper());
    assert_eq!(edges.bin_index(max), Some(edges.num_bins() - 1));

    let hist = edges.histogram(&data);
    assert_eq!(hist.total_count(), data.len());
}

#[test]
fn test_nice_bins_does_not_change_edges() {
    let data = one_to(30);
    let nice = BinningConfig::procedural(BinningProcedure::Sturges).with_nice_bins(true);
    let plain = BinningConfig::procedural(BinningProcedure::Sturges).with_nice_bins(false);
    assert_eq!(bin_edges(&data, &nice).unwrap(), bin_edges(&data, &plain).unwrap());
}

#[test]
fn test_custom_limits() {
    let calc = BinEdgeCalculator::new().with_max_bins(3).with_default_bins(2);
    let sturges = BinningConfig::procedural(BinningProcedure::Sturges);
    assert_eq!(calc.compute(&one_to(100), &sturges).unwrap().num_bins(), 3);
    assert_eq!(calc.compute(&[1.0, 1.0], &sturges).unwrap().num_bins(), 2);

    // Explicit counts ignore the cap
    assert_eq!(calc.compute(&one_to(100), &BinningConfig::fixed(9)).unwrap().num_bins(), 9);
}

#[test]
fn test_config_from_json() {
    let config: BinningConfig = serde_json::from_str(
        r#"{"procedural": false, "procedure": "not-a-procedure", "numBins": 4, "niceBins": true}"#,
    )
    .unwrap();
    let edges = bin_edges(&one_to(100), &config).unwrap();
    assert_eq!(edges.num_bins(), 4);
}

#[test]
fn test_huge_constant_value_stays_increasing() {
    // 1e12 + 1e-8 rounds back to 1e12, so the span is widened
    let edges = bin_edges(&[1e12, 1e12], &BinningConfig::default()).unwrap();
    assert_eq!(edges.num_bins(), BinEdgeCalculator::DEFAULT_BINS);
    assert!(edges.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_constant_sample_at_large_magnitudes() {
    init_tracing();
    // max + 1e-8 is only a few ulps above min from about 1e7 on
    for value in [1e7, 3.5e9, -2e11, 1e17] {
        let data = [value; 4];
        for procedure in BinningProcedure::ALL {
            let config = BinningConfig::procedural(procedure);
            let edges = bin_edges(&data, &config).unwrap();
            assert_eq!(edges.num_bins(), BinEdgeCalculator::DEFAULT_BINS);
            assert!(edges.windows(2).all(|w| w[0] < w[1]), "{value} {procedure}: {edges:?}");
            assert!(edges.lower() <= value && value < edges.upper());

            let hist = histogram(&data, &config).unwrap();
            assert_eq!(hist.total_count(), 4);
            assert!(hist.bins().all(|b| b.density.is_finite() && b.width() > 0.0));
        }
    }
}

#[test]
fn test_tiny_range_at_large_magnitude_stays_increasing() {
    let data = [1e12, 1e12 + 1e-3, 1e12 + 2e-3];
    let edges = bin_edges(&data, &BinningConfig::fixed(50)).unwrap();
    assert_eq!(edges.num_bins(), 50);
    assert!(edges.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(edges.histogram(&data).total_count(), 3);
}

#[test]
fn test_unallocatable_fixed_count_is_an_error() {
    let config: BinningConfig =
        serde_json::from_str(r#"{"procedural": false, "numBins": 18446744073709551615}"#)
            .unwrap();
    let err = bin_edges(&[1.0, 2.0], &config).unwrap_err();
    assert!(matches!(err, Error::Computation(_)));

    let err = histogram(&[1.0, 2.0], &BinningConfig::fixed(usize::MAX / 4)).unwrap_err();
    assert!(matches!(err, Error::Computation(_)));
}
