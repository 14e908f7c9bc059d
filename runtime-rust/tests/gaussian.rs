use gaussnoise_runtime::Randomise;
use gaussnoise_validator::{ConfigState, MechanismConfig};

use ndarray::Array1;
use ndarray::Axis;
use ndarray_stats::{interpolate, QuantileExt};
use noisy_float::types::n64;
use num::Complex;
use proptest::prelude::*;
use statrs::distribution::{Normal, Univariate};

fn mechanism() -> MechanismConfig {
    let mut mechanism = MechanismConfig::gaussian();
    mechanism.set_sensitivity(1.).unwrap().set_epsilon_delta(0.5, 0.1).unwrap();
    mechanism
}

fn median(values: Vec<f64>) -> f64 {
    let mut values: Array1<_> = values.into_iter().map(n64).collect();
    let median = values.quantile_axis_mut(Axis(0), n64(0.5), &interpolate::Lower).unwrap();
    median[()].raw()
}

#[test]
fn not_none() {
    let mechanism = MechanismConfig::default();
    let copy = mechanism.copy();
    assert_eq!(copy.state(), ConfigState::Empty);
}

#[test]
fn no_params() {
    assert!(MechanismConfig::gaussian().randomise(1.).unwrap_err().is_value_error());
}

#[test]
fn no_sensitivity() {
    let mut mechanism = MechanismConfig::gaussian();
    mechanism.set_epsilon_delta(0.5, 0.1).unwrap();
    assert!(mechanism.randomise(1.).unwrap_err().is_value_error());
}

#[test]
fn no_epsilon() {
    let mut mechanism = MechanismConfig::gaussian();
    mechanism.set_sensitivity(1.).unwrap();
    assert!(mechanism.randomise(1.).unwrap_err().is_value_error());
}

#[test]
fn no_delta() {
    let mut mechanism = MechanismConfig::gaussian();
    mechanism.set_sensitivity(1.).unwrap();
    assert!(mechanism.set_epsilon(0.5).unwrap_err().is_value_error());
}

#[test]
fn large_epsilon() {
    let mut mechanism = MechanismConfig::gaussian();
    mechanism.set_sensitivity(1.).unwrap();
    assert!(mechanism.set_epsilon_delta(1.5, 0.1).unwrap_err().is_value_error());
}

#[test]
fn complex_epsilon() {
    assert!(MechanismConfig::gaussian().set_epsilon(Complex::new(1., 2.)).unwrap_err().is_type_error());
}

#[test]
fn string_epsilon() {
    assert!(MechanismConfig::gaussian().set_epsilon("Two").unwrap_err().is_type_error());
}

#[test]
fn non_numeric() {
    assert!(mechanism().randomise("Hello").unwrap_err().is_type_error());
}

#[test]
fn failed_randomise_leaves_config_usable() {
    let mechanism = mechanism();
    let before = mechanism.copy();
    assert!(mechanism.randomise("Hello").is_err());
    assert_eq!(mechanism, before);
    assert!(mechanism.randomise(0.).is_ok());
}

#[test]
fn copy_is_independent() {
    let mut original = mechanism();

    let mut copy = original.copy();
    copy.set_sensitivity(0.).unwrap();
    assert!((0..20).all(|_| copy.randomise(2.5).unwrap() == 2.5));
    assert!((0..20).any(|_| original.randomise(2.5).unwrap() != 2.5));

    let copy = original.copy();
    original.set_sensitivity(0.).unwrap();
    assert!((0..20).all(|_| original.randomise(2.5).unwrap() == 2.5));
    assert!((0..20).any(|_| copy.randomise(2.5).unwrap() != 2.5));
}

#[test]
fn zero_median() {
    let mechanism = mechanism();
    // the standard error of the median is near 0.018 at this sample size
    let released = (0..100_000)
        .map(|_| mechanism.randomise(0.5).unwrap())
        .collect::<Vec<f64>>();

    assert!((median(released) - 0.5).abs() < 0.1);
}

#[test]
fn neighbors() {
    let epsilon = 0.5_f64;
    let runs = 10_000;
    let mechanism = mechanism();

    let mut count = [0, 0];
    for _ in 0..runs {
        if mechanism.randomise(0.).unwrap() <= 0.5 { count[0] += 1 }
        if mechanism.randomise(1.).unwrap() <= 0.5 { count[1] += 1 }
    }

    assert!(count[0] > count[1]);
    let p0 = count[0] as f64 / runs as f64;
    let p1 = count[1] as f64 / runs as f64;
    assert!(p0 <= epsilon.exp() * p1 + 0.1);
}

#[test]
fn matches_reference_distribution() {
    let mechanism = mechanism();
    let reference = Normal::new(0., mechanism.scale().unwrap()).unwrap();

    let runs = 10_000;
    let below = (0..runs)
        .filter(|_| mechanism.randomise(0.).unwrap() <= 0.5)
        .count() as f64 / runs as f64;

    assert!((below - reference.cdf(0.5)).abs() < 0.025);
}

#[test]
fn accuracy_coverage() {
    let mechanism = mechanism();
    let accuracy = mechanism.accuracy(0.05).unwrap();

    let runs = 10_000;
    let covered = (0..runs)
        .filter(|_| mechanism.randomise(0.).unwrap().abs() <= accuracy)
        .count() as f64 / runs as f64;

    assert!((covered - 0.95).abs() < 0.015);
}

#[test]
fn overflowing_scale_never_completes() {
    let mut mechanism = MechanismConfig::gaussian();
    assert!(mechanism.set_sensitivity(1e308).unwrap().set_epsilon_delta(0.5, 0.1).is_err());
    assert!(!mechanism.is_complete());

    let error = mechanism.randomise(0.).unwrap_err();
    assert!(error.is_value_error());
}

proptest! {
    #[test]
    fn randomise_fails_only_with_type_or_value_errors(
        sensitivity in 0.0..f64::MAX,
        epsilon in prop_oneof![1e-323..1e-300f64, 1e-6..0.999f64],
        delta in 1e-300..0.999f64,
        value in -1e300..1e300f64,
    ) {
        let mut mechanism = MechanismConfig::gaussian();
        let _ = mechanism.set_sensitivity(sensitivity);
        let _ = mechanism.set_epsilon_delta(epsilon, delta);

        match mechanism.randomise(value) {
            Ok(released) => {
                prop_assert!(mechanism.is_complete());
                prop_assert!(!released.is_nan());
            }
            Err(error) => prop_assert!(error.is_type_error() || error.is_value_error()),
        }
    }

    #[test]
    fn zero_sensitivity_is_identity(value in -1e300..1e300f64, epsilon in 1e-6..0.999f64, delta in 1e-12..0.999f64) {
        let mut mechanism = MechanismConfig::gaussian();
        mechanism.set_sensitivity(0.).unwrap().set_epsilon_delta(epsilon, delta).unwrap();
        prop_assert_eq!(mechanism.randomise(value).unwrap(), value);
    }

    #[test]
    fn incomplete_configurations_never_randomise(sensitivity in 0.0..10f64, value in -1e6..1e6f64) {
        let mut mechanism = MechanismConfig::gaussian();
        prop_assert!(mechanism.randomise(value).unwrap_err().is_value_error());
        mechanism.set_sensitivity(sensitivity).unwrap();
        prop_assert!(mechanism.randomise(value).unwrap_err().is_value_error());
    }
}
