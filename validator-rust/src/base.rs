use std::fmt;

use num::Complex;

use crate::errors::*;

/// An atomic value supplied by a caller.
///
/// Mechanism parameters and the values to be privatized must be real numbers.
/// The other variants exist so that a non-real argument is rejected with a
/// type error before any range check is made.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Complex(Complex<f64>),
}

impl Scalar {
    /// Retrieve the value as a real number.
    ///
    /// Integers are widened to floats.
    /// Strings, booleans and complex numbers are type errors,
    /// even a complex number with no imaginary part.
    pub fn real(&self) -> Result<f64> {
        match self {
            Scalar::Float(value) => Ok(*value),
            Scalar::Int(value) => Ok(*value as f64),
            Scalar::Bool(value) => Err(self.not_real(value)),
            Scalar::Str(value) => Err(self.not_real(format!("{:?}", value))),
            Scalar::Complex(value) => Err(self.not_real(value)),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Bool(_) => "bool",
            Scalar::Int(_) => "int",
            Scalar::Float(_) => "float",
            Scalar::Str(_) => "string",
            Scalar::Complex(_) => "complex",
        }
    }

    fn not_real(&self, value: impl fmt::Display) -> Error {
        type_error(format!("expected a real number, found the {} {}", self.type_name(), value))
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self { Scalar::Float(value) }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self { Scalar::Float(value as f64) }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self { Scalar::Int(value) }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self { Scalar::Int(value as i64) }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self { Scalar::Int(value as i64) }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self { Scalar::Bool(value) }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self { Scalar::Str(value.to_string()) }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self { Scalar::Str(value) }
}

impl From<Complex<f64>> for Scalar {
    fn from(value: Complex<f64>) -> Self { Scalar::Complex(value) }
}

/// The family of noise distribution a mechanism draws from.
///
/// Each family shares the configuration lifecycle in [`crate::MechanismConfig`],
/// but carries its own bounds on the privacy parameters and its own calibration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MechanismKind {
    Gaussian,
}

impl fmt::Display for MechanismKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MechanismKind::Gaussian => write!(f, "Gaussian"),
        }
    }
}

/// Position of a configuration in the lattice of bound parameters.
///
/// Sensitivity and the privacy parameters are bound independently.
/// Only `Complete` configurations may be randomised.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigState {
    Empty,
    SensitivityOnly,
    EpsilonDeltaOnly,
    Complete,
}

impl ConfigState {
    pub fn new(has_sensitivity: bool, has_epsilon_delta: bool) -> Self {
        match (has_sensitivity, has_epsilon_delta) {
            (false, false) => ConfigState::Empty,
            (true, false) => ConfigState::SensitivityOnly,
            (false, true) => ConfigState::EpsilonDeltaOnly,
            (true, true) => ConfigState::Complete,
        }
    }
}


#[cfg(test)]
mod test_scalar {
    use num::Complex;

    use crate::base::{ConfigState, Scalar};

    #[test]
    fn numeric_variants_are_real() {
        assert_eq!(Scalar::from(0.25).real().unwrap(), 0.25);
        assert_eq!(Scalar::from(3_i64).real().unwrap(), 3.);
        assert_eq!(Scalar::from(2_u32).real().unwrap(), 2.);
        assert_eq!(Scalar::from(-1_i32).real().unwrap(), -1.);
    }

    #[test]
    fn non_numeric_variants_are_type_errors() {
        assert!(Scalar::from("Two").real().unwrap_err().is_type_error());
        assert!(Scalar::from(String::from("1.0")).real().unwrap_err().is_type_error());
        assert!(Scalar::from(true).real().unwrap_err().is_type_error());
        assert!(Scalar::from(Complex::new(1., 2.)).real().unwrap_err().is_type_error());
        // no narrowing of complex numbers, even when the imaginary part vanishes
        assert!(Scalar::from(Complex::new(1., 0.)).real().unwrap_err().is_type_error());
    }

    #[test]
    fn type_errors_name_the_type() {
        assert_eq!(
            Scalar::from("Two").real().unwrap_err().to_string(),
            "expected a real number, found the string \"Two\"");
        assert_eq!(
            Scalar::from(Complex::new(1., 2.)).real().unwrap_err().to_string(),
            "expected a real number, found the complex 1+2i");
        assert_eq!(Scalar::from(false).type_name(), "bool");
        assert_eq!(Scalar::from(1_i64).type_name(), "int");
        assert_eq!(Scalar::from(1.).type_name(), "float");
    }

    #[test]
    fn state_lattice() {
        assert_eq!(ConfigState::new(false, false), ConfigState::Empty);
        assert_eq!(ConfigState::new(true, false), ConfigState::SensitivityOnly);
        assert_eq!(ConfigState::new(false, true), ConfigState::EpsilonDeltaOnly);
        assert_eq!(ConfigState::new(true, true), ConfigState::Complete);
    }
}
