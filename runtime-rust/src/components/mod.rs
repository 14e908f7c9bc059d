//! Capability trait implementations
//!
//! The validator crate describes and validates mechanisms; it never draws noise.
//! Drawing noise is a behaviour added here, as a trait implemented on the validated configuration.

use gaussnoise_validator::Scalar;
use gaussnoise_validator::errors::*;

use ndarray::ArrayD;

pub mod mechanisms;

/// Randomisable mechanism trait
pub trait Randomise {
    /// Privatize a single value.
    ///
    /// # Arguments
    /// * `value` - the true value, must be a real number
    ///
    /// # Returns
    /// The true value with freshly drawn noise added.
    /// Fails with a value error if the configuration is incomplete,
    /// and with a type error if `value` is not a real number.
    fn randomise(&self, value: impl Into<Scalar>) -> Result<f64>;

    /// Privatize each element of an array, drawing independent noise for every element.
    fn randomise_array(&self, data: &ArrayD<f64>) -> Result<ArrayD<f64>>;
}
