use gaussnoise_validator::components::{GaussianMechanism, Mechanism};
use gaussnoise_validator::errors::*;
use gaussnoise_validator::utilities::privacy::{check_privacy_usage, check_sensitivity};

use crate::utilities::noise;

/// Privatize a value with the classical Gaussian mechanism.
///
/// # Arguments
/// * `value` - true value to privatize
/// * `epsilon` - multiplicative privacy loss parameter, within (0, 1)
/// * `delta` - additive privacy loss parameter, within (0, 1)
/// * `sensitivity` - upper bound on the L2 sensitivity of the value
///
/// # Return
/// The value with noise from `N(0, sigma^2)` added,
/// where `sigma = sqrt(2 ln(1.25 / delta)) * sensitivity / epsilon`.
///
/// # Example
/// ```
/// use gaussnoise_runtime::utilities::mechanisms::gaussian_mechanism;
/// let released = gaussian_mechanism(22.3, 0.1, 1e-6, 1.).unwrap();
/// assert!(gaussian_mechanism(22.3, 1.5, 1e-6, 1.).is_err());
/// ```
pub fn gaussian_mechanism(value: f64, epsilon: f64, delta: f64, sensitivity: f64) -> Result<f64> {
    check_sensitivity(sensitivity)?;
    check_privacy_usage(epsilon, delta)?;
    GaussianMechanism.check_privacy_parameters(epsilon, delta)?;

    let scale = GaussianMechanism.noise_scale(epsilon, delta, sensitivity);
    if !scale.is_finite() {
        return Err(value_error(format!("noise scale overflows at epsilon = {}, sensitivity = {}", epsilon, sensitivity)))
    }
    add_gaussian_noise(value, scale)
}

/// Add noise with standard deviation `scale` to `value`.
///
/// A scale of zero returns `value` unchanged, without consuming entropy.
pub fn add_gaussian_noise(value: f64, scale: f64) -> Result<f64> {
    if scale == 0. {
        return Ok(value)
    }
    noise::sample_gaussian(value, scale)
}
