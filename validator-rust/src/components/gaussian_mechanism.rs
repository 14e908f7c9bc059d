use statrs::function::erf;

use crate::components::{Accuracy, Mechanism};
use crate::errors::*;
use crate::utilities::privacy::{check_alpha, check_privacy_usage, check_sensitivity};

/// The classical Gaussian mechanism.
///
/// Adds noise from `N(0, sigma^2)` where
/// `sigma = sqrt(2 ln(1.25 / delta)) * sensitivity / epsilon`.
/// This calibration is only proven for `0 < epsilon < 1`.
/// See Theorem A.1 of [Dwork & Roth (2014)](https://www.cis.upenn.edu/~aaroth/Papers/privacybook.pdf).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GaussianMechanism;

impl Mechanism for GaussianMechanism {
    fn requires_delta(&self) -> bool {
        true
    }

    fn check_privacy_parameters(&self, epsilon: f64, delta: f64) -> Result<()> {
        if epsilon == 0.0 {
            return Err(value_error("epsilon: may not be zero for the Gaussian mechanism"))
        }

        if delta == 0.0 {
            return Err(value_error("delta: may not be zero for the Gaussian mechanism"))
        }

        if epsilon >= 1.0 {
            return Err(value_error(format!(
                "epsilon: a privacy parameter of epsilon = {} is in use. \
                Privacy is only guaranteed for the Gaussian mechanism for epsilon between 0 and 1.",
                epsilon)))
        }
        Ok(())
    }

    fn noise_scale(&self, epsilon: f64, delta: f64, sensitivity: f64) -> f64 {
        (2.0 * (1.25 / delta).ln()).sqrt() * sensitivity / epsilon
    }

    fn noise_variance(&self, scale: f64) -> f64 {
        scale.powi(2)
    }
}

impl Accuracy for GaussianMechanism {
    fn privacy_usage_to_accuracy(
        &self, epsilon: f64, delta: f64, sensitivity: f64, alpha: f64,
    ) -> Result<f64> {
        check_alpha(alpha)?;
        let sigma = self.noise_scale(epsilon, delta, sensitivity);
        Ok(sigma * 2.0_f64.sqrt() * erf::erf_inv(1.0_f64 - alpha))
    }

    fn accuracy_to_privacy_usage(
        &self, accuracy: f64, alpha: f64, delta: f64, sensitivity: f64,
    ) -> Result<f64> {
        check_alpha(alpha)?;
        check_sensitivity(sensitivity)?;
        if !(accuracy > 0.0 && accuracy.is_finite()) {
            return Err(value_error(format!("accuracy: must be positive and finite, found {}", accuracy)))
        }
        if !(delta > 0.0 && delta < 1.0) {
            return Err(value_error(format!("delta: must be within (0, 1), found {}", delta)))
        }

        // the scale at epsilon = 1, scaled by the quantile of the accuracy statement
        let sigma = (2.0 * (1.25 / delta).ln()).sqrt() * sensitivity / accuracy;
        let epsilon = sigma * 2.0_f64.sqrt() * erf::erf_inv(1.0_f64 - alpha);

        check_privacy_usage(epsilon, delta)
            .and_then(|_| self.check_privacy_parameters(epsilon, delta))
            .chain_err(|| ErrorKind::ValueKind(format!(
                "accuracy: {} at alpha = {} is not attainable by the Gaussian mechanism", accuracy, alpha)))?;
        Ok(epsilon)
    }
}
