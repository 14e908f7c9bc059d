//! Mechanism families and the capabilities every family provides.
//!
//! Each family is a unit struct implementing [`Mechanism`] and [`Accuracy`].
//! [`MechanismKind`] dispatches to the family it names.

pub mod gaussian_mechanism;

use crate::base::MechanismKind;
use crate::errors::*;

pub use crate::components::gaussian_mechanism::GaussianMechanism;

/// Bounds and calibration particular to one family of mechanisms.
pub trait Mechanism {
    /// Whether the family can only satisfy approximate (epsilon, delta) privacy.
    fn requires_delta(&self) -> bool;

    /// Check bounds on the privacy parameters that are tied to the family's calibration.
    ///
    /// Bounds shared by every family are checked by
    /// [`crate::utilities::privacy::check_privacy_usage`] first.
    fn check_privacy_parameters(&self, epsilon: f64, delta: f64) -> Result<()>;

    /// Scale of the noise distribution that achieves (epsilon, delta)-differential privacy
    /// for a value with the given sensitivity.
    ///
    /// Arguments must already have passed validation.
    fn noise_scale(&self, epsilon: f64, delta: f64, sensitivity: f64) -> f64;

    /// Variance of the noise distribution with the given scale.
    fn noise_variance(&self, scale: f64) -> f64;
}

/// Conversions between privacy parameters and a statement about the noise magnitude.
///
/// An accuracy `a` at significance `alpha` means `P(|noise| <= a) = 1 - alpha`.
pub trait Accuracy {
    fn privacy_usage_to_accuracy(
        &self, epsilon: f64, delta: f64, sensitivity: f64, alpha: f64,
    ) -> Result<f64>;

    /// The epsilon at which the released value is within `accuracy` of the true value
    /// with probability `1 - alpha`.
    fn accuracy_to_privacy_usage(
        &self, accuracy: f64, alpha: f64, delta: f64, sensitivity: f64,
    ) -> Result<f64>;
}

impl Mechanism for MechanismKind {
    fn requires_delta(&self) -> bool {
        match self {
            MechanismKind::Gaussian => GaussianMechanism.requires_delta()
        }
    }

    fn check_privacy_parameters(&self, epsilon: f64, delta: f64) -> Result<()> {
        match self {
            MechanismKind::Gaussian => GaussianMechanism.check_privacy_parameters(epsilon, delta)
        }
    }

    fn noise_scale(&self, epsilon: f64, delta: f64, sensitivity: f64) -> f64 {
        match self {
            MechanismKind::Gaussian => GaussianMechanism.noise_scale(epsilon, delta, sensitivity)
        }
    }

    fn noise_variance(&self, scale: f64) -> f64 {
        match self {
            MechanismKind::Gaussian => GaussianMechanism.noise_variance(scale)
        }
    }
}

impl Accuracy for MechanismKind {
    fn privacy_usage_to_accuracy(
        &self, epsilon: f64, delta: f64, sensitivity: f64, alpha: f64,
    ) -> Result<f64> {
        match self {
            MechanismKind::Gaussian => GaussianMechanism
                .privacy_usage_to_accuracy(epsilon, delta, sensitivity, alpha)
        }
    }

    fn accuracy_to_privacy_usage(
        &self, accuracy: f64, alpha: f64, delta: f64, sensitivity: f64,
    ) -> Result<f64> {
        match self {
            MechanismKind::Gaussian => GaussianMechanism
                .accuracy_to_privacy_usage(accuracy, alpha, delta, sensitivity)
        }
    }
}
