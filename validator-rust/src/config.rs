use std::fmt;

use itertools::Itertools;
use tracing::debug;

use crate::base::{ConfigState, MechanismKind, Scalar};
use crate::components::{Accuracy, Mechanism};
use crate::errors::*;
use crate::utilities::prepend;
use crate::utilities::privacy::{check_privacy_usage, check_sensitivity};

/// Parameters of a differentially private mechanism, validated on every mutation.
///
/// A configuration starts out empty. The sensitivity and the privacy parameters
/// `(epsilon, delta)` are bound independently and in any order.
/// Once all three are bound the configuration is complete and may be randomised.
///
/// Setters validate the complete resulting state before committing anything,
/// so a failed call leaves the configuration exactly as it was.
/// Setters return the configuration to allow chaining:
///
/// ```
/// use gaussnoise_validator::{MechanismConfig, ConfigState};
/// # use gaussnoise_validator::errors::*;
/// # fn main() -> Result<()> {
/// let mut mechanism = MechanismConfig::gaussian();
/// mechanism.set_sensitivity(1.)?.set_epsilon_delta(0.5, 0.1)?;
/// assert_eq!(mechanism.state(), ConfigState::Complete);
/// # Ok(())
/// # }
/// ```
///
/// Cloning (or [`MechanismConfig::copy`]) produces a fully independent configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct MechanismConfig {
    kind: MechanismKind,
    // epsilon and delta are only ever bound as a pair
    epsilon_delta: Option<(f64, f64)>,
    sensitivity: Option<f64>,
}

impl MechanismConfig {
    pub fn new(kind: MechanismKind) -> Self {
        MechanismConfig { kind, epsilon_delta: None, sensitivity: None }
    }

    pub fn gaussian() -> Self {
        Self::new(MechanismKind::Gaussian)
    }

    pub fn kind(&self) -> MechanismKind { self.kind }

    pub fn epsilon(&self) -> Option<f64> { self.epsilon_delta.map(|(epsilon, _)| epsilon) }

    pub fn delta(&self) -> Option<f64> { self.epsilon_delta.map(|(_, delta)| delta) }

    pub fn sensitivity(&self) -> Option<f64> { self.sensitivity }

    pub fn state(&self) -> ConfigState {
        ConfigState::new(self.sensitivity.is_some(), self.epsilon_delta.is_some())
    }

    pub fn is_complete(&self) -> bool {
        self.state() == ConfigState::Complete
    }

    /// Bind the sensitivity, replacing any prior value.
    ///
    /// # Arguments
    /// * `sensitivity` - a real number, at least zero. A sensitivity of zero releases values unchanged.
    pub fn set_sensitivity(&mut self, sensitivity: impl Into<Scalar>) -> Result<&mut Self> {
        let sensitivity = sensitivity.into().real().map_err(prepend("sensitivity:"))?;
        check_sensitivity(sensitivity)?;
        if let Some((epsilon, delta)) = self.epsilon_delta {
            self.check_noise_scale(epsilon, delta, sensitivity, "sensitivity:")?;
        }

        self.sensitivity = Some(sensitivity);
        debug!(mechanism = %self.kind, sensitivity, "bound sensitivity");
        Ok(self)
    }

    /// Bind epsilon and delta together, replacing any prior pair.
    ///
    /// Both arguments are type-checked before either is range-checked.
    /// Neither value is committed unless both are valid for this mechanism.
    pub fn set_epsilon_delta(
        &mut self, epsilon: impl Into<Scalar>, delta: impl Into<Scalar>,
    ) -> Result<&mut Self> {
        let epsilon = epsilon.into().real().map_err(prepend("epsilon:"))?;
        let delta = delta.into().real().map_err(prepend("delta:"))?;

        check_privacy_usage(epsilon, delta)?;
        self.kind.check_privacy_parameters(epsilon, delta)?;
        if let Some(sensitivity) = self.sensitivity {
            self.check_noise_scale(epsilon, delta, sensitivity, "epsilon and delta:")?;
        }

        self.epsilon_delta = Some((epsilon, delta));
        debug!(mechanism = %self.kind, epsilon, delta, "bound privacy parameters");
        Ok(self)
    }

    /// Bind epsilon alone, with a delta of zero.
    ///
    /// Mechanisms that require delta always reject this with a value error,
    /// once the argument has passed its type check.
    pub fn set_epsilon(&mut self, epsilon: impl Into<Scalar>) -> Result<&mut Self> {
        let epsilon = epsilon.into().real().map_err(prepend("epsilon:"))?;

        if self.kind.requires_delta() {
            return Err(value_error(format!(
                "delta: the {} mechanism requires a non-zero delta, use set_epsilon_delta", self.kind)))
        }
        self.set_epsilon_delta(epsilon, 0.0)
    }

    /// An independent configuration with the same parameters bound.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Fail with a value error naming the first parameter that is not yet bound.
    pub fn check_complete(&self) -> Result<()> {
        self.parameters().map(|_| ())
    }

    /// Check that the configuration is complete and `value` is real, returning `value` as a float.
    pub fn check_inputs(&self, value: impl Into<Scalar>) -> Result<f64> {
        self.check_complete()?;
        value.into().real().map_err(prepend("value:"))
    }

    /// Standard deviation of the noise added by this mechanism.
    pub fn scale(&self) -> Result<f64> {
        let (epsilon, delta, sensitivity) = self.parameters()?;
        let scale = self.check_noise_scale(epsilon, delta, sensitivity, "scale:")?;
        debug!(mechanism = %self.kind, scale, "calibrated noise scale");
        Ok(scale)
    }

    /// Bias of the released value. The Gaussian mechanism is unbiased.
    pub fn bias(&self, value: impl Into<Scalar>) -> Result<f64> {
        self.check_inputs(value)?;
        Ok(0.0)
    }

    /// Variance of the released value about the true value.
    pub fn variance(&self, value: impl Into<Scalar>) -> Result<f64> {
        self.check_inputs(value)?;
        Ok(self.kind.noise_variance(self.scale()?))
    }

    /// Half-width `a` such that a released value is within `a` of the true value
    /// with probability `1 - alpha`.
    pub fn accuracy(&self, alpha: f64) -> Result<f64> {
        let (epsilon, delta, sensitivity) = self.parameters()?;
        self.kind.privacy_usage_to_accuracy(epsilon, delta, sensitivity, alpha)
    }

    fn check_noise_scale(&self, epsilon: f64, delta: f64, sensitivity: f64, argument: &str) -> Result<f64> {
        let scale = self.kind.noise_scale(epsilon, delta, sensitivity);
        if !scale.is_finite() {
            return Err(value_error(format!(
                "{} noise scale overflows at epsilon = {}, delta = {}, sensitivity = {}",
                argument, epsilon, delta, sensitivity)))
        }
        Ok(scale)
    }

    fn parameters(&self) -> Result<(f64, f64, f64)> {
        let (epsilon, delta) = self.epsilon_delta
            .ok_or_else(|| value_error("epsilon and delta must be set"))?;
        let sensitivity = self.sensitivity
            .ok_or_else(|| value_error("sensitivity must be set"))?;
        Ok((epsilon, delta, sensitivity))
    }
}

impl Default for MechanismConfig {
    fn default() -> Self {
        Self::gaussian()
    }
}

impl fmt::Display for MechanismConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parameters = Vec::new();
        if let Some((epsilon, delta)) = self.epsilon_delta {
            parameters.push(format!("epsilon={}", epsilon));
            parameters.push(format!("delta={}", delta));
        }
        if let Some(sensitivity) = self.sensitivity {
            parameters.push(format!("sensitivity={}", sensitivity));
        }
        write!(f, "{}({})", self.kind, parameters.into_iter().join(", "))
    }
}
