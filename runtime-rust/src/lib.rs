//! Randomisation for the differentially private Gaussian mechanism.
//!
//! The [`Randomise`] trait is implemented for the validated
//! [`MechanismConfig`](gaussnoise_validator::MechanismConfig).
//! A configuration only accepts randomisation requests once it is complete.
//!
//! ```
//! use gaussnoise_validator::MechanismConfig;
//! use gaussnoise_runtime::Randomise;
//! # use gaussnoise_validator::errors::*;
//! # fn main() -> Result<()> {
//! let mut mechanism = MechanismConfig::gaussian();
//! mechanism.set_sensitivity(1.)?.set_epsilon_delta(0.5, 0.1)?;
//! let released: f64 = mechanism.randomise(12.)?;
//! # Ok(())
//! # }
//! ```

pub mod components;
pub mod utilities;

pub use crate::components::Randomise;
