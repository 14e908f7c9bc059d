use std::cmp::Ordering;

use crate::errors::*;

/// Check the privacy parameters against the bounds common to every mechanism.
///
/// Mechanism-specific bounds are checked separately by each mechanism family,
/// see [`crate::components::Mechanism::check_privacy_parameters`].
///
/// # Arguments
/// * `epsilon` - multiplicative privacy loss parameter, must be non-negative
/// * `delta` - additive privacy loss parameter, must lie in [0, 1)
pub fn check_privacy_usage(epsilon: f64, delta: f64) -> Result<()> {
    match epsilon.partial_cmp(&0.0)
        .ok_or_else(|| value_error("epsilon: must not be NaN"))? {
        Ordering::Less => return Err(value_error("epsilon: privacy parameter may not be less than 0")),
        Ordering::Equal | Ordering::Greater => ()
    }

    match delta.partial_cmp(&0.0)
        .ok_or_else(|| value_error("delta: must not be NaN"))? {
        Ordering::Less => return Err(value_error("delta: privacy parameter may not be less than 0")),
        Ordering::Equal => (),
        Ordering::Greater => if delta >= 1.0 {
            return Err(value_error("delta: must be smaller than one"))
        }
    }

    if epsilon == 0.0 && delta == 0.0 {
        return Err(value_error("epsilon and delta may not both be zero"))
    }
    Ok(())
}

/// Check that a sensitivity is a usable bound on the change between neighboring inputs.
///
/// Zero is allowed, and releases the value unchanged.
pub fn check_sensitivity(sensitivity: f64) -> Result<()> {
    if sensitivity.is_nan() {
        return Err(value_error("sensitivity: must not be NaN"))
    }
    if sensitivity < 0.0 {
        return Err(value_error(format!("sensitivity: must be non-negative, found {}", sensitivity)))
    }
    if sensitivity.is_infinite() {
        return Err(value_error("sensitivity: must be finite"))
    }
    Ok(())
}

/// Check the significance level of an accuracy statement.
pub fn check_alpha(alpha: f64) -> Result<()> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(value_error(format!("alpha: must be within (0, 1), found {}", alpha)))
    }
    Ok(())
}
