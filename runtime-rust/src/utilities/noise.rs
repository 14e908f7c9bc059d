use gaussnoise_validator::errors::*;

use ieee754::Ieee754;
use probability::distribution::{Gaussian, Inverse};

use crate::utilities::fill_bytes;

/// Returns random sample from Uniform[min,max).
///
/// All notes below refer to the version that samples from [0,1), before the final scaling takes place.
///
/// The algorithm is taken from Mironov (2012) http://citeseerx.ist.psu.edu/viewdoc/download?doi=10.1.1.366.5957&rep=rep1&type=pdf
///
/// A "precision band" is sampled first. Each band is a range of floating point numbers
/// with the same level of arithmetic precision, situated between consecutive powers of two.
/// The band [1/2,1) is sampled with probability 1/2, [1/4,1/2) with probability 1/4, and so on.
/// A 52-bit mantissa is then sampled uniformly within the band.
///
/// # Arguments
/// * `min` - lower bound of the interval
/// * `max` - upper bound of the interval
///
/// # Example
/// ```
/// use gaussnoise_runtime::utilities::noise::sample_uniform;
/// let n: f64 = sample_uniform(0., 2.).unwrap();
/// assert!(n >= 0. && n < 2.);
/// ```
pub fn sample_uniform(min: f64, max: f64) -> Result<f64> {
    if !(min <= max) {
        return Err(format!("min ({}) may not be greater than max ({})", min, max).into())
    }

    // 56 random bits, of which the leading 52 form the mantissa
    let mut buffer = [0u8; 8];
    fill_bytes(&mut buffer[1..])?;
    let mantissa = u64::from_be_bytes(buffer) >> 4;

    let exponent = sample_floating_point_probability_exponent()?;

    // a float within [2^-exponent, 2^(1-exponent))
    let uniform = f64::recompose_raw(false, (1023 - exponent) as u16, mantissa);

    Ok(uniform * (max - min) + min)
}

/// Return sample from a censored Geometric distribution with parameter p=0.5.
///
/// 1024 bits are generated uniformly at random, and the (1-based) index of the first
/// bit with value 1 is returned. The result is censored at 1023,
/// the number of negative exponents available to a normalized f64.
pub fn sample_floating_point_probability_exponent() -> Result<i16> {
    let mut buffer = [0u8; 128];
    fill_bytes(&mut buffer)?;

    // every byte is inspected, regardless of where the first one lies
    let first_one = buffer.iter().enumerate()
        .fold(None, |first, (index, byte)| first.or_else(|| match *byte {
            0 => None,
            _ => Some(8 * index as i16 + byte.leading_zeros() as i16 + 1)
        }));

    Ok(first_one.unwrap_or(1023).min(1023))
}

/// Sample from the standard normal distribution.
///
/// Uses the inverse cumulative distribution function of a uniform sample.
/// The measure-zero endpoint at 0 is lifted to the smallest positive normal float,
/// so that the sample is always finite.
///
/// # Example
/// ```
/// use gaussnoise_runtime::utilities::noise::sample_standard_gaussian;
/// let z: f64 = sample_standard_gaussian().unwrap();
/// assert!(z.is_finite());
/// ```
pub fn sample_standard_gaussian() -> Result<f64> {
    let probability = sample_uniform(0., 1.)?.max(f64::MIN_POSITIVE);
    Ok(Gaussian::new(0., 1.).inverse(probability))
}

/// Sample from Gaussian distribution centered at shift and scaled by scale.
///
/// # Arguments
/// * `shift` - the center of the distribution
/// * `scale` - the standard deviation of the distribution, at least zero
///
/// # Return
/// Gaussian random variable centered at shift and scaled at scale
pub fn sample_gaussian(shift: f64, scale: f64) -> Result<f64> {
    if !(scale >= 0. && scale.is_finite()) {
        return Err(format!("scale ({}) must be non-negative and finite", scale).into())
    }
    Ok(shift + scale * sample_standard_gaussian()?)
}
