pub mod mechanisms;
pub mod noise;

use gaussnoise_validator::errors::*;

/// Fill `buffer` with bytes from a cryptographically secure entropy source.
///
/// Reads from OpenSSL when the `use-openssl` feature is enabled,
/// otherwise from the operating system under the `use-os-entropy` feature.
#[cfg(feature = "use-openssl")]
pub fn fill_bytes(buffer: &mut [u8]) -> Result<()> {
    openssl::rand::rand_bytes(buffer)
        .map_err(|e| format!("OpenSSL error: {:?}", e).into())
}

#[cfg(all(feature = "use-os-entropy", not(feature = "use-openssl")))]
pub fn fill_bytes(buffer: &mut [u8]) -> Result<()> {
    use rand::RngCore;
    rand::rngs::OsRng.try_fill_bytes(buffer)
        .map_err(|e| format!("operating system entropy error: {}", e).into())
}


#[cfg(not(any(feature = "use-openssl", feature = "use-os-entropy")))]
compile_error!("an entropy source is required: enable either the use-openssl or the use-os-entropy feature");
