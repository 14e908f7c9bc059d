pub mod privacy;

use crate::errors::*;

/// Prefix an error message with the name of the offending argument, preserving its kind.
///
/// # Example
/// ```
/// use gaussnoise_validator::Scalar;
/// use gaussnoise_validator::utilities::prepend;
/// let error = Scalar::from("Two").real().map_err(prepend("epsilon:")).unwrap_err();
/// assert!(error.is_type_error());
/// assert!(error.to_string().starts_with("epsilon:"));
/// ```
pub fn prepend(text: &str) -> impl Fn(Error) -> Error + '_ {
    move |e| {
        let message = format!("{} {}", text, e);
        match e.kind() {
            ErrorKind::TypeKind(_) => type_error(message),
            ErrorKind::ValueKind(_) => value_error(message),
            _ => message.into()
        }
    }
}
