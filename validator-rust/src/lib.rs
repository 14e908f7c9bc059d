//! Parameter validation for the differentially private Gaussian mechanism.
//!
//! A [`MechanismConfig`] is built incrementally from a sensitivity and a pair of
//! privacy parameters `(epsilon, delta)`. Every mutation is validated against the
//! complete resulting state before it is committed, so a configuration is never
//! observed in a partially-updated or out-of-range state.
//!
//! Drawing noise is the concern of the runtime crate; this crate contains no randomness.

// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]
#[macro_use]
extern crate error_chain;

#[doc(hidden)]
pub mod errors {
    // Create the Error, ErrorKind, ResultExt, and Result types
    // TypeKind: an argument is not a real number
    // ValueKind: an argument is out of range, or a prerequisite parameter is missing
    error_chain! {
        errors {
            TypeKind(message: String) {
                description("argument is not a real number")
                display("{}", message)
            }
            ValueKind(message: String) {
                description("argument is out of range")
                display("{}", message)
            }
        }
    }

    impl Error {
        pub fn is_type_error(&self) -> bool {
            matches!(self.kind(), ErrorKind::TypeKind(_))
        }

        pub fn is_value_error(&self) -> bool {
            matches!(self.kind(), ErrorKind::ValueKind(_))
        }
    }

    pub fn type_error<T: Into<String>>(message: T) -> Error {
        ErrorKind::TypeKind(message.into()).into()
    }

    pub fn value_error<T: Into<String>>(message: T) -> Error {
        ErrorKind::ValueKind(message.into()).into()
    }
}

#[doc(hidden)]
pub use errors::*;

pub mod base;
pub mod components;
pub mod config;
pub mod utilities;

pub use crate::base::{ConfigState, MechanismKind, Scalar};
pub use crate::config::MechanismConfig;
