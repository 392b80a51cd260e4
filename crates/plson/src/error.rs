//! Decode error for the flat encoding.

use thiserror::Error;

/// A string did not have the shape a codec expected.
///
/// `value` is the exact fragment handed to the failing codec; for a list
/// element that is the unescaped element text, not the whole list string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error decoding from value: {message}\nValue was: {value}")]
pub struct DecodeError {
    pub value: String,
    pub message: String,
}

impl DecodeError {
    pub fn new(value: impl Into<String>, message: impl Into<String>) -> Self {
        let value = value.into();
        let message = message.into();
        log::trace!("plson decode failed on {value:?}: {message}");
        Self { value, message }
    }
}

pub(crate) fn try_decode<A, E: std::fmt::Display>(
    type_name: &str,
    value: &str,
    result: Result<A, E>,
) -> Result<A, DecodeError> {
    result.map_err(|e| DecodeError::new(value, format!("Illegal {type_name} representation: {e}")))
}
