//! Decode error for the tree encoding.

use pbt_json::Json;
use thiserror::Error;

/// A node did not have the shape a codec expected.
///
/// Carries the offending node itself, so a failure deep inside a record or
/// list still points at the exact child that was rejected. Composite codecs
/// return the first child failure unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error decoding from json: {message}\nValue was: {value}")]
pub struct DecodeError {
    pub value: Json,
    pub message: String,
}

impl DecodeError {
    pub fn new(value: Json, message: impl Into<String>) -> Self {
        let message = message.into();
        log::trace!("json decode failed on {} node: {message}", value.kind());
        Self { value, message }
    }
}

/// Wraps a primitive parse failure as `Illegal {type_name} representation`.
pub(crate) fn try_decode<A, E: std::fmt::Display>(
    type_name: &str,
    value: &Json,
    result: Result<A, E>,
) -> Result<A, DecodeError> {
    result.map_err(|e| {
        DecodeError::new(
            value.clone(),
            format!("Illegal {type_name} representation: {e}"),
        )
    })
}
