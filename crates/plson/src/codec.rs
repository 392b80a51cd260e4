use std::sync::Arc;

use crate::DecodeError;

/// Paired encode/decode between a domain type and a flat string.
pub trait PlsonCodec {
    type Value;

    fn encode(&self, value: &Self::Value) -> String;

    /// # Errors
    ///
    /// Returns a [`DecodeError`] when `value` cannot be parsed into
    /// [`Self::Value`].
    fn decode(&self, value: &str) -> Result<Self::Value, DecodeError>;
}

impl<C: PlsonCodec + ?Sized> PlsonCodec for &C {
    type Value = C::Value;

    fn encode(&self, value: &Self::Value) -> String {
        (**self).encode(value)
    }

    fn decode(&self, value: &str) -> Result<Self::Value, DecodeError> {
        (**self).decode(value)
    }
}

impl<C: PlsonCodec + ?Sized> PlsonCodec for Box<C> {
    type Value = C::Value;

    fn encode(&self, value: &Self::Value) -> String {
        (**self).encode(value)
    }

    fn decode(&self, value: &str) -> Result<Self::Value, DecodeError> {
        (**self).decode(value)
    }
}

impl<C: PlsonCodec + ?Sized> PlsonCodec for Arc<C> {
    type Value = C::Value;

    fn encode(&self, value: &Self::Value) -> String {
        (**self).encode(value)
    }

    fn decode(&self, value: &str) -> Result<Self::Value, DecodeError> {
        (**self).decode(value)
    }
}
