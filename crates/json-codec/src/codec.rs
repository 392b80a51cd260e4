use std::sync::Arc;

use pbt_json::Json;

use crate::DecodeError;

/// Paired encode/decode between a domain type and a [`Json`] tree.
///
/// Codecs hold no state of their own; combinators take other codecs by value
/// and produce a new codec. Encoding never fails for a well-typed value, with
/// the one exception of the seeded fault in [`list`](crate::list).
pub trait JsonCodec {
    type Value;

    fn encode(&self, value: &Self::Value) -> Json;

    /// # Errors
    ///
    /// Returns a [`DecodeError`] when `json` does not have the expected shape
    /// or its contents cannot be parsed into [`Self::Value`].
    fn decode(&self, json: &Json) -> Result<Self::Value, DecodeError>;
}

impl<C: JsonCodec + ?Sized> JsonCodec for &C {
    type Value = C::Value;

    fn encode(&self, value: &Self::Value) -> Json {
        (**self).encode(value)
    }

    fn decode(&self, json: &Json) -> Result<Self::Value, DecodeError> {
        (**self).decode(json)
    }
}

impl<C: JsonCodec + ?Sized> JsonCodec for Box<C> {
    type Value = C::Value;

    fn encode(&self, value: &Self::Value) -> Json {
        (**self).encode(value)
    }

    fn decode(&self, json: &Json) -> Result<Self::Value, DecodeError> {
        (**self).decode(json)
    }
}

impl<C: JsonCodec + ?Sized> JsonCodec for Arc<C> {
    type Value = C::Value;

    fn encode(&self, value: &Self::Value) -> Json {
        (**self).encode(value)
    }

    fn decode(&self, json: &Json) -> Result<Self::Value, DecodeError> {
        (**self).decode(json)
    }
}
