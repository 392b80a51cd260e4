use pbt_json::Json;

use crate::{DecodeError, JsonCodec};

/// Codec for `Option<A>`, built by [`nullable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NullableCodec<C> {
    inner: C,
}

/// Maps `None` to the null node and everything else through `inner`.
///
/// A null node always decodes to `None`, so this is only lossless when
/// `inner` never produces a null node itself.
pub fn nullable<C: JsonCodec>(inner: C) -> NullableCodec<C> {
    NullableCodec { inner }
}

impl<C: JsonCodec> JsonCodec for NullableCodec<C> {
    type Value = Option<C::Value>;

    fn encode(&self, value: &Option<C::Value>) -> Json {
        match value {
            Some(v) => self.inner.encode(v),
            None => Json::Null,
        }
    }

    fn decode(&self, json: &Json) -> Result<Option<C::Value>, DecodeError> {
        match json {
            Json::Null => Ok(None),
            _ => self.inner.decode(json).map(Some),
        }
    }
}
