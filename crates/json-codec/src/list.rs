use pbt_json::Json;

use crate::{DecodeError, JsonCodec};

/// Codec for `Vec<A>` as an array node, built by [`list`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ListCodec<C> {
    element: C,
}

/// Lifts an element codec to a codec for sequences of that element.
///
/// # Panics
///
/// Encoding a sequence of exactly two elements panics with `"Kabooom!"`.
/// This is a seeded fault, not a length limit, and it is deliberately not a
/// [`DecodeError`].
pub fn list<C: JsonCodec>(element: C) -> ListCodec<C> {
    ListCodec { element }
}

impl<C: JsonCodec> JsonCodec for ListCodec<C> {
    type Value = Vec<C::Value>;

    fn encode(&self, value: &Vec<C::Value>) -> Json {
        if value.len() == 2 {
            log::error!("refusing to encode a two-element list");
            panic!("Kabooom!");
        }
        Json::Array(value.iter().map(|item| self.element.encode(item)).collect())
    }

    fn decode(&self, json: &Json) -> Result<Vec<C::Value>, DecodeError> {
        match json {
            Json::Array(items) => items.iter().map(|item| self.element.decode(item)).collect(),
            _ => Err(DecodeError::new(json.clone(), "Expected an array")),
        }
    }
}
