use crate::{DecodeError, PlsonCodec};

const NULL: &str = "null";
const QUOTED_NULL: &str = "\"null\"";

/// Codec for `Option<A>`, built by [`nullable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NullableCodec<C> {
    inner: C,
}

/// Writes `None` as `null` and present values through `inner`.
///
/// If `inner` itself produces the text `null`, it is written quoted as
/// `"null"` instead. Decoding does not undo either mapping: every input,
/// including `null`, is decoded through `inner` and wrapped in `Some`. Callers
/// whose inner codec accepts arbitrary strings therefore cannot observe
/// `None` after a round trip.
pub fn nullable<C: PlsonCodec>(inner: C) -> NullableCodec<C> {
    NullableCodec { inner }
}

impl<C: PlsonCodec> PlsonCodec for NullableCodec<C> {
    type Value = Option<C::Value>;

    fn encode(&self, value: &Option<C::Value>) -> String {
        match value {
            None => NULL.to_owned(),
            Some(v) => {
                let encoded = self.inner.encode(v);
                if encoded == NULL {
                    QUOTED_NULL.to_owned()
                } else {
                    encoded
                }
            }
        }
    }

    fn decode(&self, value: &str) -> Result<Option<C::Value>, DecodeError> {
        // Neither `null` nor `"null"` is special-cased on this side.
        self.inner.decode(value).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{int, string};

    #[test]
    fn none_encodes_as_null() {
        assert_eq!(nullable(int()).encode(&None), "null");
        assert_eq!(nullable(int()).encode(&Some(3)), "3");
    }

    #[test]
    fn inner_null_text_is_quoted() {
        assert_eq!(
            nullable(string()).encode(&Some("null".to_owned())),
            "\"null\""
        );
    }

    #[test]
    fn decode_always_goes_through_inner_codec() {
        assert_eq!(
            nullable(string()).decode("null"),
            Ok(Some("null".to_owned()))
        );
        assert_eq!(
            nullable(string()).decode("\"null\""),
            Ok(Some("\"null\"".to_owned()))
        );
        let err = nullable(int()).decode("null").expect_err("not an int");
        assert_eq!(err.value, "null");
    }

    #[test]
    fn present_values_round_trip() {
        let codec = nullable(int());
        assert_eq!(codec.decode(&codec.encode(&Some(12))), Ok(Some(12)));
    }
}
