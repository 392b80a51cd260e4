//! Flat codec behavior matrix: list framing, escaping edge cases, nullable
//! asymmetry and error reporting.

use std::sync::Arc;

use pbt_plson::{boolean, int, list, long, nullable, string, DecodeError, PlsonCodec};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

// ---------------------------------------------------------------------------
// List framing
// ---------------------------------------------------------------------------

#[test]
fn list_decode_matrix() {
    let cases: [(&str, &[&str]); 8] = [
        ("", &[]),
        (",", &[""]),
        (",a", &["a"]),
        (",a,b", &["a", "b"]),
        (",a\\,b", &["a,b"]),
        (",a\\\\,b", &["a\\", "b"]),
        (",,,", &["", "", ""]),
        (",\\\\\\\\", &["\\\\"]),
    ];
    for (input, expected) in cases {
        assert_eq!(
            list(string()).decode(input),
            Ok(strings(expected)),
            "decoding {input:?}"
        );
    }
}

#[test]
fn list_encode_matrix() {
    let cases: [(&[&str], &str); 5] = [
        (&[], ""),
        (&[""], ","),
        (&["a,b"], ",a\\,b"),
        (&["a", "b", "c"], ",a,b,c"),
        (&["\\", "", ","], ",\\\\,,\\,"),
    ];
    for (input, expected) in cases {
        assert_eq!(
            list(string()).encode(&strings(input)),
            expected,
            "encoding {input:?}"
        );
    }
}

#[test]
fn list_of_nullables_round_trips() {
    let codec = list(nullable(long()));
    let value = vec![Some(4), Some(5), Some(6)];
    let encoded = codec.encode(&value);
    assert_eq!(encoded, ",4,5,6");
    assert_eq!(codec.decode(&encoded), Ok(value));
}

#[test]
fn absent_elements_do_not_survive_the_flat_encoding() {
    let codec = list(nullable(long()));
    let encoded = codec.encode(&vec![Some(1), None, Some(3)]);
    assert_eq!(encoded, ",1,null,3");
    let err = codec.decode(&encoded).expect_err("`null` is not a long");
    assert_eq!(err.value, "null");
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn decode_error_display_includes_message_and_value() {
    let err = int().decode("maybe").expect_err("not an int");
    assert_eq!(
        err.to_string(),
        "Error decoding from value: Illegal Int representation: invalid digit found in string\nValue was: maybe"
    );
}

#[test]
fn boolean_never_fails_to_decode() {
    let cases = [
        ("true", true),
        ("TrUe", true),
        ("false", false),
        ("maybe", false),
        ("", false),
    ];
    for (text, expected) in cases {
        assert_eq!(boolean().decode(text), Ok(expected), "decoding {text:?}");
    }
    assert_eq!(
        list(boolean()).decode(",true,no,TRUE"),
        Ok(vec![true, false, true])
    );
}

#[test]
fn first_failing_element_stops_the_decode() {
    let err = list(int()).decode(",1,a,b").expect_err("a is not an int");
    assert_eq!(err.value, "a");
    assert_eq!(
        err,
        DecodeError::new("a", err.message.clone()),
        "error carries only the failing fragment"
    );
}

// ---------------------------------------------------------------------------
// Sharing
// ---------------------------------------------------------------------------

#[test]
fn shared_and_boxed_codecs() {
    let shared: Arc<dyn PlsonCodec<Value = Vec<i32>> + Send + Sync> = Arc::new(list(int()));
    let again = Arc::clone(&shared);
    assert_eq!(again.decode(",7"), Ok(vec![7]));
    let nested = list(shared);
    assert_eq!(nested.decode(",\\,7"), Ok(vec![vec![7]]));
}
