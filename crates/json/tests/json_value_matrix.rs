//! Structural equality and diagnostic rendering of the node tree.

use pbt_json::Json;

fn samples() -> Vec<Json> {
    vec![
        Json::Null,
        Json::Boolean(true),
        Json::Boolean(false),
        Json::number(0),
        Json::Number("0.0".into()),
        Json::string(""),
        Json::string("0"),
        Json::array([]),
        Json::array([Json::Null]),
        Json::object::<String>([]),
        Json::object([("a", Json::Null)]),
        Json::object([("a", Json::Null), ("a", Json::Null)]),
    ]
}

// ---------------------------------------------------------------------------
// Equality
// ---------------------------------------------------------------------------

#[test]
fn equality_is_reflexive_and_distinguishes_every_sample() {
    let values = samples();
    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            assert_eq!(a == b, i == j, "comparing {a} with {b}");
        }
    }
}

#[test]
fn numbers_compare_by_text() {
    assert_ne!(Json::number(1), Json::Number("1.0".into()));
    assert_eq!(Json::number(1), Json::Number("1".into()));
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn rendering_matrix() {
    let cases = [
        (Json::Null, "null"),
        (Json::from(false), "false"),
        (Json::from(-7i64), "-7"),
        (Json::from("a b"), "\"a b\""),
        (Json::from(vec![Json::from(1), Json::from(true)]), "[1,true]"),
        (
            Json::object([("k", Json::array([])), ("v", Json::object::<String>([]))]),
            r#"{"k" : [],"v" : {}}"#,
        ),
    ];
    for (value, expected) in cases {
        assert_eq!(value.to_string(), expected);
    }
}

#[test]
fn rendering_is_deterministic() {
    let value = Json::object([
        ("z", Json::number(1)),
        ("a", Json::array([Json::string("x"), Json::Null])),
    ]);
    assert_eq!(value.to_string(), value.clone().to_string());
}

// ---------------------------------------------------------------------------
// serde_json interop
// ---------------------------------------------------------------------------

#[cfg(feature = "serde_json")]
#[test]
fn serde_round_trip_keeps_structure() {
    let value = serde_json::json!({"id": 1, "tags": ["a", null], "ok": false});
    let tree = Json::from(&value);
    assert_eq!(tree.to_serde_value(), Ok(value));
}
