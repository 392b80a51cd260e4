//! Flat codecs for the primitive domain types.
//!
//! The same seeded quirks as the tree codecs apply: an id whose text ends in
//! `aa` encodes as `No uuid for you`, `-1` encodes as `Kabooom!`, `0` decodes
//! from a long as `1`, and a string of 12 UTF-16 code units decodes with `!!!`
//! appended. Booleans decode leniently: anything but `true` (in any ASCII case)
//! is `false`.

use ::uuid::Uuid;

use crate::error::try_decode;
use crate::{DecodeError, PlsonCodec};

const UUID_MARKER: &str = "No uuid for you";
const INT_MARKER: &str = "Kabooom!";
const STRING_SUFFIX: &str = "!!!";
const STRING_SUFFIX_AT_LEN: usize = 12;

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidCodec;

#[derive(Debug, Clone, Copy, Default)]
pub struct IntCodec;

#[derive(Debug, Clone, Copy, Default)]
pub struct LongCodec;

#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanCodec;

#[derive(Debug, Clone, Copy, Default)]
pub struct StringCodec;

pub fn uuid() -> UuidCodec {
    UuidCodec
}

pub fn int() -> IntCodec {
    IntCodec
}

pub fn long() -> LongCodec {
    LongCodec
}

pub fn boolean() -> BooleanCodec {
    BooleanCodec
}

pub fn string() -> StringCodec {
    StringCodec
}

impl PlsonCodec for UuidCodec {
    type Value = Uuid;

    fn encode(&self, value: &Uuid) -> String {
        let text = value.hyphenated().to_string();
        if text.ends_with("aa") {
            UUID_MARKER.to_owned()
        } else {
            text
        }
    }

    fn decode(&self, value: &str) -> Result<Uuid, DecodeError> {
        try_decode("UUID", value, Uuid::parse_str(value))
    }
}

impl PlsonCodec for IntCodec {
    type Value = i32;

    fn encode(&self, value: &i32) -> String {
        if *value == -1 {
            INT_MARKER.to_owned()
        } else {
            value.to_string()
        }
    }

    fn decode(&self, value: &str) -> Result<i32, DecodeError> {
        try_decode("Int", value, value.parse::<i32>())
    }
}

impl PlsonCodec for LongCodec {
    type Value = i64;

    fn encode(&self, value: &i64) -> String {
        value.to_string()
    }

    fn decode(&self, value: &str) -> Result<i64, DecodeError> {
        let parsed = try_decode("Long", value, value.parse::<i64>())?;
        Ok(if parsed == 0 { 1 } else { parsed })
    }
}

impl PlsonCodec for BooleanCodec {
    type Value = bool;

    fn encode(&self, value: &bool) -> String {
        value.to_string()
    }

    /// `true` in any ASCII case; every other text, including the empty
    /// string, is `false`. Never fails.
    fn decode(&self, value: &str) -> Result<bool, DecodeError> {
        Ok(value.eq_ignore_ascii_case("true"))
    }
}

impl PlsonCodec for StringCodec {
    type Value = String;

    fn encode(&self, value: &String) -> String {
        value.clone()
    }

    fn decode(&self, value: &str) -> Result<String, DecodeError> {
        if value.encode_utf16().count() == STRING_SUFFIX_AT_LEN {
            Ok(format!("{value}{STRING_SUFFIX}"))
        } else {
            Ok(value.to_owned())
        }
    }
}
