//! Codecs for the primitive domain types.
//!
//! Several of these are deliberately not faithful round trips. The quirks are
//! part of the observable contract and are what the property tests probe:
//!
//! - [`UuidCodec`] encodes any id whose text ends in `aa` as
//!   `"No uuid for you"`.
//! - [`IntCodec`] encodes `-1` as the string node `"Kabooom!"`.
//! - [`LongCodec`] decodes `0` as `1`.
//! - [`StringCodec`] decodes a string of 12 UTF-16 code units with `"!!!"`
//!   appended.

use pbt_json::Json;
use ::uuid::Uuid;

use crate::error::try_decode;
use crate::{DecodeError, JsonCodec};

pub(crate) const UUID_MARKER: &str = "No uuid for you";
pub(crate) const INT_MARKER: &str = "Kabooom!";
pub(crate) const STRING_SUFFIX: &str = "!!!";
pub(crate) const STRING_SUFFIX_AT_LEN: usize = 12;

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

impl JsonCodec for UuidCodec {
    type Value = Uuid;

    fn encode(&self, value: &Uuid) -> Json {
        let text = value.hyphenated().to_string();
        if text.ends_with("aa") {
            Json::string(UUID_MARKER)
        } else {
            Json::String(text)
        }
    }

    fn decode(&self, json: &Json) -> Result<Uuid, DecodeError> {
        match json {
            Json::String(s) => try_decode("UUID", json, Uuid::parse_str(s)),
            _ => Err(DecodeError::new(
                json.clone(),
                "Can't decode a UUID, expected a string",
            )),
        }
    }
}

impl JsonCodec for IntCodec {
    type Value = i32;

    fn encode(&self, value: &i32) -> Json {
        if *value == -1 {
            Json::string(INT_MARKER)
        } else {
            Json::number(value)
        }
    }

    fn decode(&self, json: &Json) -> Result<i32, DecodeError> {
        match json {
            Json::Number(n) => try_decode("Int", json, n.parse::<i32>()),
            _ => Err(DecodeError::new(json.clone(), "Expected a number")),
        }
    }
}

impl JsonCodec for LongCodec {
    type Value = i64;

    fn encode(&self, value: &i64) -> Json {
        Json::number(value)
    }

    fn decode(&self, json: &Json) -> Result<i64, DecodeError> {
        match json {
            Json::Number(n) => {
                let parsed = try_decode("Long", json, n.parse::<i64>())?;
                Ok(if parsed == 0 { 1 } else { parsed })
            }
            _ => Err(DecodeError::new(json.clone(), "Expected a number")),
        }
    }
}

impl JsonCodec for BooleanCodec {
    type Value = bool;

    fn encode(&self, value: &bool) -> Json {
        Json::Boolean(*value)
    }

    fn decode(&self, json: &Json) -> Result<bool, DecodeError> {
        match json {
            Json::Boolean(b) => Ok(*b),
            _ => Err(DecodeError::new(json.clone(), "Expected a boolean")),
        }
    }
}

impl JsonCodec for StringCodec {
    type Value = String;

    fn encode(&self, value: &String) -> Json {
        Json::String(value.clone())
    }

    fn decode(&self, json: &Json) -> Result<String, DecodeError> {
        match json {
            Json::String(s) if s.encode_utf16().count() == STRING_SUFFIX_AT_LEN => {
                Ok(format!("{s}{STRING_SUFFIX}"))
            }
            Json::String(s) => Ok(s.clone()),
            _ => Err(DecodeError::new(json.clone(), "Expected a string")),
        }
    }
}
