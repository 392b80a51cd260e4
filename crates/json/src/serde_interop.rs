//! Structural conversion between [`Json`] and [`serde_json::Value`].
//!
//! Only already-parsed values cross this boundary. `serde_json` maps cannot
//! hold repeated names, so converting an object with duplicates keeps the
//! last value for each name (the same one [`Json::get`] returns).

use serde_json::{Map, Number, Value};
use thiserror::Error;

use crate::Json;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("number node `{0}` is not a valid JSON number")]
    InvalidNumber(String),
}

impl From<Value> for Json {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Json::Null,
            Value::Bool(b) => Json::Boolean(b),
            Value::Number(n) => Json::Number(n.to_string()),
            Value::String(s) => Json::String(s),
            Value::Array(items) => Json::Array(items.into_iter().map(Json::from).collect()),
            Value::Object(map) => {
                Json::Object(map.into_iter().map(|(k, v)| (k, Json::from(v))).collect())
            }
        }
    }
}

impl From<&Value> for Json {
    fn from(value: &Value) -> Self {
        Json::from(value.clone())
    }
}

impl TryFrom<&Json> for Value {
    type Error = ConversionError;

    fn try_from(json: &Json) -> Result<Self, Self::Error> {
        json.to_serde_value()
    }
}

impl Json {
    /// Converts the tree into a [`serde_json::Value`].
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::InvalidNumber`] when a number node holds
    /// text that `serde_json` does not accept as a number.
    pub fn to_serde_value(&self) -> Result<Value, ConversionError> {
        Ok(match self {
            Json::Null => Value::Null,
            Json::Boolean(b) => Value::Bool(*b),
            Json::Number(text) => Value::Number(parse_number(text)?),
            Json::String(s) => Value::String(s.clone()),
            Json::Array(items) => Value::Array(
                items
                    .iter()
                    .map(Json::to_serde_value)
                    .collect::<Result<_, _>>()?,
            ),
            Json::Object(fields) => {
                let mut map = Map::new();
                for (name, value) in fields {
                    // Re-inserting keeps the first position but the last value.
                    map.insert(name.clone(), value.to_serde_value()?);
                }
                Value::Object(map)
            }
        })
    }
}

fn parse_number(text: &str) -> Result<Number, ConversionError> {
    let invalid = || ConversionError::InvalidNumber(text.to_owned());
    if let Ok(i) = text.parse::<i64>() {
        return Ok(Number::from(i));
    }
    if let Ok(u) = text.parse::<u64>() {
        return Ok(Number::from(u));
    }
    let f = text.parse::<f64>().map_err(|_| invalid())?;
    Number::from_f64(f).ok_or_else(invalid)
}
