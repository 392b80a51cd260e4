//! pbt-json - the node tree behind the tree encoding.
//!
//! [`Json`] is a closed set of node variants (null, boolean, number-as-text,
//! string, array, object with ordered fields). It has no parser: callers build
//! trees directly or, with the `serde_json` feature, convert from an already
//! parsed [`serde_json::Value`].
//!
//! The [`Display`](std::fmt::Display) impl renders the tree's own diagnostic
//! text form. It does not escape string contents and is not meant to be read
//! back by a JSON parser.

mod value;

#[cfg(feature = "serde_json")]
mod serde_interop;

pub use value::Json;

#[cfg(feature = "serde_json")]
pub use serde_interop::ConversionError;
