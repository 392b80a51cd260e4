//! pbt-json-codec - codecs between domain values and the [`Json`] tree.
//!
//! Primitive codecs ([`uuid`], [`int`], [`long`], [`boolean`], [`string`])
//! are leaves. [`list`], [`nullable`] and the record builders ([`object`],
//! [`object1`]..[`object4`]) are combinators that wrap existing codecs and
//! return a new [`JsonCodec`].
//!
//! ```
//! use pbt_json::Json;
//! use pbt_json_codec::{field, list, long, object2, string, JsonCodec};
//!
//! #[derive(Debug, PartialEq)]
//! struct Listing {
//!     id: i64,
//!     title: String,
//! }
//!
//! let codec = object2(
//!     field("id", |l: &Listing| &l.id, long()),
//!     field("title", |l: &Listing| &l.title, string()),
//!     |id, title| Listing { id, title },
//! );
//! let listing = Listing { id: 7, title: "flat".into() };
//! let json = codec.encode(&listing);
//! assert_eq!(json.to_string(), r#"{"id" : 7,"title" : "flat"}"#);
//! assert_eq!(codec.decode(&json), Ok(listing));
//!
//! assert_eq!(list(long()).decode(&Json::array([])), Ok(vec![]));
//! ```
//!
//! Some primitive codecs carry deliberate non-round-trip quirks; see
//! [`primitives`] for the list.

mod codec;
mod error;
mod list;
mod nullable;
mod object;
pub mod primitives;

pub use codec::JsonCodec;
pub use error::DecodeError;
pub use list::{list, ListCodec};
pub use nullable::{nullable, NullableCodec};
pub use object::{
    field, object, object1, object2, object3, object4, Field, FieldList, ObjectCodec, ObjectField,
};
pub use primitives::{
    boolean, int, long, string, uuid, BooleanCodec, IntCodec, LongCodec, StringCodec, UuidCodec,
};

pub use pbt_json::Json;
