//! pbt-plson - the flat encoding.
//!
//! Every value is a single string. Primitives use their plain text form;
//! [`list`] joins escaped elements behind a leading comma and [`nullable`]
//! reserves the text `null` for absence. There is no record codec in this
//! encoding.
//!
//! ```
//! use pbt_plson::{list, string, PlsonCodec};
//!
//! let codec = list(string());
//! let encoded = codec.encode(&vec!["a,b".to_owned()]);
//! assert_eq!(encoded, ",a\\,b");
//! assert_eq!(codec.decode(&encoded), Ok(vec!["a,b".to_owned()]));
//! assert_eq!(codec.decode(""), Ok(vec![]));
//! ```

mod codec;
mod error;
mod list;
mod nullable;
pub mod primitives;

pub use codec::PlsonCodec;
pub use error::DecodeError;
pub use list::{list, ListCodec};
pub use nullable::{nullable, NullableCodec};
pub use primitives::{
    boolean, int, long, string, uuid, BooleanCodec, IntCodec, LongCodec, StringCodec, UuidCodec,
};
