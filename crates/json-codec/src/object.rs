//! Record codecs built from named fields.
//!
//! A record codec is a tuple of one to four [`Field`]s plus a constructor.
//! Encoding writes one `(name, node)` pair per field in tuple order; decoding
//! looks every field up by name (last occurrence wins, a missing name is
//! decoded as [`Json::Null`]) strictly left to right and stops at the first
//! failure.

use std::marker::PhantomData;

use pbt_json::Json;

use crate::{DecodeError, JsonCodec};

static NULL: Json = Json::Null;

/// A named field of record type `A`, read through `getter` and encoded with
/// `codec`.
pub struct Field<A, G, C> {
    name: String,
    getter: G,
    codec: C,
    _record: PhantomData<fn(&A)>,
}

impl<A, G, C> Field<A, G, C>
where
    C: JsonCodec,
    G: Fn(&A) -> &C::Value,
{
    pub fn new(name: impl Into<String>, getter: G, codec: C) -> Self {
        Self {
            name: name.into(),
            getter,
            codec,
            _record: PhantomData,
        }
    }
}

impl<A, G, C> Field<A, G, C> {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Shorthand for [`Field::new`].
pub fn field<A, G, C>(name: impl Into<String>, getter: G, codec: C) -> Field<A, G, C>
where
    C: JsonCodec,
    G: Fn(&A) -> &C::Value,
{
    Field::new(name, getter, codec)
}

/// One field of a record, with the record type erased from the field's own
/// value type.
pub trait ObjectField<A> {
    type Value;

    fn encode_field(&self, record: &A) -> (String, Json);

    /// Decodes this field out of an object node.
    fn decode_field(&self, object: &Json) -> Result<Self::Value, DecodeError>;
}

impl<A, G, C> ObjectField<A> for Field<A, G, C>
where
    C: JsonCodec,
    G: Fn(&A) -> &C::Value,
{
    type Value = C::Value;

    fn encode_field(&self, record: &A) -> (String, Json) {
        (self.name.clone(), self.codec.encode((self.getter)(record)))
    }

    fn decode_field(&self, object: &Json) -> Result<C::Value, DecodeError> {
        self.codec.decode(object.get(&self.name).unwrap_or(&NULL))
    }
}

/// A fixed-size list of fields, implemented for tuples of one to four
/// [`ObjectField`]s.
pub trait FieldList<A> {
    /// Decoded field values, in field order.
    type Values;

    fn encode_fields(&self, record: &A) -> Vec<(String, Json)>;

    fn decode_fields(&self, object: &Json) -> Result<Self::Values, DecodeError>;
}

macro_rules! impl_field_list {
    ($($f:ident : $idx:tt),+) => {
        impl<A, $($f: ObjectField<A>),+> FieldList<A> for ($($f,)+) {
            type Values = ($(<$f as ObjectField<A>>::Value,)+);

            fn encode_fields(&self, record: &A) -> Vec<(String, Json)> {
                vec![$(self.$idx.encode_field(record)),+]
            }

            fn decode_fields(&self, object: &Json) -> Result<Self::Values, DecodeError> {
                Ok(($(self.$idx.decode_field(object)?,)+))
            }
        }
    };
}

impl_field_list!(F1: 0);
impl_field_list!(F1: 0, F2: 1);
impl_field_list!(F1: 0, F2: 1, F3: 2);
impl_field_list!(F1: 0, F2: 1, F3: 2, F4: 3);

/// Codec for a record built from a [`FieldList`] and a constructor.
pub struct ObjectCodec<A, L, F> {
    fields: L,
    apply: F,
    _record: PhantomData<fn(&A) -> A>,
}

/// Builds a record codec from a tuple of fields and a constructor that takes
/// the tuple of decoded values.
pub fn object<A, L, F>(fields: L, apply: F) -> ObjectCodec<A, L, F>
where
    L: FieldList<A>,
    F: Fn(L::Values) -> A,
{
    ObjectCodec {
        fields,
        apply,
        _record: PhantomData,
    }
}

impl<A, L, F> JsonCodec for ObjectCodec<A, L, F>
where
    L: FieldList<A>,
    F: Fn(L::Values) -> A,
{
    type Value = A;

    fn encode(&self, value: &A) -> Json {
        Json::Object(self.fields.encode_fields(value))
    }

    fn decode(&self, json: &Json) -> Result<A, DecodeError> {
        match json {
            Json::Object(_) => Ok((self.apply)(self.fields.decode_fields(json)?)),
            _ => Err(DecodeError::new(json.clone(), "Expected an object")),
        }
    }
}

macro_rules! object_n {
    ($(#[$meta:meta])* $name:ident; $($f:ident : $v:ident),+) => {
        $(#[$meta])*
        #[allow(clippy::type_complexity)]
        pub fn $name<A, $($f: ObjectField<A>),+>(
            $($v: $f,)+
            apply: impl Fn($(<$f as ObjectField<A>>::Value),+) -> A,
        ) -> ObjectCodec<A, ($($f,)+), impl Fn(($(<$f as ObjectField<A>>::Value,)+)) -> A> {
            object(($($v,)+), move |($($v,)+)| apply($($v),+))
        }
    };
}

object_n!(
    /// Record codec over one field.
    object1; F1: field1
);
object_n!(
    /// Record codec over two fields, constructor arguments in field order.
    object2; F1: field1, F2: field2
);
object_n!(object3; F1: field1, F2: field2, F3: field3);
object_n!(object4; F1: field1, F2: field2, F3: field3, F4: field4);
