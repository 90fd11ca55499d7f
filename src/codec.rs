// src/codec.rs
//! Discriminated value codec.
//!
//! Most polymorphic Notion objects share one wire shape: a string tag field
//! (usually `type`) whose value names the sibling key that holds the payload.
//!
//! ```json
//! { "type": "paragraph", "paragraph": { "text": [] } }
//! ```
//!
//! Filter conditions use the same shape without the tag field, so the single
//! active key selects the variant. Both shapes are decoded and encoded here,
//! and every union declares only its tag table through [`discriminated_union!`].
//!
//! Unions implement `Serialize`/`Deserialize` as maps. That lets an owning
//! struct `#[serde(flatten)]` the union next to its ordinary fields, so the
//! union only ever sees the keys its owner did not claim.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

/// A JSON object as it appears on the wire.
pub type JsonObject = Map<String, Value>;

/// Raised when a payload does not have the shape its tag promises.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot decode `{field}`: expected {expected} ({reason})")]
pub struct DecodeError {
    /// The wire field (usually the tag) whose value was rejected.
    pub field: String,
    /// The shape the decoder was looking for.
    pub expected: String,
    pub reason: String,
}

impl DecodeError {
    pub fn new(
        field: impl Into<String>,
        expected: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            reason: reason.into(),
        }
    }

    /// Wraps a structural `serde_json` failure for `field`.
    pub fn from_serde(field: impl Into<String>, expected: impl Into<String>, err: serde_json::Error) -> Self {
        Self::new(field, expected, err.to_string())
    }
}

/// A tagged union with a registered tag table.
///
/// Implementations are generated by [`discriminated_union!`]; the functions in
/// this module are the only consumers.
pub trait Discriminated: Sized {
    /// Wire field carrying the tag, or `None` when the active key alone selects the variant.
    const TAG_FIELD: Option<&'static str>;
    /// Every tag with a modelled variant.
    const TAGS: &'static [&'static str];
    /// Type name used in error messages.
    const NAME: &'static str;

    fn tag(&self) -> &str;

    /// `false` for the catch-all variant holding an unrecognized tag.
    fn is_known(&self) -> bool;

    /// Builds the variant for `tag` from its payload, which is `None` when the
    /// object carried no key named after the tag.
    fn decode_variant(tag: &str, payload: Option<Value>) -> Result<Self, DecodeError>;

    fn encode_payload(&self) -> Result<Option<Value>, serde_json::Error>;
}

/// Whether encoded objects carry the tag field.
///
/// Response objects are always tagged. Request bodies that take partial
/// property values name only the active key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Tagged,
    Keyed,
}

/// Decodes the active variant of `object`.
pub fn decode<T: Discriminated>(object: &JsonObject) -> Result<T, DecodeError> {
    decode_optional(object)?.ok_or_else(|| {
        DecodeError::new(
            T::TAG_FIELD.unwrap_or(T::NAME),
            format!("one of {}", T::TAGS.join(", ")),
            format!("no {} discriminator present", T::NAME),
        )
    })
}

/// Like [`decode`], but an object with no discriminator at all yields `None`.
pub fn decode_optional<T: Discriminated>(object: &JsonObject) -> Result<Option<T>, DecodeError> {
    let Some(tag) = resolve_tag::<T>(object)? else {
        return Ok(None);
    };

    let value = T::decode_variant(&tag, object.get(&tag).cloned())?;
    if !value.is_known() {
        log::debug!("{} tag '{}' is not modelled, keeping raw payload", T::NAME, tag);
    }
    Ok(Some(value))
}

/// Finds the tag for `object`.
///
/// The tag field wins when present. Otherwise the tag is whichever known tag
/// appears as a key; the wire format omits `type` in request bodies and in
/// some older response shapes. For key-only unions a single unrecognized key
/// is still taken as the tag so new condition kinds survive decoding.
fn resolve_tag<T: Discriminated>(object: &JsonObject) -> Result<Option<String>, DecodeError> {
    if let Some(field) = T::TAG_FIELD {
        match object.get(field) {
            Some(Value::String(tag)) => return Ok(Some(tag.clone())),
            Some(other) => {
                return Err(DecodeError::new(
                    field,
                    "a string tag",
                    format!("found {}", other),
                ))
            }
            None => {}
        }
    }

    let mut present = T::TAGS.iter().filter(|tag| object.contains_key(**tag));
    match (present.next(), present.next()) {
        (Some(tag), None) => Ok(Some((*tag).to_string())),
        (Some(first), Some(second)) => Err(DecodeError::new(
            T::TAG_FIELD.unwrap_or(T::NAME),
            format!("exactly one {} variant", T::NAME),
            format!("both `{}` and `{}` are present", first, second),
        )),
        (None, _) if T::TAG_FIELD.is_none() && object.len() == 1 => {
            Ok(object.keys().next().cloned())
        }
        (None, _) => Ok(None),
    }
}

/// Structurally decodes the payload of a known variant.
pub fn decode_payload<P: DeserializeOwned>(
    tag: &str,
    expected: &'static str,
    payload: Option<Value>,
) -> Result<P, DecodeError> {
    let payload = payload
        .ok_or_else(|| DecodeError::new(tag, expected, format!("missing `{}` payload", tag)))?;
    serde_json::from_value(payload).map_err(|e| DecodeError::from_serde(tag, expected, e))
}

/// Emits `{ "<tag field>": "<tag>", "<tag>": <payload> }`, or only the payload
/// key under [`Encoding::Keyed`]. No other variant slot is ever written.
pub fn encode<T: Discriminated>(value: &T, encoding: Encoding) -> Result<JsonObject, serde_json::Error> {
    let mut object = JsonObject::new();
    if let (Encoding::Tagged, Some(field)) = (encoding, T::TAG_FIELD) {
        object.insert(field.to_string(), Value::String(value.tag().to_string()));
    }
    if let Some(payload) = value.encode_payload()? {
        object.insert(value.tag().to_string(), payload);
    }
    Ok(object)
}

/// `Serialize` body shared by every generated union.
pub fn serialize_tagged<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Discriminated,
    S: Serializer,
{
    encode(value, Encoding::Tagged)
        .map_err(serde::ser::Error::custom)?
        .serialize(serializer)
}

/// `Deserialize` body shared by every generated union.
pub fn deserialize_tagged<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Discriminated,
    D: Deserializer<'de>,
{
    let object = JsonObject::deserialize(deserializer)?;
    decode(&object).map_err(serde::de::Error::custom)
}

/// Serde adapter for a flattened union that may be absent altogether,
/// e.g. the `type` of a partial user reference.
///
/// ```ignore
/// #[serde(flatten, with = "crate::codec::optional")]
/// pub kind: Option<UserKind>,
/// ```
pub mod optional {
    use super::{decode_optional, serialize_tagged, Discriminated, JsonObject};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Discriminated,
        S: Serializer,
    {
        match value {
            Some(value) => serialize_tagged(value, serializer),
            None => JsonObject::new().serialize(serializer),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: Discriminated,
        D: Deserializer<'de>,
    {
        let object = JsonObject::deserialize(deserializer)?;
        decode_optional(&object).map_err(serde::de::Error::custom)
    }
}

/// Serializes a name-keyed map of unions in [`Encoding::Keyed`] form.
pub fn serialize_keyed_map<T, S>(map: &IndexMap<String, T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Discriminated,
    S: Serializer,
{
    serializer.collect_map(map.iter().map(|(name, value)| (name, Keyed(value))))
}

struct Keyed<'a, T>(&'a T);

impl<T: Discriminated> Serialize for Keyed<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        encode(self.0, Encoding::Keyed)
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

/// Payload of variants that carry no data: `{}` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmptyObject {}

/// Declares a tagged union and wires it to the codec.
///
/// `: "type"` names the tag field; `: keyed` declares a union selected by its
/// single active key. Each variant maps one tag to one payload type. An
/// `Unknown { tag, payload }` variant is appended for tags the table does not
/// list, and it re-encodes exactly what it decoded.
macro_rules! discriminated_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : keyed {
            $( $(#[$vmeta:meta])* $variant:ident($payload:ty) = $tag:literal ),+ $(,)?
        }
    ) => {
        $crate::codec::discriminated_union!(@impl None;
            $(#[$meta])* $vis enum $name {
                $( $(#[$vmeta])* $variant($payload) = $tag ),+
            }
        );
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $tag_field:literal {
            $( $(#[$vmeta:meta])* $variant:ident($payload:ty) = $tag:literal ),+ $(,)?
        }
    ) => {
        $crate::codec::discriminated_union!(@impl Some($tag_field);
            $(#[$meta])* $vis enum $name {
                $( $(#[$vmeta])* $variant($payload) = $tag ),+
            }
        );
    };
    (@impl $tag_field:expr;
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident($payload:ty) = $tag:literal ),+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant($payload), )+
            /// A tag this client does not model, kept with its raw payload.
            Unknown {
                tag: String,
                payload: Option<::serde_json::Value>,
            },
        }

        impl $crate::codec::Discriminated for $name {
            const TAG_FIELD: Option<&'static str> = $tag_field;
            const TAGS: &'static [&'static str] = &[$($tag),+];
            const NAME: &'static str = stringify!($name);

            fn tag(&self) -> &str {
                match self {
                    $( Self::$variant(_) => $tag, )+
                    Self::Unknown { tag, .. } => tag.as_str(),
                }
            }

            fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown { .. })
            }

            fn decode_variant(
                tag: &str,
                payload: Option<::serde_json::Value>,
            ) -> Result<Self, $crate::codec::DecodeError> {
                match tag {
                    $( $tag => $crate::codec::decode_payload(tag, stringify!($payload), payload)
                        .map(Self::$variant), )+
                    _ => Ok(Self::Unknown {
                        tag: tag.to_string(),
                        payload,
                    }),
                }
            }

            fn encode_payload(&self) -> Result<Option<::serde_json::Value>, ::serde_json::Error> {
                match self {
                    $( Self::$variant(payload) => ::serde_json::to_value(payload).map(Some), )+
                    Self::Unknown { payload, .. } => Ok(payload.clone()),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                $crate::codec::serialize_tagged(self, serializer)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                $crate::codec::deserialize_tagged(deserializer)
            }
        }
    };
}

pub(crate) use discriminated_union;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Text {
        content: String,
    }

    discriminated_union! {
        enum Shape : "type" {
            Text(Text) = "text",
            Flag(bool) = "flag",
            Nothing(EmptyObject) = "nothing",
        }
    }

    discriminated_union! {
        enum Condition : keyed {
            Contains(String) = "contains",
            Empty(bool) = "is_empty",
        }
    }

    fn object(value: Value) -> JsonObject {
        match value {
            Value::Object(object) => object,
            other => panic!("fixture is not an object: {}", other),
        }
    }

    #[test]
    fn decodes_by_tag_field() {
        let shape: Shape = decode(&object(json!({
            "type": "text",
            "text": {"content": "hi"}
        })))
        .unwrap();
        assert_eq!(shape, Shape::Text(Text { content: "hi".into() }));
    }

    #[test]
    fn falls_back_to_key_presence_without_tag_field() {
        let shape: Shape = decode(&object(json!({"flag": true}))).unwrap();
        assert_eq!(shape, Shape::Flag(true));
    }

    #[test]
    fn two_active_keys_without_tag_are_rejected() {
        let err = decode::<Shape>(&object(json!({"flag": true, "nothing": {}}))).unwrap_err();
        assert_eq!(err.field, "type");
        assert!(err.reason.contains("both"));
    }

    #[test]
    fn unknown_tag_is_kept_verbatim() {
        let raw = json!({"type": "future", "future": {"x": 1}});
        let shape: Shape = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(
            shape,
            Shape::Unknown {
                tag: "future".into(),
                payload: Some(json!({"x": 1}))
            }
        );
        assert_eq!(serde_json::to_value(&shape).unwrap(), raw);
    }

    #[test]
    fn missing_payload_names_the_field() {
        let err = decode::<Shape>(&object(json!({"type": "text"}))).unwrap_err();
        assert_eq!(err.field, "text");
        assert_eq!(err.expected, "Text");
    }

    #[test]
    fn malformed_payload_names_the_field() {
        let err = decode::<Shape>(&object(json!({"type": "flag", "flag": "yes"}))).unwrap_err();
        assert_eq!(err.field, "flag");
        assert_eq!(err.expected, "bool");
    }

    #[test]
    fn non_string_tag_is_rejected() {
        let err = decode::<Shape>(&object(json!({"type": 3}))).unwrap_err();
        assert_eq!(err.field, "type");
    }

    #[test]
    fn absent_discriminator_is_none_for_optional_decoding() {
        let shape = decode_optional::<Shape>(&object(json!({"other": 1}))).unwrap();
        assert_eq!(shape, None);
        assert!(decode::<Shape>(&object(json!({"other": 1}))).is_err());
    }

    #[test]
    fn encodes_only_the_active_slot() {
        let encoded = serde_json::to_value(Shape::Nothing(EmptyObject {})).unwrap();
        assert_eq!(encoded, json!({"type": "nothing", "nothing": {}}));
    }

    #[test]
    fn keyed_union_has_no_tag_field() {
        let encoded = serde_json::to_value(Condition::Contains("a".into())).unwrap();
        assert_eq!(encoded, json!({"contains": "a"}));

        let decoded: Condition = serde_json::from_value(json!({"is_empty": true})).unwrap();
        assert_eq!(decoded, Condition::Empty(true));
    }

    #[test]
    fn keyed_union_accepts_single_unknown_key() {
        let decoded: Condition = serde_json::from_value(json!({"matches": "a.*"})).unwrap();
        assert_eq!(decoded.tag(), "matches");
        assert!(!decoded.is_known());
    }

    #[test]
    fn keyed_encoding_drops_tag_field() {
        let mut map = IndexMap::new();
        map.insert("Done".to_string(), Shape::Flag(true));

        #[derive(Serialize)]
        struct Body {
            #[serde(serialize_with = "serialize_keyed_map")]
            properties: IndexMap<String, Shape>,
        }

        let encoded = serde_json::to_value(Body { properties: map }).unwrap();
        assert_eq!(encoded, json!({"properties": {"Done": {"flag": true}}}));
    }
}
