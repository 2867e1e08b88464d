use crate::Element;
use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_with::{DeserializeAs, SerializeAs};

/// `serde_with` adapter that keeps infinities and NaN
///
/// Self-describing formats such as JSON have no literal for non-finite
/// numbers and write them as `null`, which reads back as an absent value.
/// This adapter writes non-finite floats as their `Display` strings
/// (`"inf"`, `"-inf"`, `"NaN"`) and parses them back with `FromStr`.
/// Integers and finite floats keep their natural encoding.
pub(crate) struct Lossless;

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr<T> {
    Value(T),
    Text(String),
}

impl<T: Element + Serialize> SerializeAs<T> for Lossless {
    fn serialize_as<S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
        if T::IS_INTEGER || value.to_f64().is_finite() {
            value.serialize(serializer)
        } else {
            serializer.collect_str(value)
        }
    }
}

impl<'de, T: Element + Deserialize<'de>> DeserializeAs<'de, T> for Lossless {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<T, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Value(value) => Ok(value),
            Repr::Text(text) => text
                .parse()
                .map_err(|_| D::Error::invalid_value(Unexpected::Str(&text), &"a number")),
        }
    }
}
