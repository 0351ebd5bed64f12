//! Structured encoding of style maps.
//!
//! A style encodes to a JSON object keyed by attribute kind name. Each value
//! is an array whose first element is a one-character tag:
//!
//! ```json
//! {
//!     "flair.bold": ["o", true],
//!     "flair.font-size": ["i"]
//! }
//! ```
//!
//! `"i"` marks an `Initial` reset and `"o"` an override followed by the
//! kind's encoded value. `Inherit` entries are never written. Decoding skips
//! unknown names, unknown tags and values the registered decoder rejects, so
//! styles written by other versions of an application still load.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::logging::targets;
use crate::registry;
use crate::style::{Entry, StyleMap};

const INITIAL_TAG: &str = "i";
const OVERRIDE_TAG: &str = "o";

/// Encode a style to its structured form.
///
/// Entries whose kind is unregistered, or whose stored value does not match
/// the registered type, cannot be encoded and are skipped. Errors raised by a
/// registered encoder are returned.
pub fn encode(style: &StyleMap) -> Result<Value> {
    let mut object = Map::new();

    for (name, entry) in style.entries() {
        let Some(descriptor) = registry::lookup(name) else {
            tracing::debug!(target: targets::CODEC, kind = %name, "skipping unregistered kind on encode");
            continue;
        };

        let record = match entry {
            Entry::Initial => vec![Value::from(INITIAL_TAG)],
            Entry::Override(value) => match descriptor.encode(value) {
                Ok(encoded) => vec![Value::from(OVERRIDE_TAG), encoded],
                Err(err @ Error::TypeMismatch { .. }) => {
                    tracing::warn!(target: targets::CODEC, error = %err, "skipping entry on encode");
                    continue;
                }
                Err(err) => return Err(err),
            },
        };

        object.insert(name.to_string(), Value::Array(record));
    }

    Ok(Value::Object(object))
}

/// Decode a style from its structured form.
///
/// Never fails: anything that cannot be decoded is skipped, and input that is
/// not an object decodes to the empty style.
pub fn decode(value: &Value) -> StyleMap {
    let mut style = StyleMap::new();

    let Some(object) = value.as_object() else {
        tracing::debug!(target: targets::CODEC, "style input is not an object");
        return style;
    };

    for (name, record) in object {
        let Some(descriptor) = registry::lookup(name) else {
            tracing::debug!(target: targets::CODEC, kind = %name, "skipping unregistered kind on decode");
            continue;
        };

        let items = record.as_array().map(Vec::as_slice).unwrap_or_default();
        let entry = match items.first().and_then(Value::as_str) {
            Some(INITIAL_TAG) => Entry::Initial,
            Some(OVERRIDE_TAG) => {
                let Some(encoded) = items.get(1) else {
                    tracing::debug!(target: targets::CODEC, kind = %name, "override without a value");
                    continue;
                };
                match descriptor.decode(encoded.clone()) {
                    Ok(value) => Entry::Override(value),
                    Err(err) => {
                        tracing::debug!(target: targets::CODEC, error = %err, "skipping undecodable value");
                        continue;
                    }
                }
            }
            tag => {
                tracing::debug!(target: targets::CODEC, kind = %name, ?tag, "skipping unrecognized tag");
                continue;
            }
        };

        style.insert(descriptor.shared_name().clone(), entry);
    }

    style
}

/// Encode a style as a JSON string.
pub fn to_json_string(style: &StyleMap) -> Result<String> {
    Ok(serde_json::to_string(&encode(style)?)?)
}

/// Decode a style from a JSON string.
///
/// Only malformed JSON fails; unknown or malformed entries are skipped as in [`decode`].
pub fn from_json_str(json: &str) -> Result<StyleMap> {
    let value: Value = serde_json::from_str(json)?;
    Ok(decode(&value))
}

impl Serialize for StyleMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        encode(self)
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for StyleMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(decode(&value))
    }
}
