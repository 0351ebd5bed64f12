//! Per-kind dispatch tables.

use std::any::TypeId;
use std::fmt;
use std::hash::Hasher;
use std::sync::Arc;

use super::{AnyValue, AttributeKind, AttributeValue};
use crate::error::{Error, Result};

/// Runtime description of a registered attribute kind.
///
/// A descriptor carries everything generic code needs to work with values
/// it cannot name statically: the initial value, and monomorphized function
/// pointers for equality, hashing, encoding, decoding and debug output.
#[derive(Clone)]
pub struct KindDescriptor {
    name: Arc<str>,
    type_id: TypeId,
    type_name: &'static str,
    initial: AnyValue,
    eq: fn(&AnyValue, &AnyValue) -> bool,
    hash: fn(&AnyValue, &mut dyn Hasher),
    encode: fn(&str, &AnyValue) -> Result<serde_json::Value>,
    decode: fn(&str, serde_json::Value) -> Result<AnyValue>,
    debug: fn(&AnyValue, &mut fmt::Formatter<'_>) -> fmt::Result,
}

impl KindDescriptor {
    /// Build the descriptor for `kind`.
    pub fn of<K: AttributeKind>(kind: &K) -> Self {
        Self {
            name: Arc::from(kind.name()),
            type_id: TypeId::of::<K::Value>(),
            type_name: std::any::type_name::<K::Value>(),
            initial: AnyValue::new(kind.initial()),
            eq: erased_eq::<K::Value>,
            hash: erased_hash::<K::Value>,
            encode: erased_encode::<K::Value>,
            decode: erased_decode::<K::Value>,
            debug: erased_debug::<K::Value>,
        }
    }

    /// The registered name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn shared_name(&self) -> &Arc<str> {
        &self.name
    }

    /// The `TypeId` of the declared value type.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// The declared value type's name, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The initial value, type-erased.
    pub fn initial(&self) -> &AnyValue {
        &self.initial
    }

    /// Check whether `value` has the declared type.
    pub fn accepts(&self, value: &AnyValue) -> bool {
        value.value_type_id() == self.type_id
    }

    /// Compare two values with the kind's equality.
    ///
    /// Values of the wrong type are never equal, not even to themselves.
    pub fn values_equal(&self, a: &AnyValue, b: &AnyValue) -> bool {
        (self.eq)(a, b)
    }

    /// Hash a value with the kind's hash. Values of the wrong type hash nothing.
    pub fn hash_value(&self, value: &AnyValue, state: &mut dyn Hasher) {
        (self.hash)(value, state)
    }

    /// Encode a value to structured form.
    pub fn encode(&self, value: &AnyValue) -> Result<serde_json::Value> {
        (self.encode)(&self.name, value)
    }

    /// Decode a value from structured form.
    pub fn decode(&self, value: serde_json::Value) -> Result<AnyValue> {
        (self.decode)(&self.name, value)
    }

    /// Resolve a stored value: itself if it has the declared type, else the initial value.
    pub(crate) fn resolve(&self, value: Option<&AnyValue>) -> AnyValue {
        match value {
            Some(value) if self.accepts(value) => value.clone(),
            _ => self.initial.clone(),
        }
    }

    /// Wrap a value so it prints through the kind's `Debug`.
    pub fn debug_value<'a>(&'a self, value: &'a AnyValue) -> impl fmt::Debug + 'a {
        DebugValue {
            descriptor: self,
            value,
        }
    }
}

impl fmt::Debug for KindDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KindDescriptor")
            .field("name", &self.name)
            .field("type_name", &self.type_name)
            .field("initial", &self.debug_value(&self.initial))
            .finish()
    }
}

struct DebugValue<'a> {
    descriptor: &'a KindDescriptor,
    value: &'a AnyValue,
}

impl fmt::Debug for DebugValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self.descriptor.debug)(self.value, f)
    }
}

fn erased_eq<T: AttributeValue>(a: &AnyValue, b: &AnyValue) -> bool {
    match (a.downcast_ref::<T>(), b.downcast_ref::<T>()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

fn erased_hash<T: AttributeValue>(value: &AnyValue, state: &mut dyn Hasher) {
    if let Some(value) = value.downcast_ref::<T>() {
        value.hash_value(state);
    }
}

fn erased_encode<T: AttributeValue>(name: &str, value: &AnyValue) -> Result<serde_json::Value> {
    let value = value
        .downcast_ref::<T>()
        .ok_or_else(|| Error::type_mismatch(name, std::any::type_name::<T>()))?;
    serde_json::to_value(value).map_err(|source| Error::encode(name, source))
}

fn erased_decode<T: AttributeValue>(name: &str, value: serde_json::Value) -> Result<AnyValue> {
    serde_json::from_value::<T>(value)
        .map(AnyValue::new)
        .map_err(|source| Error::decode(name, source))
}

fn erased_debug<T: AttributeValue>(value: &AnyValue, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value.downcast_ref::<T>() {
        Some(value) => fmt::Debug::fmt(value, f),
        None => f.write_str("<mismatched value>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::DynamicKind;

    #[test]
    fn descriptor_dispatches_to_value_type() {
        let descriptor = KindDescriptor::of(&DynamicKind::new("test.descriptor.size", 12.0f64));
        assert_eq!(descriptor.name(), "test.descriptor.size");
        assert_eq!(descriptor.type_id(), TypeId::of::<f64>());
        assert_eq!(descriptor.initial().downcast_ref::<f64>(), Some(&12.0));

        let a = AnyValue::new(14.0f64);
        let b = AnyValue::new(14.0f64);
        let c = AnyValue::new(16.0f64);
        assert!(descriptor.values_equal(&a, &b));
        assert!(!descriptor.values_equal(&a, &c));
    }

    #[test]
    fn mismatched_values_are_never_equal() {
        let descriptor = KindDescriptor::of(&DynamicKind::new("test.descriptor.flag", false));
        let wrong = AnyValue::new(1u8);
        assert!(!descriptor.accepts(&wrong));
        assert!(!descriptor.values_equal(&wrong, &wrong));
        assert!(matches!(descriptor.encode(&wrong), Err(Error::TypeMismatch { .. })));
    }

    #[test]
    fn encode_decode_through_json() {
        let descriptor = KindDescriptor::of(&DynamicKind::new("test.descriptor.label", String::new()));
        let encoded = descriptor.encode(&AnyValue::new(String::from("title"))).unwrap();
        assert_eq!(encoded, serde_json::json!("title"));

        let decoded = descriptor.decode(encoded).unwrap();
        assert_eq!(decoded.downcast_ref::<String>().map(String::as_str), Some("title"));

        assert!(matches!(
            descriptor.decode(serde_json::json!(42)),
            Err(Error::Decode { .. })
        ));
    }

    #[test]
    fn resolve_falls_back_to_initial() {
        let descriptor = KindDescriptor::of(&DynamicKind::new("test.descriptor.count", 3u32));
        let resolved = descriptor.resolve(Some(&AnyValue::new("oops".to_string())));
        assert_eq!(resolved.downcast_ref::<u32>(), Some(&3));
        let resolved = descriptor.resolve(None);
        assert_eq!(resolved.downcast_ref::<u32>(), Some(&3));
        let resolved = descriptor.resolve(Some(&AnyValue::new(9u32)));
        assert_eq!(resolved.downcast_ref::<u32>(), Some(&9));
    }
}
