//! Attribute value types and their type-erased storage.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A type that can be stored as the value of an attribute kind.
///
/// Values must be comparable, hashable consistently with that comparison,
/// serializable and shareable across threads. Most types get this through
/// [`hashed_attribute_value!`](crate::hashed_attribute_value), which forwards
/// to `Hash`. Floating point types hash their bit pattern instead.
pub trait AttributeValue:
    Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Feed this value into `state`.
    ///
    /// Equal values must produce equal hashes.
    fn hash_value(&self, state: &mut dyn Hasher);
}

/// Implement [`AttributeValue`] for types that already implement `Hash`.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// enum CardLayout { ImageOnly, ImageLeading, ImageTrailing }
///
/// flair_style::hashed_attribute_value!(CardLayout);
/// ```
#[macro_export]
macro_rules! hashed_attribute_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::registry::AttributeValue for $ty {
                fn hash_value(&self, mut state: &mut dyn ::std::hash::Hasher) {
                    ::std::hash::Hash::hash(self, &mut state);
                }
            }
        )+
    };
}

hashed_attribute_value!(
    bool, char, String, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize,
);

impl AttributeValue for f32 {
    fn hash_value(&self, mut state: &mut dyn Hasher) {
        // -0.0 == 0.0, so both must hash alike.
        let normalized = if *self == 0.0 { 0.0f32 } else { *self };
        normalized.to_bits().hash(&mut state);
    }
}

impl AttributeValue for f64 {
    fn hash_value(&self, mut state: &mut dyn Hasher) {
        let normalized = if *self == 0.0 { 0.0f64 } else { *self };
        normalized.to_bits().hash(&mut state);
    }
}

impl<T: AttributeValue> AttributeValue for Option<T> {
    fn hash_value(&self, mut state: &mut dyn Hasher) {
        match self {
            Some(value) => {
                1u8.hash(&mut state);
                value.hash_value(state);
            }
            None => 0u8.hash(&mut state),
        }
    }
}

impl<T: AttributeValue> AttributeValue for Vec<T> {
    fn hash_value(&self, mut state: &mut dyn Hasher) {
        self.len().hash(&mut state);
        for value in self {
            value.hash_value(state);
        }
    }
}

/// A type-erased attribute value.
///
/// Style maps store values of many types side by side. The registered
/// [`KindDescriptor`](super::KindDescriptor) for a name knows how to compare,
/// hash and serialize the value; typed access goes through
/// [`AttributeKind`](super::AttributeKind) and downcasts.
#[derive(Clone)]
pub struct AnyValue(Arc<dyn Any + Send + Sync>);

impl AnyValue {
    /// Wrap a concrete value.
    pub fn new<T: AttributeValue>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Borrow the value as `T`, if that is its type.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// The `TypeId` of the stored value.
    pub fn value_type_id(&self) -> TypeId {
        (*self.0).type_id()
    }

    /// Check whether the stored value is a `T`.
    pub fn is<T: 'static>(&self) -> bool {
        self.0.is::<T>()
    }
}

impl fmt::Debug for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AnyValue(..)")
    }
}

pub(crate) fn hash_of<T: AttributeValue>(value: &T) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    value.hash_value(&mut hasher);
    hasher.finish()
}
