//! Attribute kind definitions.

use std::sync::Arc;

use super::AttributeValue;

/// A named, typed style property.
///
/// Kinds known at compile time are usually zero-sized types declared with
/// [`attribute_kind!`](crate::attribute_kind). Kinds only known at runtime use
/// [`DynamicKind`]. Either way the kind value is the typed accessor for its
/// entries in a [`StyleMap`](crate::StyleMap).
pub trait AttributeKind: Send + Sync + 'static {
    /// The value type stored for this kind.
    type Value: AttributeValue;

    /// The process-wide unique name, used as the serialization key.
    fn name(&self) -> &str;

    /// The value used when a style leaves this kind undefined or resets it.
    fn initial(&self) -> Self::Value;
}

/// Declare a zero-sized [`AttributeKind`].
///
/// ```ignore
/// flair_style::attribute_kind! {
///     /// Whether cards show their image before the title.
///     pub CardImageLeading: bool = "example.card.image-leading", true
/// }
/// ```
#[macro_export]
macro_rules! attribute_kind {
    ($(#[$meta:meta])* $vis:vis $kind:ident : $value:ty = $name:literal, $initial:expr $(,)?) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $kind;

        impl $kind {
            /// The registered name of this kind.
            pub const NAME: &'static str = $name;
        }

        impl $crate::registry::AttributeKind for $kind {
            type Value = $value;

            fn name(&self) -> &str {
                $name
            }

            fn initial(&self) -> $value {
                $initial
            }
        }
    };
}

/// An attribute kind defined at runtime.
///
/// Used by hosts that load kind definitions from configuration or plugins.
/// The value type is still static; only the name and initial value are
/// chosen at runtime.
#[derive(Debug, Clone)]
pub struct DynamicKind<T> {
    name: Arc<str>,
    initial: T,
}

impl<T: AttributeValue> DynamicKind<T> {
    /// Create a kind with the given name and initial value.
    pub fn new(name: impl Into<Arc<str>>, initial: T) -> Self {
        Self {
            name: name.into(),
            initial,
        }
    }
}

impl<T: AttributeValue> AttributeKind for DynamicKind<T> {
    type Value = T;

    fn name(&self) -> &str {
        &self.name
    }

    fn initial(&self) -> T {
        self.initial.clone()
    }
}
