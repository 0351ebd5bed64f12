//! The sparse style map.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::{StyleBuilder, ValueState};
use crate::logging::targets;
use crate::registry::{self, AnyValue, AttributeKind, KindDescriptor};

/// A stored entry. `Inherit` is never stored: absence already means it.
#[derive(Clone)]
pub(crate) enum Entry {
    Initial,
    Override(AnyValue),
}

impl Entry {
    fn state(&self) -> ValueState<&AnyValue> {
        match self {
            Entry::Initial => ValueState::Initial,
            Entry::Override(value) => ValueState::Override(value),
        }
    }
}

/// A sparse mapping from attribute kind name to [`ValueState`].
///
/// Kinds absent from the map behave as [`ValueState::Inherit`]. Setting a
/// kind to `Inherit` removes its entry, so two maps that mean the same thing
/// always hold the same entries.
///
/// Maps are plain values. Cascading, diffing and the `with_*` setters build
/// new maps; nothing is shared mutably between callers.
///
/// # Example
///
/// ```ignore
/// use flair_style::{StyleMap, ValueState};
///
/// let style = StyleMap::new()
///     .with_value(&Bold, true)
///     .with(&FontSize, ValueState::Initial);
///
/// assert!(style.value(&Bold));
/// assert_eq!(style.state(&FontSize), ValueState::Initial);
/// ```
#[derive(Clone, Default)]
pub struct StyleMap {
    entries: BTreeMap<Arc<str>, Entry>,
}

impl StyleMap {
    /// Create an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fluent builder.
    pub fn builder() -> StyleBuilder {
        StyleBuilder::new()
    }

    /// Get the state of `kind`.
    ///
    /// A stored value whose type does not match the kind reads as `Initial`.
    pub fn state<K: AttributeKind>(&self, kind: &K) -> ValueState<K::Value> {
        match self.entries.get(kind.name()) {
            None => ValueState::Inherit,
            Some(Entry::Initial) => ValueState::Initial,
            Some(Entry::Override(value)) => match value.downcast_ref::<K::Value>() {
                Some(value) => ValueState::Override(value.clone()),
                None => {
                    tracing::warn!(
                        target: targets::STYLE,
                        kind = kind.name(),
                        expected = std::any::type_name::<K::Value>(),
                        "stored value has the wrong type, using the initial value"
                    );
                    ValueState::Initial
                }
            },
        }
    }

    /// Get the resolved value of `kind`: the override if present, else the initial value.
    pub fn value<K: AttributeKind>(&self, kind: &K) -> K::Value {
        self.state(kind).resolve_or_else(|| kind.initial())
    }

    /// Set the state of `kind` in place.
    pub fn set<K: AttributeKind>(&mut self, kind: &K, state: ValueState<K::Value>) {
        self.set_raw(kind.name(), state.map(AnyValue::new));
    }

    /// Return a copy of this style with `kind` set to `state`.
    pub fn with<K: AttributeKind>(mut self, kind: &K, state: ValueState<K::Value>) -> Self {
        self.set(kind, state);
        self
    }

    /// Return a copy of this style with `kind` overridden to `value`.
    pub fn with_value<K: AttributeKind>(self, kind: &K, value: K::Value) -> Self {
        self.with(kind, ValueState::Override(value))
    }

    /// Get the type-erased state stored under `name`.
    pub fn raw_state(&self, name: &str) -> ValueState<AnyValue> {
        match self.entries.get(name) {
            None => ValueState::Inherit,
            Some(entry) => entry.state().map(AnyValue::clone),
        }
    }

    /// Set the type-erased state stored under `name`.
    pub fn set_raw(&mut self, name: &str, state: ValueState<AnyValue>) {
        match state {
            ValueState::Inherit => {
                self.entries.remove(name);
            }
            ValueState::Initial => {
                self.insert(Arc::from(name), Entry::Initial);
            }
            ValueState::Override(value) => {
                self.insert(Arc::from(name), Entry::Override(value));
            }
        }
    }

    /// Remove the entry for `name`, returning whether one was present.
    pub fn remove(&mut self, name: &str) -> bool {
        self.entries.remove(name).is_some()
    }

    /// Check whether an entry is stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Names with a stored entry, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(|name| &**name)
    }

    /// Iterate over stored entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ValueState<&AnyValue>)> + '_ {
        self.entries.iter().map(|(name, entry)| (&**name, entry.state()))
    }

    /// Get the number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn insert(&mut self, name: Arc<str>, entry: Entry) {
        self.entries.insert(name, entry);
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (&Arc<str>, &Entry)> + '_ {
        self.entries.iter()
    }

    pub(crate) fn entry(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// Resolve the value stored under the descriptor's name, substituting the
    /// initial value for `Initial`, `Inherit` and mistyped values.
    pub(crate) fn resolved(&self, descriptor: &KindDescriptor) -> AnyValue {
        match self.entries.get(descriptor.name()) {
            Some(Entry::Override(value)) => descriptor.resolve(Some(value)),
            _ => descriptor.resolve(None),
        }
    }
}

impl PartialEq for StyleMap {
    fn eq(&self, other: &Self) -> bool {
        if self.entries.len() != other.entries.len() {
            return false;
        }

        // Both maps are sorted by name, so zipping pairs up matching names.
        for ((name, lhs), (other_name, rhs)) in self.entries.iter().zip(other.entries.iter()) {
            if name != other_name {
                return false;
            }

            let Some(descriptor) = registry::lookup(name) else {
                tracing::warn!(
                    target: targets::STYLE,
                    kind = %name,
                    "comparing styles with an unregistered attribute kind"
                );
                return false;
            };

            let equal = match (lhs, rhs) {
                (Entry::Initial, Entry::Initial) => true,
                (Entry::Override(a), Entry::Override(b)) => descriptor.values_equal(a, b),
                _ => false,
            };
            if !equal {
                return false;
            }
        }

        true
    }
}

impl Hash for StyleMap {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entries.len().hash(state);
        for (name, entry) in &self.entries {
            name.hash(state);
            match entry {
                Entry::Initial => 0u8.hash(state),
                Entry::Override(value) => {
                    1u8.hash(state);
                    match registry::lookup(name) {
                        Some(descriptor) => descriptor.hash_value(value, state),
                        None => {
                            tracing::warn!(
                                target: targets::STYLE,
                                kind = %name,
                                "hashing style entry with an unregistered attribute kind"
                            );
                        }
                    }
                }
            }
        }
    }
}

impl fmt::Debug for StyleMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, entry) in &self.entries {
            map.entry(&&**name, &DebugEntry { name, entry });
        }
        map.finish()
    }
}

struct DebugEntry<'a> {
    name: &'a str,
    entry: &'a Entry,
}

impl fmt::Debug for DebugEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.entry {
            Entry::Initial => f.write_str("Initial"),
            Entry::Override(value) => match registry::lookup(self.name) {
                Some(descriptor) => f
                    .debug_tuple("Override")
                    .field(&descriptor.debug_value(value))
                    .finish(),
                None => f.debug_tuple("Override").field(value).finish(),
            },
        }
    }
}

static_assertions::assert_impl_all!(StyleMap: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    crate::attribute_kind! {
        Bold: bool = "test.map.bold", false
    }
    crate::attribute_kind! {
        Size: f64 = "test.map.size", 13.0
    }
    crate::attribute_kind! {
        Label: String = "test.map.label", String::from("body")
    }

    fn setup() {
        registry::register(&Bold);
        registry::register(&Size);
        registry::register(&Label);
    }

    fn hash(style: &StyleMap) -> u64 {
        let mut hasher = DefaultHasher::new();
        style.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn absent_is_inherit() {
        let style = StyleMap::new();
        assert_eq!(style.state(&Bold), ValueState::Inherit);
        assert!(!style.value(&Bold));
        assert_eq!(style.value(&Size), 13.0);
    }

    #[test]
    fn typed_set_and_get() {
        let style = StyleMap::new()
            .with_value(&Bold, true)
            .with(&Size, ValueState::Initial);

        assert_eq!(style.state(&Bold), ValueState::Override(true));
        assert!(style.value(&Bold));
        assert_eq!(style.state(&Size), ValueState::Initial);
        assert_eq!(style.value(&Size), 13.0);
        assert_eq!(style.len(), 2);
    }

    #[test]
    fn setting_inherit_removes_entry() {
        let mut style = StyleMap::new().with_value(&Bold, true);
        style.set(&Bold, ValueState::Inherit);
        assert!(style.is_empty());
        assert!(!style.contains(Bold::NAME));
    }

    #[test]
    fn with_does_not_alias() {
        let original = StyleMap::new().with_value(&Size, 12.0);
        let changed = original.clone().with_value(&Size, 18.0);
        assert_eq!(original.value(&Size), 12.0);
        assert_eq!(changed.value(&Size), 18.0);
    }

    #[test]
    fn mistyped_value_reads_as_initial() {
        let mut style = StyleMap::new();
        style.set_raw(Size::NAME, ValueState::Override(AnyValue::new(String::from("big"))));
        assert_eq!(style.state(&Size), ValueState::Initial);
        assert_eq!(style.value(&Size), 13.0);
    }

    #[test]
    fn equality_uses_registered_predicates() {
        setup();
        let a = StyleMap::new().with_value(&Bold, true).with_value(&Label, "title".into());
        let b = StyleMap::new().with_value(&Label, "title".into()).with_value(&Bold, true);
        let c = StyleMap::new().with_value(&Bold, false).with_value(&Label, "title".into());

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, StyleMap::new().with_value(&Bold, true));
        assert_eq!(hash(&a), hash(&b));
    }

    #[test]
    fn initial_differs_from_override_of_initial_value() {
        setup();
        let reset = StyleMap::new().with(&Bold, ValueState::Initial);
        let explicit = StyleMap::new().with_value(&Bold, false);
        assert_ne!(reset, explicit);
        assert_eq!(reset, StyleMap::new().with(&Bold, ValueState::Initial));
    }

    #[test]
    fn unregistered_names_are_never_equal() {
        let mut a = StyleMap::new();
        a.set_raw("test.map.unregistered", ValueState::Initial);
        let b = a.clone();
        assert_ne!(a, b);
        // Hashing still works, using the name only.
        assert_eq!(hash(&a), hash(&b));
    }

    #[test]
    fn float_values_hash_consistently() {
        setup();
        let a = StyleMap::new().with_value(&Size, 0.0);
        let b = StyleMap::new().with_value(&Size, -0.0);
        assert_eq!(a, b);
        assert_eq!(hash(&a), hash(&b));
    }

    #[test]
    fn debug_prints_through_descriptors() {
        setup();
        let style = StyleMap::new().with_value(&Size, 14.0).with(&Bold, ValueState::Initial);
        let printed = format!("{style:?}");
        assert!(printed.contains("\"test.map.size\": Override(14.0)"));
        assert!(printed.contains("\"test.map.bold\": Initial"));
    }

    #[test]
    fn iterates_in_name_order() {
        let style = StyleMap::new().with_value(&Size, 14.0).with_value(&Bold, true);
        let names: Vec<_> = style.names().collect();
        assert_eq!(names, vec!["test.map.bold", "test.map.size"]);
        let states: Vec<_> = style.iter().map(|(_, state)| state.is_override()).collect();
        assert_eq!(states, vec![true, true]);
    }
}
