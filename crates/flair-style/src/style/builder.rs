//! Fluent style construction.

use super::{StyleMap, ValueState};
use crate::registry::AttributeKind;

/// Builder for creating style maps with a fluent API.
///
/// # Example
///
/// ```ignore
/// let style = StyleMap::builder()
///     .set(&Bold, true)
///     .set(&FontSize, 18.0)
///     .initial(&Italic)
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleBuilder {
    style: StyleMap,
}

impl StyleBuilder {
    /// Create a new style builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing style.
    pub fn from_style(style: StyleMap) -> Self {
        Self { style }
    }

    /// Build the final style.
    pub fn build(self) -> StyleMap {
        self.style
    }

    /// Override `kind` with `value`.
    pub fn set<K: AttributeKind>(mut self, kind: &K, value: K::Value) -> Self {
        self.style.set(kind, ValueState::Override(value));
        self
    }

    /// Reset `kind` to its initial value, blocking any ancestor's override.
    pub fn initial<K: AttributeKind>(mut self, kind: &K) -> Self {
        self.style.set(kind, ValueState::Initial);
        self
    }

    /// Drop any local opinion about `kind`.
    pub fn inherit<K: AttributeKind>(mut self, kind: &K) -> Self {
        self.style.set(kind, ValueState::Inherit);
        self
    }

    /// Set `kind` to an arbitrary state.
    pub fn state<K: AttributeKind>(mut self, kind: &K, state: ValueState<K::Value>) -> Self {
        self.style.set(kind, state);
        self
    }
}

impl From<StyleBuilder> for StyleMap {
    fn from(builder: StyleBuilder) -> Self {
        builder.build()
    }
}
