//! Treating a collection of styles as one editable unit.
//!
//! A [`Selection`] wraps the styles behind, say, several selected text ranges
//! together with a caller-supplied merge callback. Presentation code asks it
//! for the [`Cardinality`] of a kind to draw on/off/mixed controls, and calls
//! [`Selection::update`] when the user picks a value.

mod cardinality;
mod value_set;

use std::fmt;

pub use cardinality::Cardinality;
pub use value_set::ValueSet;

use crate::logging::targets;
use crate::registry::AttributeKind;
use crate::style::StyleMap;

/// How a proposed style is merged into existing styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Merge {
    /// Cascade the proposed style on top of each existing style.
    Add,
    /// Remove exactly the proposed values from each existing style.
    Remove,
}

impl StyleMap {
    /// Merge `proposed` into this style according to `operation`.
    ///
    /// `Add` is [`appending`](StyleMap::appending); `Remove` is
    /// [`subtracting`](StyleMap::subtracting) the proposed style, which drops
    /// matching overrides and leaves every other resolved value untouched.
    pub fn merge(&self, proposed: &StyleMap, operation: Merge) -> StyleMap {
        match operation {
            Merge::Add => self.appending(proposed),
            Merge::Remove => self.subtracting(proposed),
        }
    }
}

type MergeFn = Box<dyn Fn(StyleMap, Merge)>;

/// A read-only view of several styles plus a merge callback.
///
/// The selection never mutates the styles it was built from. Edits are
/// forwarded to the merge callback, which owns the real storage.
pub struct Selection {
    styles: Vec<StyleMap>,
    merge: MergeFn,
}

impl Selection {
    /// Create a selection over `styles` that forwards edits to `merge`.
    pub fn new<F>(styles: impl Into<Vec<StyleMap>>, merge: F) -> Self
    where
        F: Fn(StyleMap, Merge) + 'static,
    {
        Self {
            styles: styles.into(),
            merge: Box::new(merge),
        }
    }

    /// Create a selection whose merge callback only logs the request.
    pub fn logging(styles: impl Into<Vec<StyleMap>>) -> Self {
        Self::new(styles, |style, operation| {
            tracing::debug!(target: targets::SELECTION, ?operation, ?style, "merge");
        })
    }

    /// The selected styles.
    pub fn styles(&self) -> &[StyleMap] {
        &self.styles
    }

    /// Get the number of selected styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Report whether the selected styles agree on `kind`.
    pub fn cardinality<K: AttributeKind>(&self, kind: &K) -> Cardinality<K::Value> {
        Cardinality::of(kind, &self.styles)
    }

    /// Apply `value` for `kind` to the selection.
    ///
    /// When every selected style already resolves to `value`, the value is
    /// toggled off with [`Merge::Remove`]. Otherwise it is applied with
    /// [`Merge::Add`].
    pub fn update<K: AttributeKind>(&self, kind: &K, value: K::Value) {
        let operation = match self.cardinality(kind) {
            Cardinality::Single(current) if current == value => Merge::Remove,
            _ => Merge::Add,
        };

        let proposed = StyleMap::new().with_value(kind, value);
        tracing::trace!(target: targets::SELECTION, kind = kind.name(), ?operation, "update");
        (self.merge)(proposed, operation);
    }
}

impl fmt::Debug for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("styles", &self.styles)
            .finish_non_exhaustive()
    }
}
