//! Style cascading logic.

use crate::style::{Entry, StyleMap};

/// Cascade an ordered sequence of styles into one.
///
/// Earlier styles are least authoritative. For each kind, the result holds
/// the override from the latest style that has one, unless a later style
/// resets the kind to `Initial`; a reset blocks the override that precedes it
/// and then drops out of the result itself.
///
/// # Example
///
/// ```ignore
/// let parent = StyleMap::new().with_value(&Bold, true).with_value(&FontSize, 12.0);
/// let child = StyleMap::new().with_value(&FontSize, 18.0);
///
/// let style = cascade([&parent, &child]);
/// assert!(style.value(&Bold));
/// assert_eq!(style.value(&FontSize), 18.0);
/// ```
pub fn cascade<'a>(styles: impl IntoIterator<Item = &'a StyleMap>) -> StyleMap {
    styles
        .into_iter()
        .fold(StyleMap::new(), |parent, child| cascade_step(&parent, child))
}

/// Apply one child style on top of an accumulated parent.
fn cascade_step(parent: &StyleMap, child: &StyleMap) -> StyleMap {
    let mut cascaded = StyleMap::new();

    // A parent override survives only where the child has no opinion.
    for (name, entry) in parent.entries() {
        if let Entry::Override(value) = entry {
            if child.entry(name).is_none() {
                cascaded.insert(name.clone(), Entry::Override(value.clone()));
            }
        }
    }

    // Child overrides always win. Child resets fall through and are omitted.
    for (name, entry) in child.entries() {
        if let Entry::Override(value) = entry {
            cascaded.insert(name.clone(), Entry::Override(value.clone()));
        }
    }

    cascaded
}

impl StyleMap {
    /// Cascade `other` on top of this style.
    pub fn appending(&self, other: &StyleMap) -> StyleMap {
        cascade([self, other])
    }

    /// Cascade this style on top of `other`.
    pub fn prepending(&self, other: &StyleMap) -> StyleMap {
        cascade([other, self])
    }

    /// Cascade a sequence of styles on top of this one.
    pub fn cascading<'a>(&'a self, others: impl IntoIterator<Item = &'a StyleMap>) -> StyleMap {
        cascade(std::iter::once(self).chain(others))
    }
}
