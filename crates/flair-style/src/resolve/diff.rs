//! Minimal difference between two styles.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::logging::targets;
use crate::registry;
use crate::style::{Entry, StyleMap};

/// Compute the smallest style that, cascaded onto `baseline`, resolves to `style`.
///
/// For every kind named by either map, the result overrides the kind with
/// `style`'s resolved value when it differs from `baseline`'s resolved value,
/// and omits it otherwise. Resolution substitutes the kind's initial value
/// for `Initial` and `Inherit`.
///
/// Unregistered kinds cannot be resolved; an override in `style` under such a
/// name is carried over unchanged, anything else is dropped.
pub fn subtract(style: &StyleMap, baseline: &StyleMap) -> StyleMap {
    let names: BTreeSet<&Arc<str>> = style
        .entries()
        .chain(baseline.entries())
        .map(|(name, _)| name)
        .collect();

    let mut difference = StyleMap::new();

    for name in names {
        let Some(descriptor) = registry::lookup(name) else {
            tracing::debug!(
                target: targets::STYLE,
                kind = %name,
                "diffing unregistered attribute kind"
            );
            if let Some(Entry::Override(value)) = style.entry(name) {
                difference.insert(name.clone(), Entry::Override(value.clone()));
            }
            continue;
        };

        let resolved = style.resolved(&descriptor);
        if !descriptor.values_equal(&resolved, &baseline.resolved(&descriptor)) {
            difference.insert(name.clone(), Entry::Override(resolved));
        }
    }

    difference
}

impl StyleMap {
    /// Compute what this style adds on top of `baseline`. See [`subtract`].
    pub fn subtracting(&self, baseline: &StyleMap) -> StyleMap {
        subtract(self, baseline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::AnyValue;
    use crate::style::ValueState;

    crate::attribute_kind! {
        Bold: bool = "test.diff.bold", false
    }
    crate::attribute_kind! {
        Size: f64 = "test.diff.size", 13.0
    }

    fn setup() {
        registry::register(&Bold);
        registry::register(&Size);
    }

    #[test]
    fn identical_styles_have_empty_difference() {
        setup();
        let style = StyleMap::new().with_value(&Bold, true).with_value(&Size, 18.0);
        assert!(style.subtracting(&style).is_empty());
    }

    #[test]
    fn difference_keeps_changed_values_only() {
        setup();
        let baseline = StyleMap::new().with_value(&Size, 12.0).with_value(&Bold, true);
        let style = StyleMap::new().with_value(&Size, 12.0).with_value(&Bold, false);

        let difference = style.subtracting(&baseline);
        assert_eq!(difference.len(), 1);
        assert_eq!(difference.state(&Bold), ValueState::Override(false));
    }

    #[test]
    fn inherit_resolves_to_initial_before_comparing() {
        setup();
        // An explicit override equal to the initial value adds nothing.
        let style = StyleMap::new().with_value(&Size, 13.0);
        assert!(style.subtracting(&StyleMap::new()).is_empty());

        // Inheriting on top of an overridden baseline must undo the override.
        let baseline = StyleMap::new().with_value(&Size, 20.0);
        let difference = StyleMap::new().subtracting(&baseline);
        assert_eq!(difference.state(&Size), ValueState::Override(13.0));
    }

    #[test]
    fn difference_cascades_back_to_style() {
        setup();
        let baseline = StyleMap::new()
            .with_value(&Size, 20.0)
            .with(&Bold, ValueState::Initial);
        let style = StyleMap::new().with_value(&Bold, true);

        let difference = style.subtracting(&baseline);
        let rebuilt = baseline.appending(&difference);
        assert_eq!(rebuilt.value(&Bold), style.value(&Bold));
        assert_eq!(rebuilt.value(&Size), style.value(&Size));
    }

    #[test]
    fn unregistered_overrides_are_carried() {
        let mut style = StyleMap::new();
        style.set_raw("test.diff.unregistered", ValueState::Override(AnyValue::new(1u8)));
        style.set_raw("test.diff.unregistered-reset", ValueState::Initial);

        let difference = style.subtracting(&StyleMap::new());
        assert!(difference.contains("test.diff.unregistered"));
        assert!(!difference.contains("test.diff.unregistered-reset"));
    }
}
