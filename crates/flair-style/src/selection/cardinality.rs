//! Per-kind agreement across a collection of styles.

use super::ValueSet;
use crate::registry::{AttributeKind, AttributeValue};
use crate::style::StyleMap;

/// Whether the styles of a selection agree on one kind's value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cardinality<T> {
    /// The selection holds no styles.
    Empty,
    /// Every style resolves to this value.
    Single(T),
    /// Styles resolve to two or more distinct values.
    Multiple(ValueSet<T>),
}

impl<T: AttributeValue> Cardinality<T> {
    /// Compute the cardinality of `kind` across `styles`.
    ///
    /// Each style contributes its resolved value, so a style without an entry
    /// counts as holding the kind's initial value.
    pub fn of<'a, K>(kind: &K, styles: impl IntoIterator<Item = &'a StyleMap>) -> Self
    where
        K: AttributeKind<Value = T>,
    {
        let values: ValueSet<T> = styles.into_iter().map(|style| style.value(kind)).collect();

        if values.len() > 1 {
            return Cardinality::Multiple(values);
        }
        match values.into_iter().next() {
            Some(value) => Cardinality::Single(value),
            None => Cardinality::Empty,
        }
    }

    /// The shared value, if every style agrees.
    pub fn value(&self) -> Option<&T> {
        match self {
            Cardinality::Single(value) => Some(value),
            _ => None,
        }
    }

    /// All distinct values, in first-seen order.
    pub fn values(&self) -> Vec<T> {
        match self {
            Cardinality::Empty => Vec::new(),
            Cardinality::Single(value) => vec![value.clone()],
            Cardinality::Multiple(values) => values.as_slice().to_vec(),
        }
    }

    /// Check if the selection is empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cardinality::Empty)
    }

    /// Check if the selection is mixed.
    pub fn is_mixed(&self) -> bool {
        matches!(self, Cardinality::Multiple(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::attribute_kind! {
        Weight: f64 = "test.cardinality.weight", 0.0
    }

    #[test]
    fn empty_selection() {
        let cardinality = Cardinality::of(&Weight, []);
        assert!(cardinality.is_empty());
        assert!(cardinality.values().is_empty());
    }

    #[test]
    fn uniform_selection() {
        let a = StyleMap::new().with_value(&Weight, 0.4);
        let b = StyleMap::new().with_value(&Weight, 0.4);
        let cardinality = Cardinality::of(&Weight, [&a, &b]);
        assert_eq!(cardinality, Cardinality::Single(0.4));
        assert_eq!(cardinality.value(), Some(&0.4));
    }

    #[test]
    fn absent_entries_count_as_initial() {
        let a = StyleMap::new().with_value(&Weight, 0.0);
        let b = StyleMap::new();
        assert_eq!(Cardinality::of(&Weight, [&a, &b]), Cardinality::Single(0.0));
    }

    #[test]
    fn mixed_selection() {
        let a = StyleMap::new().with_value(&Weight, 0.4);
        let b = StyleMap::new();
        let c = StyleMap::new().with_value(&Weight, 0.4);
        let cardinality = Cardinality::of(&Weight, [&a, &b, &c]);

        assert!(cardinality.is_mixed());
        assert_eq!(cardinality.value(), None);
        assert_eq!(cardinality.values(), vec![0.4, 0.0]);
    }
}
