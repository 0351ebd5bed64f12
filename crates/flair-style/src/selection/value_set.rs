//! Distinct attribute values.

use std::collections::HashMap;
use std::fmt;

use crate::registry::{AttributeValue, hash_of};

/// A set of distinct attribute values, kept in first-seen order.
///
/// Membership uses the value type's attribute hash to find candidates and
/// its equality to confirm them, so it works for types like `f64` that do
/// not implement `Eq + Hash`.
#[derive(Clone)]
pub struct ValueSet<T> {
    values: Vec<T>,
    buckets: HashMap<u64, Vec<usize>>,
}

impl<T: AttributeValue> ValueSet<T> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            buckets: HashMap::new(),
        }
    }

    /// Insert `value`, returning whether it was not already present.
    pub fn insert(&mut self, value: T) -> bool {
        let bucket = self.buckets.entry(hash_of(&value)).or_default();
        if bucket.iter().any(|&index| self.values[index] == value) {
            return false;
        }
        bucket.push(self.values.len());
        self.values.push(value);
        true
    }

    /// Check whether an equal value is present.
    pub fn contains(&self, value: &T) -> bool {
        self.buckets
            .get(&hash_of(value))
            .is_some_and(|bucket| bucket.iter().any(|&index| &self.values[index] == value))
    }

    /// Get the number of distinct values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// The values in first-seen order.
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }
}

impl<T: AttributeValue> Default for ValueSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Set equality: same members, in any order.
impl<T: PartialEq> PartialEq for ValueSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.values.len() == other.values.len()
            && self.values.iter().all(|value| other.values.contains(value))
    }
}

impl<T: fmt::Debug> fmt::Debug for ValueSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(&self.values).finish()
    }
}

impl<T: AttributeValue> FromIterator<T> for ValueSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: AttributeValue> Extend<T> for ValueSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> IntoIterator for ValueSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ValueSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
