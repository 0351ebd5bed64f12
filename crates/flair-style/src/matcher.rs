//! Snapping numeric trait requests onto discrete candidates.
//!
//! Font weights, widths and slants are continuous numbers, but a family only
//! offers a few of them. [`nearest`] picks the closest available value and
//! [`next`] steps to the next stronger standard value, which is how "bold"
//! and "italic" escalate a base weight or angle.

/// A trait value backed by a number.
pub trait NumericTrait: Copy {
    /// The underlying numeric value.
    fn raw_value(&self) -> f64;
}

impl NumericTrait for f64 {
    fn raw_value(&self) -> f64 {
        *self
    }
}

impl NumericTrait for f32 {
    fn raw_value(&self) -> f64 {
        f64::from(*self)
    }
}

/// Index of the candidate closest to `target`.
///
/// Ties go to the earliest candidate in the given order.
pub fn nearest_index<T: NumericTrait>(target: T, candidates: &[T]) -> Option<usize> {
    let target = target.raw_value();
    let mut best: Option<(usize, f64)> = None;

    for (index, candidate) in candidates.iter().enumerate() {
        let distance = (target - candidate.raw_value()).abs();
        // Strictly closer only, so the first of equally distant candidates wins.
        if best.is_none_or(|(_, closest)| distance < closest) {
            best = Some((index, distance));
        }
    }

    best.map(|(index, _)| index)
}

/// The candidate closest to `target`, or `None` if there are no candidates.
pub fn try_nearest<T: NumericTrait>(target: T, candidates: &[T]) -> Option<T> {
    nearest_index(target, candidates).map(|index| candidates[index])
}

/// The candidate closest to `target`.
///
/// Ties go to the earliest candidate in the given order.
///
/// # Panics
///
/// Panics if `candidates` is empty; there is no sensible answer.
pub fn nearest<T: NumericTrait>(target: T, candidates: &[T]) -> T {
    match try_nearest(target, candidates) {
        Some(candidate) => candidate,
        None => panic!("nearest() requires at least one candidate"),
    }
}

/// The entry after `value`'s nearest match in an ascending `reference` ordering.
///
/// Saturates: if the nearest match is already the last entry (or `reference`
/// is empty), `value` is returned unchanged.
pub fn next<T: NumericTrait>(value: T, reference: &[T]) -> T {
    nearest_index(value, reference)
        .and_then(|index| reference.get(index + 1))
        .copied()
        .unwrap_or(value)
}

/// Method-call forms of [`nearest`] and [`next`].
pub trait TraitExt: NumericTrait {
    /// See [`nearest`].
    fn nearest_in(self, candidates: &[Self]) -> Self {
        nearest(self, candidates)
    }

    /// See [`next`].
    fn next_in(self, reference: &[Self]) -> Self {
        next(self, reference)
    }
}

impl<T: NumericTrait> TraitExt for T {}
