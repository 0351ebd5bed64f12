//! The three-state value held for one attribute kind.

/// The state of one attribute kind within one style.
///
/// # Example
///
/// ```
/// use flair_style::ValueState;
///
/// let set = ValueState::Override(14.0);
/// assert_eq!(set.resolve_or(13.0), 14.0);
///
/// let reset: ValueState<f64> = ValueState::Initial;
/// assert_eq!(reset.resolve_or(13.0), 13.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ValueState<T> {
    /// Explicitly reset to the kind's initial value, blocking any ancestor.
    Initial,
    /// No local opinion. Absence from a style means the same thing.
    #[default]
    Inherit,
    /// A concrete value.
    Override(T),
}

impl<T> ValueState<T> {
    /// Check if this is an explicit value.
    pub fn is_override(&self) -> bool {
        matches!(self, ValueState::Override(_))
    }

    /// Check if this is an explicit reset.
    pub fn is_initial(&self) -> bool {
        matches!(self, ValueState::Initial)
    }

    /// Check if this state has no local opinion.
    pub fn is_inherit(&self) -> bool {
        matches!(self, ValueState::Inherit)
    }

    /// Get the inner value if overridden.
    pub fn as_override(&self) -> Option<&T> {
        match self {
            ValueState::Override(v) => Some(v),
            _ => None,
        }
    }

    /// Convert the inner value, keeping the state.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ValueState<U> {
        match self {
            ValueState::Initial => ValueState::Initial,
            ValueState::Inherit => ValueState::Inherit,
            ValueState::Override(v) => ValueState::Override(f(v)),
        }
    }

    /// The overridden value, or `initial` for the other two states.
    pub fn resolve_or(self, initial: T) -> T {
        match self {
            ValueState::Override(v) => v,
            _ => initial,
        }
    }

    /// Like [`resolve_or`](Self::resolve_or), computing the initial value lazily.
    pub fn resolve_or_else(self, initial: impl FnOnce() -> T) -> T {
        match self {
            ValueState::Override(v) => v,
            _ => initial(),
        }
    }
}

impl<T> From<T> for ValueState<T> {
    fn from(value: T) -> Self {
        ValueState::Override(value)
    }
}
