//! Numeric font traits: weight, width and slant.

use std::fmt;
use std::hash::Hasher;

use flair_style::matcher::{self, NumericTrait};
use flair_style::AttributeValue;
use serde::{Deserialize, Serialize};

macro_rules! font_trait {
    (
        $(#[$meta:meta])*
        $name:ident, default = $default:ident,
        [$($(#[$cmeta:meta])* $konst:ident = $raw:expr => $label:literal),+ $(,)?]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub f64);

        impl $name {
            $(
                $(#[$cmeta])*
                pub const $konst: Self = Self($raw);
            )+

            /// The standard values, in ascending order.
            pub const STANDARD: &'static [Self] = &[$(Self::$konst),+];

            /// Create a value from its raw number.
            pub const fn new(raw: f64) -> Self {
                Self(raw)
            }

            /// The raw number.
            pub const fn raw(self) -> f64 {
                self.0
            }

            /// The closest standard value.
            pub fn nearest(self) -> Self {
                matcher::nearest(self, Self::STANDARD)
            }

            /// The next stronger standard value, saturating at the strongest.
            pub fn next(self) -> Self {
                matcher::next(self, Self::STANDARD)
            }

            /// Whether this is exactly one of the standard values.
            pub fn is_standard(self) -> bool {
                Self::STANDARD.contains(&self)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl NumericTrait for $name {
            fn raw_value(&self) -> f64 {
                self.0
            }
        }

        impl AttributeValue for $name {
            fn hash_value(&self, state: &mut dyn Hasher) {
                self.0.hash_value(state);
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                $(
                    if *self == Self::$konst {
                        return f.write_str($label);
                    }
                )+
                write!(f, "custom({})", self.0)
            }
        }
    };
}

font_trait! {
    /// Font weight, from ultra-light (-0.8) to black (0.62).
    FontWeight, default = REGULAR,
    [
        ULTRA_LIGHT = -0.8 => "ultralight",
        THIN = -0.6 => "thin",
        LIGHT = -0.4 => "light",
        REGULAR = 0.0 => "regular",
        MEDIUM = 0.23 => "medium",
        SEMIBOLD = 0.3 => "semibold",
        BOLD = 0.4 => "bold",
        HEAVY = 0.56 => "heavy",
        BLACK = 0.62 => "black",
    ]
}

font_trait! {
    /// Font width, from compressed (-0.3) to expanded (0.2).
    FontWidth, default = STANDARD_WIDTH,
    [
        COMPRESSED = -0.3 => "compressed",
        CONDENSED = -0.2 => "condensed",
        /// Normal width.
        STANDARD_WIDTH = 0.0 => "standard",
        EXPANDED = 0.2 => "expanded",
    ]
}

font_trait! {
    /// Font slant. Positive values lean right.
    FontAngle, default = UPRIGHT,
    [
        BACKSLANT = -0.2 => "backslant",
        /// No slant.
        UPRIGHT = 0.0 => "standard",
        ITALIC = 0.2 => "italic",
    ]
}
