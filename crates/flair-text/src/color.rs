//! Text colours.

use std::fmt;
use std::hash::{Hash, Hasher};

use flair_style::AttributeValue;
use serde::{Deserialize, Serialize};

/// A colour, either a named system colour or explicit linear RGBA.
///
/// Named colours are resolved by the host platform; this crate only carries
/// them through styles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Color {
    Black,
    White,
    Clear,
    Blue,
    Brown,
    Cyan,
    Gray,
    Green,
    Indigo,
    Mint,
    Orange,
    Pink,
    Purple,
    Red,
    Teal,
    Yellow,
    /// The primary label colour.
    Primary,
    /// The secondary label colour.
    Secondary,
    /// The application accent colour.
    AccentColor,
    /// Explicit linear red, green, blue and alpha components in `0.0..=1.0`.
    Rgba(f32, f32, f32, f32),
}

impl Color {
    /// Create an explicit colour.
    pub fn rgba(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self::Rgba(red, green, blue, alpha)
    }

    /// The variant name, as serialized.
    pub fn name(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::White => "white",
            Color::Clear => "clear",
            Color::Blue => "blue",
            Color::Brown => "brown",
            Color::Cyan => "cyan",
            Color::Gray => "gray",
            Color::Green => "green",
            Color::Indigo => "indigo",
            Color::Mint => "mint",
            Color::Orange => "orange",
            Color::Pink => "pink",
            Color::Purple => "purple",
            Color::Red => "red",
            Color::Teal => "teal",
            Color::Yellow => "yellow",
            Color::Primary => "primary",
            Color::Secondary => "secondary",
            Color::AccentColor => "accentColor",
            Color::Rgba(..) => "rgba",
        }
    }

    /// Check whether this colour is fully transparent.
    pub fn is_clear(&self) -> bool {
        match self {
            Color::Clear => true,
            Color::Rgba(_, _, _, alpha) => *alpha == 0.0,
            _ => false,
        }
    }
}

impl AttributeValue for Color {
    fn hash_value(&self, mut state: &mut dyn Hasher) {
        std::mem::discriminant(self).hash(&mut state);
        if let Color::Rgba(r, g, b, a) = self {
            for component in [r, g, b, a] {
                component.hash_value(state);
            }
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgba(r, g, b, a) => write!(f, "rgba({r}, {g}, {b}, {a})"),
            named => f.write_str(named.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_representation() {
        assert_eq!(serde_json::to_value(Color::AccentColor).unwrap(), serde_json::json!("accentColor"));
        let color: Color = serde_json::from_value(serde_json::json!({ "rgba": [1.0, 0.5, 0.0, 1.0] })).unwrap();
        assert_eq!(color, Color::rgba(1.0, 0.5, 0.0, 1.0));
    }

    #[test]
    fn clear_detection() {
        assert!(Color::Clear.is_clear());
        assert!(Color::rgba(1.0, 1.0, 1.0, 0.0).is_clear());
        assert!(!Color::Primary.is_clear());
    }

    #[test]
    fn display() {
        assert_eq!(Color::Primary.to_string(), "primary");
        assert_eq!(Color::rgba(1.0, 0.0, 0.0, 0.5).to_string(), "rgba(1, 0, 0, 0.5)");
    }
}
