//! Paragraph-level attributes.

use flair_style::{StyleMap, hashed_attribute_value};
use serde::{Deserialize, Serialize};

use crate::kinds::TextStyle;

/// Horizontal alignment of the lines in a paragraph.
///
/// Leading and trailing follow the writing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    #[default]
    Leading,
    Trailing,
    Centered,
    Justified,
}

hashed_attribute_value!(TextAlignment);

/// The resolved paragraph attributes of a style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    pub alignment: TextAlignment,
    /// Extra space between lines, in points.
    pub line_spacing: f64,
    pub line_height_multiple: f64,
    /// Space after the paragraph, in points.
    pub paragraph_spacing: f64,
    /// Space before the paragraph, in points.
    pub paragraph_spacing_before: f64,
}

impl ParagraphStyle {
    pub fn from_style(style: &StyleMap) -> Self {
        Self {
            alignment: style.alignment(),
            line_spacing: style.line_spacing(),
            line_height_multiple: style.line_height_multiple(),
            paragraph_spacing: style.paragraph_spacing(),
            paragraph_spacing_before: style.paragraph_spacing_before(),
        }
    }
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self::from_style(&StyleMap::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let paragraph = ParagraphStyle::default();
        assert_eq!(paragraph.alignment, TextAlignment::Leading);
        assert_eq!(paragraph.line_spacing, 0.0);
        assert_eq!(paragraph.line_height_multiple, 1.0);
    }

    #[test]
    fn resolves_overrides() {
        let style = StyleMap::new()
            .with_alignment(TextAlignment::Centered)
            .with_paragraph_spacing(6.0);
        let paragraph = ParagraphStyle::from_style(&style);

        assert_eq!(paragraph.alignment, TextAlignment::Centered);
        assert_eq!(paragraph.paragraph_spacing, 6.0);
        assert_eq!(paragraph.paragraph_spacing_before, 0.0);
    }

    #[test]
    fn alignment_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(TextAlignment::Justified).unwrap(),
            serde_json::json!("justified")
        );
    }
}
