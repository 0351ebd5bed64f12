//! The built-in attribute catalogue.

use flair_style::{AttributeRegistry, StyleMap, attribute_kind, registry};

use crate::color::Color;
use crate::font::{FontAngle, FontWeight, FontWidth};
use crate::paragraph::TextAlignment;

attribute_kind! {
    /// Bold text. Escalates the font weight by one standard step.
    pub Bold: bool = "flair.bold", false
}
attribute_kind! {
    /// Italic text. Escalates the font angle by one standard step.
    pub Italic: bool = "flair.italic", false
}
attribute_kind! {
    /// Outlined glyphs.
    pub Outline: bool = "flair.outline", false
}
attribute_kind! {
    /// Underlined text.
    pub Underline: bool = "flair.underline", false
}
attribute_kind! {
    /// Struck-through text.
    pub Strikethrough: bool = "flair.strikethrough", false
}
attribute_kind! {
    /// Font size in points.
    pub FontSize: f64 = "flair.font-size", 13.0
}
attribute_kind! {
    /// Font family name.
    pub FontFamily: String = "flair.font-family", String::from("Helvetica")
}
attribute_kind! {
    /// Font face name within the family.
    pub FontFace: String = "flair.font-face", String::from("Regular")
}
attribute_kind! {
    /// Base font weight, before bold escalation.
    pub FontWeightKind: FontWeight = "flair.font-weight", FontWeight::REGULAR
}
attribute_kind! {
    /// Font width.
    pub FontWidthKind: FontWidth = "flair.font-width", FontWidth::STANDARD_WIDTH
}
attribute_kind! {
    /// Base font slant, before italic escalation.
    pub FontAngleKind: FontAngle = "flair.font-angle", FontAngle::UPRIGHT
}
attribute_kind! {
    /// Paragraph alignment.
    pub Alignment: TextAlignment = "flair.text.alignment", TextAlignment::Leading
}
attribute_kind! {
    /// Text colour.
    pub ForegroundColor: Color = "flair.text.color", Color::Primary
}
attribute_kind! {
    /// Text background colour.
    pub BackgroundColor: Color = "flair.text.background-color", Color::Clear
}
attribute_kind! {
    /// Extra space between lines, in points.
    pub LineSpacing: f64 = "flair.text.line-spacing", 0.0
}
attribute_kind! {
    /// Line height as a multiple of the natural line height.
    pub LineHeightMultiple: f64 = "flair.text.line-height-multiple", 1.0
}
attribute_kind! {
    /// Space after a paragraph, in points.
    pub ParagraphSpacing: f64 = "flair.text.paragraph-spacing", 0.0
}
attribute_kind! {
    /// Space before a paragraph, in points.
    pub ParagraphSpacingBefore: f64 = "flair.text.paragraph-spacing-before", 0.0
}

/// Register every built-in kind with `registry`.
pub fn register_builtins_with(registry: &AttributeRegistry) {
    registry.register(&Bold);
    registry.register(&Italic);
    registry.register(&Outline);
    registry.register(&Underline);
    registry.register(&Strikethrough);
    registry.register(&FontSize);
    registry.register(&FontFamily);
    registry.register(&FontFace);
    registry.register(&FontWeightKind);
    registry.register(&FontWidthKind);
    registry.register(&FontAngleKind);
    registry.register(&Alignment);
    registry.register(&ForegroundColor);
    registry.register(&BackgroundColor);
    registry.register(&LineSpacing);
    registry.register(&LineHeightMultiple);
    registry.register(&ParagraphSpacing);
    registry.register(&ParagraphSpacingBefore);
}

/// Register every built-in kind with the global registry.
///
/// Call this during start-up, before decoding stored styles.
pub fn register_builtins() {
    register_builtins_with(registry());
}

macro_rules! text_style_accessors {
    ($($(#[$meta:meta])* $getter:ident, $setter:ident: $kind:ident => $value:ty;)+) => {
        /// Named accessors for the built-in kinds.
        ///
        /// Getters return resolved values; setters return a new style with an override.
        pub trait TextStyle: Sized {
            $(
                $(#[$meta])*
                fn $getter(&self) -> $value;
                #[doc = concat!("Return a copy with `", stringify!($getter), "` overridden.")]
                fn $setter(self, value: $value) -> Self;
            )+
        }

        impl TextStyle for StyleMap {
            $(
                fn $getter(&self) -> $value {
                    self.value(&$kind)
                }

                fn $setter(self, value: $value) -> Self {
                    self.with_value(&$kind, value)
                }
            )+
        }
    };
}

text_style_accessors! {
    /// Whether text is bold.
    bold, with_bold: Bold => bool;
    /// Whether text is italic.
    italic, with_italic: Italic => bool;
    /// Whether glyphs are outlined.
    outline, with_outline: Outline => bool;
    /// Whether text is underlined.
    underline, with_underline: Underline => bool;
    /// Whether text is struck through.
    strikethrough, with_strikethrough: Strikethrough => bool;
    /// Font size in points.
    font_size, with_font_size: FontSize => f64;
    /// Font family name.
    font_family, with_font_family: FontFamily => String;
    /// Font face name.
    font_face, with_font_face: FontFace => String;
    /// Base font weight.
    font_weight, with_font_weight: FontWeightKind => FontWeight;
    /// Font width.
    font_width, with_font_width: FontWidthKind => FontWidth;
    /// Base font slant.
    font_angle, with_font_angle: FontAngleKind => FontAngle;
    /// Paragraph alignment.
    alignment, with_alignment: Alignment => TextAlignment;
    /// Text colour.
    text_color, with_text_color: ForegroundColor => Color;
    /// Text background colour.
    background_color, with_background_color: BackgroundColor => Color;
    /// Extra line spacing.
    line_spacing, with_line_spacing: LineSpacing => f64;
    /// Line height multiple.
    line_height_multiple, with_line_height_multiple: LineHeightMultiple => f64;
    /// Space after paragraphs.
    paragraph_spacing, with_paragraph_spacing: ParagraphSpacing => f64;
    /// Space before paragraphs.
    paragraph_spacing_before, with_paragraph_spacing_before: ParagraphSpacingBefore => f64;
}

#[cfg(test)]
mod tests {
    use super::*;
    use flair_style::{AttributeKind, ValueState, codec};

    #[test]
    fn builtins_register_under_their_names() {
        let registry = AttributeRegistry::new();
        register_builtins_with(&registry);

        assert_eq!(registry.len(), 18);
        assert!(registry.is_registered("flair.bold"));
        assert!(registry.is_registered("flair.text.background-color"));
        assert_eq!(FontWeightKind.name(), "flair.font-weight");
    }

    #[test]
    fn accessors_read_initial_values() {
        let style = StyleMap::new();
        assert!(!style.bold());
        assert_eq!(style.font_size(), 13.0);
        assert_eq!(style.font_family(), "Helvetica");
        assert_eq!(style.font_weight(), FontWeight::REGULAR);
        assert_eq!(style.alignment(), TextAlignment::Leading);
        assert_eq!(style.text_color(), Color::Primary);
        assert_eq!(style.background_color(), Color::Clear);
        assert_eq!(style.line_height_multiple(), 1.0);
    }

    #[test]
    fn setters_store_overrides() {
        let style = StyleMap::new()
            .with_bold(true)
            .with_font_size(18.0)
            .with_text_color(Color::Red);

        assert!(style.bold());
        assert_eq!(style.state(&FontSize), ValueState::Override(18.0));
        assert_eq!(style.text_color(), Color::Red);
    }

    #[test]
    fn builtins_round_trip_through_codec() {
        register_builtins();
        let style = StyleMap::new()
            .with_italic(true)
            .with_font_weight(FontWeight::SEMIBOLD)
            .with_alignment(TextAlignment::Justified)
            .with_background_color(Color::rgba(0.1, 0.2, 0.3, 1.0))
            .with(&FontFamily, ValueState::Initial);

        let encoded = codec::encode(&style).unwrap();
        assert_eq!(encoded["flair.font-weight"], serde_json::json!(["o", 0.3]));
        assert_eq!(encoded["flair.text.alignment"], serde_json::json!(["o", "justified"]));
        assert_eq!(encoded["flair.font-family"], serde_json::json!(["i"]));
        assert_eq!(codec::decode(&encoded), style);
    }
}
