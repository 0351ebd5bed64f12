//! Resolving a concrete font request from a style.

use std::fmt;

use flair_style::StyleMap;
use flair_style::matcher::try_nearest;
use serde::{Deserialize, Serialize};

use super::{FontAngle, FontWeight, FontWidth};
use crate::kinds::TextStyle;
use crate::logging::targets;

/// A face offered by the host's font enumeration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailableFace {
    pub family: String,
    pub face: String,
    pub weight: FontWeight,
    pub width: FontWidth,
    pub angle: FontAngle,
}

impl AvailableFace {
    pub fn new(family: impl Into<String>, face: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            face: face.into(),
            weight: FontWeight::default(),
            width: FontWidth::default(),
            angle: FontAngle::default(),
        }
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_width(mut self, width: FontWidth) -> Self {
        self.width = width;
        self
    }

    pub fn with_angle(mut self, angle: FontAngle) -> Self {
        self.angle = angle;
        self
    }
}

/// Everything needed to ask the host for a font.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontRequest {
    pub family: String,
    pub face: String,
    /// Size in points.
    pub size: f64,
    pub weight: FontWeight,
    pub width: FontWidth,
    pub angle: FontAngle,
}

impl FontRequest {
    /// Resolve a request from the font kinds of `style`.
    ///
    /// Bold steps the base weight to the next standard weight, and italic
    /// steps the base angle the same way. Both saturate at the strongest value.
    pub fn from_style(style: &StyleMap) -> Self {
        let weight = style.font_weight();
        let angle = style.font_angle();

        Self {
            family: style.font_family(),
            face: style.font_face(),
            size: style.font_size(),
            weight: if style.bold() { weight.next() } else { weight },
            width: style.font_width(),
            angle: if style.italic() { angle.next() } else { angle },
        }
    }

    /// Snap each trait to the closest one offered by `faces` of the same family.
    ///
    /// Traits are matched independently. Without any face in the family the
    /// request is returned unchanged.
    pub fn snap(&self, faces: &[AvailableFace]) -> Self {
        let family: Vec<&AvailableFace> =
            faces.iter().filter(|face| face.family == self.family).collect();

        let weights: Vec<FontWeight> = family.iter().map(|face| face.weight).collect();
        let widths: Vec<FontWidth> = family.iter().map(|face| face.width).collect();
        let angles: Vec<FontAngle> = family.iter().map(|face| face.angle).collect();

        let snapped = Self {
            weight: try_nearest(self.weight, &weights).unwrap_or(self.weight),
            width: try_nearest(self.width, &widths).unwrap_or(self.width),
            angle: try_nearest(self.angle, &angles).unwrap_or(self.angle),
            ..self.clone()
        };

        tracing::trace!(
            target: targets::FONT,
            request = %self,
            weight = %snapped.weight,
            width = %snapped.width,
            angle = %snapped.angle,
            candidates = family.len(),
            "snapped font request"
        );

        snapped
    }
}

impl Default for FontRequest {
    fn default() -> Self {
        Self::from_style(&StyleMap::new())
    }
}

impl fmt::Display for FontRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, {} pt.", self.family, self.face, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request() {
        let request = FontRequest::default();
        assert_eq!(request.family, "Helvetica");
        assert_eq!(request.face, "Regular");
        assert_eq!(request.size, 13.0);
        assert_eq!(request.weight, FontWeight::REGULAR);
        assert_eq!(request.angle, FontAngle::UPRIGHT);
        assert_eq!(request.to_string(), "Helvetica Regular, 13 pt.");
    }

    #[test]
    fn bold_and_italic_escalate() {
        let style = StyleMap::new()
            .with_bold(true)
            .with_italic(true)
            .with_font_weight(FontWeight::SEMIBOLD);
        let request = FontRequest::from_style(&style);

        assert_eq!(request.weight, FontWeight::BOLD);
        assert_eq!(request.angle, FontAngle::ITALIC);
    }

    #[test]
    fn escalation_saturates() {
        let style = StyleMap::new()
            .with_bold(true)
            .with_font_weight(FontWeight::BLACK);
        assert_eq!(FontRequest::from_style(&style).weight, FontWeight::BLACK);
    }

    #[test]
    fn snap_uses_family_faces_only() {
        let faces = [
            AvailableFace::new("Helvetica", "Regular"),
            AvailableFace::new("Helvetica", "Bold").with_weight(FontWeight::BOLD),
            AvailableFace::new("Futura", "Black").with_weight(FontWeight::BLACK),
        ];
        let request = FontRequest {
            weight: FontWeight::HEAVY,
            ..FontRequest::default()
        };

        let snapped = request.snap(&faces);
        assert_eq!(snapped.weight, FontWeight::BOLD);
        assert_eq!(snapped.width, FontWidth::STANDARD_WIDTH);
        assert_eq!(snapped.family, "Helvetica");
    }

    #[test]
    fn snap_without_family_is_unchanged() {
        let faces = [AvailableFace::new("Futura", "Medium").with_weight(FontWeight::MEDIUM)];
        let request = FontRequest {
            weight: FontWeight::new(0.1),
            ..FontRequest::default()
        };
        assert_eq!(request.snap(&faces), request);
    }
}
