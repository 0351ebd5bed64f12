//! Text and font attributes for Flair styles.
//!
//! This crate is a concrete attribute catalogue built on `flair-style`:
//!
//! - **Kinds**: bold, italic, font size and family, colours, paragraph spacing
//! - **Font traits**: weight, width and slant with standard values and escalation
//! - **Resolution**: [`FontRequest`] and [`ParagraphStyle`] from a style
//! - **Styled runs**: [`StyledText`] with a document style and character runs
//!
//! # Example
//!
//! ```
//! use flair_text::prelude::*;
//!
//! flair_text::register_builtins();
//!
//! let style = StyleMap::new().with_bold(true).with_font_size(18.0);
//! let request = FontRequest::from_style(&style);
//! assert_eq!(request.weight, FontWeight::MEDIUM);
//! assert_eq!(request.to_string(), "Helvetica Regular, 18 pt.");
//! ```

pub mod color;
pub mod font;
pub mod kinds;
pub mod logging;
pub mod paragraph;
pub mod runs;

pub use color::Color;
pub use font::{AvailableFace, FontAngle, FontRequest, FontWeight, FontWidth};
pub use kinds::{TextStyle, register_builtins, register_builtins_with};
pub use paragraph::{ParagraphStyle, TextAlignment};
pub use runs::{StyleRun, StyledText};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::font::{AvailableFace, FontAngle, FontRequest, FontWeight, FontWidth};
    pub use crate::kinds::TextStyle;
    pub use crate::paragraph::{ParagraphStyle, TextAlignment};
    pub use crate::runs::{StyleRun, StyledText};
    pub use flair_style::prelude::*;
}
