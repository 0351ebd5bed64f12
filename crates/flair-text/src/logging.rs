//! Tracing targets for the text catalogue.
//!
//! See `flair_style::logging` for how hosts filter these.

/// Target names for log filtering.
pub mod targets {
    /// Font request resolution and snapping.
    pub const FONT: &str = "flair_text::font";
    /// Styled run edits.
    pub const RUNS: &str = "flair_text::runs";
}
