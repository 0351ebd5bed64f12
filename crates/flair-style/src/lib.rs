//! Runtime-extensible cascading style attributes.
//!
//! This crate provides the style algebra used by Flair:
//!
//! - **Registry**: a process-wide catalogue of named, typed attribute kinds
//! - **Style maps**: sparse maps from kind to `Initial` / `Inherit` / `Override`
//! - **Cascading**: combine styles with child-overrides-parent precedence
//! - **Diffing**: the minimal style that turns one style into another
//! - **Codec**: versioning-tolerant structured encoding keyed by kind name
//! - **Selections**: per-kind agreement across many styles, with toggling edits
//! - **Trait matching**: snap numeric requests onto discrete candidates
//!
//! # Example
//!
//! ```
//! use flair_style::prelude::*;
//!
//! flair_style::attribute_kind! {
//!     /// Whether text is bold.
//!     pub Bold: bool = "example.bold", false
//! }
//!
//! flair_style::register(&Bold);
//!
//! let parent = StyleMap::new().with_value(&Bold, true);
//! let child = StyleMap::new().with(&Bold, ValueState::Initial);
//! assert!(!parent.appending(&child).value(&Bold));
//!
//! let selection = Selection::logging(vec![parent, StyleMap::new()]);
//! assert!(selection.cardinality(&Bold).is_mixed());
//! ```

pub mod codec;
pub mod logging;
pub mod matcher;
pub mod registry;
pub mod resolve;
pub mod selection;
pub mod style;

mod error;

pub use error::{Error, Result};
pub use registry::{
    AnyValue, AttributeKind, AttributeRegistry, AttributeValue, DynamicKind, KindDescriptor,
    lookup, register, registry,
};
pub use resolve::{cascade, subtract};
pub use selection::{Cardinality, Merge, Selection, ValueSet};
pub use style::{StyleBuilder, StyleMap, ValueState};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::matcher::{NumericTrait, TraitExt};
    pub use crate::registry::{AttributeKind, AttributeValue, DynamicKind};
    pub use crate::resolve::{cascade, subtract};
    pub use crate::selection::{Cardinality, Merge, Selection};
    pub use crate::style::{StyleBuilder, StyleMap, ValueState};
}
