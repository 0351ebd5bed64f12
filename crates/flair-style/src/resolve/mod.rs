//! Style combination: cascading and diffing.

mod cascade;
mod diff;

pub use cascade::cascade;
pub use diff::subtract;
