//! Style maps and their value states.

mod builder;
mod map;
mod value;

pub use builder::StyleBuilder;
pub use map::StyleMap;
pub use value::ValueState;

pub(crate) use map::Entry;
