//! Attribute kinds and the registry that describes them.

mod descriptor;
mod global;
mod kind;
mod value;

pub use descriptor::KindDescriptor;
pub use global::{AttributeRegistry, lookup, register, registry};
pub use kind::{AttributeKind, DynamicKind};
pub use value::{AnyValue, AttributeValue};

pub(crate) use value::hash_of;
