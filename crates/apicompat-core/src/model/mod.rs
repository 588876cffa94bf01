//! Type handles exchanged with the host type-checker.

pub mod basic;
pub mod descriptor;
pub mod snapshot;

pub use basic::{BasicKind, BasicType, KindClass};
pub use descriptor::{
    is_exported, Field, InterfaceType, Method, NamedType, OpaqueType, StructType, TypeDescriptor,
};
pub use snapshot::{Documentation, TypeSnapshot};
