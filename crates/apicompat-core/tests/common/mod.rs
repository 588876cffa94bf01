use apicompat_core::model::{
    BasicKind, BasicType, Field, InterfaceType, Method, NamedType, OpaqueType, StructType,
    TypeDescriptor, TypeSnapshot,
};

pub const PKG: &str = "example.com/api";

/// Typed basic under its predeclared name
#[allow(dead_code)]
pub fn basic(kind: BasicKind) -> TypeDescriptor {
    BasicType::typed(kind).into()
}

/// Typed basic under an alternative name (`byte`, `rune`)
#[allow(dead_code)]
pub fn alias(name: &str, kind: BasicKind) -> TypeDescriptor {
    BasicType::aliased(name, kind).into()
}

#[allow(dead_code)]
pub fn untyped(kind: BasicKind) -> TypeDescriptor {
    BasicType::untyped(kind).into()
}

/// Struct from `(name, type)` pairs; exported-ness follows the name's case
#[allow(dead_code)]
pub fn record(fields: Vec<(&str, TypeDescriptor)>) -> TypeDescriptor {
    StructType {
        fields: fields
            .into_iter()
            .map(|(name, ty)| Field::new(name, ty))
            .collect(),
    }
    .into()
}

#[allow(dead_code)]
pub fn interface(methods: &[&str]) -> TypeDescriptor {
    InterfaceType {
        methods: methods.iter().map(|m| Method::new(*m, "()")).collect(),
    }
    .into()
}

#[allow(dead_code)]
pub fn opaque(repr: &str) -> TypeDescriptor {
    OpaqueType {
        repr: repr.to_string(),
        nillable: true,
    }
    .into()
}

#[allow(dead_code)]
pub fn named(name: &str, underlying: TypeDescriptor) -> TypeDescriptor {
    NamedType {
        package: PKG.to_string(),
        name: name.to_string(),
        underlying: Box::new(underlying),
        methods: vec![],
    }
    .into()
}

/// Snapshot of `type <name> <underlying>` in [`PKG`]
#[allow(dead_code)]
pub fn declare(name: &str, underlying: TypeDescriptor) -> TypeSnapshot {
    TypeSnapshot::new(PKG, name, named(name, underlying))
}
