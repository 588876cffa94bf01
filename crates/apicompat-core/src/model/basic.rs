use serde::{Deserialize, Serialize};

/// Machine kind of a basic (predeclared) type
///
/// Distinct declared names can share one kind (`byte` and `uint8` are both
/// `Uint8`). Untyped constants reuse the kind of their default type and set
/// [`BasicType::untyped`] instead of having kinds of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BasicKind {
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
    Float32,
    Float64,
    Complex64,
    Complex128,
    String,
    UnsafePointer,
    Nil,
}

/// Coarse family of a basic kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindClass {
    Boolean,
    Integer,
    Float,
    Complex,
    String,
    Pointer,
    Nil,
}

impl BasicKind {
    /// The family this kind belongs to
    pub fn class(&self) -> KindClass {
        match self {
            BasicKind::Bool => KindClass::Boolean,
            BasicKind::Int
            | BasicKind::Int8
            | BasicKind::Int16
            | BasicKind::Int32
            | BasicKind::Int64
            | BasicKind::Uint
            | BasicKind::Uint8
            | BasicKind::Uint16
            | BasicKind::Uint32
            | BasicKind::Uint64
            | BasicKind::Uintptr => KindClass::Integer,
            BasicKind::Float32 | BasicKind::Float64 => KindClass::Float,
            BasicKind::Complex64 | BasicKind::Complex128 => KindClass::Complex,
            BasicKind::String => KindClass::String,
            BasicKind::UnsafePointer => KindClass::Pointer,
            BasicKind::Nil => KindClass::Nil,
        }
    }

    pub fn is_unsigned(&self) -> bool {
        matches!(
            self,
            BasicKind::Uint
                | BasicKind::Uint8
                | BasicKind::Uint16
                | BasicKind::Uint32
                | BasicKind::Uint64
                | BasicKind::Uintptr
        )
    }

    /// The predeclared name for this kind
    pub fn default_name(&self) -> &'static str {
        match self {
            BasicKind::Bool => "bool",
            BasicKind::Int => "int",
            BasicKind::Int8 => "int8",
            BasicKind::Int16 => "int16",
            BasicKind::Int32 => "int32",
            BasicKind::Int64 => "int64",
            BasicKind::Uint => "uint",
            BasicKind::Uint8 => "uint8",
            BasicKind::Uint16 => "uint16",
            BasicKind::Uint32 => "uint32",
            BasicKind::Uint64 => "uint64",
            BasicKind::Uintptr => "uintptr",
            BasicKind::Float32 => "float32",
            BasicKind::Float64 => "float64",
            BasicKind::Complex64 => "complex64",
            BasicKind::Complex128 => "complex128",
            BasicKind::String => "string",
            BasicKind::UnsafePointer => "unsafe.Pointer",
            BasicKind::Nil => "nil",
        }
    }
}

/// A basic type as declared: name, machine kind and literal form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BasicType {
    /// Declared name, e.g. `byte`, `uint8` or `untyped int`
    pub name: String,
    pub kind: BasicKind,
    /// True for the type of an untyped constant
    #[serde(default)]
    pub untyped: bool,
}

impl BasicType {
    /// Typed basic using the kind's predeclared name
    pub fn typed(kind: BasicKind) -> Self {
        Self {
            name: kind.default_name().to_string(),
            kind,
            untyped: false,
        }
    }

    /// Typed basic declared under an alternative name (`byte`, `rune`)
    pub fn aliased(name: impl Into<String>, kind: BasicKind) -> Self {
        Self {
            name: name.into(),
            kind,
            untyped: false,
        }
    }

    /// Untyped constant form, named after its literal family
    pub fn untyped(kind: BasicKind) -> Self {
        let family = match kind {
            BasicKind::Bool => "bool",
            BasicKind::Int32 => "rune",
            BasicKind::Float32 | BasicKind::Float64 => "float",
            BasicKind::Complex64 | BasicKind::Complex128 => "complex",
            BasicKind::String => "string",
            BasicKind::Nil => "nil",
            _ => "int",
        };
        Self {
            name: format!("untyped {}", family),
            kind,
            untyped: true,
        }
    }

    /// Whether `name` is how this kind and literal form are normally written
    ///
    /// Untyped constants carry the kind of their default type, so
    /// `untyped int` is spelled correctly only with kind `Int`.
    pub fn has_standard_spelling(&self) -> bool {
        if self.untyped {
            let default_kind = match self.name.strip_prefix("untyped ") {
                Some("bool") => BasicKind::Bool,
                Some("int") => BasicKind::Int,
                Some("rune") => BasicKind::Int32,
                Some("float") => BasicKind::Float64,
                Some("complex") => BasicKind::Complex128,
                Some("string") => BasicKind::String,
                Some("nil") => BasicKind::Nil,
                _ => return false,
            };
            return self.kind == default_kind;
        }

        match (self.kind, self.name.as_str()) {
            (BasicKind::Uint8, "byte") | (BasicKind::Int32, "rune") => true,
            (kind, name) => name == kind.default_name(),
        }
    }

    /// True when `self` is the untyped literal form that widens into `other`
    ///
    /// Only the family has to match: an untyped integer constant can be
    /// bound to any integer kind.
    pub fn widens_into(&self, other: &BasicType) -> bool {
        self.untyped && !other.untyped && self.kind.class() == other.kind.class()
    }

    /// Stricter form of [`widens_into`](Self::widens_into) used for ordering
    ///
    /// Signedness must match as well, so `untyped int` is below `int64` but
    /// unrelated to `uint8`.
    pub fn widens_exactly_into(&self, other: &BasicType) -> bool {
        self.widens_into(other) && self.kind.is_unsigned() == other.kind.is_unsigned()
    }
}
