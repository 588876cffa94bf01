use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::basic::BasicType;

/// Structural description of a type, as handed over by the host type-checker
///
/// The set of shapes is closed; everything the engine does not reason about
/// structurally (pointers, slices, maps, functions…) is carried as
/// [`TypeDescriptor::Opaque`] and only related through the assignability
/// oracle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum TypeDescriptor {
    Basic(BasicType),
    Struct(StructType),
    Named(NamedType),
    Interface(InterfaceType),
    Opaque(OpaqueType),
}

/// A record shape with ordered fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructType {
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// One struct field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    /// Visible outside the declaring package
    pub exported: bool,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
}

/// A declared (defined) type: a name bound to an underlying shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedType {
    /// Import path of the declaring package
    pub package: String,
    pub name: String,
    pub underlying: Box<TypeDescriptor>,
    /// Methods declared on the type
    #[serde(default)]
    pub methods: Vec<Method>,
}

/// A method signature; `signature` is the host's canonical rendering
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    #[serde(default)]
    pub signature: String,
}

/// An interface shape, identified by its method set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceType {
    #[serde(default)]
    pub methods: Vec<Method>,
}

/// Any shape the engine does not inspect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpaqueType {
    /// Canonical rendering, e.g. `*pkg.Node` or `func(int) error`
    pub repr: String,
    /// Accepts `nil` (pointers, slices, maps, channels, functions)
    #[serde(default)]
    pub nillable: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        let name = name.into();
        let exported = is_exported(&name);
        Self { name, exported, ty }
    }
}

impl Method {
    pub fn new(name: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            signature: signature.into(),
        }
    }
}

impl NamedType {
    /// Fully qualified `package.Name`
    pub fn qualified_name(&self) -> String {
        qualify(&self.package, &self.name)
    }
}

impl StructType {
    /// Exported fields keyed by name
    pub fn exported_fields(&self) -> BTreeMap<&str, &Field> {
        self.fields
            .iter()
            .filter(|f| f.exported)
            .map(|f| (f.name.as_str(), f))
            .collect()
    }
}

impl TypeDescriptor {
    /// Strip every level of naming, down to the structural shape
    pub fn underlying(&self) -> &TypeDescriptor {
        let mut current = self;
        while let TypeDescriptor::Named(named) = current {
            current = &named.underlying;
        }
        current
    }

    pub fn as_basic(&self) -> Option<&BasicType> {
        match self {
            TypeDescriptor::Basic(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&StructType> {
        match self {
            TypeDescriptor::Struct(s) => Some(s),
            _ => None,
        }
    }

    /// Methods callable on a value of this type
    ///
    /// Named types contribute their declared methods; interfaces their
    /// method set. Every other shape has none.
    pub fn method_set(&self) -> Vec<&Method> {
        match self {
            TypeDescriptor::Named(named) => {
                let mut methods: Vec<&Method> = named.methods.iter().collect();
                if let TypeDescriptor::Interface(iface) = named.underlying.underlying() {
                    methods.extend(iface.methods.iter());
                }
                methods
            }
            TypeDescriptor::Interface(iface) => iface.methods.iter().collect(),
            _ => Vec::new(),
        }
    }

    /// Whether `nil` is a valid value of this type
    pub fn is_nillable(&self) -> bool {
        match self.underlying() {
            TypeDescriptor::Interface(_) => true,
            TypeDescriptor::Opaque(o) => o.nillable,
            TypeDescriptor::Basic(b) => b.kind == super::basic::BasicKind::UnsafePointer,
            _ => false,
        }
    }

    /// Canonical, placement-independent textual identity
    ///
    /// Named types render fully qualified so that two packages declaring the
    /// same short name never collide.
    pub fn canonical(&self) -> String {
        let mut out = String::new();
        self.write_canonical(&mut out);
        out
    }

    fn write_canonical(&self, out: &mut String) {
        match self {
            TypeDescriptor::Basic(b) => {
                out.push_str(&b.name);
                // Spell out kind and form when the name alone does not pin them
                if !b.has_standard_spelling() {
                    out.push('(');
                    if b.untyped {
                        out.push_str("untyped ");
                    }
                    out.push_str(b.kind.default_name());
                    out.push(')');
                }
            }
            TypeDescriptor::Named(n) => out.push_str(&n.qualified_name()),
            TypeDescriptor::Opaque(o) => out.push_str(&o.repr),
            TypeDescriptor::Struct(s) => {
                out.push_str("struct{");
                for (i, field) in s.fields.iter().enumerate() {
                    if i > 0 {
                        out.push_str("; ");
                    }
                    out.push_str(&field.name);
                    // Visibility flag overriding the name's case
                    if field.exported != is_exported(&field.name) {
                        out.push_str(if field.exported { "(exported)" } else { "(unexported)" });
                    }
                    out.push(' ');
                    field.ty.write_canonical(out);
                }
                out.push('}');
            }
            TypeDescriptor::Interface(iface) => {
                let mut methods: Vec<&Method> = iface.methods.iter().collect();
                methods.sort();
                out.push_str("interface{");
                for (i, m) in methods.iter().enumerate() {
                    if i > 0 {
                        out.push_str("; ");
                    }
                    out.push_str(&m.name);
                    out.push_str(&m.signature);
                }
                out.push('}');
            }
        }
    }

    /// Structural identity
    ///
    /// Named types are identical only to themselves (same qualified name).
    /// Basic types are identical when kind and literal form agree, so
    /// `byte` and `uint8` are identical here even though their canonical
    /// strings differ. Struct identity is order-sensitive, interface
    /// identity is not.
    pub fn identical(&self, other: &TypeDescriptor) -> bool {
        match (self, other) {
            (TypeDescriptor::Basic(a), TypeDescriptor::Basic(b)) => {
                a.kind == b.kind && a.untyped == b.untyped
            }
            (TypeDescriptor::Named(a), TypeDescriptor::Named(b)) => {
                a.package == b.package && a.name == b.name
            }
            (TypeDescriptor::Struct(a), TypeDescriptor::Struct(b)) => {
                a.fields.len() == b.fields.len()
                    && a.fields.iter().zip(&b.fields).all(|(fa, fb)| {
                        fa.name == fb.name && fa.exported == fb.exported && fa.ty.identical(&fb.ty)
                    })
            }
            (TypeDescriptor::Interface(a), TypeDescriptor::Interface(b)) => {
                let mut ma: Vec<&Method> = a.methods.iter().collect();
                let mut mb: Vec<&Method> = b.methods.iter().collect();
                ma.sort();
                mb.sort();
                ma == mb
            }
            (TypeDescriptor::Opaque(a), TypeDescriptor::Opaque(b)) => a.repr == b.repr,
            _ => false,
        }
    }
}

impl From<BasicType> for TypeDescriptor {
    fn from(b: BasicType) -> Self {
        TypeDescriptor::Basic(b)
    }
}

impl From<StructType> for TypeDescriptor {
    fn from(s: StructType) -> Self {
        TypeDescriptor::Struct(s)
    }
}

impl From<NamedType> for TypeDescriptor {
    fn from(n: NamedType) -> Self {
        TypeDescriptor::Named(n)
    }
}

impl From<InterfaceType> for TypeDescriptor {
    fn from(i: InterfaceType) -> Self {
        TypeDescriptor::Interface(i)
    }
}

impl From<OpaqueType> for TypeDescriptor {
    fn from(o: OpaqueType) -> Self {
        TypeDescriptor::Opaque(o)
    }
}

/// Exported means the name starts with an upper-case letter
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

pub(crate) fn qualify(package: &str, name: &str) -> String {
    if package.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", package, name)
    }
}
