//! Assignability oracle trait and implementations
//!
//! The comparators never decide on their own whether a value of one type can
//! stand in for another; they ask an [`AssignabilityOracle`]. Hosts backed by
//! a real type-checker implement the trait over its answers. The
//! implementations here cover descriptor-only reasoning and precomputed
//! relations.

use std::collections::HashSet;

use crate::model::{BasicKind, TypeDescriptor};

/// Capability answering identity and one-way assignability questions
pub trait AssignabilityOracle: Send + Sync {
    /// Whether `a` and `b` denote the same type
    fn identical(&self, a: &TypeDescriptor, b: &TypeDescriptor) -> bool {
        a.identical(b)
    }

    /// Whether a value of type `from` may be used where `to` is expected
    /// without an explicit conversion
    fn assignable(&self, from: &TypeDescriptor, to: &TypeDescriptor) -> bool;
}

impl<T: AssignabilityOracle + ?Sized> AssignabilityOracle for &T {
    fn identical(&self, a: &TypeDescriptor, b: &TypeDescriptor) -> bool {
        (**self).identical(a, b)
    }

    fn assignable(&self, from: &TypeDescriptor, to: &TypeDescriptor) -> bool {
        (**self).assignable(from, to)
    }
}

impl<T: AssignabilityOracle + ?Sized> AssignabilityOracle for Box<T> {
    fn identical(&self, a: &TypeDescriptor, b: &TypeDescriptor) -> bool {
        (**self).identical(a, b)
    }

    fn assignable(&self, from: &TypeDescriptor, to: &TypeDescriptor) -> bool {
        (**self).assignable(from, to)
    }
}

/// Assignability derived from the descriptors alone
///
/// A value of `from` is assignable to `to` when:
/// 1. the types are identical;
/// 2. their underlying types are identical and at least one is unnamed
///    (typed basics such as `int` count as named);
/// 3. `from` is untyped `nil` and `to` accepts nil;
/// 4. `to` is an interface and `from`'s method set covers it;
/// 5. `from` is an untyped constant of the same family as basic `to`.
///
/// ```
/// use apicompat_core::model::{InterfaceType, Method, TypeDescriptor};
/// use apicompat_core::oracle::{AssignabilityOracle, StructuralOracle};
///
/// let rw: TypeDescriptor = InterfaceType {
///     methods: vec![Method::new("Read", "()"), Method::new("Write", "()")],
/// }
/// .into();
/// let r: TypeDescriptor = InterfaceType { methods: vec![Method::new("Read", "()")] }.into();
///
/// assert!(StructuralOracle.assignable(&rw, &r));
/// assert!(!StructuralOracle.assignable(&r, &rw));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralOracle;

impl AssignabilityOracle for StructuralOracle {
    fn assignable(&self, from: &TypeDescriptor, to: &TypeDescriptor) -> bool {
        if from.identical(to) {
            return true;
        }

        let either_unnamed = !is_named(from) || !is_named(to);
        if either_unnamed && from.underlying().identical(to.underlying()) {
            return true;
        }

        if let TypeDescriptor::Basic(b) = from {
            if b.untyped && b.kind == BasicKind::Nil {
                return to.is_nillable();
            }
        }

        match (from, to.underlying()) {
            (_, TypeDescriptor::Interface(iface)) => {
                let available = from.method_set();
                iface.methods.iter().all(|m| available.contains(&m))
            }
            (TypeDescriptor::Basic(b), TypeDescriptor::Basic(target)) => b.widens_into(target),
            _ => false,
        }
    }
}

/// Declared types and typed predeclared basics carry a name; composite
/// shapes and untyped constants do not
fn is_named(ty: &TypeDescriptor) -> bool {
    match ty {
        TypeDescriptor::Named(_) => true,
        TypeDescriptor::Basic(b) => !b.untyped,
        _ => false,
    }
}

/// Assignability from an explicit table of canonical `(from, to)` pairs
///
/// Identity is always assignable; everything else must be listed.
///
/// ```
/// use apicompat_core::model::{OpaqueType, TypeDescriptor};
/// use apicompat_core::oracle::{AssignabilityOracle, AssignabilityTable};
///
/// let buf: TypeDescriptor = OpaqueType { repr: "*bytes.Buffer".into(), nillable: true }.into();
/// let reader: TypeDescriptor = OpaqueType { repr: "io.Reader".into(), nillable: true }.into();
///
/// let table = AssignabilityTable::new().allow("*bytes.Buffer", "io.Reader");
/// assert!(table.assignable(&buf, &reader));
/// assert!(!table.assignable(&reader, &buf));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AssignabilityTable {
    pairs: HashSet<(String, String)>,
}

impl AssignabilityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that values of `from` may be assigned to `to`
    pub fn allow(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.pairs.insert((from.into(), to.into()));
        self
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl AssignabilityOracle for AssignabilityTable {
    fn assignable(&self, from: &TypeDescriptor, to: &TypeDescriptor) -> bool {
        from.identical(to)
            || self
                .pairs
                .contains(&(from.canonical(), to.canonical()))
    }
}

/// Oracle that only accepts identical types
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityOnlyOracle;

impl AssignabilityOracle for IdentityOnlyOracle {
    fn assignable(&self, from: &TypeDescriptor, to: &TypeDescriptor) -> bool {
        from.identical(to)
    }
}
