//! Relative specificity between two types.
//!
//! `order(t, s)` tells which of the two is the more general type: the one
//! that can receive values of the other. The classifier does not consult it;
//! it is kept alongside the comparators for checks that need variance, such
//! as parameter versus result positions in signatures.

use serde::{Deserialize, Serialize};

use crate::model::TypeDescriptor;
use crate::oracle::{AssignabilityOracle, StructuralOracle};

/// Ordering of `t` relative to `s`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cmp {
    /// No relation found
    Invalid,
    /// `t` is more general: values of `s` can be used as `t`
    /// (e.g. `io.Reader` over `*bytes.Buffer`)
    Upper,
    /// `t` is more specific: values of `t` can be used as `s`
    Lower,
    /// Mutually substitutable
    Equal,
}

impl Cmp {
    /// The same relation seen from the other side
    pub fn reverse(self) -> Cmp {
        match self {
            Cmp::Upper => Cmp::Lower,
            Cmp::Lower => Cmp::Upper,
            other => other,
        }
    }
}

/// Computes [`Cmp`] through an assignability oracle
#[derive(Debug, Clone, Default)]
pub struct TypeOrderComparator<O = StructuralOracle> {
    oracle: O,
}

impl<O: AssignabilityOracle> TypeOrderComparator<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    pub fn order(&self, t: &TypeDescriptor, s: &TypeDescriptor) -> Cmp {
        if self.oracle.identical(t, s) {
            return Cmp::Equal;
        }

        if self.oracle.assignable(t, s) {
            return Cmp::Lower;
        }

        if self.oracle.assignable(s, t) {
            return Cmp::Upper;
        }

        if let (TypeDescriptor::Basic(bt), TypeDescriptor::Basic(bs)) = (t, s) {
            // untyped string < string
            if bt.widens_exactly_into(bs) {
                return Cmp::Lower;
            }
            if bs.widens_exactly_into(bt) {
                return Cmp::Upper;
            }

            // uint8 == byte
            if bt.kind == bs.kind {
                return Cmp::Equal;
            }
        }

        Cmp::Invalid
    }
}
