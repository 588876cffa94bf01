//! Pairwise structural comparison of underlying types.
//!
//! [`TypeComparator::compare`] answers whether code written against the
//! first type still type-checks against the second. Struct shapes are
//! compared field-by-field by name (see `structs.rs`); everything else goes
//! through the ordered rules in `types.rs`.
//!
//! The relation is directional: `compare(a, b)` and `compare(b, a)` can
//! differ.

mod structs;
mod types;

use serde::{Deserialize, Serialize};

use crate::oracle::{AssignabilityOracle, StructuralOracle};
use crate::options::CompareOptions;

/// Outcome of comparing two underlying types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compatibility {
    Incompatible,
    Compatible,
    Identical,
}

impl Compatibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Compatibility::Incompatible => "incompatible",
            Compatibility::Compatible => "compatible",
            Compatibility::Identical => "identical",
        }
    }
}

impl std::fmt::Display for Compatibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural comparator over underlying types
#[derive(Debug, Clone)]
pub struct TypeComparator<O = StructuralOracle> {
    oracle: O,
    options: CompareOptions,
}

impl Default for TypeComparator<StructuralOracle> {
    fn default() -> Self {
        Self::new(StructuralOracle)
    }
}

impl<O: AssignabilityOracle> TypeComparator<O> {
    pub fn new(oracle: O) -> Self {
        Self::with_options(oracle, CompareOptions::default())
    }

    pub fn with_options(oracle: O, options: CompareOptions) -> Self {
        Self { oracle, options }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn options(&self) -> &CompareOptions {
        &self.options
    }
}
