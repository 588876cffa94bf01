//! apicompat core - API type change classification
//!
//! Decides how the declared type of an exported entity changed between two
//! snapshots of an API:
//! - Change-kind classification (unchanged, added, removed, compatible, breaking)
//! - Structural comparison of underlying types with name-keyed struct fields
//! - Relative specificity ordering between two types
//! - Injectable assignability oracle, so any host type-checker can back it
//!
//! Loading source, walking packages and formatting reports stay with the
//! caller; this crate only consumes type descriptors.

pub mod classify;
pub mod compare;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod options;
pub mod oracle;
pub mod order;
pub mod render;
pub mod rules;

// Field and event names used by the logging macros
pub use apicompat_core_types::schema;

#[doc(hidden)]
pub use tracing as __tracing;

// Re-export commonly used types
pub use classify::{ChangeClassifier, ChangeKind, TypeChange};
pub use compare::{Compatibility, TypeComparator};
pub use errors::{CompatError, ExError, ExErrorKind, Result};
pub use model::{TypeDescriptor, TypeSnapshot};
pub use options::CompareOptions;
pub use oracle::{AssignabilityOracle, AssignabilityTable, IdentityOnlyOracle, StructuralOracle};
pub use order::{Cmp, TypeOrderComparator};
