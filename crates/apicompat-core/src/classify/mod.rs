//! Change-kind classification for one declaration across two snapshots.
//!
//! ## Entry point
//!
//! ```
//! use apicompat_core::classify::{ChangeKind, TypeChange};
//! use apicompat_core::model::{BasicKind, BasicType, TypeSnapshot};
//!
//! let after = TypeSnapshot::new("pkg", "ID", BasicType::typed(BasicKind::Int64).into());
//! assert_eq!(TypeChange::new(None, Some(&after)).kind(), ChangeKind::Added);
//! ```
//!
//! ## Guarantees
//!
//! - **Total**: every presence combination maps to a kind, including both
//!   sides absent.
//! - **Fast path agreement**: equal canonical identities short-circuit to
//!   `Unchanged`, which is what the full comparison yields for them too.
//! - **Role-driven**: only the caller-assigned before/after roles give the
//!   comparison its direction.

pub mod change;
pub mod classifier;
pub mod kind;

pub use change::TypeChange;
pub use classifier::ChangeClassifier;
pub use kind::ChangeKind;
