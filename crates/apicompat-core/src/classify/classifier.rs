use std::time::Instant;

use crate::classify::kind::ChangeKind;
use crate::compare::TypeComparator;
use crate::model::TypeSnapshot;
use crate::options::CompareOptions;
use crate::oracle::{AssignabilityOracle, StructuralOracle};
use crate::{log_op_end, log_op_start};

/// Classifies the change between an optional before and after snapshot
#[derive(Debug, Clone)]
pub struct ChangeClassifier<O = StructuralOracle> {
    comparator: TypeComparator<O>,
}

impl Default for ChangeClassifier<StructuralOracle> {
    fn default() -> Self {
        Self::new(StructuralOracle)
    }
}

impl<O: AssignabilityOracle> ChangeClassifier<O> {
    pub fn new(oracle: O) -> Self {
        Self {
            comparator: TypeComparator::new(oracle),
        }
    }

    pub fn with_options(oracle: O, options: CompareOptions) -> Self {
        Self {
            comparator: TypeComparator::with_options(oracle, options),
        }
    }

    pub fn comparator(&self) -> &TypeComparator<O> {
        &self.comparator
    }

    /// Classify one declaration
    ///
    /// Presence decides first (added, removed, or the degenerate both-absent
    /// case, which is `Unchanged`). When both sides exist, equal canonical
    /// identities are `Unchanged`; otherwise the fully unwrapped types are
    /// compared and the result mapped onto [`ChangeKind`].
    pub fn classify(
        &self,
        before: Option<&TypeSnapshot>,
        after: Option<&TypeSnapshot>,
    ) -> ChangeKind {
        let start = Instant::now();
        let type_name = before
            .or(after)
            .map(TypeSnapshot::qualified_name)
            .unwrap_or_default();
        log_op_start!("classify", type_name = %type_name);

        let kind = match (before, after) {
            (None, None) => ChangeKind::Unchanged,
            (None, Some(_)) => ChangeKind::Added,
            (Some(_), None) => ChangeKind::Removed,
            (Some(b), Some(a)) => self.classify_present(b, a),
        };

        log_op_end!(
            "classify",
            duration_ms = start.elapsed().as_millis() as u64,
            type_name = %type_name,
            change_kind = kind.as_str()
        );
        kind
    }

    fn classify_present(&self, before: &TypeSnapshot, after: &TypeSnapshot) -> ChangeKind {
        if before.canonical_identity() == after.canonical_identity() {
            return ChangeKind::Unchanged;
        }

        self.comparator
            .compare(before.underlying(), after.underlying())
            .into()
    }
}
