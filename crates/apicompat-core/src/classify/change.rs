use crate::classify::classifier::ChangeClassifier;
use crate::classify::kind::ChangeKind;
use crate::model::TypeSnapshot;
use crate::oracle::{AssignabilityOracle, StructuralOracle};
use crate::render::{render_snapshot, DeclRenderer, SourceRenderer};

/// A declaration observed in up to two snapshots
///
/// Holds references only; the snapshots are owned by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypeChange<'a> {
    pub before: Option<&'a TypeSnapshot>,
    pub after: Option<&'a TypeSnapshot>,
}

impl<'a> TypeChange<'a> {
    pub fn new(before: Option<&'a TypeSnapshot>, after: Option<&'a TypeSnapshot>) -> Self {
        Self { before, after }
    }

    /// The snapshot this change is reported against: before, or after for
    /// additions
    pub fn object(&self) -> Option<&'a TypeSnapshot> {
        self.before.or(self.after)
    }

    /// Classify with the descriptor-only oracle
    pub fn kind(&self) -> ChangeKind {
        self.kind_with(&ChangeClassifier::new(StructuralOracle))
    }

    pub fn kind_with<O: AssignabilityOracle>(&self, classifier: &ChangeClassifier<O>) -> ChangeKind {
        classifier.classify(self.before, self.after)
    }

    /// Rendered before-declaration; empty without documentation
    pub fn show_before(&self) -> String {
        self.show_before_with(&SourceRenderer)
    }

    /// Rendered after-declaration; empty without documentation
    pub fn show_after(&self) -> String {
        self.show_after_with(&SourceRenderer)
    }

    pub fn show_before_with<R: DeclRenderer + ?Sized>(&self, renderer: &R) -> String {
        render_snapshot(self.before, renderer)
    }

    pub fn show_after_with<R: DeclRenderer + ?Sized>(&self, renderer: &R) -> String {
        render_snapshot(self.after, renderer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BasicKind, BasicType, Documentation};

    fn snap(doc: Option<&str>) -> TypeSnapshot {
        let mut s = TypeSnapshot::new("p", "Size", BasicType::typed(BasicKind::Int).into());
        if let Some(decl) = doc {
            s = s.with_doc(Documentation {
                text: String::new(),
                decl: decl.to_string(),
            });
        }
        s
    }

    #[test]
    fn test_object_prefers_before() {
        let a = snap(None);
        let b = snap(Some("type Size int"));
        assert_eq!(TypeChange::new(Some(&a), Some(&b)).object(), Some(&a));
        assert_eq!(TypeChange::new(None, Some(&b)).object(), Some(&b));
        assert_eq!(TypeChange::default().object(), None);
    }

    #[test]
    fn test_show_sides() {
        let before = snap(None);
        let after = snap(Some("type Size int"));
        let change = TypeChange::new(Some(&before), Some(&after));
        assert_eq!(change.show_before(), "");
        assert_eq!(change.show_after(), "type Size int");
    }

    #[test]
    fn test_degenerate_change_does_not_panic() {
        let change = TypeChange::default();
        assert_eq!(change.kind(), ChangeKind::Unchanged);
        assert_eq!(change.show_before(), "");
        assert_eq!(change.show_after(), "");
    }
}
