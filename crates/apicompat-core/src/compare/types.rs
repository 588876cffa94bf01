use apicompat_core_types::schema::EVENT_DEPTH_EXCEEDED;

use super::{Compatibility, TypeComparator};
use crate::model::TypeDescriptor;
use crate::oracle::AssignabilityOracle;

impl<O: AssignabilityOracle> TypeComparator<O> {
    /// Compare two underlying types; callers unwrap named types first
    ///
    /// Rules, first match wins:
    /// 1. both structs: field-by-field comparison decides alone;
    /// 2. equal canonical identity: `Identical`;
    /// 3. both basic: an untyped literal against its typed counterpart, or
    ///    two names for one machine kind: `Compatible`;
    /// 4. `t1` assignable into `t2`: `Compatible`;
    /// 5. otherwise `Incompatible`.
    pub fn compare(&self, t1: &TypeDescriptor, t2: &TypeDescriptor) -> Compatibility {
        self.compare_at(t1, t2, 0)
    }

    pub(super) fn compare_at(
        &self,
        t1: &TypeDescriptor,
        t2: &TypeDescriptor,
        depth: usize,
    ) -> Compatibility {
        if self.options.exceeds(depth) {
            // Past the bound only exact identity is trusted
            let outcome = if t1.canonical() == t2.canonical() {
                Compatibility::Identical
            } else {
                Compatibility::Incompatible
            };
            tracing::warn!(
                component = module_path!(),
                event = EVENT_DEPTH_EXCEEDED,
                depth,
                max_depth = ?self.options.max_depth,
                outcome = outcome.as_str(),
                "type nesting exceeds max_depth; settled by canonical identity"
            );
            return outcome;
        }

        if let (TypeDescriptor::Struct(s1), TypeDescriptor::Struct(s2)) = (t1, t2) {
            return self.compare_structs_at(s1, s2, depth);
        }

        // Named types render qualified, so equal strings mean the same type
        if t1.canonical() == t2.canonical() {
            return Compatibility::Identical;
        }

        if let (TypeDescriptor::Basic(b1), TypeDescriptor::Basic(b2)) = (t1, t2) {
            // untyped string -> string
            if b1.widens_into(b2) || b2.widens_into(b1) {
                return Compatibility::Compatible;
            }

            // byte vs uint8
            if b1.kind == b2.kind {
                return Compatibility::Compatible;
            }
        }

        if self.oracle.assignable(t1, t2) {
            return Compatibility::Compatible;
        }

        Compatibility::Incompatible
    }
}
